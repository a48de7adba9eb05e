//! FILENAME: matrix/src/matrix.rs
//! PURPOSE: The fixed-size 2-D grid of Entries (the table data container).
//! CONTEXT: This file defines the `Matrix` struct, a dense row-major grid
//! of `Entry` cells with immutable dimensions. Shape-changing operations
//! (`transpose`, `slice`, `without_empty_rows_and_columns`) return a new
//! owned Matrix, so a derived matrix never aliases its source.

use crate::entry::Entry;
use crate::error::{Axis, MatrixError, MatrixResult};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Options for `Matrix::from_data`.
///
/// `empty_value`: a designated raw value treated as equivalent to an empty
/// Entry rather than stored literally. None (the default) stores every raw
/// value as-is.
#[derive(Debug, Clone)]
pub struct FromDataOptions<T> {
    pub empty_value: Option<T>,
}

impl<T> Default for FromDataOptions<T> {
    fn default() -> Self {
        FromDataOptions { empty_value: None }
    }
}

/// Result of `without_empty_rows_and_columns`: the reduced matrix plus
/// index-remapping tables (old index -> new index) for rows and columns,
/// so callers can re-derive headers or other per-axis metadata.
#[derive(Debug, Clone)]
pub struct PrunedMatrix<T> {
    pub matrix: Matrix<T>,
    pub row_index_map: FxHashMap<usize, usize>,
    pub column_index_map: FxHashMap<usize, usize>,
}

/// A rectangular `height` x `width` grid of Entries.
///
/// Every row has exactly `width` entries. Dimensions are fixed at
/// construction; a 0x0 matrix is a valid distinguished state on which
/// `get`/`set` always fail rather than silently no-op.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Matrix<T> {
    height: usize,
    width: usize,
    /// Row-major storage: cell (r, c) lives at index r * width + c.
    cells: Vec<Entry<T>>,
}

/// Hand-written so malformed wire data cannot construct a matrix whose
/// cell count disagrees with its dimensions; the storage invariant
/// `cells.len() == height * width` holds for every live Matrix.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Matrix<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawMatrix<T> {
            height: usize,
            width: usize,
            cells: Vec<Entry<T>>,
        }

        let raw = RawMatrix::<T>::deserialize(deserializer)?;
        if raw.cells.len() != raw.height * raw.width {
            let expected = format!(
                "{} cells for a {}x{} matrix",
                raw.height * raw.width,
                raw.height,
                raw.width
            );
            return Err(serde::de::Error::invalid_length(
                raw.cells.len(),
                &expected.as_str(),
            ));
        }
        Ok(Matrix {
            height: raw.height,
            width: raw.width,
            cells: raw.cells,
        })
    }
}

impl<T> Matrix<T> {
    /// Creates a `height` x `width` matrix with every cell empty.
    pub fn new(height: usize, width: usize) -> Self {
        let mut cells = Vec::with_capacity(height * width);
        for _ in 0..height * width {
            cells.push(Entry::new());
        }
        Matrix {
            height,
            width,
            cells,
        }
    }

    /// Creates a matrix with every cell set to a clone of `value`.
    /// Fill values pass through Entry-wrapping, so every cell is non-empty.
    pub fn with_fill(height: usize, width: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(height, width, |_, _| value.clone())
    }

    /// Creates a matrix where cell (row, col) is set to `f(col, row)`.
    /// The callback receives (column, row), matching the x-then-y
    /// convention of coordinate fills.
    pub fn from_fn<F>(height: usize, width: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut cells = Vec::with_capacity(height * width);
        for row in 0..height {
            for col in 0..width {
                cells.push(Entry::with_value(f(col, row)));
            }
        }
        Matrix {
            height,
            width,
            cells,
        }
    }

    /// Builds a matrix from a rectangular array of raw values.
    ///
    /// Fails with `MatrixError::RaggedData` if any row's length differs
    /// from the first row's length. When `options.empty_value` is given,
    /// raw values equal to it become empty Entries instead of stored
    /// values.
    pub fn from_data(rows: Vec<Vec<T>>, options: FromDataOptions<T>) -> MatrixResult<Self>
    where
        T: PartialEq,
    {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);

        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MatrixError::RaggedData {
                    row_index,
                    expected: width,
                    actual: row.len(),
                });
            }
        }

        let mut cells = Vec::with_capacity(height * width);
        for row in rows {
            for value in row {
                if options.empty_value.as_ref() == Some(&value) {
                    cells.push(Entry::new());
                } else {
                    cells.push(Entry::with_value(value));
                }
            }
        }
        Ok(Matrix {
            height,
            width,
            cells,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Bounds check shared by `get`/`get_mut`/`set`. Distinguishes a
    /// zero-sized matrix (no cell exists) from coordinates outside
    /// positive dimensions.
    fn checked_index(&self, op: &'static str, row: usize, col: usize) -> MatrixResult<usize> {
        if self.height == 0 || self.width == 0 {
            return Err(MatrixError::ZeroSized { op, row, col });
        }
        if row >= self.height || col >= self.width {
            return Err(MatrixError::OutOfBounds {
                op,
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(row * self.width + col)
    }

    /// Retrieves the Entry at (row, col). Bounds-checked, never clamped.
    pub fn get(&self, row: usize, col: usize) -> MatrixResult<&Entry<T>> {
        let index = self.checked_index("get", row, col)?;
        Ok(&self.cells[index])
    }

    /// Mutable access to the Entry at (row, col), e.g. to clear it or use
    /// `or_insert`/`and_modify`.
    pub fn get_mut(&mut self, row: usize, col: usize) -> MatrixResult<&mut Entry<T>> {
        let index = self.checked_index("get_mut", row, col)?;
        Ok(&mut self.cells[index])
    }

    /// Sets the cell at (row, col). The cell is non-empty afterwards,
    /// whatever `value` is.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> MatrixResult<()> {
        let index = self.checked_index("set", row, col)?;
        self.cells[index].set_value(value);
        Ok(())
    }

    /// True iff zero non-empty entries exist. A matrix with positive
    /// dimensions where every cell is empty is also "empty"; this is
    /// distinct from having zero dimensions.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Entry::is_empty)
    }

    /// Materializes plain nested data, with `None` standing in for empty
    /// cells.
    pub fn as_rows(&self) -> Vec<Vec<Option<T>>>
    where
        T: Clone,
    {
        (0..self.height)
            .map(|row| {
                (0..self.width)
                    .map(|col| self.cells[row * self.width + col].value().cloned())
                    .collect()
            })
            .collect()
    }

    /// Like `as_rows`, substituting a clone of `empty_as` for empty cells.
    pub fn as_rows_with(&self, empty_as: T) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        (0..self.height)
            .map(|row| {
                (0..self.width)
                    .map(|col| {
                        self.cells[row * self.width + col]
                            .value()
                            .cloned()
                            .unwrap_or_else(|| empty_as.clone())
                    })
                    .collect()
            })
            .collect()
    }

    /// Returns a new `width` x `height` matrix where cell (r, c) equals
    /// cell (c, r) of the source. Self-inverse up to a fresh copy; the
    /// 0x0 matrix transposes to itself.
    pub fn transpose(&self) -> Matrix<T>
    where
        T: Clone,
    {
        let mut result = Matrix::new(self.width, self.height);
        for row in 0..self.height {
            for col in 0..self.width {
                result.cells[col * self.height + row] = self.cells[row * self.width + col].clone();
            }
        }
        result
    }

    /// Validates, deduplicates, and sorts one axis of slice indices.
    fn normalize_indices(
        op: &'static str,
        axis: Axis,
        indices: &[usize],
        extent: usize,
    ) -> MatrixResult<Vec<usize>> {
        for &index in indices {
            if index >= extent {
                return Err(MatrixError::AxisOutOfRange {
                    op,
                    axis,
                    index,
                    extent,
                });
            }
        }
        let mut sorted: Vec<usize> = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        Ok(sorted)
    }

    /// Core of `slice` and pruning: indices must already be valid, sorted,
    /// and unique.
    fn slice_sorted(&self, rows: &[usize], cols: &[usize]) -> Matrix<T>
    where
        T: Clone,
    {
        let mut result = Matrix::new(rows.len(), cols.len());
        for (new_row, &old_row) in rows.iter().enumerate() {
            for (new_col, &old_col) in cols.iter().enumerate() {
                result.cells[new_row * cols.len() + new_col] =
                    self.cells[old_row * self.width + old_col].clone();
            }
        }
        result
    }

    /// Returns a new matrix restricted to the given row and column index
    /// sets. Duplicate and unordered inputs are tolerated: each list is
    /// deduplicated and sorted ascending first, so `slice(&[1,0,1], &[0])`
    /// equals `slice(&[0,1], &[0])`. Any out-of-range index fails.
    pub fn slice(&self, rows: &[usize], cols: &[usize]) -> MatrixResult<Matrix<T>>
    where
        T: Clone,
    {
        let rows = Self::normalize_indices("slice", Axis::Row, rows, self.height)?;
        let cols = Self::normalize_indices("slice", Axis::Column, cols, self.width)?;
        Ok(self.slice_sorted(&rows, &cols))
    }

    /// Removes every row and column that contains no non-empty Entry.
    ///
    /// Surviving rows and columns keep their relative order (ascending
    /// original index); only gaps are removed. The returned maps let
    /// callers translate old indices to new ones. Idempotent, and a no-op
    /// on the 0x0 matrix.
    pub fn without_empty_rows_and_columns(&self) -> PrunedMatrix<T>
    where
        T: Clone,
    {
        let mut row_used = vec![false; self.height];
        let mut col_used = vec![false; self.width];
        for row in 0..self.height {
            for col in 0..self.width {
                if self.cells[row * self.width + col].is_not_empty() {
                    row_used[row] = true;
                    col_used[col] = true;
                }
            }
        }

        let kept_rows: Vec<usize> = (0..self.height).filter(|&r| row_used[r]).collect();
        let kept_cols: Vec<usize> = (0..self.width).filter(|&c| col_used[c]).collect();

        let row_index_map: FxHashMap<usize, usize> = kept_rows
            .iter()
            .enumerate()
            .map(|(new, &old)| (old, new))
            .collect();
        let column_index_map: FxHashMap<usize, usize> = kept_cols
            .iter()
            .enumerate()
            .map(|(new, &old)| (old, new))
            .collect();

        PrunedMatrix {
            matrix: self.slice_sorted(&kept_rows, &kept_cols),
            row_index_map,
            column_index_map,
        }
    }

    /// Returns a snapshot iterator over `(row, column, value)` for every
    /// non-empty cell, in row-major order. The snapshot is taken when this
    /// method is called: mutations made to the matrix afterwards are not
    /// observed by an iterator already handed out. Calling again restarts
    /// from a fresh snapshot.
    pub fn entries(&self) -> Entries<T>
    where
        T: Clone,
    {
        let mut snapshot = Vec::new();
        for row in 0..self.height {
            for col in 0..self.width {
                if let Some(value) = self.cells[row * self.width + col].value() {
                    snapshot.push((row, col, value.clone()));
                }
            }
        }
        Entries {
            inner: snapshot.into_iter(),
        }
    }
}

impl<T> Default for Matrix<T> {
    /// The canonical empty (0x0) matrix.
    fn default() -> Self {
        Matrix::new(0, 0)
    }
}

/// Snapshot iterator over the non-empty cells of a Matrix.
/// See [`Matrix::entries`].
#[derive(Debug, Clone)]
pub struct Entries<T> {
    inner: std::vec::IntoIter<(usize, usize, T)>,
}

impl<T> Iterator for Entries<T> {
    type Item = (usize, usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Entries<T> {}
