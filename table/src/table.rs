//! FILENAME: table/src/table.rs
//! PURPOSE: The Table composite: caption, data matrix, and headers.
//! CONTEXT: A Table owns a Matrix of Values, one row-header string per
//! matrix row (or none at all), and the column-header rows produced by
//! the parser. Slicing and pruning delegate the data work to the Matrix
//! and route the coordinate changes through the header span algebra so
//! the headers stay consistent with the new matrix shape.

use crate::header::{despan_row, respan};
use crate::value::Value;
use matrix::{Matrix, MatrixResult, PrunedMatrix};
use parser::format::{HeaderCell, HeaderRow};
use parser::parse;
use serde::{Deserialize, Serialize};

/// Options for `Table::from_format`.
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// Optional descriptive string rendered with the table.
    pub caption: Option<String>,
}

/// A small two-dimensional table with row headers and hierarchical,
/// span-annotated column headers.
///
/// Invariants: `row_headers.len()` is 0 or `data.height()`; every header
/// row's span total equals `data.width()` whenever the width is positive.
/// A Table exclusively owns its matrix and header sequences; slicing and
/// pruning always construct fresh owned copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub caption: Option<String>,
    pub data: Matrix<Value>,
    pub row_headers: Vec<String>,
    pub column_headers: Vec<HeaderRow>,
}

impl Table {
    /// Builds a Table from an ASCII table description. The parser supplies
    /// the headers; the data matrix is created empty, sized to the
    /// headers' implied dimensions (at least 1x1).
    pub fn from_format(text: &str, options: TableOptions) -> Self {
        let format = parse(text);
        let data = Matrix::new(format.row_count(), format.column_count());
        Table {
            caption: options.caption,
            data,
            row_headers: format.row_headers,
            column_headers: format.column_headers,
        }
    }

    /// Returns a new Table restricted to the given row and column index
    /// sets.
    ///
    /// The data matrix treats both lists as sets: deduplicated and sorted
    /// ascending. Row headers follow the kept rows in ascending order.
    /// Column headers are despanned, filtered by the column list in the
    /// order it was given (duplicates skipped), and respanned — so a
    /// caller passing columns out of ascending order reorders the header
    /// labels relative to the sorted data columns.
    pub fn slice(&self, rows: &[usize], columns: &[usize]) -> MatrixResult<Table> {
        let data = self.data.slice(rows, columns)?;

        let mut kept_rows: Vec<usize> = rows.to_vec();
        kept_rows.sort_unstable();
        kept_rows.dedup();
        let row_headers = if self.row_headers.is_empty() {
            Vec::new()
        } else {
            kept_rows
                .iter()
                .filter_map(|&row| self.row_headers.get(row).cloned())
                .collect()
        };

        let kept_columns = dedup_in_given_order(columns);
        let column_headers = self
            .column_headers
            .iter()
            .map(|row| {
                let labels = despan_row(row);
                let filtered: Vec<String> = kept_columns
                    .iter()
                    .filter_map(|&col| labels.get(col).cloned())
                    .collect();
                respan(&filtered)
            })
            .collect();

        Ok(Table {
            caption: self.caption.clone(),
            data,
            row_headers,
            column_headers,
        })
    }

    /// Returns a new Table with every fully-empty row and column removed.
    ///
    /// Row headers are rebuilt from the pruning's row index map in
    /// ascending old-index order. Column headers are rebuilt per
    /// despanned row with span exactly 1 for every surviving column:
    /// spans are NOT re-merged, even when label-sharing neighbors
    /// survive the removal of an interior span member.
    pub fn without_empty_rows_and_columns(&self) -> Table {
        let PrunedMatrix {
            matrix,
            row_index_map,
            column_index_map,
        } = self.data.without_empty_rows_and_columns();

        let mut kept_rows: Vec<usize> = row_index_map.keys().copied().collect();
        kept_rows.sort_unstable();
        let row_headers = if self.row_headers.is_empty() {
            Vec::new()
        } else {
            kept_rows
                .iter()
                .filter_map(|&row| self.row_headers.get(row).cloned())
                .collect()
        };

        let mut kept_columns: Vec<usize> = column_index_map.keys().copied().collect();
        kept_columns.sort_unstable();
        let column_headers = self
            .column_headers
            .iter()
            .map(|row| {
                let labels = despan_row(row);
                kept_columns
                    .iter()
                    .filter_map(|&col| labels.get(col).cloned())
                    .map(|text| HeaderCell::new(text, 1))
                    .collect()
            })
            .collect();

        Table {
            caption: self.caption.clone(),
            data: matrix,
            row_headers,
            column_headers,
        }
    }
}

/// Keeps the first occurrence of each index, preserving the given order.
fn dedup_in_given_order(indices: &[usize]) -> Vec<usize> {
    let mut seen = Vec::new();
    for &index in indices {
        if !seen.contains(&index) {
            seen.push(index);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(text: &str, span: usize) -> HeaderCell {
        HeaderCell::new(text, span)
    }

    const FORMAT: &str = "    | A | B |     C\n    | a | b | c1 | c2 | c3\n1 |\n2 |\n";

    fn sample_table() -> Table {
        Table::from_format(
            FORMAT,
            TableOptions {
                caption: Some("sample".to_string()),
            },
        )
    }

    #[test]
    fn test_from_format_dimensions() {
        let table = sample_table();
        assert_eq!(table.data.height(), 2);
        assert_eq!(table.data.width(), 5);
        assert_eq!(table.row_headers, vec!["1", "2"]);
        assert_eq!(table.column_headers.len(), 2);
        assert!(table.data.is_empty());
        assert_eq!(table.caption.as_deref(), Some("sample"));
    }

    #[test]
    fn test_from_format_empty_text_gives_one_by_one() {
        let table = Table::from_format("", TableOptions::default());
        assert_eq!(table.data.height(), 1);
        assert_eq!(table.data.width(), 1);
        assert!(table.row_headers.is_empty());
        assert!(table.column_headers.is_empty());
    }

    #[test]
    fn test_slice_filters_headers() {
        let mut table = sample_table();
        table.data.set(0, 0, Value::Number(1.0)).unwrap();

        let sliced = table.slice(&[0], &[0, 2, 3]).unwrap();
        assert_eq!(sliced.data.height(), 1);
        assert_eq!(sliced.data.width(), 3);
        assert_eq!(sliced.row_headers, vec!["1"]);
        // Top row: A stays, C now covers only c1+c2.
        assert_eq!(sliced.column_headers[0], vec![cell("A", 1), cell("C", 2)]);
        assert_eq!(
            sliced.column_headers[1],
            vec![cell("a", 1), cell("c1", 1), cell("c2", 1)]
        );
        // Source untouched.
        assert_eq!(table.data.width(), 5);
    }

    #[test]
    fn test_slice_duplicate_indices_behave_as_sets() {
        let table = sample_table();
        let a = table.slice(&[1, 0, 1], &[0]).unwrap();
        let b = table.slice(&[0, 1], &[0]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_slice_column_order_follows_the_given_list() {
        let table = sample_table();
        let sliced = table.slice(&[0], &[2, 0]).unwrap();
        // Data columns come back sorted ascending; the header labels
        // follow the caller's order, which can reorder visually.
        assert_eq!(
            sliced.column_headers[1],
            vec![cell("c1", 1), cell("a", 1)]
        );
        assert_eq!(sliced.data.width(), 2);
    }

    #[test]
    fn test_slice_out_of_range_fails() {
        let table = sample_table();
        assert!(table.slice(&[0], &[9]).is_err());
    }

    #[test]
    fn test_pruning_rebuilds_headers_with_span_one() {
        let mut table = sample_table();
        // Keep row 0 and columns 0 (under A) and 3 (interior member of C).
        table.data.set(0, 0, Value::Number(1.0)).unwrap();
        table.data.set(0, 3, Value::Number(2.0)).unwrap();

        let pruned = table.without_empty_rows_and_columns();
        assert_eq!(pruned.data.height(), 1);
        assert_eq!(pruned.data.width(), 2);
        assert_eq!(pruned.row_headers, vec!["1"]);
        // Every surviving column gets span exactly 1; C is not re-merged.
        assert_eq!(pruned.column_headers[0], vec![cell("A", 1), cell("C", 1)]);
        assert_eq!(
            pruned.column_headers[1],
            vec![cell("a", 1), cell("c2", 1)]
        );
    }

    #[test]
    fn test_pruning_is_idempotent() {
        let mut table = sample_table();
        table.data.set(1, 4, Value::Boolean(false)).unwrap();
        let once = table.without_empty_rows_and_columns();
        let twice = once.without_empty_rows_and_columns();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_pruning_all_empty_collapses() {
        let table = sample_table();
        let pruned = table.without_empty_rows_and_columns();
        assert_eq!(pruned.data.height(), 0);
        assert_eq!(pruned.data.width(), 0);
        assert!(pruned.row_headers.is_empty());
        assert_eq!(pruned.column_headers, vec![Vec::new(), Vec::new()]);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut table = sample_table();
        table.data.set(0, 1, Value::text("x")).unwrap();
        let json = serde_json::to_string(&table).unwrap();
        let back: Table = serde_json::from_str(&json).unwrap();
        assert_eq!(back.column_headers, table.column_headers);
        assert_eq!(back.row_headers, table.row_headers);
        assert_eq!(
            back.data.get(0, 1).unwrap().value(),
            Some(&Value::text("x"))
        );
    }
}
