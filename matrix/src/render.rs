//! FILENAME: matrix/src/render.rs
//! PURPOSE: Fixed-width text-grid rendering for a Matrix.
//! CONTEXT: Computes one uniform cell width from the longest stringified
//! cell (empty cells contribute the configurable empty-indicator), pads
//! every cell to that width centered, and joins columns with " | ".
//! The Table crate reuses `pad_center` and `COLUMN_SEPARATOR` so its
//! header block lines up with the data grid below.

use crate::matrix::Matrix;
use std::fmt;

/// Separator placed between adjacent cells of a rendered row.
pub const COLUMN_SEPARATOR: &str = " | ";

/// Placeholder shown for empty cells unless overridden.
pub const DEFAULT_EMPTY_INDICATOR: &str = "-";

/// Options for Matrix text rendering.
#[derive(Debug, Clone)]
pub struct MatrixRenderOptions {
    /// String substituted for empty cells before width computation.
    pub empty_indicator: String,
}

impl Default for MatrixRenderOptions {
    fn default() -> Self {
        MatrixRenderOptions {
            empty_indicator: DEFAULT_EMPTY_INDICATOR.to_string(),
        }
    }
}

/// Pads `text` to `width` with spaces, centered. When the pad amount is
/// odd the extra space goes on the right. Text already at or over the
/// width is returned unchanged.
pub fn pad_center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let pad = width - len;
    let left = pad / 2;
    let right = pad - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

impl<T: fmt::Display> Matrix<T> {
    /// Renders the matrix as a fixed-width text grid. A zero-sized matrix
    /// renders as the empty string.
    pub fn render(&self, options: &MatrixRenderOptions) -> String {
        if self.height() == 0 || self.width() == 0 {
            return String::new();
        }

        let rows: Vec<Vec<String>> = (0..self.height())
            .map(|row| {
                (0..self.width())
                    .map(|col| {
                        self.get(row, col)
                            .ok()
                            .and_then(|entry| entry.value())
                            .map(|value| value.to_string())
                            .unwrap_or_else(|| options.empty_indicator.clone())
                    })
                    .collect()
            })
            .collect();

        let cell_width = rows
            .iter()
            .flat_map(|row| row.iter())
            .map(|text| text.chars().count())
            .max()
            .unwrap_or(0);

        rows.iter()
            .map(|row| {
                row.iter()
                    .map(|text| pad_center(text, cell_width))
                    .collect::<Vec<_>>()
                    .join(COLUMN_SEPARATOR)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&MatrixRenderOptions::default()))
    }
}
