//! FILENAME: parser/src/format.rs
//! PURPOSE: Defines the output types of the table-format parser.
//! CONTEXT: After the line scanner classifies input lines, the parser
//! converts them into this structure: row-header strings plus column
//! headers expressed as rows of (text, span) cells. The table crate
//! consumes these types to size and label its data matrix.

use serde::{Deserialize, Serialize};

/// One column-header label and the number of leaf columns it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderCell {
    pub text: String,
    /// Always >= 1. A span of n means this label sits over n columns of
    /// the finest header row / data matrix.
    pub span: usize,
}

impl HeaderCell {
    pub fn new(text: impl Into<String>, span: usize) -> Self {
        HeaderCell {
            text: text.into(),
            span,
        }
    }
}

/// One level of column headers, left to right. Spans sum to the table's
/// column count.
pub type HeaderRow = Vec<HeaderCell>;

/// Sum of the spans of a header row: the number of leaf columns it covers.
pub fn row_span_total(row: &HeaderRow) -> usize {
    row.iter().map(|cell| cell.span).sum()
}

/// The parsed table description: row headers plus the column-header rows,
/// top to bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TableFormat {
    pub row_headers: Vec<String>,
    pub column_headers: Vec<HeaderRow>,
}

impl TableFormat {
    /// Data-matrix width implied by the headers: the widest header row's
    /// span total, and at least 1 even when no headers are present.
    pub fn column_count(&self) -> usize {
        self.column_headers
            .iter()
            .map(row_span_total)
            .max()
            .unwrap_or(0)
            .max(1)
    }

    /// Data-matrix height implied by the headers: one row per row header,
    /// or a single implicit data row when there are none.
    pub fn row_count(&self) -> usize {
        self.row_headers.len().max(1)
    }
}
