//! FILENAME: table/src/header.rs
//! PURPOSE: The span algebra over column-header rows.
//! CONTEXT: `despan` expands a (text, span) row into one label per leaf
//! column; `respan` run-length encodes a label sequence back into spans.
//! Respan works on content equality alone: it has no memory of where the
//! original span boundaries were, so two adjacent distinct groups that
//! happen to share a label merge into one run. That is the deliberate,
//! simple policy — slicing and pruning route header rebuilds through
//! these two functions.

use parser::format::{HeaderCell, HeaderRow};

/// Expands one header row into one label per leaf column: a cell with
/// span n contributes n copies of its text.
pub fn despan_row(row: &HeaderRow) -> Vec<String> {
    let mut labels = Vec::with_capacity(row.iter().map(|cell| cell.span).sum());
    for cell in row {
        for _ in 0..cell.span {
            labels.push(cell.text.clone());
        }
    }
    labels
}

/// Expands every header row. When the rows satisfy the span invariant,
/// every output row has the table's column count.
pub fn despan(rows: &[HeaderRow]) -> Vec<Vec<String>> {
    rows.iter().map(despan_row).collect()
}

/// The inverse of `despan_row`: merges consecutive equal labels into
/// (text, span) runs, left to right. A run ends when the label changes.
pub fn respan(labels: &[String]) -> HeaderRow {
    let mut row: HeaderRow = Vec::new();
    for label in labels {
        match row.last_mut() {
            Some(last) if last.text == *label => last.span += 1,
            _ => row.push(HeaderCell::new(label.clone(), 1)),
        }
    }
    row
}
