//! FILENAME: parser/src/lib.rs
//! PURPOSE: Library root for the ASCII table-format parser.
//! CONTEXT: This module exposes the line scanner and span-inference
//! components that convert a human-drawn table description into row
//! headers and multi-row, span-annotated column headers.
//!
//! PIPELINE: Description String --> Line Scanner --> Classified Lines
//!           --> Parser --> TableFormat
//!
//! FORMAT RULES:
//! - '|' delimits fields; blank lines are ignored
//! - shared leading indentation is stripped uniformly
//! - a line with exactly one '|' is a row-header line ("1 |")
//! - every other line is a column-header line; coarser lines leave gaps
//!   that align under multiple cells of finer lines, producing spans
//! - a field of "" or "-" continues the previous span instead of
//!   starting a labeled column

pub mod format;
pub mod line;
pub mod parser;

// Register the separate tests module
#[cfg(test)]
mod tests;

// Re-export commonly used types for convenience
pub use format::{row_span_total, HeaderCell, HeaderRow, TableFormat};
pub use line::{scan_lines, FormatLine, LineKind};
pub use parser::{parse, CONTINUATION};
