//! FILENAME: parser/src/parser.rs
//! PURPOSE: Converts classified lines into row headers and spanned column headers.
//! CONTEXT: This is the second stage of the parsing pipeline. It takes the
//! scanned lines and infers header spans by aligning pipe positions across
//! all column-header lines.
//!
//! ALGORITHM:
//! 1. Row-header lines: strip the trailing '|' and whitespace, keep in order.
//! 2. Pool the pipe positions of all column-header lines, dedupe, sort.
//!    This pooled list is the common column space.
//! 3. Walk each column-header line against the pooled positions. A real
//!    pipe opens that line's next field; a position where the line has no
//!    pipe is a placeholder, and the region it bounds continues the
//!    nearest preceding cell (span + 1).
//! 4. Fields that trim to "" or "-" are continuations, not fresh labels:
//!    they widen the preceding cell instead of starting a new one. A
//!    continuation with no preceding cell (the corner region above row
//!    headers) is dropped without span effect.

use crate::format::{HeaderCell, HeaderRow, TableFormat};
use crate::line::{scan_lines, FormatLine, LineKind};

/// A header field with this text marks "continuation of the previous
/// span" rather than a labeled column.
pub const CONTINUATION: &str = "-";

/// Parses an ASCII table description into row headers and span-annotated
/// column headers. Lines with exactly one '|' are row-header lines; all
/// others are column-header lines. Ragged or inconsistent header rows are
/// not validated here; resolving them is the caller's concern.
pub fn parse(input: &str) -> TableFormat {
    let lines = scan_lines(input);

    let mut row_headers = Vec::new();
    let mut header_lines: Vec<&FormatLine> = Vec::new();
    for line in &lines {
        match line.kind {
            LineKind::RowHeader => row_headers.push(row_header_text(&line.text)),
            LineKind::ColumnHeader => header_lines.push(line),
        }
    }

    let mut pooled: Vec<usize> = header_lines
        .iter()
        .flat_map(|line| line.pipe_positions.iter().copied())
        .collect();
    pooled.sort_unstable();
    pooled.dedup();

    let column_headers = header_lines
        .iter()
        .map(|line| span_header_row(line, &pooled))
        .collect();

    TableFormat {
        row_headers,
        column_headers,
    }
}

/// A row-header line's label: the text with its trailing '|' and
/// surrounding whitespace removed.
fn row_header_text(text: &str) -> String {
    let trimmed = text.trim();
    trimmed
        .strip_suffix('|')
        .unwrap_or(trimmed)
        .trim()
        .to_string()
}

/// Builds the (text, span) cells for one column-header line, using the
/// pooled pipe positions as the common column space. Positions where this
/// line has no pipe of its own collapse onto the preceding cell's span.
fn span_header_row(line: &FormatLine, pooled: &[usize]) -> HeaderRow {
    let fields: Vec<&str> = line.text.split('|').map(str::trim).collect();
    let mut cells: HeaderRow = Vec::new();

    // The region before the first pipe.
    absorb_field(&mut cells, fields.first().copied().unwrap_or(""));

    let mut pipe_ordinal = 0;
    for &position in pooled {
        if line.pipe_positions.get(pipe_ordinal) == Some(&position) {
            // Real pipe in this line: it opens the line's next field.
            pipe_ordinal += 1;
            let text = fields.get(pipe_ordinal).copied().unwrap_or("");
            // A trailing pipe leaves a zero-width final field; that is a
            // boundary, not a column region.
            if pipe_ordinal + 1 == fields.len() && text.is_empty() {
                continue;
            }
            absorb_field(&mut cells, text);
        } else {
            // Placeholder: a finer header row has a boundary here that
            // this line does not, so the region continues the last cell.
            widen_last(&mut cells);
        }
    }
    cells
}

/// Adds one field's region to the row: a fresh span-1 cell for a real
/// label, or one more column on the preceding cell for a continuation.
fn absorb_field(cells: &mut HeaderRow, text: &str) {
    if text.is_empty() || text == CONTINUATION {
        widen_last(cells);
    } else {
        cells.push(HeaderCell::new(text, 1));
    }
}

fn widen_last(cells: &mut HeaderRow) {
    if let Some(last) = cells.last_mut() {
        last.span += 1;
    }
}
