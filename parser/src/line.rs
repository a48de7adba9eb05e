//! FILENAME: parser/src/line.rs
//! PURPOSE: Scans a raw table description into classified lines.
//! CONTEXT: This is the first stage of the parsing pipeline. It strips
//! the common leading indentation shared by all non-blank lines, records
//! the character position of every '|' per line, and classifies each line
//! as a row-header line or a column-header line by its pipe count.
//!
//! CLASSIFICATION RULE:
//! - exactly one '|'  -> row-header line (a label before a trailing pipe)
//! - any other count  -> column-header line (including zero pipes, which
//!   occurs when a single unlabeled header has no row headers at all)

/// How a scanned line participates in the table description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    RowHeader,
    ColumnHeader,
}

/// A non-blank input line after common-indent stripping.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatLine {
    pub text: String,
    /// Character offsets of every '|' in `text`.
    pub pipe_positions: Vec<usize>,
    pub kind: LineKind,
}

/// Splits `input` into classified non-blank lines. Blank lines are
/// ignored; the indentation common to every non-blank line is removed
/// uniformly so pipe positions align across lines.
pub fn scan_lines(input: &str) -> Vec<FormatLine> {
    let raw: Vec<&str> = input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();

    let indent = common_indent(&raw);

    raw.iter()
        .map(|line| {
            let text: String = line.chars().skip(indent).collect();
            let pipe_positions = pipe_positions(&text);
            let kind = if pipe_positions.len() == 1 {
                LineKind::RowHeader
            } else {
                LineKind::ColumnHeader
            };
            FormatLine {
                text,
                pipe_positions,
                kind,
            }
        })
        .collect()
}

/// The number of leading whitespace characters shared by every line.
fn common_indent(lines: &[&str]) -> usize {
    lines
        .iter()
        .map(|line| line.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0)
}

/// Character offsets of every '|' in `text`.
fn pipe_positions(text: &str) -> Vec<usize> {
    text.chars()
        .enumerate()
        .filter(|&(_, c)| c == '|')
        .map(|(i, _)| i)
        .collect()
}
