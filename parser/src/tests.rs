//! FILENAME: parser/src/tests.rs
//! PURPOSE: Consolidated unit tests for the parser crate.

use crate::format::{row_span_total, HeaderCell, TableFormat};
use crate::parser::parse;

fn cell(text: &str, span: usize) -> HeaderCell {
    HeaderCell::new(text, span)
}

// ========================================
// FORMAT TYPE TESTS
// ========================================

#[test]
fn test_row_span_total() {
    let row = vec![cell("A", 1), cell("B", 3)];
    assert_eq!(row_span_total(&row), 4);
}

#[test]
fn test_column_count_defaults_to_one() {
    let format = TableFormat::default();
    assert_eq!(format.column_count(), 1);
    assert_eq!(format.row_count(), 1);
}

#[test]
fn test_column_count_takes_widest_row() {
    let format = TableFormat {
        row_headers: vec![],
        column_headers: vec![vec![cell("C", 3)], vec![cell("a", 1), cell("b", 1)]],
    };
    assert_eq!(format.column_count(), 3);
}

// ========================================
// PARSER TESTS
// ========================================

#[test]
fn test_spanned_two_level_headers() {
    let input = "    | A | B |     C\n    | a | b | c1 | c2 | c3\n1 |\n2 |\n";
    let format = parse(input);
    assert_eq!(format.row_headers, vec!["1", "2"]);
    assert_eq!(
        format.column_headers[0],
        vec![cell("A", 1), cell("B", 1), cell("C", 3)]
    );
    assert_eq!(
        format.column_headers[1],
        vec![
            cell("a", 1),
            cell("b", 1),
            cell("c1", 1),
            cell("c2", 1),
            cell("c3", 1)
        ]
    );
    assert_eq!(format.row_count(), 2);
    assert_eq!(format.column_count(), 5);
}

#[test]
fn test_single_header_row_no_row_headers() {
    let format = parse("a | b | c");
    assert!(format.row_headers.is_empty());
    assert_eq!(
        format.column_headers,
        vec![vec![cell("a", 1), cell("b", 1), cell("c", 1)]]
    );
    assert_eq!(format.row_count(), 1);
    assert_eq!(format.column_count(), 3);
}

#[test]
fn test_row_headers_only() {
    let format = parse("first |\nsecond |\n");
    assert_eq!(format.row_headers, vec!["first", "second"]);
    assert!(format.column_headers.is_empty());
    assert_eq!(format.row_count(), 2);
    assert_eq!(format.column_count(), 1);
}

#[test]
fn test_zero_pipe_line_is_a_column_header() {
    let format = parse("C");
    assert_eq!(format.column_headers, vec![vec![cell("C", 1)]]);
    assert_eq!(format.column_count(), 1);
}

#[test]
fn test_coarse_row_above_finer_row() {
    let input = "\
| A |     B
| a | b1 | b2
";
    let format = parse(input);
    assert_eq!(format.column_headers[0], vec![cell("A", 1), cell("B", 2)]);
    assert_eq!(
        format.column_headers[1],
        vec![cell("a", 1), cell("b1", 1), cell("b2", 1)]
    );
    assert_eq!(format.column_count(), 3);
}

#[test]
fn test_dash_field_continues_previous_span() {
    let input = "\
A | - | B
a | b | c
";
    let format = parse(input);
    assert_eq!(format.column_headers[0], vec![cell("A", 2), cell("B", 1)]);
    assert_eq!(row_span_total(&format.column_headers[0]), 3);
}

#[test]
fn test_leading_continuation_without_preceding_cell_is_dropped() {
    // The corner region above the row headers has no label and no
    // preceding cell to widen; it must not count toward the width.
    let input = "\
  | A | B
x |
";
    let format = parse(input);
    assert_eq!(format.row_headers, vec!["x"]);
    assert_eq!(format.column_headers[0], vec![cell("A", 1), cell("B", 1)]);
    assert_eq!(format.column_count(), 2);
}

#[test]
fn test_trailing_pipe_does_not_add_a_column() {
    let input = "\
| A | B |
| a | b |
";
    let format = parse(input);
    assert_eq!(format.column_headers[0], vec![cell("A", 1), cell("B", 1)]);
    assert_eq!(format.column_headers[1], vec![cell("a", 1), cell("b", 1)]);
    assert_eq!(format.column_count(), 2);
}

#[test]
fn test_blank_lines_and_indentation_are_tolerated() {
    let input = "\n\n  a | b | c\n\n  1 |\n  2 |\n\n";
    let format = parse(input);
    assert_eq!(format.row_headers, vec!["1", "2"]);
    assert_eq!(
        format.column_headers[0],
        vec![cell("a", 1), cell("b", 1), cell("c", 1)]
    );
}

#[test]
fn test_one_pipe_line_is_always_a_row_header() {
    // Classification is purely by pipe count, so a would-be two-column
    // header line with a single '|' reads as a row header instead.
    let format = parse("alpha | beta");
    assert_eq!(format.row_headers, vec!["alpha | beta"]);
    assert!(format.column_headers.is_empty());
}

#[test]
fn test_empty_input_parses_to_default() {
    let format = parse("");
    assert_eq!(format, TableFormat::default());
    assert_eq!(format.row_count(), 1);
    assert_eq!(format.column_count(), 1);
}

#[test]
fn test_header_text_is_trimmed() {
    let format = parse("  alpha   |   beta  |  gamma ");
    assert_eq!(
        format.column_headers[0],
        vec![cell("alpha", 1), cell("beta", 1), cell("gamma", 1)]
    );
}
