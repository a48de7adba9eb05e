//! FILENAME: table/src/lib.rs
//! PURPOSE: Spanned-header table subsystem.
//!
//! This crate composes the `matrix` and `parser` crates into a Table:
//! a data matrix plus row headers and hierarchical column headers that
//! stay consistent through slicing and pruning.
//!
//! Layers:
//! - `value`: the concrete cell payload (what a cell HOLDS)
//! - `header`: the span algebra (HOW spans expand and collapse)
//! - `table`: the composite and its derived operations (WHAT we expose)
//! - `render`: plain-text output (WHAT we display)

pub mod header;
pub mod render;
pub mod table;
pub mod value;

pub use header::{despan, despan_row, respan};
pub use render::{CaptionPlacement, TableRenderOptions};
pub use table::{Table, TableOptions};
pub use value::Value;

#[cfg(test)]
mod tests {
    use super::*;
    use parser::format::HeaderCell;

    #[test]
    fn integration_test_parse_fill_prune_render() {
        let mut table = Table::from_format(
            "\
    | A | B |     C
    | a | b | c1 | c2 | c3
1 |
2 |
",
            TableOptions::default(),
        );

        table.data.set(0, 0, Value::Number(7.0)).unwrap();
        table.data.set(1, 2, Value::text("x")).unwrap();

        let pruned = table.without_empty_rows_and_columns();
        assert_eq!(pruned.data.height(), 2);
        assert_eq!(pruned.data.width(), 2);
        assert_eq!(pruned.row_headers, vec!["1", "2"]);
        assert_eq!(
            pruned.column_headers[0],
            vec![HeaderCell::new("A", 1), HeaderCell::new("C", 1)]
        );

        let text = pruned.render(&TableRenderOptions::default());
        assert_eq!(text, "   | A  | C \n   | a  | c1\n1  | 7  | - \n2  | -  | x ");
    }

    #[test]
    fn integration_test_slice_keeps_source_intact() {
        let table = Table::from_format("a | b | c", TableOptions::default());
        let sliced = table.slice(&[0], &[1, 2]).unwrap();
        assert_eq!(sliced.data.width(), 2);
        assert_eq!(table.data.width(), 3);
    }
}
