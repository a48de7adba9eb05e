//! FILENAME: table/src/render.rs
//! PURPOSE: Plain-text rendering of a Table with its header blocks.
//! CONTEXT: Composes the data grid with the row-header gutter and the
//! multi-row column-header block. One uniform base cell width is computed
//! across data cells, row headers, and column-header labels; a spanned
//! header cell is drawn at `base * span + (span - 1)` separator widths so
//! it stays visually aligned with the data columns below it.

use crate::table::Table;
use crate::value::Value;
use matrix::{pad_center, COLUMN_SEPARATOR, DEFAULT_EMPTY_INDICATOR};
use std::fmt;

/// Where the caption line goes, when one is present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptionPlacement {
    #[default]
    Above,
    Below,
    Hidden,
}

/// Options for Table text rendering.
#[derive(Debug, Clone)]
pub struct TableRenderOptions {
    /// String substituted for empty data cells.
    pub empty_indicator: String,
    pub caption_placement: CaptionPlacement,
    /// Text prepended to the caption line, e.g. "Table: ".
    pub caption_prefix: String,
}

impl Default for TableRenderOptions {
    fn default() -> Self {
        TableRenderOptions {
            empty_indicator: DEFAULT_EMPTY_INDICATOR.to_string(),
            caption_placement: CaptionPlacement::Above,
            caption_prefix: String::new(),
        }
    }
}

impl Table {
    /// Renders the table as plain text: caption, column-header rows,
    /// then one line per data row with the row-header gutter.
    pub fn render(&self, options: &TableRenderOptions) -> String {
        let separator_width = COLUMN_SEPARATOR.chars().count();
        let has_gutter = !self.row_headers.is_empty();

        let data_rows: Vec<Vec<String>> = (0..self.data.height())
            .map(|row| {
                (0..self.data.width())
                    .map(|col| {
                        self.data
                            .get(row, col)
                            .ok()
                            .and_then(|entry| entry.value())
                            .map(Value::to_string)
                            .unwrap_or_else(|| options.empty_indicator.clone())
                    })
                    .collect()
            })
            .collect();

        // One uniform cell width across data cells, row headers, and
        // column-header labels.
        let base = data_rows
            .iter()
            .flat_map(|row| row.iter())
            .map(|text| text.chars().count())
            .chain(self.row_headers.iter().map(|h| h.chars().count()))
            .chain(
                self.column_headers
                    .iter()
                    .flat_map(|row| row.iter())
                    .map(|cell| cell.text.chars().count()),
            )
            .max()
            .unwrap_or(0);

        let mut lines: Vec<String> = Vec::new();

        if let (Some(caption), CaptionPlacement::Above) =
            (&self.caption, options.caption_placement)
        {
            lines.push(format!("{}{}", options.caption_prefix, caption));
        }

        for header_row in &self.column_headers {
            // Pruning a table to nothing leaves empty header rows behind;
            // they have no cells to draw, so emit no line for them.
            if header_row.is_empty() {
                continue;
            }
            let mut cells: Vec<String> = Vec::new();
            if has_gutter {
                cells.push(pad_center("", base));
            }
            for cell in header_row {
                let width = base * cell.span + (cell.span - 1) * separator_width;
                cells.push(pad_center(&cell.text, width));
            }
            lines.push(cells.join(COLUMN_SEPARATOR));
        }

        for (row, cells) in data_rows.iter().enumerate() {
            let mut line_cells: Vec<String> = Vec::new();
            if has_gutter {
                let header = self.row_headers.get(row).map(String::as_str).unwrap_or("");
                line_cells.push(pad_center(header, base));
            }
            for text in cells {
                line_cells.push(pad_center(text, base));
            }
            lines.push(line_cells.join(COLUMN_SEPARATOR));
        }

        if let (Some(caption), CaptionPlacement::Below) =
            (&self.caption, options.caption_placement)
        {
            lines.push(format!("{}{}", options.caption_prefix, caption));
        }

        lines.join("\n")
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(&TableRenderOptions::default()))
    }
}
