//! FILENAME: matrix/src/lib.rs
//! PURPOSE: Main library entry point for the 2-D cell container.
//! CONTEXT: Re-exports public types and modules for use by other crates.
//!
//! LAYERS:
//! - `entry`: the value-or-empty box stored in every cell
//! - `matrix`: the fixed-size rectangular grid of Entries
//! - `error`: shape and bounds errors
//! - `render`: fixed-width text-grid output

pub mod entry;
pub mod error;
pub mod matrix;
pub mod render;

// Re-export commonly used types at the crate root
pub use entry::Entry;
pub use error::{Axis, MatrixError, MatrixResult};
pub use matrix::{Entries, FromDataOptions, Matrix, PrunedMatrix};
pub use render::{
    pad_center, MatrixRenderOptions, COLUMN_SEPARATOR, DEFAULT_EMPTY_INDICATOR,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_creates_entries() {
        let entry = Entry::with_value(42.0);
        assert_eq!(entry.value(), Some(&42.0));
    }

    #[test]
    fn it_manages_a_matrix() {
        let mut matrix = Matrix::new(2, 2);
        matrix.set(0, 0, "hello").unwrap();

        let retrieved = matrix.get(0, 0).unwrap();
        assert_eq!(retrieved.value(), Some(&"hello"));
    }

    #[test]
    fn integration_test_prune_then_render() {
        let mut matrix = Matrix::new(3, 3);
        matrix.set(0, 0, 1).unwrap();
        matrix.set(2, 2, 2).unwrap();

        let pruned = matrix.without_empty_rows_and_columns();
        let text = pruned.matrix.render(&MatrixRenderOptions::default());
        assert_eq!(text, "1 | -\n- | 2");
    }

    #[test]
    fn integration_test_slice_never_affects_source() {
        let mut matrix = Matrix::new(2, 2);
        matrix.set(0, 0, 7).unwrap();

        let mut sliced = matrix.slice(&[0], &[0]).unwrap();
        sliced.set(0, 0, 8).unwrap();

        assert_eq!(matrix.get(0, 0).unwrap().value(), Some(&7));
    }
}
