//! FILENAME: matrix/src/error.rs
//! PURPOSE: Error types for Matrix construction and access.
//! CONTEXT: Every failure carries the operation name and the offending
//! coordinates or shape, so callers can diagnose without inspecting
//! internals. Out-of-bounds access on a zero-sized matrix is reported
//! distinctly from an index outside positive dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which axis of the matrix an index refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    Row,
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Access on a matrix with a zero dimension. No cell exists at all.
    #[error("{op}: matrix is zero-sized, cell ({row}, {col}) does not exist")]
    ZeroSized { op: &'static str, row: usize, col: usize },

    /// Coordinates outside a matrix with positive dimensions.
    #[error("{op}: cell ({row}, {col}) is outside the {height}x{width} matrix")]
    OutOfBounds {
        op: &'static str,
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    /// A single row or column index outside the matrix extent.
    #[error("{op}: {axis} index {index} is out of range for a matrix with {extent} {axis}s")]
    AxisOutOfRange {
        op: &'static str,
        axis: Axis,
        index: usize,
        extent: usize,
    },

    /// Raw data passed to `from_data` was not rectangular.
    #[error("from_data: row {row_index} has {actual} values, expected {expected}")]
    RaggedData {
        row_index: usize,
        expected: usize,
        actual: usize,
    },
}

pub type MatrixResult<T> = Result<T, MatrixError>;
