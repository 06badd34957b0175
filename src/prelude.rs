use std::fmt;

use thiserror::Error;

/// The matrix dimension a shape validation rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Columns,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Rows => f.write_str("rows"),
            Axis::Columns => f.write_str("columns"),
        }
    }
}

/// The binary operation that rejected a pair of operand shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// Element-wise combination through the broadcasting rules.
    Combine,
    /// Matrix multiplication.
    Dot,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryOp::Combine => f.write_str("combine"),
            BinaryOp::Dot => f.write_str("compute dot product of"),
        }
    }
}

/// Error type for matrix construction and arithmetic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A constructing factory was handed a negative dimension.
    #[error("number of {axis} must be >= 0, got {value}")]
    InvalidShape { axis: Axis, value: i64 },

    /// Nested input rows disagree on length.
    #[error("rows in a matrix must have the same number of elements (length of first row ({columns}) is not equal to the length of row {row} ({length}))")]
    MalformedInput {
        row: usize,
        columns: usize,
        length: usize,
    },

    /// Operand shapes cannot be reconciled by the broadcasting rules.
    #[error("cannot {op} a {lhs_rows}x{lhs_columns} matrix with a {rhs_rows}x{rhs_columns} matrix")]
    IncompatibleShape {
        op: BinaryOp,
        lhs_rows: usize,
        lhs_columns: usize,
        rhs_rows: usize,
        rhs_columns: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
