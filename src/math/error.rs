use thiserror::Error;

/// Dimension errors raised by `Matrix` operations and the types built on it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    #[error("cannot {op}: left operand is {lhs:?}, right operand is {rhs:?}")]
    Mismatch {
        op: &'static str,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },
    #[error("row {row} has {found} columns, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("matrix data has no rows")]
    Empty,
}
