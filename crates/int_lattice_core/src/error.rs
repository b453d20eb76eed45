//! Error types for lattice construction and orthogonalization

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LatticeError {
    #[error("a lattice basis needs at least one vector")]
    EmptyBasis,

    #[error("basis element {index} is not a vector (found {found})")]
    InvalidBasisType { index: usize, found: &'static str },

    #[error("dimension mismatch at index {index}: expected length {expected}, got {actual}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("basis vector {index} has non-integer coordinate {coordinate}: {value}")]
    NonIntegerBasis {
        index: usize,
        coordinate: usize,
        value: String,
    },

    #[error("coordinate {coordinate} of candidate point is not an integer: {value}")]
    NonIntegerPoint { coordinate: usize, value: String },

    #[error("basis is linearly dependent: orthogonal vector {index} is zero")]
    DegenerateBasis { index: usize },

    #[error("malformed vector literal: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LatticeError>;
