use thiserror::Error;

/// Errors returned by fallible [`Vector`][crate::Vector] and [`Matrix`][crate::Matrix]
/// operations.
///
/// Every operation either fully succeeds or returns one of these before producing any value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The operands of a binary operation have different sizes.
    #[error("size mismatch: left operand has size {left}, right operand has size {right}")]
    SizeMismatch { left: usize, right: usize },

    /// A matrix was requested with an unsupported dimension or element count.
    #[error("invalid matrix size {got}, expected {expected}")]
    InvalidSize { got: usize, expected: &'static str },

    /// An element index was past the end of a vector.
    #[error("index {index} out of range for vector of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// A vector with zero magnitude cannot be normalized.
    #[error("cannot normalize a vector with zero magnitude")]
    DegenerateVector,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
