use thiserror::Error;

/// Errors that can occur while building or querying a geometry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input does not satisfy the requirements of the operation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A vertex or edge index outside of the geometry.
    #[error("index {index} out of range for a geometry of {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, Error>;
