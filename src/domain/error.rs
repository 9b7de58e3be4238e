//! Error types for graph decoding and file access.
//!
//! There are exactly two failure kinds: the byte stream does not conform to
//! the mpiP dump layout, or the filesystem failed underneath us. Neither is
//! recovered internally; both abort the run with a non-zero exit code.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GraphError {
    /// The byte stream does not match the declared record layout: a short
    /// header, a short descriptor run, or an empty file.
    #[error("malformed input at offset {offset}: {reason}")]
    MalformedInput { offset: usize, reason: String },

    /// File open/read/write failure on the input or output path.
    #[error("I/O failure: {0}")]
    IoFailure(#[from] std::io::Error),
}

impl GraphError {
    pub fn malformed(offset: usize, reason: impl Into<String>) -> Self {
        GraphError::MalformedInput {
            offset,
            reason: reason.into(),
        }
    }
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
