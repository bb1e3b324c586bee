//! Error types for simsketch.

use thiserror::Error;

/// Errors that can occur while generating bases or computing signatures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimHashError {
    /// Hyperplane count or dimension is zero, or an explicit plane list is malformed.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A vector's length does not match the basis dimension.
    ///
    /// `index` is the position of the first offending vector when the
    /// mismatch was detected during batch hashing, `None` for a single hash.
    #[error("dimension mismatch{}: basis expects {expected} dimensions, vector has {got}", at_index(.index))]
    DimensionMismatch {
        /// Dimension the basis was built for.
        expected: usize,
        /// Length of the offending vector.
        got: usize,
        /// Batch position of the offending vector, if any.
        index: Option<usize>,
    },

    /// Batch hashing was invoked with zero vectors, so no dimension can be inferred.
    #[error("empty batch: cannot infer dimension from zero vectors")]
    EmptyBatch,
}

fn at_index(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!(" at batch index {i}"),
        None => String::new(),
    }
}

/// Result alias for simsketch operations.
pub type Result<T> = std::result::Result<T, SimHashError>;
