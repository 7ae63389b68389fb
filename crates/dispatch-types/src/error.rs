use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid id length: expected {expected} digits, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid id {0:?}: contains a non-digit character")]
    NonNumeric(String),
}
