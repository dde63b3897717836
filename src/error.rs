use thiserror::Error;

/// Errors raised while building a sequence.
///
/// Evaluation itself never fails: exhaustion is a normal end, and errors
/// raised by caller callbacks are handed back untouched by the `try_*`
/// terminal operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("limit count must not be negative, got {count}")]
    NegativeLimit { count: i64 },
}

pub type Result<T, E = SequenceError> = std::result::Result<T, E>;
