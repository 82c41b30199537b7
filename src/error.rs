use thiserror::Error;

/// Failures reported by the toolbox.
///
/// Every fallible operation surfaces one of two kinds immediately, with no
/// retry or rollback semantics: a failed call leaves previously accumulated
/// state untouched.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// A supplied value violates a documented precondition.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation was invoked in an invalid sequence.
    #[error("invalid operation order: {0}")]
    LogicError(String),
}
