//! Assertion failure reporting.

use thiserror::Error;

/// A failed assertion: the resolved message plus the rendered expected and
/// actual values that went into the verdict.
///
/// The message is already resolved for negation — a negated chain that
/// fails reports the "to not ..." template.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (expected: {expected}, actual: {actual})")]
pub struct AssertionError {
    /// Human-readable description of the failed check.
    pub message: String,
    /// Rendered expected value.
    pub expected: String,
    /// Rendered actual value, unwrapped when the chain was in value mode.
    pub actual: String,
}

pub type Result<T> = std::result::Result<T, AssertionError>;
