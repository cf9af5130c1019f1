//! Shared error types and the categories callers map them onto.

pub mod invalid_argument;

use std::fmt;

/// How a failure should be treated by the permission-checking caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// The caller passed a value, subject, or target this operation cannot handle.
    ///
    /// Programmer error. Never retry.
    CallerContractViolation,

    /// Stored data is in a state that should never have been persisted.
    InvariantViolation,

    /// The [`TargetResolver`](crate::resolver::TargetResolver) failed.
    ResolverFailure,

    /// A limitation value was rejected by validation.
    Validation,

    /// The operation is not supported by this limitation kind.
    Unimplemented,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCategory::CallerContractViolation => write!(f, "CallerContractViolation"),
            ErrorCategory::InvariantViolation => write!(f, "InvariantViolation"),
            ErrorCategory::ResolverFailure => write!(f, "ResolverFailure"),
            ErrorCategory::Validation => write!(f, "Validation"),
            ErrorCategory::Unimplemented => write!(f, "Unimplemented"),
        }
    }
}
