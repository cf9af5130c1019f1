use crate::{
    error::{invalid_argument::InvalidArgument, ErrorCategory},
    limitation::{LimitationKind, LimitationScalar},
    resolver::ResolveError,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluateError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    #[error("Unable to resolve targets: {0}")]
    Resolver(#[from] ResolveError),
}

impl EvaluateError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EvaluateError::InvalidArgument(_) => ErrorCategory::CallerContractViolation,
            EvaluateError::Resolver(_) => ErrorCategory::ResolverFailure,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            EvaluateError::InvalidArgument(_) => false,
            EvaluateError::Resolver(e) => e.is_retryable(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CriterionError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    /// Empty limitations must be rejected before they are stored.
    #[error("{kind} limitation has no values, it should not have been stored in the first place")]
    EmptyValues { kind: LimitationKind },
}

impl CriterionError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CriterionError::InvalidArgument(_) => ErrorCategory::CallerContractViolation,
            CriterionError::EmptyValues { .. } => ErrorCategory::InvariantViolation,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),

    #[error("{kind} limitation must have at least one value")]
    Empty { kind: LimitationKind },

    #[error("Value {value} at index {index} is not a location id")]
    NotALocationId {
        index: usize,
        value: LimitationScalar,
    },

    #[error("Validation is not implemented for {kind} limitations")]
    NotImplemented { kind: LimitationKind },
}

impl ValidationError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ValidationError::InvalidArgument(_) => ErrorCategory::CallerContractViolation,
            ValidationError::Empty { .. } | ValidationError::NotALocationId { .. } => {
                ErrorCategory::Validation
            }
            ValidationError::NotImplemented { .. } => ErrorCategory::Unimplemented,
        }
    }
}
