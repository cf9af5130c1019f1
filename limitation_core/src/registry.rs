//! Dispatch from a [`Limitation`]'s kind to its [`LimitationType`].

use crate::{
    config::{Config, ConfigError},
    criterion::Criterion,
    error::ErrorCategory,
    limitation::{Limitation, LimitationKind, LimitationScalar},
    limitation_type::{
        error::{CriterionError, EvaluateError, ValidationError},
        location::LocationLimitationType,
        LimitationType,
    },
    resolver::TargetResolver,
    schema::ValueSchema,
    subject::Subject,
    target::Target,
    user::User,
};
use dupe::Dupe;
use std::{collections::HashMap, fmt, sync::Arc};
use thiserror::Error;
use tracing::instrument;

/// The set of limitation types known to a repository.
#[derive(Clone, Default)]
pub struct LimitationRegistry {
    types: HashMap<LimitationKind, Arc<dyn LimitationType>>,
}

impl LimitationRegistry {
    pub fn new() -> Self {
        LimitationRegistry {
            types: HashMap::new(),
        }
    }

    /// Register the built-in types named in `config`, sharing `resolver` between them.
    pub fn from_config<R: TargetResolver + Send + Sync + 'static>(
        config: &Config,
        resolver: Arc<R>,
    ) -> Result<Self, ConfigError> {
        let mut registry = LimitationRegistry::new();

        for kind in config.enabled.iter() {
            match kind.as_str() {
                LimitationKind::LOCATION => {
                    registry.register(LocationLimitationType::new(resolver.dupe()));
                }
                _ => return Err(ConfigError::UnknownBuiltin(kind.clone())),
            }
        }

        tracing::debug!(kinds = registry.types.len(), "limitation registry assembled");
        Ok(registry)
    }

    /// Register `limitation_type` under its kind, returning any type it replaced.
    pub fn register<T: LimitationType + 'static>(
        &mut self,
        limitation_type: T,
    ) -> Option<Arc<dyn LimitationType>> {
        self.types
            .insert(limitation_type.kind(), Arc::new(limitation_type))
    }

    pub fn get(&self, kind: &LimitationKind) -> Option<Arc<dyn LimitationType>> {
        self.types.get(kind).map(|t| t.dupe())
    }

    pub fn contains(&self, kind: &LimitationKind) -> bool {
        self.types.contains_key(kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &LimitationKind> {
        self.types.keys()
    }

    fn resolve(&self, kind: &LimitationKind) -> Result<&Arc<dyn LimitationType>, RegistryError> {
        self.types
            .get(kind)
            .ok_or_else(|| RegistryError::UnregisteredKind(kind.clone()))
    }

    pub fn accept_value(&self, value: &Limitation) -> Result<(), RegistryError> {
        Ok(self.resolve(value.kind())?.accept_value(value)?)
    }

    pub fn build_value(
        &self,
        kind: &LimitationKind,
        values: Vec<LimitationScalar>,
    ) -> Result<Limitation, RegistryError> {
        Ok(self.resolve(kind)?.build_value(values))
    }

    #[instrument(skip_all, fields(kind = %value.kind(), subject = subject.variant_name()))]
    pub async fn evaluate(
        &self,
        value: &Limitation,
        current_user: &User,
        subject: &Subject,
        targets: &[Target],
    ) -> Result<bool, RegistryError> {
        let limitation_type = self.resolve(value.kind())?;
        let granted = limitation_type
            .evaluate(value, current_user, subject, targets)
            .await?;

        tracing::debug!(granted, "limitation evaluated");
        Ok(granted)
    }

    pub fn criterion(
        &self,
        value: &Limitation,
        current_user: &User,
    ) -> Result<Criterion, RegistryError> {
        Ok(self.resolve(value.kind())?.criterion(value, current_user)?)
    }

    pub fn value_schema(&self, kind: &LimitationKind) -> Result<ValueSchema, RegistryError> {
        Ok(self.resolve(kind)?.value_schema())
    }
}

impl fmt::Debug for LimitationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&LimitationKind> = self.types.keys().collect();
        kinds.sort();
        f.debug_struct("LimitationRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("No limitation type registered for kind {0}")]
    UnregisteredKind(LimitationKind),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Evaluate(#[from] EvaluateError),

    #[error(transparent)]
    Criterion(#[from] CriterionError),
}

impl RegistryError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RegistryError::UnregisteredKind(_) => ErrorCategory::CallerContractViolation,
            RegistryError::Validation(e) => e.category(),
            RegistryError::Evaluate(e) => e.category(),
            RegistryError::Criterion(e) => e.category(),
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            RegistryError::Evaluate(e) => e.is_retryable(),
            _ => false,
        }
    }
}
