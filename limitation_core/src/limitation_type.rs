//! The extension point every limitation kind implements.

pub mod error;
pub mod location;

use crate::{
    criterion::Criterion,
    limitation::{Limitation, LimitationKind, LimitationScalar},
    schema::ValueSchema,
    subject::Subject,
    target::Target,
    user::User,
};
use error::{CriterionError, EvaluateError, ValidationError};
use futures::future::LocalBoxFuture;

/// The future returned by [`LimitationType::evaluate`].
pub type EvaluateFuture<'a> = LocalBoxFuture<'a, Result<bool, EvaluateError>>;

/// Policy for one kind of [`Limitation`].
///
/// Implementations are stateless apart from the collaborators they are
/// constructed with, so one instance is shared by every permission check.
/// The trait is object safe; the [`LimitationRegistry`] stores
/// implementations behind `Arc<dyn LimitationType>` keyed by [`kind`].
///
/// [`LimitationRegistry`]: crate::registry::LimitationRegistry
/// [`kind`]: LimitationType::kind
pub trait LimitationType: Send + Sync {
    /// The tag of the values this type handles.
    fn kind(&self) -> LimitationKind;

    /// Check that `value` is well formed for this kind.
    ///
    /// The default rejects everything with [`ValidationError::NotImplemented`].
    fn accept_value(&self, value: &Limitation) -> Result<(), ValidationError> {
        Err(ValidationError::NotImplemented {
            kind: value.kind().clone(),
        })
    }

    /// Wrap raw values into a [`Limitation`] of this kind, without validating them.
    fn build_value(&self, values: Vec<LimitationScalar>) -> Limitation {
        Limitation::new(self.kind(), values)
    }

    /// Decide whether `value` grants access to `subject`, placed at `targets`.
    ///
    /// An empty `targets` slice means "no explicit placement"; each kind decides
    /// what that implies for the subject at hand.
    fn evaluate<'a>(
        &'a self,
        value: &'a Limitation,
        current_user: &'a User,
        subject: &'a Subject,
        targets: &'a [Target],
    ) -> EvaluateFuture<'a>;

    /// Express `value` as a search predicate over persisted content.
    fn criterion(&self, value: &Limitation, current_user: &User) -> Result<Criterion, CriterionError>;

    fn value_schema(&self) -> ValueSchema;
}
