//! Limits a permission to content placed at specific locations.

use super::{
    error::{CriterionError, EvaluateError, ValidationError},
    EvaluateFuture, LimitationType,
};
use crate::{
    content::ContentInfo,
    criterion::Criterion,
    error::invalid_argument::InvalidArgument,
    limitation::{Limitation, LimitationKind},
    location::id::LocationId,
    resolver::TargetResolver,
    schema::ValueSchema,
    subject::{NormalizedSubject, Subject},
    target::Target,
    user::User,
};
use derive_where::derive_where;
use dupe::Dupe;
use futures::FutureExt;
use nonempty::NonEmpty;
use std::sync::Arc;
use tracing::instrument;

/// The `Location` limitation.
///
/// Persisted content passes if *any* of its locations is accepted. Content that
/// is being created passes only if *every* requested placement is under an
/// accepted parent, so an unauthorized placement cannot hide among authorized ones.
///
/// Every value must name a location. A value that does not is rejected with
/// [`InvalidArgument`] by both [`evaluate`] and [`criterion`].
///
/// [`evaluate`]: LimitationType::evaluate
/// [`criterion`]: LimitationType::criterion
#[derive(Debug)]
#[derive_where(Clone)]
pub struct LocationLimitationType<R: TargetResolver> {
    resolver: Arc<R>,
}

impl<R: TargetResolver> LocationLimitationType<R> {
    pub fn new(resolver: Arc<R>) -> Self {
        LocationLimitationType { resolver }
    }

    pub fn resolver(&self) -> Arc<R> {
        self.resolver.dupe()
    }

    fn check_kind(value: &Limitation) -> Result<(), InvalidArgument> {
        if value.kind().as_str() != LimitationKind::LOCATION {
            return Err(InvalidArgument::new(
                "value",
                format!("must be of kind Location, got {}", value.kind()),
            ));
        }

        Ok(())
    }

    async fn evaluate_subject(
        &self,
        value: &Limitation,
        subject: &Subject,
        targets: &[Target],
    ) -> Result<bool, EvaluateError> {
        Self::check_kind(value)?;
        let accepted = value.location_ids()?;

        match subject.normalize()? {
            NormalizedSubject::Create(_) => {
                Ok(Self::evaluate_for_content_create(&accepted, targets)?)
            }
            NormalizedSubject::Info(info) => {
                self.evaluate_for_content(&accepted, info, targets).await
            }
        }
    }

    #[instrument(skip_all, fields(content_id = %info.id, explicit_targets = targets.len()))]
    async fn evaluate_for_content(
        &self,
        accepted: &[LocationId],
        info: &ContentInfo,
        targets: &[Target],
    ) -> Result<bool, EvaluateError> {
        if !targets.is_empty() {
            for target in targets {
                let location_id = target.location_id().ok_or_else(|| {
                    InvalidArgument::new("targets", "must contain objects of type: Location")
                })?;

                if accepted.contains(&location_id) {
                    tracing::debug!(%location_id, "placement accepted");
                    return Ok(true);
                }
            }

            return Ok(false);
        }

        let locations = self.resolver.load_locations_by_content(info.id).await?;
        let accepted = locations
            .iter()
            .find(|location| accepted.contains(&location.id));

        if let Some(location) = accepted {
            tracing::debug!(location_id = %location.id, "current location accepted");
            return Ok(true);
        }

        tracing::debug!(locations = locations.len(), "no current location accepted");
        Ok(false)
    }

    fn evaluate_for_content_create(
        accepted: &[LocationId],
        targets: &[Target],
    ) -> Result<bool, InvalidArgument> {
        // Without placements there is nothing under the accepted locations to create.
        if targets.is_empty() {
            tracing::debug!("content create without placements denied");
            return Ok(false);
        }

        for target in targets {
            let parent_location_id = target.parent_location_id().ok_or_else(|| {
                InvalidArgument::new(
                    "targets",
                    "if subject is ContentCreate must contain objects of type: LocationCreate",
                )
            })?;

            if !accepted.contains(&parent_location_id) {
                tracing::debug!(%parent_location_id, "placement denied");
                return Ok(false);
            }
        }

        Ok(true)
    }
}

impl<R: TargetResolver + Send + Sync + 'static> LimitationType for LocationLimitationType<R> {
    fn kind(&self) -> LimitationKind {
        LimitationKind::location()
    }

    fn accept_value(&self, value: &Limitation) -> Result<(), ValidationError> {
        Self::check_kind(value)?;

        if value.is_empty() {
            return Err(ValidationError::Empty {
                kind: value.kind().clone(),
            });
        }

        for (index, scalar) in value.values().iter().enumerate() {
            if scalar.as_location_id().is_none() {
                return Err(ValidationError::NotALocationId {
                    index,
                    value: scalar.clone(),
                });
            }
        }

        Ok(())
    }

    fn evaluate<'a>(
        &'a self,
        value: &'a Limitation,
        _current_user: &'a User,
        subject: &'a Subject,
        targets: &'a [Target],
    ) -> EvaluateFuture<'a> {
        self.evaluate_subject(value, subject, targets).boxed_local()
    }

    #[instrument(skip_all, fields(values = value.values().len()))]
    fn criterion(&self, value: &Limitation, _current_user: &User) -> Result<Criterion, CriterionError> {
        Self::check_kind(value)?;

        let ids = value.location_ids()?;

        let Some(ids) = NonEmpty::from_vec(ids) else {
            tracing::warn!("refusing to build a criterion from an empty Location limitation");
            return Err(CriterionError::EmptyValues {
                kind: value.kind().clone(),
            });
        };

        Ok(Criterion::location_id(ids))
    }

    fn value_schema(&self) -> ValueSchema {
        ValueSchema::LocationId
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        content::{id::ContentId, ContentCreate, ContentInfo},
        criterion::Operator,
        error::ErrorCategory,
        limitation::LimitationScalar,
        location::{Location, LocationCreate},
        resolver::ResolveError,
        user::UserId,
    };
    use nonempty::nonempty;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    type Store = HashMap<ContentId, Vec<Location>>;

    fn setup(placements: &[(u64, Vec<u64>)]) -> LocationLimitationType<Store> {
        let store = placements
            .iter()
            .map(|(content, locations)| {
                let content_id = ContentId(*content);
                let locations = locations
                    .iter()
                    .map(|id| Location::new(LocationId(*id), content_id, LocationId(1)))
                    .collect();
                (content_id, locations)
            })
            .collect();

        LocationLimitationType::new(Arc::new(store))
    }

    fn user() -> User {
        User::new(UserId(10), "anonymous")
    }

    fn info(id: u64) -> Subject {
        Subject::ContentInfo(ContentInfo::new(ContentId(id), "Folder", UserId(14)))
    }

    fn create() -> Subject {
        Subject::ContentCreate(ContentCreate::new("folder", "eng-GB", UserId(14)))
    }

    fn parent(id: u64) -> Target {
        Target::LocationCreate(LocationCreate::new(LocationId(id)))
    }

    fn location(id: u64) -> Target {
        Target::Location(Location::new(LocationId(id), ContentId(1), LocationId(1)))
    }

    fn only(ids: &[u64]) -> Limitation {
        Limitation::location(ids.iter().copied().map(LocationId)).unwrap()
    }

    #[tokio::test]
    async fn test_create_requires_every_placement() {
        let location_type = setup(&[]);
        let limitation = only(&[5]);

        let all_match = location_type
            .evaluate(&limitation, &user(), &create(), &[parent(5), parent(5)])
            .await;
        let one_foreign = location_type
            .evaluate(&limitation, &user(), &create(), &[parent(5), parent(9)])
            .await;
        let none = location_type
            .evaluate(&limitation, &user(), &create(), &[])
            .await;

        assert_eq!(all_match, Ok(true));
        assert_eq!(one_foreign, Ok(false));
        assert_eq!(none, Ok(false));
    }

    #[tokio::test]
    async fn test_create_rejects_existing_locations_as_targets() {
        let location_type = setup(&[]);
        let err = location_type
            .evaluate(&only(&[5]), &user(), &create(), &[location(5)])
            .await
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::CallerContractViolation);
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_create_denies_before_inspecting_later_targets() {
        let location_type = setup(&[]);
        let result = location_type
            .evaluate(&only(&[5]), &user(), &create(), &[parent(9), location(5)])
            .await;

        assert_eq!(result, Ok(false));
    }

    #[tokio::test]
    async fn test_explicit_targets_take_precedence_over_current_locations() {
        let location_type = setup(&[(1, vec![7])]);

        let explicit = location_type
            .evaluate(&only(&[5]), &user(), &info(1), &[location(5)])
            .await;
        let implicit = location_type
            .evaluate(&only(&[5]), &user(), &info(1), &[])
            .await;

        assert_eq!(explicit, Ok(true));
        assert_eq!(implicit, Ok(false));
    }

    #[tokio::test]
    async fn test_persisted_content_rejects_placement_requests() {
        let location_type = setup(&[(1, vec![5])]);
        let err = location_type
            .evaluate(&only(&[5]), &user(), &info(1), &[parent(5)])
            .await
            .unwrap_err();

        assert!(matches!(err, EvaluateError::InvalidArgument(ref e) if e.argument == "targets"));
    }

    #[tokio::test]
    async fn test_foreign_kind_is_rejected() {
        let location_type = setup(&[(1, vec![5])]);
        let section = Limitation::new(LimitationKind::new("Section"), vec![LimitationScalar::Integer(5)]);

        let err = location_type
            .evaluate(&section, &user(), &info(1), &[])
            .await
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::CallerContractViolation);
    }

    #[tokio::test]
    async fn test_values_that_are_not_locations_are_rejected_on_every_path() {
        let location_type = setup(&[(1, vec![5])]);
        let mixed = location_type.build_value(vec![LimitationScalar::Integer(5), "x".into()]);

        let persisted = location_type
            .evaluate(&mixed, &user(), &info(1), &[])
            .await
            .unwrap_err();
        let explicit = location_type
            .evaluate(&mixed, &user(), &info(1), &[location(5)])
            .await
            .unwrap_err();
        let created = location_type
            .evaluate(&mixed, &user(), &create(), &[parent(5)])
            .await
            .unwrap_err();
        let criterion = location_type.criterion(&mixed, &user()).unwrap_err();

        for err in [persisted, explicit, created] {
            assert!(matches!(err, EvaluateError::InvalidArgument(ref e) if e.argument == "value"));
        }
        assert_eq!(criterion.category(), ErrorCategory::CallerContractViolation);
    }

    #[tokio::test]
    async fn test_largest_storable_location_is_matched_exactly() {
        let largest = i64::MAX as u64;
        let location_type = setup(&[]);
        let limitation = only(&[largest]);

        let exact = location_type
            .evaluate(&limitation, &user(), &info(1), &[location(largest)])
            .await;
        let beyond = location_type
            .evaluate(&limitation, &user(), &info(1), &[location(u64::MAX)])
            .await;

        assert_eq!(exact, Ok(true));
        assert_eq!(beyond, Ok(false));
        assert!(Limitation::location([LocationId(u64::MAX)]).is_err());
        assert!(Limitation::location([LocationId(0)]).is_err());
    }

    #[tokio::test]
    async fn test_unsupported_subject_is_rejected() {
        let location_type = setup(&[(1, vec![5])]);
        let subject = Subject::Location(Location::new(LocationId(5), ContentId(1), LocationId(1)));

        let err = location_type
            .evaluate(&only(&[5]), &user(), &subject, &[])
            .await
            .unwrap_err();

        assert!(matches!(err, EvaluateError::InvalidArgument(ref e) if e.argument == "subject"));
    }

    #[tokio::test]
    async fn test_resolver_failures_propagate() {
        let location_type = setup(&[]);
        let err = location_type
            .evaluate(&only(&[5]), &user(), &info(404), &[])
            .await
            .unwrap_err();

        assert_eq!(
            err,
            EvaluateError::Resolver(ResolveError::NotFound(ContentId(404)))
        );
        assert_eq!(err.category(), ErrorCategory::ResolverFailure);
    }

    #[test]
    fn test_criterion_operator_follows_value_count() {
        let location_type = setup(&[]);

        let single = location_type.criterion(&only(&[3]), &user()).unwrap();
        let several = location_type.criterion(&only(&[3, 4, 5]), &user()).unwrap();

        assert_eq!(single, Criterion::location_id(nonempty![LocationId(3)]));
        match several {
            Criterion::LocationId(clause) => {
                assert_eq!(clause.operator(), Operator::In);
                assert_eq!(
                    clause.values(),
                    &nonempty![LocationId(3), LocationId(4), LocationId(5)]
                );
            }
            other => panic!("expected a location id clause, got {other:?}"),
        }
    }

    #[test]
    fn test_criterion_from_empty_limitation_is_an_invariant_violation() {
        let location_type = setup(&[]);
        let err = location_type.criterion(&only(&[]), &user()).unwrap_err();

        assert_eq!(
            err,
            CriterionError::EmptyValues {
                kind: LimitationKind::location()
            }
        );
        assert_eq!(err.category(), ErrorCategory::InvariantViolation);
    }

    #[test]
    fn test_criterion_rejects_foreign_kind() {
        let location_type = setup(&[]);
        let section = Limitation::new(
            LimitationKind::new("Section"),
            vec![LimitationScalar::Integer(3)],
        );
        let err = location_type.criterion(&section, &user()).unwrap_err();

        assert!(matches!(err, CriterionError::InvalidArgument(ref e) if e.argument == "value"));
        assert_eq!(err.category(), ErrorCategory::CallerContractViolation);
    }

    #[test]
    fn test_criterion_rejects_text_values() {
        let location_type = setup(&[]);
        let limitation = location_type.build_value(vec![LimitationScalar::Integer(3), "four".into()]);
        let err = location_type.criterion(&limitation, &user()).unwrap_err();

        assert_eq!(err.category(), ErrorCategory::CallerContractViolation);
    }

    #[test]
    fn test_accept_value() {
        let location_type = setup(&[]);

        assert_eq!(location_type.accept_value(&only(&[2, 43])), Ok(()));
        assert_eq!(
            location_type.accept_value(&only(&[])),
            Err(ValidationError::Empty {
                kind: LimitationKind::location()
            })
        );
        assert_eq!(
            location_type.accept_value(&location_type.build_value(vec![LimitationScalar::Integer(2), LimitationScalar::Integer(0)])),
            Err(ValidationError::NotALocationId {
                index: 1,
                value: LimitationScalar::Integer(0)
            })
        );

        let foreign = Limitation::new(LimitationKind::new("Owner"), vec![LimitationScalar::Integer(1)]);
        let err = location_type.accept_value(&foreign).unwrap_err();
        assert_eq!(err.category(), ErrorCategory::CallerContractViolation);
    }

    #[test]
    fn test_build_value_does_not_validate() {
        let location_type = setup(&[]);
        let limitation = location_type.build_value(vec!["anything".into()]);

        assert_eq!(limitation.kind(), &LimitationKind::location());
        assert_eq!(limitation.values(), &[LimitationScalar::from("anything")]);
    }

    #[test]
    fn test_value_schema_is_any_location_id() {
        let location_type = setup(&[]);
        assert_eq!(location_type.value_schema(), ValueSchema::LocationId);
        assert!(location_type.value_schema().is_open());
    }
}
