use crate::{
    content::{id::ContentId, ContentCreate, ContentInfo},
    limitation::{Limitation, LimitationKind, LimitationScalar},
    limitation_type::location::LocationLimitationType,
    location::{id::LocationId, Location, LocationCreate},
    resolver::{ResolveError, TargetResolver},
    subject::Subject,
    target::Target,
    user::{User, UserId},
};
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

pub const ROOT_LOCATION: LocationId = LocationId(1);

/// Resolver backed by a map that counts how often it was asked.
#[derive(Debug, Default)]
pub struct CountingResolver {
    placements: HashMap<ContentId, Vec<Location>>,
    calls: AtomicUsize,
}

impl CountingResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place `content_id` at each of `location_ids`, directly under the root.
    pub fn place(mut self, content_id: ContentId, location_ids: &[u64]) -> Self {
        let locations = location_ids
            .iter()
            .map(|id| Location::new(LocationId(*id), content_id, ROOT_LOCATION))
            .collect();
        self.placements.insert(content_id, locations);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TargetResolver for CountingResolver {
    type WorkFuture<'a>
        = Pin<Box<dyn Future<Output = Result<Vec<Location>, ResolveError>> + 'a>>
    where
        Self: 'a;

    fn load_locations_by_content<'a>(&'a self, content_id: ContentId) -> Self::WorkFuture<'a> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.placements.load_locations_by_content(content_id)
    }
}

/// Resolver whose backend is always down.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableResolver;

impl TargetResolver for UnavailableResolver {
    type WorkFuture<'a> = futures::future::Ready<Result<Vec<Location>, ResolveError>>;

    fn load_locations_by_content<'a>(&'a self, _content_id: ContentId) -> Self::WorkFuture<'a> {
        futures::future::ready(Err(ResolveError::Storage(
            "connection refused".to_string(),
        )))
    }
}

pub fn make_location_type<R: TargetResolver>(resolver: R) -> LocationLimitationType<R> {
    LocationLimitationType::new(Arc::new(resolver))
}

pub fn anonymous_user() -> User {
    User::new(UserId(10), "anonymous")
}

/// A location limitation over small fixture ids, stored as-is without validation.
pub fn location_limitation(ids: &[u64]) -> Limitation {
    Limitation::new(
        LimitationKind::location(),
        ids.iter()
            .map(|id| LimitationScalar::Integer(*id as i64))
            .collect(),
    )
}

pub fn content_info_subject(content_id: ContentId) -> Subject {
    Subject::ContentInfo(ContentInfo::new(content_id, "Folder", UserId(14)))
}

pub fn content_create_subject() -> Subject {
    Subject::ContentCreate(ContentCreate::new("folder", "eng-GB", UserId(14)))
}

pub fn placement_request(parent_location_id: u64) -> Target {
    Target::LocationCreate(LocationCreate::new(LocationId(parent_location_id)))
}

pub fn placement(location_id: u64, content_id: ContentId) -> Target {
    Target::Location(Location::new(
        LocationId(location_id),
        content_id,
        ROOT_LOCATION,
    ))
}
