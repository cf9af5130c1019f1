//! Loading the current placements of persisted content.

use crate::{content::id::ContentId, error::ErrorCategory, location::Location};
use std::{collections::HashMap, future::Future, pin::Pin};
use thiserror::Error;

/// Looks up where content currently lives in the tree.
///
/// Implementations own their timeout and retry policy. Limitation types call
/// this at most once per evaluation and never cache the result.
pub trait TargetResolver {
    type WorkFuture<'a>: Future<Output = Result<Vec<Location>, ResolveError>>
    where
        Self: 'a;

    fn load_locations_by_content<'a>(&'a self, content_id: ContentId) -> Self::WorkFuture<'a>;
}

impl TargetResolver for HashMap<ContentId, Vec<Location>> {
    type WorkFuture<'a>
        = Pin<Box<dyn Future<Output = Result<Vec<Location>, ResolveError>> + 'a>>
    where
        Self: 'a;

    fn load_locations_by_content<'a>(&'a self, content_id: ContentId) -> Self::WorkFuture<'a> {
        Box::pin(async move {
            HashMap::get(self, &content_id)
                .cloned()
                .ok_or(ResolveError::NotFound(content_id))
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("Content {0} not found")]
    NotFound(ContentId),

    #[error("Storage backend failure: {0}")]
    Storage(String),
}

impl ResolveError {
    /// Backend failures may go away; unknown content will not.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ResolveError::Storage(_))
    }

    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::ResolverFailure
    }
}
