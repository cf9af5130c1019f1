//! Placements of content in the content tree.

pub mod id;

use crate::content::id::ContentId;
use dupe::Dupe;
use id::LocationId;
use serde::{Deserialize, Serialize};

/// An existing placement of a content item.
#[derive(Debug, Clone, Dupe, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "arbitrary"), derive(arbitrary::Arbitrary))]
pub struct Location {
    pub id: LocationId,
    pub content_id: ContentId,
    pub parent_location_id: LocationId,
}

impl Location {
    pub fn new(id: LocationId, content_id: ContentId, parent_location_id: LocationId) -> Self {
        Location {
            id,
            content_id,
            parent_location_id,
        }
    }
}

/// A placement requested while content is being created.
///
/// It has no identity of its own yet, only the parent it will be attached under.
#[derive(Debug, Clone, Dupe, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "arbitrary"), derive(arbitrary::Arbitrary))]
pub struct LocationCreate {
    pub parent_location_id: LocationId,
}

impl LocationCreate {
    pub fn new(parent_location_id: LocationId) -> Self {
        LocationCreate { parent_location_id }
    }
}
