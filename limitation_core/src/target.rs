//! Placement candidates a subject is checked against.

use crate::location::{id::LocationId, Location, LocationCreate};
use derive_more::From;
use dupe::Dupe;
use serde::{Deserialize, Serialize};

/// A placement candidate.
///
/// Content being created is checked against [`Target::LocationCreate`]s,
/// persisted content against existing [`Target::Location`]s.
#[derive(Debug, Clone, Dupe, Copy, PartialEq, Eq, Hash, From, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "arbitrary"), derive(arbitrary::Arbitrary))]
pub enum Target {
    LocationCreate(LocationCreate),
    Location(Location),
}

impl Target {
    /// The id of an existing placement.
    pub fn location_id(&self) -> Option<LocationId> {
        match self {
            Target::Location(location) => Some(location.id),
            Target::LocationCreate(_) => None,
        }
    }

    /// The parent a requested placement will be created under.
    pub fn parent_location_id(&self) -> Option<LocationId> {
        match self {
            Target::LocationCreate(create) => Some(create.parent_location_id),
            Target::Location(_) => None,
        }
    }
}
