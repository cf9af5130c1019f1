use dupe::Dupe;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};

/// Identifier of a [`Location`](super::Location) in the content tree.
#[derive(Copy, Dupe, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "arbitrary"), derive(arbitrary::Arbitrary))]
pub struct LocationId(pub u64);

impl From<u64> for LocationId {
    fn from(raw: u64) -> LocationId {
        LocationId(raw)
    }
}

impl From<LocationId> for u64 {
    fn from(id: LocationId) -> u64 {
        id.0
    }
}

impl Debug for LocationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "LocationId({})", self.0)
    }
}

impl Display for LocationId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}
