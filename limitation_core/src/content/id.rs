use dupe::Dupe;
use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};

#[derive(Copy, Dupe, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "arbitrary"), derive(arbitrary::Arbitrary))]
pub struct ContentId(pub u64);

impl From<u64> for ContentId {
    fn from(raw: u64) -> ContentId {
        ContentId(raw)
    }
}

impl From<ContentId> for u64 {
    fn from(id: ContentId) -> u64 {
        id.0
    }
}

impl Debug for ContentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ContentId({})", self.0)
    }
}

impl Display for ContentId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}
