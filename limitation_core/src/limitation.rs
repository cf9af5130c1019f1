//! Limitation values: the parameters of a permission constraint.

use crate::{error::invalid_argument::InvalidArgument, location::id::LocationId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag naming which [`LimitationType`](crate::limitation_type::LimitationType) a value belongs to.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(any(test, feature = "arbitrary"), derive(arbitrary::Arbitrary))]
pub struct LimitationKind(String);

impl LimitationKind {
    pub const LOCATION: &'static str = "Location";

    pub fn new(tag: impl Into<String>) -> Self {
        LimitationKind(tag.into())
    }

    pub fn location() -> Self {
        LimitationKind(Self::LOCATION.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LimitationKind {
    fn from(tag: &str) -> Self {
        LimitationKind::new(tag)
    }
}

impl fmt::Display for LimitationKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A raw limitation value as it was stored or submitted.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
#[cfg_attr(any(test, feature = "arbitrary"), derive(arbitrary::Arbitrary))]
pub enum LimitationScalar {
    Integer(i64),
    Text(String),
}

impl LimitationScalar {
    /// The location this scalar names, if it is a positive integer.
    pub fn as_location_id(&self) -> Option<LocationId> {
        match self {
            LimitationScalar::Integer(raw) if *raw > 0 => Some(LocationId(*raw as u64)),
            _ => None,
        }
    }
}

impl From<i64> for LimitationScalar {
    fn from(raw: i64) -> Self {
        LimitationScalar::Integer(raw)
    }
}

impl From<&str> for LimitationScalar {
    fn from(raw: &str) -> Self {
        LimitationScalar::Text(raw.to_string())
    }
}

impl TryFrom<LocationId> for LimitationScalar {
    type Error = InvalidArgument;

    /// Only ids in `1..=i64::MAX` can be stored and read back as the same location.
    fn try_from(id: LocationId) -> Result<Self, Self::Error> {
        match i64::try_from(id.0) {
            Ok(raw) if raw > 0 => Ok(LimitationScalar::Integer(raw)),
            _ => Err(InvalidArgument::new(
                "value",
                format!("{id} is not a storable location id"),
            )),
        }
    }
}

impl fmt::Display for LimitationScalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LimitationScalar::Integer(raw) => write!(f, "{raw}"),
            LimitationScalar::Text(raw) => write!(f, "{raw:?}"),
        }
    }
}

/// An immutable permission constraint: a kind tag plus its ordered values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(any(test, feature = "arbitrary"), derive(arbitrary::Arbitrary))]
pub struct Limitation {
    kind: LimitationKind,
    values: Vec<LimitationScalar>,
}

impl Limitation {
    pub fn new(kind: LimitationKind, values: Vec<LimitationScalar>) -> Self {
        Limitation { kind, values }
    }

    /// Build a location limitation accepting the given locations.
    ///
    /// Fails for ids that cannot round-trip through a stored value.
    pub fn location<I: IntoIterator<Item = LocationId>>(ids: I) -> Result<Self, InvalidArgument> {
        Ok(Limitation {
            kind: LimitationKind::location(),
            values: ids
                .into_iter()
                .map(LimitationScalar::try_from)
                .collect::<Result<Vec<_>, InvalidArgument>>()?,
        })
    }

    pub fn kind(&self) -> &LimitationKind {
        &self.kind
    }

    pub fn values(&self) -> &[LimitationScalar] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The accepted locations, failing on the first value that does not name one.
    pub fn location_ids(&self) -> Result<Vec<LocationId>, InvalidArgument> {
        self.values
            .iter()
            .map(|scalar| {
                scalar.as_location_id().ok_or_else(|| {
                    InvalidArgument::new("value", format!("{scalar} is not a location id"))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_positive_integers_name_locations() {
        assert_eq!(
            LimitationScalar::Integer(5).as_location_id(),
            Some(LocationId(5))
        );
        assert_eq!(LimitationScalar::Integer(0).as_location_id(), None);
        assert_eq!(LimitationScalar::Integer(-5).as_location_id(), None);
        assert_eq!(LimitationScalar::from("5").as_location_id(), None);
    }

    #[test]
    fn test_location_ids() {
        let limitation = Limitation::location([LocationId(3), LocationId(4)]).unwrap();
        assert_eq!(limitation.kind(), &LimitationKind::location());
        assert_eq!(
            limitation.location_ids(),
            Ok(vec![LocationId(3), LocationId(4)])
        );
    }

    #[test]
    fn test_text_values_are_not_location_ids() {
        let limitation = Limitation::new(
            LimitationKind::location(),
            vec![LimitationScalar::Integer(5), "5".into()],
        );
        let err = limitation.location_ids().unwrap_err();
        assert_eq!(err.argument, "value");
    }

    #[test]
    fn test_location_rejects_ids_that_cannot_round_trip() {
        assert!(Limitation::location([LocationId(0)]).is_err());
        assert!(Limitation::location([LocationId(u64::MAX)]).is_err());
        assert!(Limitation::location([LocationId(i64::MAX as u64 + 1)]).is_err());

        let largest = LocationId(i64::MAX as u64);
        let limitation = Limitation::location([largest]).unwrap();
        assert_eq!(limitation.location_ids(), Ok(vec![largest]));
    }
}
