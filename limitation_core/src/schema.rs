//! Descriptions of the values a limitation kind accepts.

use crate::limitation::LimitationScalar;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueSchema {
    /// A closed set of accepted values, each with a human readable label.
    Options(BTreeMap<LimitationScalar, String>),

    /// Any location id.
    LocationId,
}

impl ValueSchema {
    pub fn is_open(&self) -> bool {
        !matches!(self, ValueSchema::Options(_))
    }
}
