//! Which built-in limitation types a registry is assembled from.

use crate::limitation::LimitationKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Built-in kinds to register. Defaults to `Location`.
    pub enabled: BTreeSet<LimitationKind>,
}

impl Config {
    pub fn new<I: IntoIterator<Item = LimitationKind>>(enabled: I) -> Self {
        Config {
            enabled: enabled.into_iter().collect(),
        }
    }

    /// A configuration that registers nothing.
    pub fn empty() -> Self {
        Config {
            enabled: BTreeSet::new(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new([LimitationKind::location()])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("No built-in limitation type for kind {0}")]
    UnknownBuiltin(LimitationKind),
}
