//! Content records at the stages of their lifecycle.
//!
//! ```text
//! ContentCreate ──(persisted)──► Content ──► VersionInfo ──► ContentInfo
//! ```
//!
//! Everything after creation carries a [`ContentInfo`], which is the summary
//! that permission checks operate on.

pub mod id;

use crate::{location::id::LocationId, user::UserId};
use id::ContentId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Summary metadata of persisted content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentInfo {
    pub id: ContentId,
    pub name: String,
    pub owner_id: UserId,

    /// `None` until the content has been published somewhere in the tree.
    pub main_location_id: Option<LocationId>,
}

impl ContentInfo {
    pub fn new(id: ContentId, name: impl Into<String>, owner_id: UserId) -> Self {
        ContentInfo {
            id,
            name: name.into(),
            owner_id,
            main_location_id: None,
        }
    }

    pub fn with_main_location(mut self, location_id: LocationId) -> Self {
        self.main_location_id = Some(location_id);
        self
    }
}

/// Metadata of one version of persisted content.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionInfo {
    pub version_no: u32,
    pub content_info: ContentInfo,
}

impl VersionInfo {
    pub fn new(version_no: u32, content_info: ContentInfo) -> Self {
        VersionInfo {
            version_no,
            content_info,
        }
    }

    pub fn content_info(&self) -> &ContentInfo {
        &self.content_info
    }
}

/// Fully loaded content in one of its versions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub version_info: VersionInfo,
    pub fields: BTreeMap<String, String>,
}

impl Content {
    pub fn new(version_info: VersionInfo) -> Self {
        Content {
            version_info,
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, identifier: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(identifier.into(), value.into());
        self
    }

    pub fn version_info(&self) -> &VersionInfo {
        &self.version_info
    }

    pub fn content_info(&self) -> &ContentInfo {
        self.version_info.content_info()
    }
}

/// A request to create content that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentCreate {
    pub content_type_identifier: String,
    pub main_language_code: String,
    pub owner_id: UserId,
}

impl ContentCreate {
    pub fn new(
        content_type_identifier: impl Into<String>,
        main_language_code: impl Into<String>,
        owner_id: UserId,
    ) -> Self {
        ContentCreate {
            content_type_identifier: content_type_identifier.into(),
            main_language_code: main_language_code.into(),
            owner_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_exposes_its_summary() {
        let info = ContentInfo::new(ContentId(42), "Frontpage", UserId(14))
            .with_main_location(LocationId(2));
        let content = Content::new(VersionInfo::new(3, info.clone())).with_field("title", "Hello");

        assert_eq!(content.content_info(), &info);
        assert_eq!(content.version_info().version_no, 3);
        assert_eq!(content.fields.get("title").map(String::as_str), Some("Hello"));
    }
}
