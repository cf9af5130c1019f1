//! The objects a permission check can be run against.

use crate::{
    content::{Content, ContentCreate, ContentInfo, VersionInfo},
    error::invalid_argument::InvalidArgument,
    location::Location,
};
use derive_more::From;
use serde::{Deserialize, Serialize};

/// The object a permission is being checked for.
#[derive(Debug, Clone, PartialEq, Eq, From, Serialize, Deserialize)]
pub enum Subject {
    /// Content that is about to be created.
    ContentCreate(ContentCreate),
    Content(Content),
    VersionInfo(VersionInfo),
    ContentInfo(ContentInfo),
    Location(Location),
}

/// A [`Subject`] reduced to the stages content limitations distinguish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalizedSubject<'a> {
    Create(&'a ContentCreate),
    Info(&'a ContentInfo),
}

impl Subject {
    /// Reduce persisted content to its summary metadata.
    ///
    /// Fails for subjects that are not content at all.
    pub fn normalize(&self) -> Result<NormalizedSubject<'_>, InvalidArgument> {
        match self {
            Subject::ContentCreate(create) => Ok(NormalizedSubject::Create(create)),
            Subject::Content(content) => Ok(NormalizedSubject::Info(content.content_info())),
            Subject::VersionInfo(version) => Ok(NormalizedSubject::Info(version.content_info())),
            Subject::ContentInfo(info) => Ok(NormalizedSubject::Info(info)),
            Subject::Location(_) => Err(InvalidArgument::new(
                "subject",
                "must be one of: ContentCreate, Content, VersionInfo or ContentInfo",
            )),
        }
    }

    pub fn variant_name(&self) -> &'static str {
        match self {
            Subject::ContentCreate(_) => "ContentCreate",
            Subject::Content(_) => "Content",
            Subject::VersionInfo(_) => "VersionInfo",
            Subject::ContentInfo(_) => "ContentInfo",
            Subject::Location(_) => "Location",
        }
    }
}
