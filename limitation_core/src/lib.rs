//! Location-scoped permission limitations for a content repository.
//!
//! A [`Limitation`](limitation::Limitation) narrows what a permission grant
//! covers. Each limitation kind is implemented by a
//! [`LimitationType`](limitation_type::LimitationType), which can validate
//! values, evaluate them against a subject and its placement targets, and
//! translate them into a search [`Criterion`](criterion::Criterion).
//! The [`LimitationRegistry`](registry::LimitationRegistry) dispatches a value
//! to the type registered for its kind.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_debug_implementations,
    future_incompatible,
    let_underscore,
//     missing_docs,
    rust_2021_compatibility,
    nonstandard_style
)]
#![deny(unreachable_pub)]

pub mod config;
pub mod content;
pub mod criterion;
pub mod error;
pub mod limitation;
pub mod limitation_type;
pub mod location;
pub mod registry;
pub mod resolver;
pub mod schema;
pub mod subject;
pub mod target;
pub mod user;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
