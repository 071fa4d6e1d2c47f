//! # Route Loaders
//!
//! A loader resolves the data a page displays from its route parameters.
//! It is the only place in the library that reports errors:
//!
//! | Condition | Error | Status |
//! |-----------|-------|--------|
//! | required parameter absent or empty | [`LoadError::BadRequest`] | 400 |
//! | no record with that identifier | [`LoadError::NotFound`] | 404 |
//!
//! Both are terminal for the page being resolved; the hosting UI decides how
//! to display them.
//!
//! Flashcard identifiers match by exact string against the canonical
//! lowercase hyphenated UUID form. Anything else (other UUID spellings such
//! as `urn:uuid:..`, braces, uppercase, surrounding whitespace) cannot match
//! and is reported as not found rather than as a bad request.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

use crate::model::{Source, Tag};
use crate::store::Store;

/// Route parameters, keyed by segment name (`/source/[id]` → `"id"`).
pub type Params = HashMap<String, String>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),
}

impl LoadError {
    /// HTTP-style status for the classification.
    pub fn status(&self) -> u16 {
        match self {
            LoadError::BadRequest(_) => 400,
            LoadError::NotFound(_) => 404,
        }
    }
}

/// Payload of the `/source/[id]` page, serialized as `{"source": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourcePage {
    pub source: Source,
}

/// Payload of the `/tag/[id]` page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagPage {
    pub tag: Tag,
}

/// Returns the non-empty value of `key`, or `BadRequest("Missing <key>")`.
pub fn require_param<'a>(params: &'a Params, key: &str) -> Result<&'a str, LoadError> {
    params
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
        .ok_or_else(|| LoadError::BadRequest(format!("Missing {}", key)))
}

/// Extracts `key` from `params` and resolves it through `lookup`.
pub fn load_entity<E, F>(
    params: &Params,
    key: &str,
    what: &str,
    lookup: F,
) -> Result<E, LoadError>
where
    F: FnOnce(&str) -> Option<E>,
{
    let raw = require_param(params, key)?;
    match lookup(raw) {
        Some(entity) => {
            debug!(%raw, what, "route resolved");
            Ok(entity)
        }
        None => {
            debug!(%raw, what, "route lookup found nothing");
            Err(LoadError::NotFound(format!("{} not found", what)))
        }
    }
}

/// Parses `raw` only when it is already in canonical form
/// (`67e55044-10b1-426f-9247-bb680e5fe0c8`).
pub fn canonical_id(raw: &str) -> Option<Uuid> {
    Uuid::try_parse(raw)
        .ok()
        .filter(|id| id.hyphenated().to_string() == raw)
}

fn by_uuid<E>(store: &Store<E>, raw: &str) -> Option<E>
where
    E: crate::store::Entity<Id = Uuid>,
{
    canonical_id(raw).and_then(|id| store.get(&id))
}

/// Loader for `/source/[id]`.
pub fn load_source(params: &Params, sources: &Store<Source>) -> Result<SourcePage, LoadError> {
    let source = load_entity(params, "id", "Source", |raw| by_uuid(sources, raw))?;
    Ok(SourcePage { source })
}

/// Loader for `/tag/[id]`.
pub fn load_tag(params: &Params, tags: &Store<Tag>) -> Result<TagPage, LoadError> {
    let tag = load_entity(params, "id", "Tag", |raw| by_uuid(tags, raw))?;
    Ok(TagPage { tag })
}
