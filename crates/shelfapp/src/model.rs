//! # Domain Model
//!
//! The records held by the client stores: [`Label`] for the consume client,
//! [`Tag`] and [`Source`] for the flashcard client, plus the creation payloads
//! ([`NewTag`], [`NewSource`]) that `add` expands into full records.
//!
//! ## Identity
//!
//! Every record implements [`Entity`]. Flashcard records are keyed by a
//! generated [`Uuid`]; a consume [`Label`] has no separate id, so its name is
//! its identity.
//!
//! ## Source Completion
//!
//! `completion` is the fraction `n_fragments / n_pages`. It is derived when a
//! source is built, never clamped (edited sources may report more fragments
//! than pages), and defined as `0.0` for a source without pages.
//!
//! ## Cross References
//!
//! A source's `tags` are free text. They are not checked against the tag
//! collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::store::Entity;

/// A name-only tag as used by the consume client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
}

impl Label {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Entity for Label {
    type Id = String;
    const KIND: &'static str = "label";

    fn id(&self) -> &String {
        &self.name
    }
}

/// A colored tag as used by the flashcard client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: Uuid,
    pub name: String,
    /// CSS hex color, e.g. `#0d7f26`.
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Tag {
    type Id = Uuid;
    const KIND: &'static str = "tag";

    fn id(&self) -> &Uuid {
        &self.id
    }
}

/// Creation payload for [`Tag`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTag {
    pub name: String,
}

impl NewTag {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A reading source (book, paper, site) tracked by the flashcard client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: Uuid,
    pub name: String,
    pub n_fragments: u32,
    pub n_pages: u32,
    pub completion: f64,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Source {
    /// Sets the fragment/page counts and recomputes `completion`.
    pub fn set_progress(&mut self, n_fragments: u32, n_pages: u32) {
        self.n_fragments = n_fragments;
        self.n_pages = n_pages;
        self.completion = completion(n_fragments, n_pages);
    }
}

impl Entity for Source {
    type Id = Uuid;
    const KIND: &'static str = "source";

    fn id(&self) -> &Uuid {
        &self.id
    }
}

/// Creation payload for [`Source`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSource {
    pub name: String,
}

impl NewSource {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Fraction of pages already turned into fragments.
pub fn completion(n_fragments: u32, n_pages: u32) -> f64 {
    if n_pages == 0 {
        0.0
    } else {
        f64::from(n_fragments) / f64::from(n_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(n_fragments: u32, n_pages: u32) -> Source {
        let now = Utc::now();
        Source {
            id: Uuid::new_v4(),
            name: "Dune".to_string(),
            n_fragments,
            n_pages,
            completion: completion(n_fragments, n_pages),
            tags: vec![],
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_completion_fraction() {
        assert_eq!(completion(25, 100), 0.25);
        assert_eq!(completion(0, 10), 0.0);
    }

    #[test]
    fn test_completion_without_pages_is_zero() {
        assert_eq!(completion(3, 0), 0.0);
        assert_eq!(completion(0, 0), 0.0);
    }

    #[test]
    fn test_completion_is_not_clamped() {
        assert_eq!(completion(30, 20), 1.5);
    }

    #[test]
    fn test_set_progress_recomputes_completion() {
        let mut s = source(0, 10);
        s.set_progress(5, 10);
        assert_eq!(s.n_fragments, 5);
        assert_eq!(s.completion, 0.5);
    }

    #[test]
    fn test_label_identity_is_name() {
        let label = Label::new("Tag 1");
        assert_eq!(label.id(), "Tag 1");
    }

    #[test]
    fn test_source_serializes_timestamps_as_iso8601() {
        let s = source(1, 4);
        let json = serde_json::to_value(&s).unwrap();
        let created = json["created_at"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(created).is_ok());
        assert_eq!(json["completion"], 0.25);
    }
}
