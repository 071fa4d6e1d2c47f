//! # API Facade
//!
//! [`ShelfApi`] is the single entry point for UI clients. It owns one
//! session: the consume client's labels and the flashcard client's tags and
//! sources, all built once from a [`ShelfConfig`].
//!
//! ## Role and Responsibilities
//!
//! The facade:
//! - **Builds the session** (sampler, seeding, stores) from configuration
//! - **Normalizes inputs** (string ids → UUIDs, partial edits → full records)
//! - **Returns structured types**, never strings meant for a terminal
//!
//! ## Partial Edits
//!
//! Stores only know full replacement. [`SourceEdit`] and [`TagEdit`] let a
//! client change a few fields: the facade reads the current record, applies
//! the edit, stamps `updated_at` and hands the full record to `edit`.
//!
//! ## Observing
//!
//! Clients that want change notifications subscribe to the stores directly
//! (`api.sources().subscribe(..)`).

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::clients::consume::LabelStore;
use crate::clients::flashcard::{SharedSampler, SourceStore, TagStore};
use crate::config::ShelfConfig;
use crate::error::{Result, ShelfError};
use crate::model::{Label, NewSource, NewTag, Source, Tag};
use crate::routes::{self, Params, SourcePage, TagPage};
use crate::sample::Sampler;
use crate::store::{Seeder, Snapshot};

/// Field changes for a source; `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceEdit {
    pub name: Option<String>,
    pub n_fragments: Option<u32>,
    pub n_pages: Option<u32>,
    pub tags: Option<Vec<String>>,
}

impl SourceEdit {
    fn apply(self, source: &mut Source) {
        if let Some(name) = self.name {
            source.name = name;
        }
        let n_fragments = self.n_fragments.unwrap_or(source.n_fragments);
        let n_pages = self.n_pages.unwrap_or(source.n_pages);
        source.set_progress(n_fragments, n_pages);
        if let Some(tags) = self.tags {
            source.tags = tags;
        }
    }
}

/// Field changes for a tag; `None` leaves a field as it is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagEdit {
    pub name: Option<String>,
    pub color: Option<String>,
}

impl TagEdit {
    fn apply(self, tag: &mut Tag) {
        if let Some(name) = self.name {
            tag.name = name;
        }
        if let Some(color) = self.color {
            tag.color = color;
        }
    }
}

pub struct ShelfApi {
    config: ShelfConfig,
    labels: LabelStore,
    tags: TagStore,
    sources: SourceStore,
}

impl ShelfApi {
    pub fn new(config: ShelfConfig) -> Self {
        let sampler: SharedSampler = Rc::new(RefCell::new(Sampler::new(config.seed)));
        let count = config.effective_sample_count();

        let mut seed_tags: Vec<Tag> = sampler.borrow_mut().records(count).seed();
        let mut seed_sources: Vec<Source> = sampler.borrow_mut().records(count).seed();

        let api = Self {
            labels: LabelStore::with_defaults(),
            tags: TagStore::new(&mut seed_tags, Rc::clone(&sampler)),
            sources: SourceStore::new(&mut seed_sources, sampler),
            config,
        };
        info!(
            labels = api.labels.len(),
            tags = api.tags.len(),
            sources = api.sources.len(),
            seed = ?api.config.seed,
            "session initialized"
        );
        api
    }

    pub fn config(&self) -> &ShelfConfig {
        &self.config
    }

    pub fn labels(&self) -> &LabelStore {
        &self.labels
    }

    pub fn tags(&self) -> &TagStore {
        &self.tags
    }

    pub fn sources(&self) -> &SourceStore {
        &self.sources
    }

    // --- consume ---

    pub fn list_labels(&self) -> Snapshot<Label> {
        self.labels.snapshot()
    }

    pub fn add_label(&self, name: impl Into<String>) -> Label {
        self.labels.add(name)
    }

    pub fn remove_label(&self, name: &str) -> bool {
        self.labels.remove(name)
    }

    // --- flashcard tags ---

    pub fn list_tags(&self) -> Snapshot<Tag> {
        self.tags.snapshot()
    }

    pub fn add_tag(&self, new: NewTag) -> Tag {
        self.tags.add(new)
    }

    pub fn get_tag(&self, id: &str) -> Result<Option<Tag>> {
        Ok(self.tags.get(&parse_id(id)?))
    }

    /// Applies `edit` to the tag with `id`; `Ok(None)` when there is none.
    pub fn edit_tag(&self, id: &str, edit: TagEdit) -> Result<Option<Tag>> {
        let Some(mut tag) = self.get_tag(id)? else {
            return Ok(None);
        };
        edit.apply(&mut tag);
        tag.updated_at = Utc::now();
        Ok(self.tags.edit(tag.clone()).then_some(tag))
    }

    pub fn remove_tag(&self, id: &str) -> Result<bool> {
        Ok(self.tags.remove(&parse_id(id)?))
    }

    pub fn load_tag(&self, params: &Params) -> Result<TagPage> {
        Ok(routes::load_tag(params, &self.tags)?)
    }

    // --- flashcard sources ---

    pub fn list_sources(&self) -> Snapshot<Source> {
        self.sources.snapshot()
    }

    pub fn add_source(&self, new: NewSource) -> Source {
        self.sources.add(new)
    }

    pub fn get_source(&self, id: &str) -> Result<Option<Source>> {
        Ok(self.sources.get(&parse_id(id)?))
    }

    /// Applies `edit` to the source with `id`; `Ok(None)` when there is none.
    pub fn edit_source(&self, id: &str, edit: SourceEdit) -> Result<Option<Source>> {
        let Some(mut source) = self.get_source(id)? else {
            return Ok(None);
        };
        edit.apply(&mut source);
        source.updated_at = Utc::now();
        Ok(self.sources.edit(source.clone()).then_some(source))
    }

    pub fn remove_source(&self, id: &str) -> Result<bool> {
        Ok(self.sources.remove(&parse_id(id)?))
    }

    /// Resolves the `/source/[id]` page.
    pub fn load_source(&self, params: &Params) -> Result<SourcePage> {
        Ok(routes::load_source(params, &self.sources)?)
    }
}

/// Same id policy as the route loaders: canonical form only, no trimming.
fn parse_id(raw: &str) -> Result<Uuid> {
    routes::canonical_id(raw).ok_or_else(|| ShelfError::InvalidId(raw.to_string()))
}
