//! Tag and source stores of the flashcard client.
//!
//! Both stores draw fresh ids (and the random parts of new records) from a
//! [`Sampler`] shared across the session, so a seeded session is fully
//! reproducible.

use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

use chrono::Utc;
use tracing::debug;

use crate::model::{NewSource, NewTag, Source, Tag};
use crate::sample::Sampler;
use crate::store::{Seeder, Store};

pub type SharedSampler = Rc<RefCell<Sampler>>;

pub struct TagStore {
    store: Store<Tag>,
    sampler: SharedSampler,
}

impl TagStore {
    pub fn new<S: Seeder<Tag> + ?Sized>(seeder: &mut S, sampler: SharedSampler) -> Self {
        Self {
            store: Store::seeded(seeder),
            sampler,
        }
    }

    /// Builds a tag with a fresh id, a random color and both timestamps set
    /// to now, then appends it. Always grows the store by one.
    pub fn add(&self, new: NewTag) -> Tag {
        let mut tag = self.sampler.borrow_mut().build_tag(new, Utc::now());
        while !self.store.push(tag.clone()) {
            debug!(id = %tag.id, "generated tag id taken, drawing another");
            tag.id = self.sampler.borrow_mut().uuid();
        }
        tag
    }
}

impl Deref for TagStore {
    type Target = Store<Tag>;

    fn deref(&self) -> &Store<Tag> {
        &self.store
    }
}

pub struct SourceStore {
    store: Store<Source>,
    sampler: SharedSampler,
}

impl SourceStore {
    pub fn new<S: Seeder<Source> + ?Sized>(seeder: &mut S, sampler: SharedSampler) -> Self {
        Self {
            store: Store::seeded(seeder),
            sampler,
        }
    }

    /// Builds an unread source (no fragments, no tags, random page count)
    /// and appends it. Always grows the store by one.
    pub fn add(&self, new: NewSource) -> Source {
        let mut source = self.sampler.borrow_mut().build_source(new, Utc::now());
        while !self.store.push(source.clone()) {
            debug!(id = %source.id, "generated source id taken, drawing another");
            source.id = self.sampler.borrow_mut().uuid();
        }
        source
    }
}

impl Deref for SourceStore {
    type Target = Store<Source>;

    fn deref(&self) -> &Store<Source> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::Recorder;
    use crate::store::EmptySeed;
    use uuid::Uuid;

    fn sampler() -> SharedSampler {
        sampler_with_seed(42)
    }

    fn sampler_with_seed(seed: u64) -> SharedSampler {
        Rc::new(RefCell::new(Sampler::new(Some(seed))))
    }

    fn empty_tags() -> TagStore {
        TagStore::new(&mut EmptySeed, sampler())
    }

    fn sample_sources(count: usize) -> SourceStore {
        let shared = sampler();
        let mut seeded: Vec<Source> = shared.borrow_mut().records(count).seed();
        SourceStore::new(&mut seeded, shared)
    }

    #[test]
    fn test_add_tag_then_remove_by_id() {
        let tags = empty_tags();
        let tag = tags.add(NewTag::new("x"));

        let snapshot = tags.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].name, "x");
        assert_eq!(snapshot[0].id, tag.id);
        assert_eq!(tag.created_at, tag.updated_at);

        assert!(tags.remove(&tag.id));
        assert!(tags.is_empty());
    }

    #[test]
    fn test_add_redraws_id_already_taken_by_seed() {
        // seeds and sampler share a seed, so the first fresh id collides
        let mut seeded: Vec<Tag> = Sampler::new(Some(1)).records(3).seed();
        let tags = TagStore::new(&mut seeded, sampler_with_seed(1));
        let before = tags.snapshot();

        let tag = tags.add(NewTag::new("x"));

        assert_eq!(tags.len(), 4);
        assert_eq!(tags.get(&tag.id), Some(tag.clone()));
        assert!(before.iter().all(|t| t.id != tag.id));
        assert_eq!(tags.snapshot()[..3], before[..]);
    }

    #[test]
    fn test_add_source_redraws_id_already_taken_by_seed() {
        let mut seeded: Vec<Source> = Sampler::new(Some(5)).records(2).seed();
        let sources = SourceStore::new(&mut seeded, sampler_with_seed(5));

        let source = sources.add(NewSource::new("SICP"));

        assert_eq!(sources.len(), 3);
        assert_eq!(sources.get(&source.id), Some(source));
    }

    #[test]
    fn test_add_grows_by_one_and_is_retrievable() {
        let sources = sample_sources(5);
        let before = sources.len();

        let added = sources.add(NewSource::new("Gödel, Escher, Bach"));

        assert_eq!(sources.len(), before + 1);
        assert_eq!(sources.get(&added.id), Some(added.clone()));
        assert_eq!(sources.snapshot().last(), Some(&added));
    }

    #[test]
    fn test_edit_replaces_only_matching_record() {
        let sources = sample_sources(3);
        let original = sources.snapshot();

        let mut edited = original[1].clone();
        edited.name = "Renamed".to_string();
        edited.set_progress(4, 8);
        assert!(sources.edit(edited.clone()));

        let now = sources.snapshot();
        assert_eq!(now.len(), 3);
        assert_eq!(now[0], original[0]);
        assert_eq!(now[1], edited);
        assert_eq!(now[2], original[2]);
    }

    #[test]
    fn test_edit_unknown_id_is_silent_noop() {
        let sources = sample_sources(3);
        let rec = Recorder::new();
        let _sub = rec.attach(&sources);
        let before = sources.snapshot();

        let mut stranger = before[0].clone();
        stranger.id = Uuid::new_v4();
        assert!(!sources.edit(stranger));

        assert_eq!(sources.snapshot().to_vec(), before.to_vec());
        assert_eq!(rec.calls(), 1);
    }

    #[test]
    fn test_ids_stay_unique_across_adds_and_edits() {
        let tags = empty_tags();
        for i in 0..20 {
            let tag = tags.add(NewTag::new(format!("tag-{i}")));
            let mut renamed = tag.clone();
            renamed.name.push('!');
            tags.edit(renamed);
        }

        let snapshot = tags.snapshot();
        for (i, a) in snapshot.iter().enumerate() {
            assert!(snapshot[i + 1..].iter().all(|b| b.id != a.id));
        }
        assert_eq!(snapshot.len(), 20);
    }

    #[test]
    fn test_subscriber_sees_every_add() {
        let tags = empty_tags();
        let rec = Recorder::new();
        let _sub = rec.attach(&tags);

        tags.add(NewTag::new("a"));
        tags.add(NewTag::new("b"));

        assert_eq!(rec.lengths(), vec![0, 1, 2]);
    }
}
