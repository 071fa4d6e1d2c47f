//! Label store of the consume client.
//!
//! Labels carry nothing but a name, so the name is the identifier: `add`
//! never creates a second label with an existing name and `remove` matches
//! by name.

use std::ops::Deref;

use crate::model::Label;
use crate::sample::default_labels;
use crate::store::{Seeder, Store};

#[derive(Debug, Default)]
pub struct LabelStore {
    store: Store<Label>,
}

impl LabelStore {
    /// Starts with the client's default labels.
    pub fn with_defaults() -> Self {
        Self {
            store: Store::from_records(default_labels()),
        }
    }

    pub fn seeded<S: Seeder<Label> + ?Sized>(seeder: &mut S) -> Self {
        Self {
            store: Store::seeded(seeder),
        }
    }

    /// Appends a label. Adding a name that is already present leaves the
    /// collection as it is.
    pub fn add(&self, name: impl Into<String>) -> Label {
        let label = Label::new(name);
        self.store.push(label.clone());
        label
    }

    pub fn remove(&self, name: &str) -> bool {
        self.store.remove(&name.to_string())
    }
}

impl Deref for LabelStore {
    type Target = Store<Label>;

    fn deref(&self) -> &Store<Label> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::Recorder;
    use crate::store::EmptySeed;

    fn names(store: &LabelStore) -> Vec<String> {
        store.snapshot().iter().map(|l| l.name.clone()).collect()
    }

    #[test]
    fn test_defaults() {
        let store = LabelStore::with_defaults();
        assert_eq!(names(&store), vec!["Tag 1", "Tag 2", "Tag 3"]);
    }

    #[test]
    fn test_add_then_remove() {
        let store = LabelStore::seeded(&mut EmptySeed);
        store.add("x");
        assert_eq!(names(&store), vec!["x"]);

        assert!(store.remove("x"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_existing_name_keeps_single_label() {
        let store = LabelStore::with_defaults();
        let rec = Recorder::new();
        let _sub = rec.attach(&store);

        let label = store.add("Tag 2");
        assert_eq!(label.name, "Tag 2");
        assert_eq!(store.len(), 3);
        assert_eq!(rec.calls(), 1);
    }

    #[test]
    fn test_remove_unknown_name_is_noop() {
        let store = LabelStore::with_defaults();
        let rec = Recorder::new();
        let _sub = rec.attach(&store);

        assert!(!store.remove("Tag 9"));
        assert_eq!(rec.calls(), 1);
    }
}
