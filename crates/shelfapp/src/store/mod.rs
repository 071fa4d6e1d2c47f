//! # Storage Layer
//!
//! This module defines [`Store`], the observable in-memory collection every
//! client store is built on. A store bundles:
//!
//! 1. An ordered collection of records of one [`Entity`] type.
//! 2. A list of observers notified with the whole collection on every change.
//! 3. Mutations (`push`, `edit`, `remove`, `remove_where`).
//! 4. Synchronous lookup by identifier (`get`).
//!
//! ## Copy-on-Write Snapshots
//!
//! The collection is held as a [`Snapshot`] (`Rc<[E]>`). Mutations never
//! touch a published snapshot: they build a new one and swap it in. Readers
//! holding an older snapshot therefore never observe partial updates, and
//! observers can keep the snapshot they were handed.
//!
//! ## Notification Rules
//!
//! - `subscribe` calls the observer once immediately with the current
//!   snapshot.
//! - Every effective mutation notifies each observer once, synchronously, in
//!   registration order.
//! - No-op mutations (editing or removing an unknown id, pushing a duplicate
//!   id) notify nobody.
//! - Mutations made from inside an observer are allowed. The outer fan-out
//!   then restarts with the latest snapshot so every observer sees the final
//!   state last.
//!
//! ## Failure Semantics
//!
//! Store operations never fail. Absence is `None` from [`Store::get`] and
//! `false` from the mutating calls; callers must not treat a `false` as an
//! error report.
//!
//! ## Threading
//!
//! Stores are single-threaded (`Rc`/`RefCell`, `!Send`). Concurrent logical
//! writers within one tick are not guarded: the last writer wins.

use std::cell::{Cell, RefCell};
use std::fmt::Debug;
use std::rc::Rc;

use tracing::{debug, trace, warn};

pub mod seed;
mod subscribers;

pub use seed::{EmptySeed, Seeder};
pub use subscribers::Subscription;

use subscribers::Subscribers;

/// Immutable view of a store's collection at one point in time.
pub type Snapshot<E> = Rc<[E]>;

/// A record that can live in a [`Store`].
pub trait Entity: Clone + 'static {
    /// Identifier, unique within a collection.
    type Id: Clone + Eq + Debug;

    /// Short lowercase name used in logs (`"tag"`, `"source"`).
    const KIND: &'static str;

    fn id(&self) -> &Self::Id;
}

/// Observable, copy-on-write, in-memory ordered collection.
pub struct Store<E: Entity> {
    items: RefCell<Snapshot<E>>,
    subscribers: Subscribers<E>,
    publishing: Cell<bool>,
    republish: Cell<bool>,
}

impl<E: Entity> Default for Store<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> Store<E> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::from_records(Vec::new())
    }

    /// Creates a store holding whatever `seeder` produces.
    pub fn seeded<S: Seeder<E> + ?Sized>(seeder: &mut S) -> Self {
        Self::from_records(seeder.seed())
    }

    /// Creates a store from records, keeping the first of any duplicate ids.
    pub fn from_records(records: Vec<E>) -> Self {
        let mut unique: Vec<E> = Vec::with_capacity(records.len());
        for record in records {
            if unique.iter().any(|r| r.id() == record.id()) {
                warn!(kind = E::KIND, id = ?record.id(), "dropping duplicate seed record");
                continue;
            }
            unique.push(record);
        }
        debug!(kind = E::KIND, len = unique.len(), "store initialized");

        Self {
            items: RefCell::new(Rc::from(unique)),
            subscribers: Subscribers::new(),
            publishing: Cell::new(false),
            republish: Cell::new(false),
        }
    }

    /// Registers `observer`, calling it right away with the current snapshot
    /// and again after every change.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&Snapshot<E>) + 'static,
    {
        let current = self.snapshot();
        observer(&current);
        self.subscribers.add(observer)
    }

    /// The current collection.
    pub fn snapshot(&self) -> Snapshot<E> {
        self.items.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Looks up a record by identifier.
    pub fn get(&self, id: &E::Id) -> Option<E> {
        self.items.borrow().iter().find(|r| r.id() == id).cloned()
    }

    pub fn contains(&self, id: &E::Id) -> bool {
        self.items.borrow().iter().any(|r| r.id() == id)
    }

    /// Appends a fully built record.
    ///
    /// Returns `false` without notifying when a record with the same id is
    /// already present.
    pub fn push(&self, record: E) -> bool {
        let mut next = {
            let items = self.items.borrow();
            if items.iter().any(|r| r.id() == record.id()) {
                debug!(kind = E::KIND, id = ?record.id(), "push skipped, id already present");
                return false;
            }
            let mut next = Vec::with_capacity(items.len() + 1);
            next.extend(items.iter().cloned());
            next
        };

        debug!(kind = E::KIND, id = ?record.id(), "record added");
        next.push(record);
        self.replace(next);
        true
    }

    /// Replaces the record whose id matches `record`'s, keeping its position.
    ///
    /// Returns `false` without notifying when no record matches.
    pub fn edit(&self, record: E) -> bool {
        let next = {
            let items = self.items.borrow();
            let Some(index) = items.iter().position(|r| r.id() == record.id()) else {
                debug!(kind = E::KIND, id = ?record.id(), "edit skipped, no matching record");
                return false;
            };
            let mut next = items.to_vec();
            next[index] = record;
            next
        };

        self.replace(next);
        true
    }

    /// Removes the record with `id`.
    pub fn remove(&self, id: &E::Id) -> bool {
        self.remove_where(|r| r.id() == id) > 0
    }

    /// Removes every record matching `predicate`, returning how many went.
    pub fn remove_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&E) -> bool,
    {
        let (next, removed) = {
            let items = self.items.borrow();
            let next: Vec<E> = items.iter().filter(|r| !predicate(*r)).cloned().collect();
            let removed = items.len() - next.len();
            (next, removed)
        };

        if removed == 0 {
            return 0;
        }
        debug!(kind = E::KIND, removed, "records removed");
        self.replace(next);
        removed
    }

    fn replace(&self, next: Vec<E>) {
        *self.items.borrow_mut() = Rc::from(next);
        self.publish();
    }

    fn publish(&self) {
        if self.publishing.replace(true) {
            self.republish.set(true);
            return;
        }
        let _reset = PublishingReset {
            publishing: &self.publishing,
            republish: &self.republish,
        };

        loop {
            let snapshot = self.snapshot();
            trace!(
                kind = E::KIND,
                len = snapshot.len(),
                observers = self.subscribers.len(),
                "notifying observers"
            );
            self.subscribers.notify(&snapshot);
            if !self.republish.replace(false) {
                break;
            }
        }
    }
}

/// Clears the publishing flags when a fan-out ends, including by an
/// observer panic.
struct PublishingReset<'a> {
    publishing: &'a Cell<bool>,
    republish: &'a Cell<bool>,
}

impl Drop for PublishingReset<'_> {
    fn drop(&mut self) {
        self.republish.set(false);
        self.publishing.set(false);
    }
}

impl<E: Entity> Debug for Store<E>
where
    E: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("kind", &E::KIND)
            .field("items", &self.items.borrow())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    /// Observer that records every snapshot it is handed.
    #[derive(Clone)]
    pub struct Recorder<E> {
        seen: Rc<RefCell<Vec<Snapshot<E>>>>,
    }

    impl<E: Entity> Default for Recorder<E> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<E: Entity> Recorder<E> {
        pub fn new() -> Self {
            Self {
                seen: Rc::new(RefCell::new(Vec::new())),
            }
        }

        /// Subscribes this recorder to `store`.
        pub fn attach(&self, store: &Store<E>) -> Subscription {
            let seen = Rc::clone(&self.seen);
            store.subscribe(move |snapshot| seen.borrow_mut().push(Rc::clone(snapshot)))
        }

        /// Number of notifications received, including the initial one.
        pub fn calls(&self) -> usize {
            self.seen.borrow().len()
        }

        pub fn last(&self) -> Option<Snapshot<E>> {
            self.seen.borrow().last().cloned()
        }

        pub fn lengths(&self) -> Vec<usize> {
            self.seen.borrow().iter().map(|s| s.len()).collect()
        }
    }
}
