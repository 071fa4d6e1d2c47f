use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::Snapshot;

type Observer<E> = Rc<dyn Fn(&Snapshot<E>)>;

struct Registry<E> {
    next_key: u64,
    observers: Vec<(u64, Observer<E>)>,
}

/// Observer list with synchronous fan-out.
///
/// Uses `Rc<RefCell<..>>` since stores are single-threaded. The registry is
/// never borrowed while an observer runs, so observers may subscribe,
/// unsubscribe or mutate the owning store from inside their callback.
pub(crate) struct Subscribers<E> {
    registry: Rc<RefCell<Registry<E>>>,
}

impl<E: 'static> Subscribers<E> {
    pub(crate) fn new() -> Self {
        Self {
            registry: Rc::new(RefCell::new(Registry {
                next_key: 0,
                observers: Vec::new(),
            })),
        }
    }

    pub(crate) fn add<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&Snapshot<E>) + 'static,
    {
        let observer: Observer<E> = Rc::new(observer);
        let key = {
            let mut registry = self.registry.borrow_mut();
            let key = registry.next_key;
            registry.next_key += 1;
            registry.observers.push((key, observer));
            key
        };

        let registry: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.registry);
        Subscription {
            release: Some(Box::new(move || {
                if let Some(registry) = registry.upgrade() {
                    registry.borrow_mut().observers.retain(|(k, _)| *k != key);
                }
            })),
        }
    }

    /// Calls every observer registered at the time of the call, in
    /// registration order.
    pub(crate) fn notify(&self, snapshot: &Snapshot<E>) {
        let observers: Vec<Observer<E>> = self
            .registry
            .borrow()
            .observers
            .iter()
            .map(|(_, observer)| Rc::clone(observer))
            .collect();

        for observer in observers {
            observer(snapshot);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.registry.borrow().observers.len()
    }
}

/// Handle returned by [`Store::subscribe`](super::Store::subscribe).
///
/// The observer stays registered until the handle is unsubscribed or
/// dropped. Use [`Subscription::detach`] to keep it for the lifetime of the
/// store instead.
#[must_use = "dropping a Subscription unsubscribes the observer immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Deregisters the observer.
    pub fn unsubscribe(mut self) {
        self.release_now();
    }

    /// Keeps the observer registered for as long as the store lives.
    pub fn detach(mut self) {
        self.release.take();
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}
