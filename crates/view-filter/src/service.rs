//! Filter Service
//!
//! Owns the current [`ViewFilter`] and pushes every new snapshot to subscribers.
//!
//! Delivery is synchronous and in subscription order. A new subscriber receives
//! the latest snapshot immediately, then every later change. Everything lives on
//! one thread, so state is shared through `Rc<RefCell<..>>`.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use log::{debug, trace};

use crate::filter::{ViewFileEntity, ViewFilter};
use crate::status::FilterStatus;

type Callback = Rc<dyn Fn(&ViewFilter)>;

#[derive(Default)]
struct Inner {
    current: ViewFilter,
    /// Bumped on every published change
    version: u64,
    next_id: u64,
    subscribers: Vec<(u64, Callback)>,
}

impl Inner {
    fn is_subscribed(&self, id: u64) -> bool {
        self.subscribers.iter().any(|(sub_id, _)| *sub_id == id)
    }
}

/// Canonical filter state shared by the filter controls and the file list.
///
/// Cloning yields another handle to the same state.
#[derive(Clone, Default)]
pub struct FilterService {
    inner: Rc<RefCell<Inner>>,
}

impl FilterService {
    /// Service starting with no status restriction and an empty name
    pub fn new() -> Self {
        Self::default()
    }

    /// Service starting from a given snapshot
    pub fn with_filter(initial: ViewFilter) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                current: initial,
                ..Default::default()
            })),
        }
    }

    /// Read-only handle to the stream of filter snapshots
    pub fn current_filter(&self) -> FilterStream {
        FilterStream {
            inner: Rc::clone(&self.inner),
        }
    }

    /// Replace the status restriction. `None` shows every status.
    ///
    /// Setting the status already in effect is not a change: nothing is published.
    pub fn set_status(&self, status: Option<FilterStatus>) {
        self.publish(|current| current.with_status(status));
    }

    /// Replace the name restriction. An empty string clears it.
    ///
    /// The name is compared lower-cased, so a value equal to the current one
    /// ignoring case is not a change and nothing is published.
    pub fn set_name(&self, name: &str) {
        self.publish(|current| current.with_name(name));
    }

    /// Whether `file` passes the current filter
    pub fn matches<F: ViewFileEntity + ?Sized>(&self, file: &F) -> bool {
        self.inner.borrow().current.matches(file)
    }

    /// The files passing the current filter, in their original order
    pub fn filter<'a, T: ViewFileEntity>(&self, files: &'a [T]) -> Vec<&'a T> {
        let inner = self.inner.borrow();
        files.iter().filter(|file| inner.current.matches(*file)).collect()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    fn publish(&self, change: impl FnOnce(&ViewFilter) -> ViewFilter) {
        let (snapshot, version, targets) = {
            let mut inner = self.inner.borrow_mut();
            let next = change(&inner.current);
            if next == inner.current {
                trace!("[FilterService] unchanged filter {:?}, not publishing", next);
                return;
            }
            inner.current = next.clone();
            inner.version += 1;
            let targets: Vec<(u64, Callback)> = inner
                .subscribers
                .iter()
                .map(|(id, callback)| (*id, Rc::clone(callback)))
                .collect();
            (next, inner.version, targets)
        };

        debug!(
            "[FilterService] publishing {:?} to {} subscriber(s)",
            snapshot,
            targets.len()
        );

        for (id, callback) in targets {
            {
                let inner = self.inner.borrow();
                // A subscriber published a newer snapshot, which already reached everyone
                if inner.version != version {
                    break;
                }
                // Unsubscribed by an earlier callback
                if !inner.is_subscribed(id) {
                    continue;
                }
            }
            callback(&snapshot);
        }
    }
}

impl fmt::Debug for FilterService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("FilterService")
            .field("current", &inner.current)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

/// Read side of a [`FilterService`]: can observe snapshots but not change them
#[derive(Clone)]
pub struct FilterStream {
    inner: Rc<RefCell<Inner>>,
}

impl FilterStream {
    /// The most recently published snapshot
    pub fn latest(&self) -> ViewFilter {
        self.inner.borrow().current.clone()
    }

    /// Register `callback`, calling it right away with the latest snapshot.
    ///
    /// The callback stays registered until the returned [`Subscription`] is
    /// dropped or unsubscribed.
    pub fn subscribe(&self, callback: impl Fn(&ViewFilter) + 'static) -> Subscription {
        let callback: Callback = Rc::new(callback);
        let (id, snapshot) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.subscribers.push((id, Rc::clone(&callback)));
            (id, inner.current.clone())
        };
        debug!("[FilterStream] subscriber {} added", id);

        callback(&snapshot);

        Subscription {
            inner: Rc::downgrade(&self.inner),
            id,
            active: true,
        }
    }
}

impl fmt::Debug for FilterStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterStream")
            .field("latest", &self.inner.borrow().current)
            .finish()
    }
}

/// Registration of one subscriber. Dropping it unsubscribes.
///
/// Outliving the service is harmless: the subscription simply goes inert.
#[must_use = "dropping a Subscription unsubscribes it immediately"]
pub struct Subscription {
    inner: Weak<RefCell<Inner>>,
    id: u64,
    active: bool,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.release();
    }

    /// Whether the callback would still receive snapshots
    pub fn is_active(&self) -> bool {
        if !self.active {
            return false;
        }
        match self.inner.upgrade() {
            Some(inner) => {
                let subscribed = inner.borrow().is_subscribed(self.id);
                subscribed
            }
            None => false,
        }
    }

    fn release(&mut self) {
        if !std::mem::take(&mut self.active) {
            return;
        }
        let Some(inner) = self.inner.upgrade() else {
            return;
        };
        let removed = {
            let mut inner = inner.borrow_mut();
            inner
                .subscribers
                .iter()
                .position(|(id, _)| *id == self.id)
                .map(|index| inner.subscribers.remove(index))
        };
        // The callback may own other subscriptions; drop it outside the borrow
        drop(removed);
        debug!("[FilterStream] subscriber {} removed", self.id);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("active", &self.active)
            .finish()
    }
}
