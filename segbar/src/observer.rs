//! Selection-changed observers.
//!
//! Listeners are registered explicitly and stay registered until the caller
//! hands back their `SubscriptionId`. Nothing is held weakly.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for generating unique subscription IDs.
static SUBSCRIPTION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    fn next() -> Self {
        Self(SUBSCRIPTION_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

type Listener = Box<dyn FnMut(usize)>;

/// Ordered set of selection listeners.
#[derive(Default)]
pub struct SelectionObservers {
    listeners: Vec<(SubscriptionId, Listener)>,
}

impl SelectionObservers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. It receives the newly selected index.
    pub fn subscribe(&mut self, listener: impl FnMut(usize) + 'static) -> SubscriptionId {
        let id = SubscriptionId::next();
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if the id was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    /// Call every listener in registration order.
    pub fn notify(&mut self, index: usize) {
        for (_, listener) in &mut self.listeners {
            listener(index);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl std::fmt::Debug for SelectionObservers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectionObservers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
