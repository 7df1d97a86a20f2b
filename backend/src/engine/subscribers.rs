//! Snapshot subscriptions
//!
//! Explicit observer registry replacing the original dashboard's implicit
//! reactive re-render: listeners receive an immutable snapshot after every
//! tick and every user action, in subscription order.

use crate::models::snapshot::Snapshot;

/// Handle identifying one subscription; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&Snapshot) + Send>;

/// Listener registry with deterministic delivery
///
/// Listeners are invoked in subscription order. Unsubscribing is
/// idempotent and never disturbs other subscriptions.
pub struct SubscriberRegistry {
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u64,
}

impl SubscriberRegistry {
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a listener; returns its subscription handle.
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a subscription. Unknown or already-removed ids are no-ops.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(sid, _)| *sid != id);
    }

    /// Deliver a snapshot to every listener, in subscription order.
    pub fn notify(&self, snapshot: &Snapshot) {
        for (_, listener) in &self.listeners {
            listener(snapshot);
        }
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    /// Whether there are no live subscriptions.
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl Default for SubscriberRegistry {
    fn default() -> Self {
        Self::new()
    }
}
