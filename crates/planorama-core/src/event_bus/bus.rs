//! Event Bus implementation.
//!
//! Each editor owns an `EventBus`; there is no process-wide instance, so
//! independent scenes never see each other's notifications.

use parking_lot::RwLock;
use std::collections::HashMap;
use tokio::sync::broadcast;
use uuid::Uuid;

use super::events::{EventCategory, PlanoramaEvent};

/// Capacity of the broadcast channel behind [`EventBus::receiver`]
pub const EVENT_CHANNEL_CAPACITY: usize = 256;

/// Subscription handle for unsubscribing from events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sub({})", &self.0.simple().to_string()[..8])
    }
}

/// Which events a handler receives
#[derive(Debug, Clone, Default)]
pub enum EventFilter {
    #[default]
    All,
    /// Events whose category is listed
    Categories(Vec<EventCategory>),
}

impl EventFilter {
    pub fn matches(&self, event: &PlanoramaEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Categories(categories) => categories.contains(&event.category()),
        }
    }
}

struct Subscription {
    filter: EventFilter,
    handler: Box<dyn Fn(PlanoramaEvent) + Send + Sync>,
}

/// Notification bus owned by an editor
pub struct EventBus {
    sender: broadcast::Sender<PlanoramaEvent>,
    subscriptions: RwLock<HashMap<SubscriptionId, Subscription>>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            sender,
            subscriptions: RwLock::new(HashMap::new()),
        }
    }

    /// Deliver `event` to matching handlers and to every async receiver.
    ///
    /// Returns how many listeners saw it; zero means nobody is listening,
    /// which is normal for a headless editor.
    pub fn publish(&self, event: PlanoramaEvent) -> usize {
        tracing::trace!(category = %event.category(), "{}", event.description());

        let subscriptions = self.subscriptions.read();
        let mut delivered = 0;
        for subscription in subscriptions.values() {
            if subscription.filter.matches(&event) {
                (subscription.handler)(event.clone());
                delivered += 1;
            }
        }

        // Err only means there are no receivers right now
        delivered + self.sender.send(event).unwrap_or(0)
    }

    /// Register a synchronous handler.
    ///
    /// The handler runs on the publishing thread inside the editor call that
    /// produced the event, so it should return quickly.
    pub fn subscribe<F>(&self, filter: EventFilter, handler: F) -> SubscriptionId
    where
        F: Fn(PlanoramaEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(Uuid::new_v4());
        self.subscriptions.write().insert(
            id,
            Subscription {
                filter,
                handler: Box::new(handler),
            },
        );
        tracing::debug!("Subscription {} added", id);
        id
    }

    /// Receiver for polling events from async code
    pub fn receiver(&self) -> broadcast::Receiver<PlanoramaEvent> {
        self.sender.subscribe()
    }

    /// Returns true if the subscription existed
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let removed = self.subscriptions.write().remove(&id).is_some();
        if removed {
            tracing::debug!("Subscription {} removed", id);
        }
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.read().len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .field("receivers", &self.sender.receiver_count())
            .finish()
    }
}
