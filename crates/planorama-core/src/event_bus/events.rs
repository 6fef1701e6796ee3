//! Event type definitions for the event bus.
//!
//! This module defines the notifications the editor emits to its host,
//! organized by category. Events are cloneable and serializable so hosts can
//! forward them over any channel.

use serde::{Deserialize, Serialize};

use crate::data::{CreatorSnapshot, HandleSnapshot, PlanoramaItem};

/// Root event enum for all editor notifications
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlanoramaEvent {
    /// Selection changes
    Selection(SelectionEvent),
    /// Placement tool lifecycle
    Creator(CreatorEvent),
    /// Transform handle gestures
    Transform(TransformEvent),
    /// Pointer interaction with individual items
    Item(ItemEvent),
}

impl PlanoramaEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            PlanoramaEvent::Selection(_) => EventCategory::Selection,
            PlanoramaEvent::Creator(_) => EventCategory::Creator,
            PlanoramaEvent::Transform(_) => EventCategory::Transform,
            PlanoramaEvent::Item(_) => EventCategory::Item,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            PlanoramaEvent::Selection(e) => e.description(),
            PlanoramaEvent::Creator(e) => e.description(),
            PlanoramaEvent::Transform(e) => e.description(),
            PlanoramaEvent::Item(e) => e.description(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Selection change events.
    Selection,
    /// Placement tool events.
    Creator,
    /// Transform handle events.
    Transform,
    /// Item hover and click events.
    Item,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::Creator => write!(f, "Creator"),
            EventCategory::Transform => write!(f, "Transform"),
            EventCategory::Item => write!(f, "Item"),
        }
    }
}

/// Selection events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SelectionEvent {
    /// The selection container was (re)populated or emptied.
    ItemsSelected {
        /// Records of the items now selected, in container order.
        items: Vec<PlanoramaItem>,
    },
}

impl SelectionEvent {
    fn description(&self) -> String {
        match self {
            SelectionEvent::ItemsSelected { items } => {
                format!("{} item(s) selected", items.len())
            }
        }
    }
}

/// Placement tool events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CreatorEvent {
    /// A placement session started.
    Started(CreatorSnapshot),
    /// The guide line was updated.
    Moved(CreatorSnapshot),
    /// The session was committed.
    Ended {
        /// Final session state.
        snapshot: CreatorSnapshot,
        /// Ids of the items created by the commit.
        created: Vec<String>,
    },
}

impl CreatorEvent {
    fn description(&self) -> String {
        match self {
            CreatorEvent::Started(s) => format!("Placement started at {}", s.origin),
            CreatorEvent::Moved(s) => {
                format!("Placement guide {:.1}deg, {} slot(s)", s.rotation, s.count)
            }
            CreatorEvent::Ended { created, .. } => {
                format!("Placement committed {} item(s)", created.len())
            }
        }
    }
}

/// Transform handle events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransformEvent {
    /// A handle gesture started.
    Started(HandleSnapshot),
    /// The handle moved or rotated.
    Changed(HandleSnapshot),
    /// The gesture ended.
    Ended(HandleSnapshot),
}

impl TransformEvent {
    fn description(&self) -> String {
        match self {
            TransformEvent::Started(h) => format!("Transform started ({} item(s))", h.item_count),
            TransformEvent::Changed(h) => format!("Transform rotation {:.1}deg", h.rotation),
            TransformEvent::Ended(h) => format!("Transform ended ({} item(s))", h.item_count),
        }
    }
}

/// Item pointer events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ItemEvent {
    /// Pointer entered an item.
    Hover(PlanoramaItem),
    /// Pointer left an item.
    Unhover(PlanoramaItem),
    /// An item was clicked outside of select mode.
    Click(PlanoramaItem),
}

impl ItemEvent {
    fn description(&self) -> String {
        match self {
            ItemEvent::Hover(item) => format!("Hover {}", item.id),
            ItemEvent::Unhover(item) => format!("Unhover {}", item.id),
            ItemEvent::Click(item) => format!("Click {}", item.id),
        }
    }
}
