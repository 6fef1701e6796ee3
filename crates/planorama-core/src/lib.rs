//! # Planorama Core
//!
//! Core types, events, and errors shared by the Planorama crates.
//! Provides the value types exchanged with host applications, the typed
//! event bus used as the notification surface, and the designer error type.

pub mod constants;
pub mod data;
pub mod error;
pub mod event_bus;
pub mod types;

pub use data::{
    BackgroundProps, BoundingBox, CreatorSnapshot, HandleSnapshot, ItemProps, LabelProps,
    PlanoramaItem, Point, RectPoints, Scale, TransformRecord,
};

pub use error::{DesignerError, DesignerResult};

// Re-export event bus for convenience
pub use event_bus::{
    CreatorEvent, EventBus, EventCategory, EventFilter, ItemEvent, PlanoramaEvent, SelectionEvent,
    SubscriptionId, TransformEvent,
};

pub use types::{Easing, Facing, InteractionMode};
