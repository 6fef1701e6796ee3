//! # Event Bus Module
//!
//! Typed notification surface between the editor and its host.
//!
//! ## Overview
//!
//! Every editor owns one bus and publishes to it; the host subscribes:
//! - Synchronous handlers run on the publishing thread, filtered by category
//! - Async consumers poll a `tokio` broadcast receiver
//!
//! ## Usage
//!
//! ```rust,ignore
//! use planorama_core::event_bus::{EventBus, EventCategory, EventFilter, PlanoramaEvent};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Selection]),
//!     |event| {
//!         if let PlanoramaEvent::Selection(selection) = event {
//!             println!("Selection changed: {:?}", selection);
//!         }
//!     },
//! );
//!
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
