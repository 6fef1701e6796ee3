//! # Planorama
//!
//! Interactive 2D layout editor engine for template-based items.
//!
//! ## Architecture
//!
//! Planorama is organized as a workspace with multiple crates:
//!
//! 1. **planorama-core** - Shared value types, events, errors
//! 2. **planorama-settings** - Configuration loading, saving and validation
//! 3. **planorama-designer** - Scene graph, selection, layouts, placement, `Editor`
//! 4. **planorama** - This crate: re-exports plus the headless `planorama` binary
//!
//! ## Features
//!
//! - **Selection**: marquee, click and id-based selection with a move/rotate handle
//! - **Layouts**: align X/Y, grid packing, circular spread, uniform rotation
//! - **Transitions**: eased, frame-driven tweens with a single completion step
//! - **Placement**: drag a guide line to stamp out items along it
//! - **Records**: JSON export/import of every item's pose and properties

pub mod demo;

pub use planorama_core::{
    BoundingBox, DesignerError, DesignerResult, Easing, EventBus, EventFilter, Facing,
    InteractionMode, ItemProps, PlanoramaEvent, PlanoramaItem, Point,
};
pub use planorama_designer as designer;
pub use planorama_designer::{Command, CommandOutcome, Editor, ItemTemplate, LabelTemplate};
pub use planorama_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    // Logs go to stderr so the exported JSON on stdout stays clean
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
