//! # Planorama Designer
//!
//! Editing engine for 2D layouts of template-based items: a retained scene
//! graph, rectangle selection with a transform handle, batch layout
//! commands with animated transitions, and a drag-to-place tool.
//!
//! ## Architecture
//!
//! ```text
//! Scene
//!   ├── items layer (free items)
//!   └── transform layer
//!         ├── selection container (selected items)
//!         └── placement guide (while painting)
//!
//! Editor
//!   ├── SelectionManager  (marquee, click, handle gestures)
//!   ├── PlacementTool     (creator)
//!   ├── layout::compute   (alignX/alignY/grid/circle/rotate)
//!   ├── TransitionController
//!   └── EventBus          (notifications)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use planorama_designer::{Command, Editor, ItemTemplate};
//! use planorama_core::{InteractionMode, Point};
//!
//! let mut editor = Editor::default();
//! editor.register_template(ItemTemplate::new("chair", 90.0, 40.0))?;
//! editor.set_active_template(Some("chair"));
//!
//! editor.set_mode(InteractionMode::Create);
//! editor.pointer_down(Point::new(0.0, 0.0));
//! editor.pointer_up(Point::new(500.0, 0.0));
//!
//! editor.set_mode(InteractionMode::Select);
//! editor.execute(Command::AlignGrid { columns: Some(2), gap: None });
//! ```

pub mod commands;
pub mod creator;
pub mod editor;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod scene;
pub mod selection_manager;
pub mod serialization;
pub mod transform;
pub mod transition;

pub use commands::{Command, CommandOutcome};
pub use creator::{PlacementSession, PlacementTool};
pub use editor::Editor;
pub use layout::{LayoutEntry, LayoutRequest, LayoutResult, LayoutTarget};
pub use model::{
    BackgroundTemplate, Item, ItemBackground, ItemLabel, ItemTemplate, LabelTemplate,
    SkippedPart, TemplateLibrary,
};
pub use scene::{Node, NodeId, NodeKind, Scene};
pub use selection_manager::{HandlePart, Marquee, SelectionManager};
pub use serialization::ImportReport;
pub use transform::Transform;
pub use transition::{TransitionController, TransitionOutcome, TransitionSettings};
