//! Command surface
//!
//! Fire-and-forget intents accepted by [`Editor::execute`](crate::Editor::execute).
//! Optional layout parameters fall back to the configured layout defaults.

use planorama_core::{Facing, ItemProps, PlanoramaItem};
use serde::{Deserialize, Serialize};

/// An editor command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "camelCase")]
pub enum Command {
    /// Lay the selection out left to right
    AlignX {
        #[serde(default)]
        gap: Option<f64>,
    },
    /// Lay the selection out top to bottom
    AlignY {
        #[serde(default)]
        gap: Option<f64>,
    },
    /// Pack the selection into a grid
    AlignGrid {
        #[serde(default)]
        columns: Option<usize>,
        #[serde(default)]
        gap: Option<f64>,
    },
    /// Distribute the selection on a circle
    SpreadCircle {
        #[serde(default)]
        radius: Option<f64>,
        #[serde(default)]
        facing: Option<Facing>,
    },
    /// Give every selected item the same rotation
    Rotate {
        #[serde(default)]
        angle: Option<f64>,
    },
    /// Return the selection to the free layer
    Discard,
    /// Destroy the selected items
    Delete,
    /// Replace the selection by offset copies
    Clone,
    /// Add items to the selection by id
    SelectByIds { ids: Vec<String> },
    /// Partially update one item's properties
    UpdateItem { id: String, props: ItemProps },
    /// Update known items and recreate unknown ones
    ImportAll { items: Vec<PlanoramaItem> },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Command::AlignX { .. } => "select.alignX",
            Command::AlignY { .. } => "select.alignY",
            Command::AlignGrid { .. } => "select.alignGrid",
            Command::SpreadCircle { .. } => "select.spreadCircle",
            Command::Rotate { .. } => "select.rotate",
            Command::Discard => "select.discard",
            Command::Delete => "select.delete",
            Command::Clone => "select.clone",
            Command::SelectByIds { .. } => "select.byIds",
            Command::UpdateItem { .. } => "item.updateById",
            Command::ImportAll { .. } => "item.importAll",
        }
    }
}

/// What a command did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The scene changed and any completion has run
    Applied,
    /// A transition is running; completion follows from frame updates
    Animating,
    /// Nothing to do (empty selection, unknown id, wrong mode, busy)
    Ignored,
}
