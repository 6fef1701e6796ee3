//! Exchange records for export/import and selection notifications.
//!
//! The same property structs serve as full snapshots (every field set on
//! export) and as partial updates (only the `Some` fields are applied).

use serde::{Deserialize, Serialize};

use super::BoundingBox;

/// Decomposed absolute transform of an item
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TransformRecord {
    pub x: f64,
    pub y: f64,
    /// Rotation in degrees
    pub rotation: f64,
}

/// Per-axis scale factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
}

impl Default for Scale {
    fn default() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}

/// Background rectangle styling
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackgroundProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
}

/// Label text styling and placement
///
/// Alignments are percentages of the item size, measured from the top-left.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vertical_alignment: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horizontal_alignment: Option<f64>,
}

/// Mutable visual properties of an item
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundProps>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelProps>,
}

impl ItemProps {
    /// Check whether the update carries no sub-updates at all
    pub fn is_empty(&self) -> bool {
        self.background.is_none() && self.label.is_none()
    }
}

/// Persisted item record
///
/// Round-trips through export and import with identical `id`, `transform`
/// and `item_props`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanoramaItem {
    pub id: String,
    /// Template name
    #[serde(rename = "type")]
    pub item_type: String,
    pub transform: TransformRecord,
    #[serde(default)]
    pub scale: Scale,
    pub bounding_box: BoundingBox,
    #[serde(default)]
    pub item_props: ItemProps,
}
