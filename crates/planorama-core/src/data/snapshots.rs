//! Snapshots carried by placement and transform handle notifications.

use serde::{Deserialize, Serialize};

use super::{BoundingBox, Point};

/// Corners, edge midpoints and center of a (possibly rotated) rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectPoints {
    pub top_left: Point,
    pub top_right: Point,
    pub bottom_left: Point,
    pub bottom_right: Point,
    pub center_left: Point,
    pub center_right: Point,
    pub center_top: Point,
    pub center_bottom: Point,
    pub center: Point,
}

/// State of a placement session at one pointer event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatorSnapshot {
    /// Pointer-down position
    pub origin: Point,
    /// Latest pointer position
    pub pointer: Point,
    /// Snapped guide angle in degrees, `[0, 360)`
    pub rotation: f64,
    /// Distance from origin to pointer
    pub length: f64,
    /// Number of slots that fit along the guide
    pub count: usize,
    /// Outline of the guide strip in scene coordinates
    pub points: RectPoints,
}

/// State of the transform handle around the selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandleSnapshot {
    /// Padded frame around the selection
    pub bounds: BoundingBox,
    /// Rotation of the transformed node in degrees
    pub rotation: f64,
    /// Rotation grip position
    pub grip: Point,
    /// Frame outline
    pub points: RectPoints,
    /// Number of selected items
    pub item_count: usize,
}
