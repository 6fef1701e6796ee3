//! # Layout algorithms
//!
//! Each strategy consumes the live bounding boxes of the selected items and
//! produces a target pose per item. The inputs must already be normalized
//! into the free layer's frame with unit scale; see
//! [`SelectionManager::take_for_layout`](crate::selection_manager::SelectionManager::take_for_layout).
//!
//! Targets place an item's *origin*, so every strategy converts from the
//! position it wants for the item's visual box back to an origin using the
//! offset between the box and the origin.

mod align;
mod circle;
mod grid;
mod rotate;

pub use align::{align_x, align_y};
pub use circle::{facing_rotation, spread_circle};
pub use grid::align_grid;
pub use rotate::rotate_items;

use planorama_core::{BoundingBox, Facing, Point};
use std::cmp::Ordering;

use crate::scene::{NodeId, Scene};
use crate::transform::Transform;

/// One selected item as seen by a layout strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEntry {
    pub node: NodeId,
    /// Absolute bounding box in the root frame
    pub bbox: BoundingBox,
    /// Decomposed absolute pose
    pub transform: Transform,
}

impl LayoutEntry {
    /// Vector from the item origin to its box center
    pub fn center_offset(&self) -> Point {
        self.bbox.center() - self.transform.position()
    }

    /// Primary sort key on the horizontal axis
    fn x_key(&self) -> f64 {
        self.bbox.x.min(self.transform.x)
    }

    /// Primary sort key on the vertical axis
    fn y_key(&self) -> f64 {
        self.bbox.y.min(self.transform.y)
    }
}

/// Target pose of one item
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutTarget {
    pub node: NodeId,
    pub x: f64,
    pub y: f64,
    /// New rotation in degrees; `None` keeps the current one
    pub rotation: Option<f64>,
}

impl LayoutTarget {
    /// Pose reached from `current` when this target is fully applied
    pub fn resolve(&self, current: Transform) -> Transform {
        Transform {
            x: self.x,
            y: self.y,
            rotation: self.rotation.unwrap_or(current.rotation),
            ..current
        }
    }
}

/// Targets in assignment order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayoutResult {
    pub targets: Vec<LayoutTarget>,
}

impl LayoutResult {
    /// Nodes in the order positions were assigned
    pub fn order(&self) -> Vec<NodeId> {
        self.targets.iter().map(|t| t.node).collect()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn target(&self, node: NodeId) -> Option<&LayoutTarget> {
        self.targets.iter().find(|t| t.node == node)
    }
}

/// Parameters of one layout run
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutRequest {
    AlignX { gap: f64 },
    AlignY { gap: f64 },
    Grid { columns: usize, gap: f64 },
    Circle { radius: f64, facing: Facing },
    Rotate { angle: f64 },
}

impl LayoutRequest {
    pub fn name(&self) -> &'static str {
        match self {
            LayoutRequest::AlignX { .. } => "align-x",
            LayoutRequest::AlignY { .. } => "align-y",
            LayoutRequest::Grid { .. } => "align-grid",
            LayoutRequest::Circle { .. } => "spread-circle",
            LayoutRequest::Rotate { .. } => "rotate",
        }
    }
}

/// Run the strategy named by `request`
pub fn compute(request: LayoutRequest, entries: &[LayoutEntry]) -> LayoutResult {
    match request {
        LayoutRequest::AlignX { gap } => align_x(entries, gap),
        LayoutRequest::AlignY { gap } => align_y(entries, gap),
        LayoutRequest::Grid { columns, gap } => align_grid(entries, columns, gap),
        LayoutRequest::Circle { radius, facing } => spread_circle(entries, radius, facing),
        LayoutRequest::Rotate { angle } => rotate_items(entries, angle),
    }
}

/// Measure `nodes` in the root frame; nodes without geometry are skipped
pub fn collect_entries(scene: &Scene, nodes: &[NodeId]) -> Vec<LayoutEntry> {
    nodes
        .iter()
        .filter_map(|&node| {
            Some(LayoutEntry {
                node,
                bbox: scene.client_rect(node)?,
                transform: scene.absolute_transform(node),
            })
        })
        .collect()
}

/// Average box center of all entries
fn mean_center(entries: &[LayoutEntry]) -> Point {
    crate::geometry::centroid(entries.iter().map(|e| e.bbox.center())).unwrap_or_default()
}

/// Stable sort by a float key; NaN keys sort last
fn sort_stable_by_key<F>(entries: &mut [LayoutEntry], key: F)
where
    F: Fn(&LayoutEntry) -> f64,
{
    entries.sort_by(|a, b| key(a).partial_cmp(&key(b)).unwrap_or(Ordering::Equal));
}
