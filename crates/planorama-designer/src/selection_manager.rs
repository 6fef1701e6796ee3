//! Selection management
//!
//! Owns the behaviour of the scene's selection container: marquee and click
//! selection, moving items between the free layer and the container without
//! visual jumps, and the transform handle drawn around the selection.
//!
//! # Container invariant
//!
//! Whenever the container is emptied it is also reset to the identity
//! transform, so children added afterwards share the free layer's frame.

use nalgebra::Matrix3;
use planorama_core::{BoundingBox, HandleSnapshot, Point};
use planorama_settings::SelectionSettings;

use crate::geometry::{rotated_rect_points, rotation_angle, snap};
use crate::model::new_item_id;
use crate::scene::{NodeId, Scene};
use crate::transform::{rotation_about, translation, Transform};

/// Rubber-band rectangle anchored at the pointer-down point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marquee {
    pub anchor: Point,
    pub current: Point,
    /// Set once the pointer has left the anchor; a marquee that never
    /// became visible selects nothing
    pub visible: bool,
}

impl Marquee {
    /// Normalized rectangle spanning anchor and current point
    pub fn rect(&self) -> BoundingBox {
        BoundingBox::from_corners(self.anchor, self.current)
    }
}

/// Part of the transform handle under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlePart {
    /// Inside the frame; dragging moves the selection
    Body,
    /// The rotation grip above the frame
    RotateGrip,
}

#[derive(Debug, Clone)]
enum HandleGesture {
    Move {
        start: Point,
        base: Matrix3<f64>,
    },
    Rotate {
        target: NodeId,
        pivot: Point,
        start_angle: f64,
        base: Matrix3<f64>,
    },
}

/// Selection state machine
#[derive(Debug, Clone)]
pub struct SelectionManager {
    settings: SelectionSettings,
    marquee: Option<Marquee>,
    gesture: Option<HandleGesture>,
    gesture_changed: bool,
    cached: bool,
}

impl SelectionManager {
    pub fn new(settings: SelectionSettings) -> Self {
        Self {
            settings,
            marquee: None,
            gesture: None,
            gesture_changed: false,
            cached: false,
        }
    }

    pub fn settings(&self) -> &SelectionSettings {
        &self.settings
    }

    /// Selected item nodes in container order
    pub fn selected(&self, scene: &Scene) -> Vec<NodeId> {
        scene.item_children(scene.selection_container())
    }

    pub fn is_empty(&self, scene: &Scene) -> bool {
        scene.children(scene.selection_container()).is_empty()
    }

    pub fn contains(&self, scene: &Scene, node: NodeId) -> bool {
        scene.parent(node) == Some(scene.selection_container())
    }

    /// Whether the container is currently rendered from a cache
    pub fn is_cached(&self) -> bool {
        self.cached
    }

    fn refresh_cache(&mut self, scene: &Scene) {
        self.cached =
            scene.children(scene.selection_container()).len() > self.settings.performance_item_limit;
    }

    // ---- marquee -------------------------------------------------------

    pub fn marquee(&self) -> Option<Marquee> {
        self.marquee
    }

    pub fn begin_marquee(&mut self, point: Point) {
        self.marquee = Some(Marquee {
            anchor: point,
            current: point,
            visible: false,
        });
    }

    pub fn update_marquee(&mut self, point: Point) {
        if let Some(marquee) = self.marquee.as_mut() {
            marquee.current = point;
            marquee.visible |= point != marquee.anchor;
        }
    }

    /// End the marquee and select every free item intersecting it.
    ///
    /// Returns the new selection, or `None` when nothing changed (no
    /// marquee, a marquee that never moved, a populated container, or no hits).
    pub fn finish_marquee(&mut self, scene: &mut Scene) -> Option<Vec<NodeId>> {
        let marquee = self.marquee.take()?;
        if !marquee.visible || !self.is_empty(scene) {
            return None;
        }
        let rect = marquee.rect();

        let hits: Vec<NodeId> = scene
            .item_children(scene.items_layer())
            .into_iter()
            .filter(|&node| scene.client_rect(node).is_some_and(|b| b.intersects(&rect)))
            .collect();
        if hits.is_empty() {
            return None;
        }

        self.populate(scene, &hits);
        Some(hits)
    }

    pub fn cancel_marquee(&mut self) {
        self.marquee = None;
    }

    // ---- membership ----------------------------------------------------

    /// Add one item; without `multi` the previous selection is released first.
    ///
    /// Returns false if `node` is not an item.
    pub fn select(&mut self, scene: &mut Scene, node: NodeId, multi: bool) -> bool {
        if !scene.is_item(node) {
            return false;
        }
        if !multi {
            let previous: Vec<NodeId> = self
                .selected(scene)
                .into_iter()
                .filter(|&n| n != node)
                .collect();
            for n in previous {
                scene.reparent_preserving(n, scene.items_layer(), false);
            }
            if self.is_empty(scene) {
                self.reset_container(scene);
            }
        }
        if !self.contains(scene, node) {
            scene.reparent_preserving(node, scene.selection_container(), false);
        }
        self.refresh_cache(scene);
        true
    }

    /// Add every known item in `item_ids`, keeping the current selection
    pub fn select_by_ids(&mut self, scene: &mut Scene, item_ids: &[String]) -> Vec<NodeId> {
        let found: Vec<NodeId> = item_ids.iter().filter_map(|id| scene.find_item(id)).collect();
        for &node in &found {
            self.select(scene, node, true);
        }
        found
    }

    /// Fill an empty, reset container with `nodes`
    pub fn populate(&mut self, scene: &mut Scene, nodes: &[NodeId]) {
        if !self.is_empty(scene) {
            self.release(scene);
        }
        self.reset_container(scene);
        let container = scene.selection_container();
        for &node in nodes {
            if scene.is_item(node) {
                scene.reparent_preserving(node, container, false);
            }
        }
        self.refresh_cache(scene);
    }

    /// Return every selected item to the free layer and reset the container
    pub fn release(&mut self, scene: &mut Scene) -> Vec<NodeId> {
        let nodes = self.selected(scene);
        let layer = scene.items_layer();
        for &node in &nodes {
            scene.reparent_preserving(node, layer, false);
        }
        self.reset_container(scene);
        nodes
    }

    /// Move the selection to the free layer with unit scale for layout.
    ///
    /// The container is left empty and at identity; callers repopulate it
    /// once the new positions are applied.
    pub fn take_for_layout(&mut self, scene: &mut Scene) -> Vec<NodeId> {
        let nodes = self.selected(scene);
        let layer = scene.items_layer();
        for &node in &nodes {
            scene.reparent_preserving(node, layer, true);
        }
        self.reset_container(scene);
        nodes
    }

    fn reset_container(&mut self, scene: &mut Scene) {
        let container = scene.selection_container();
        let stray: Vec<NodeId> = scene.children(container).to_vec();
        let layer = scene.items_layer();
        for node in stray {
            scene.reparent_preserving(node, layer, false);
        }
        scene.set_transform(container, Transform::identity());
        self.gesture = None;
        self.cached = false;
    }

    /// Destroy the selected items. Returns false on an empty selection.
    pub fn delete(&mut self, scene: &mut Scene) -> bool {
        if self.is_empty(scene) {
            return false;
        }
        scene.destroy_children(scene.selection_container());
        self.reset_container(scene);
        true
    }

    /// Replace the selection by offset copies of it
    pub fn clone_selection(&mut self, scene: &mut Scene) -> Vec<NodeId> {
        let originals = self.release(scene);
        let offset = translation(self.settings.clone_offset, self.settings.clone_offset);

        let clones: Vec<NodeId> = originals
            .iter()
            .filter_map(|&node| {
                let copy = scene.clone_item(node, new_item_id())?;
                let moved = offset * scene.absolute_matrix(copy);
                scene.set_absolute_matrix(copy, &moved);
                Some(copy)
            })
            .collect();

        if !clones.is_empty() {
            self.populate(scene, &clones);
        }
        clones
    }

    // ---- transform handle ----------------------------------------------

    /// Node the handle rotates: the single selected item, else the container
    fn rotation_target(&self, scene: &Scene) -> NodeId {
        match self.selected(scene).as_slice() {
            [single] => *single,
            _ => scene.selection_container(),
        }
    }

    /// Current handle geometry, or `None` without a selection
    pub fn handle(&self, scene: &Scene) -> Option<HandleSnapshot> {
        if self.is_empty(scene) {
            return None;
        }
        let bounds = scene
            .client_rect(scene.selection_container())?
            .expand(self.settings.handle_padding);
        let rotation = scene.absolute_transform(self.rotation_target(scene)).rotation;
        let grip = Point::new(
            bounds.center().x,
            bounds.y - self.settings.rotate_anchor_offset,
        );

        Some(HandleSnapshot {
            bounds,
            rotation,
            grip,
            points: rotated_rect_points(bounds.x, bounds.y, bounds.width, bounds.height, 0.0),
            item_count: self.selected(scene).len(),
        })
    }

    /// Which part of the handle, if any, lies under `point`
    pub fn hit_handle(&self, scene: &Scene, point: Point) -> Option<HandlePart> {
        let handle = self.handle(scene)?;
        let grip_radius = self.settings.handle_padding.max(1.0);
        if crate::geometry::distance(point, handle.grip) <= grip_radius {
            Some(HandlePart::RotateGrip)
        } else if handle.bounds.contains_point(point) {
            Some(HandlePart::Body)
        } else {
            None
        }
    }

    pub fn is_gesturing(&self) -> bool {
        self.gesture.is_some()
    }

    /// Start dragging `part` of the handle from `point`
    pub fn begin_gesture(&mut self, scene: &Scene, part: HandlePart, point: Point) -> bool {
        let Some(handle) = self.handle(scene) else {
            return false;
        };
        self.gesture_changed = false;
        self.gesture = Some(match part {
            HandlePart::Body => HandleGesture::Move {
                start: point,
                base: scene.absolute_matrix(scene.selection_container()),
            },
            HandlePart::RotateGrip => {
                let target = self.rotation_target(scene);
                let pivot = handle.bounds.center();
                HandleGesture::Rotate {
                    target,
                    pivot,
                    start_angle: rotation_angle(pivot, point),
                    base: scene.absolute_matrix(target),
                }
            }
        });
        true
    }

    /// Apply the gesture for the pointer at `point`
    pub fn update_gesture(&mut self, scene: &mut Scene, point: Point) -> bool {
        let Some(gesture) = self.gesture.as_ref() else {
            return false;
        };
        match gesture {
            HandleGesture::Move { start, base } => {
                let moved = translation(point.x - start.x, point.y - start.y) * base;
                scene.set_absolute_matrix(scene.selection_container(), &moved);
            }
            HandleGesture::Rotate {
                target,
                pivot,
                start_angle,
                base,
            } => {
                let snapped = snap(
                    rotation_angle(*pivot, point) - start_angle,
                    self.settings.rotation_snap_step,
                );
                let rotated = rotation_about(*pivot, snapped) * base;
                scene.set_absolute_matrix(*target, &rotated);
            }
        }
        self.gesture_changed = true;
        true
    }

    /// Finish the gesture; returns whether it changed anything
    pub fn end_gesture(&mut self) -> bool {
        let changed = self.gesture.take().is_some() && self.gesture_changed;
        self.gesture_changed = false;
        changed
    }
}
