//! Scene graph
//!
//! An arena of nodes keyed by [`NodeId`]. Every scene is created with a
//! fixed skeleton:
//!
//! ```text
//! root
//! ├── items layer        (free, unselected items)
//! └── transform layer
//!     └── selection container (singleton)
//! ```
//!
//! Tools add transient groups (placement guides) to the transform layer.
//! All bounding boxes are reported relative to the root frame.

use nalgebra::Matrix3;
use planorama_core::{BoundingBox, Point};
use std::collections::HashMap;

use crate::model::Item;
use crate::transform::{apply, Transform};

/// Handle to a node in a [`Scene`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a node draws
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Root,
    Layer,
    Group,
    Item(Item),
    /// Rectangle with its top-left at the node origin
    Rect { width: f64, height: f64 },
    /// Polyline in node-local coordinates
    Line { points: Vec<Point> },
}

/// A scene node
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub transform: Transform,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(kind: NodeKind, transform: Transform, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            transform,
            parent,
            children: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn item(&self) -> Option<&Item> {
        match &self.kind {
            NodeKind::Item(item) => Some(item),
            _ => None,
        }
    }

    /// Corners of the node's own geometry in local coordinates
    fn local_points(&self) -> Vec<Point> {
        match &self.kind {
            NodeKind::Item(item) => rect_corners(item.width, item.height),
            NodeKind::Rect { width, height } => rect_corners(*width, *height),
            NodeKind::Line { points } => points.clone(),
            NodeKind::Root | NodeKind::Layer | NodeKind::Group => Vec::new(),
        }
    }
}

fn rect_corners(width: f64, height: f64) -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(width, 0.0),
        Point::new(width, height),
        Point::new(0.0, height),
    ]
}

/// Scene graph owning every node of one editor
#[derive(Debug, Clone)]
pub struct Scene {
    nodes: HashMap<NodeId, Node>,
    next_id: u64,
    root: NodeId,
    items_layer: NodeId,
    transform_layer: NodeId,
    selection_container: NodeId,
    /// Item id -> node
    index: HashMap<String, NodeId>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create a scene with its root, layers and selection container
    pub fn new() -> Self {
        let root = NodeId(0);
        let mut nodes = HashMap::new();
        nodes.insert(root, Node::new(NodeKind::Root, Transform::identity(), None));

        let mut scene = Self {
            nodes,
            next_id: 1,
            root,
            items_layer: root,
            transform_layer: root,
            selection_container: root,
            index: HashMap::new(),
        };
        scene.items_layer = scene.insert(root, NodeKind::Layer, Transform::identity());
        scene.transform_layer = scene.insert(root, NodeKind::Layer, Transform::identity());
        scene.selection_container =
            scene.insert(scene.transform_layer, NodeKind::Group, Transform::identity());
        scene
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Layer holding unselected items
    pub fn items_layer(&self) -> NodeId {
        self.items_layer
    }

    /// Layer holding the selection container and tool overlays
    pub fn transform_layer(&self) -> NodeId {
        self.transform_layer
    }

    /// The singleton selection container
    pub fn selection_container(&self) -> NodeId {
        self.selection_container
    }

    fn insert(&mut self, parent: NodeId, kind: NodeKind, transform: Transform) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Node::new(kind, transform, Some(parent)));
        if let Some(p) = self.nodes.get_mut(&parent) {
            p.children.push(id);
        }
        id
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(&id)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    pub fn add_group(&mut self, parent: NodeId, transform: Transform) -> NodeId {
        self.insert(parent, NodeKind::Group, transform)
    }

    pub fn add_rect(&mut self, parent: NodeId, transform: Transform, width: f64, height: f64) -> NodeId {
        self.insert(parent, NodeKind::Rect { width, height }, transform)
    }

    pub fn add_line(&mut self, parent: NodeId, points: Vec<Point>) -> NodeId {
        self.insert(parent, NodeKind::Line { points }, Transform::identity())
    }

    /// Add an item node. An existing item with the same id is destroyed first.
    pub fn add_item(&mut self, parent: NodeId, item: Item, transform: Transform) -> NodeId {
        if let Some(existing) = self.index.get(&item.id).copied() {
            tracing::debug!("Replacing existing item {}", item.id);
            self.destroy(existing);
        }
        let item_id = item.id.clone();
        let node = self.insert(parent, NodeKind::Item(item), transform);
        self.index.insert(item_id, node);
        node
    }

    /// Replace the points of a line node
    pub fn set_line_points(&mut self, id: NodeId, new_points: Vec<Point>) {
        if let Some(Node {
            kind: NodeKind::Line { points },
            ..
        }) = self.nodes.get_mut(&id)
        {
            *points = new_points;
        }
    }

    /// Resize a rectangle node
    pub fn set_rect_size(&mut self, id: NodeId, new_width: f64, new_height: f64) {
        if let Some(Node {
            kind: NodeKind::Rect { width, height },
            ..
        }) = self.nodes.get_mut(&id)
        {
            *width = new_width;
            *height = new_height;
        }
    }

    pub fn item(&self, id: NodeId) -> Option<&Item> {
        self.nodes.get(&id).and_then(Node::item)
    }

    pub fn item_mut(&mut self, id: NodeId) -> Option<&mut Item> {
        match self.nodes.get_mut(&id).map(|n| &mut n.kind) {
            Some(NodeKind::Item(item)) => Some(item),
            _ => None,
        }
    }

    pub fn is_item(&self, id: NodeId) -> bool {
        self.item(id).is_some()
    }

    /// Look up an item node by item id
    pub fn find_item(&self, item_id: &str) -> Option<NodeId> {
        self.index.get(item_id).copied()
    }

    /// Item children of `parent`, in draw order
    pub fn item_children(&self, parent: NodeId) -> Vec<NodeId> {
        self.children(parent)
            .iter()
            .copied()
            .filter(|&id| self.is_item(id))
            .collect()
    }

    /// Every item: free ones first, then selected ones
    pub fn all_items(&self) -> Vec<NodeId> {
        let mut items = self.item_children(self.items_layer);
        items.extend(self.item_children(self.selection_container));
        items
    }

    pub fn item_count(&self) -> usize {
        self.index.len()
    }

    pub fn transform(&self, id: NodeId) -> Option<Transform> {
        self.nodes.get(&id).map(|n| n.transform)
    }

    pub fn set_transform(&mut self, id: NodeId, transform: Transform) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.transform = transform;
        }
    }

    /// Product of local matrices from the root down to `id`
    pub fn absolute_matrix(&self, id: NodeId) -> Matrix3<f64> {
        let mut m = Matrix3::identity();
        let mut current = Some(id);
        while let Some(node) = current.and_then(|c| self.nodes.get(&c)) {
            m = node.transform.to_matrix() * m;
            current = node.parent;
        }
        m
    }

    /// Decomposed absolute pose of `id`
    pub fn absolute_transform(&self, id: NodeId) -> Transform {
        Transform::from_matrix(&self.absolute_matrix(id))
    }

    /// Give `id` the absolute pose `m`, expressed in its current parent
    pub fn set_absolute_matrix(&mut self, id: NodeId, m: &Matrix3<f64>) {
        let parent_abs = self
            .parent(id)
            .map(|p| self.absolute_matrix(p))
            .unwrap_or_else(Matrix3::identity);
        let local = parent_abs
            .try_inverse()
            .map(|inv| inv * m)
            .unwrap_or(*m);
        self.set_transform(id, Transform::from_matrix(&local));
    }

    /// Detach `id` from its parent and append it to `new_parent`.
    ///
    /// The local transform is kept as-is; see [`Scene::reparent_preserving`]
    /// for the variant that keeps the node visually in place.
    pub fn move_to(&mut self, id: NodeId, new_parent: NodeId) {
        if id == self.root || !self.contains(new_parent) || self.is_ancestor(id, new_parent) {
            return;
        }
        if let Some(old) = self.parent(id) {
            if let Some(p) = self.nodes.get_mut(&old) {
                p.children.retain(|&c| c != id);
            }
        }
        if let Some(p) = self.nodes.get_mut(&new_parent) {
            p.children.push(id);
        }
        if let Some(node) = self.nodes.get_mut(&id) {
            node.parent = Some(new_parent);
        }
    }

    /// Move `id` under `new_parent` without a visual jump.
    ///
    /// The absolute transform is decomposed and reapplied relative to the
    /// new parent. With `unit_scale` the scale component is dropped.
    pub fn reparent_preserving(&mut self, id: NodeId, new_parent: NodeId, unit_scale: bool) {
        if !self.contains(id) {
            return;
        }
        let abs = self.absolute_matrix(id);
        self.move_to(id, new_parent);
        self.set_absolute_matrix(id, &abs);
        if unit_scale {
            if let Some(t) = self.transform(id) {
                self.set_transform(id, t.unscaled());
            }
        }
    }

    fn is_ancestor(&self, ancestor: NodeId, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(c) = current {
            if c == ancestor {
                return true;
            }
            current = self.parent(c);
        }
        false
    }

    /// Axis-aligned bounds of `id` and its descendants in the root frame.
    ///
    /// `None` for nodes without geometry (e.g. an empty group).
    pub fn client_rect(&self, id: NodeId) -> Option<BoundingBox> {
        let node = self.nodes.get(&id)?;
        let m = self.absolute_matrix(id);
        let own = BoundingBox::from_points(node.local_points().into_iter().map(|p| apply(&m, p)));

        node.children
            .iter()
            .filter_map(|&c| self.client_rect(c))
            .fold(own, |acc, b| Some(acc.map_or(b, |a| a.union(&b))))
    }

    /// Topmost item whose outline contains `point`.
    ///
    /// Selected items are drawn above free ones and are tested first.
    pub fn item_at(&self, point: Point) -> Option<NodeId> {
        [self.selection_container, self.items_layer]
            .into_iter()
            .flat_map(|parent| self.item_children(parent).into_iter().rev())
            .find(|&id| self.item_contains(id, point))
    }

    fn item_contains(&self, id: NodeId, point: Point) -> bool {
        let Some(item) = self.item(id) else {
            return false;
        };
        let Some(inverse) = self.absolute_matrix(id).try_inverse() else {
            return false;
        };
        let local = apply(&inverse, point);
        local.x >= 0.0 && local.x <= item.width && local.y >= 0.0 && local.y <= item.height
    }

    /// Remove `id` and all its descendants
    pub fn destroy(&mut self, id: NodeId) {
        if id == self.root || id == self.items_layer || id == self.transform_layer {
            return;
        }
        if id == self.selection_container {
            self.destroy_children(id);
            return;
        }
        if let Some(parent) = self.parent(id) {
            if let Some(p) = self.nodes.get_mut(&parent) {
                p.children.retain(|&c| c != id);
            }
        }
        self.remove_subtree(id);
    }

    /// Remove every descendant of `id`, keeping `id` itself
    pub fn destroy_children(&mut self, id: NodeId) {
        let children = match self.nodes.get_mut(&id) {
            Some(node) => std::mem::take(&mut node.children),
            None => return,
        };
        for child in children {
            self.remove_subtree(child);
        }
    }

    fn remove_subtree(&mut self, id: NodeId) {
        let Some(node) = self.nodes.remove(&id) else {
            return;
        };
        if let NodeKind::Item(item) = &node.kind {
            if self.index.get(&item.id) == Some(&id) {
                self.index.remove(&item.id);
            }
        }
        for child in node.children {
            self.remove_subtree(child);
        }
    }

    /// Duplicate an item under a new id, next to the original with the same
    /// local transform
    pub fn clone_item(&mut self, id: NodeId, new_item_id: impl Into<String>) -> Option<NodeId> {
        let item = self.item(id)?.clone_with_id(new_item_id);
        let parent = self.parent(id)?;
        let transform = self.transform(id)?;
        Some(self.add_item(parent, item, transform))
    }
}
