//! Placement (creator) tool
//!
//! Drag-to-place state machine: `idle -> painting -> idle`.
//!
//! While painting, a guide group sits at the pointer-down origin in the
//! transform layer, rotated to the snapped pointer angle. It holds the guide
//! line, a strip outlining the placement area, and one template-sized slot
//! rectangle per item that fits along the line. Committing turns every slot
//! into a real item at the slot's absolute pose.

use planorama_core::{CreatorSnapshot, DesignerResult, Point};
use planorama_settings::CreatorSettings;

use crate::geometry::{distance, nearest_angle, rotate_point, rotated_rect_points, rotation_angle};
use crate::model::{new_item_id, Item, ItemTemplate};
use crate::scene::{NodeId, Scene};
use crate::transform::Transform;

/// In-flight placement state
#[derive(Debug, Clone)]
pub struct PlacementSession {
    template: ItemTemplate,
    origin: Point,
    pointer: Point,
    slot_width: f64,
    rotation: f64,
    length: f64,
    count: usize,
    guide: NodeId,
    line: NodeId,
    strip: NodeId,
    slots_group: NodeId,
    slots: Vec<NodeId>,
}

impl PlacementSession {
    pub fn template(&self) -> &ItemTemplate {
        &self.template
    }

    /// Template width plus the configured gap
    pub fn slot_width(&self) -> f64 {
        self.slot_width
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Preview slot nodes
    pub fn slots(&self) -> &[NodeId] {
        &self.slots
    }

    fn strip_height(&self, gap: f64) -> f64 {
        self.template.height + gap
    }
}

/// Drag-to-place tool
#[derive(Debug, Clone)]
pub struct PlacementTool {
    settings: CreatorSettings,
    session: Option<PlacementSession>,
}

impl PlacementTool {
    pub fn new(settings: CreatorSettings) -> Self {
        Self {
            settings,
            session: None,
        }
    }

    pub fn is_painting(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&PlacementSession> {
        self.session.as_ref()
    }

    /// Begin a session at `origin`, discarding any session in flight
    pub fn start(
        &mut self,
        scene: &mut Scene,
        template: &ItemTemplate,
        origin: Point,
    ) -> DesignerResult<CreatorSnapshot> {
        template.validate()?;
        self.cancel(scene);

        let strip_height = template.height + self.settings.gap;
        let guide = scene.add_group(scene.transform_layer(), Transform::at(origin.x, origin.y, 0.0));
        let line = scene.add_line(guide, vec![Point::zero(), Point::zero()]);
        let strip = scene.add_rect(
            guide,
            Transform::at(0.0, -strip_height / 2.0, 0.0),
            0.0,
            strip_height,
        );
        let slots_group = scene.add_group(
            guide,
            Transform::at(self.settings.slot_lead_in, -template.height / 2.0, 0.0),
        );

        let session = PlacementSession {
            template: template.clone(),
            origin,
            pointer: origin,
            slot_width: template.width + self.settings.gap,
            rotation: 0.0,
            length: 0.0,
            count: 0,
            guide,
            line,
            strip,
            slots_group,
            slots: Vec::new(),
        };
        let snapshot = self.snapshot_of(&session);
        tracing::debug!("Placement started at {} with '{}'", origin, template.name);
        self.session = Some(session);
        Ok(snapshot)
    }

    /// Follow the pointer; `None` when idle
    pub fn update(&mut self, scene: &mut Scene, pointer: Point) -> Option<CreatorSnapshot> {
        let settings = self.settings.clone();
        let session = self.session.as_mut()?;

        session.pointer = pointer;
        session.rotation = nearest_angle(
            rotation_angle(session.origin, pointer),
            settings.angle_snap_step,
        );
        session.length = distance(session.origin, pointer);
        let count = (session.length / session.slot_width).floor() as usize;

        if count != session.count {
            for slot in session.slots.drain(..) {
                scene.destroy(slot);
            }
            session.slots = (0..count)
                .map(|i| {
                    scene.add_rect(
                        session.slots_group,
                        Transform::at(i as f64 * session.slot_width, 0.0, settings.item_rotation),
                        session.template.width,
                        session.template.height,
                    )
                })
                .collect();
            session.count = count;
        }

        scene.set_line_points(
            session.line,
            vec![Point::zero(), Point::new(session.length, 0.0)],
        );
        scene.set_rect_size(
            session.strip,
            session.length,
            session.strip_height(settings.gap),
        );
        scene.set_transform(
            session.guide,
            Transform::at(session.origin.x, session.origin.y, session.rotation),
        );

        let session = self.session.as_ref()?;
        Some(self.snapshot_of(session))
    }

    /// Turn every slot into an item in the free layer and end the session.
    ///
    /// Returns `Ok(None)` when idle.
    pub fn commit(
        &mut self,
        scene: &mut Scene,
    ) -> DesignerResult<Option<(CreatorSnapshot, Vec<NodeId>)>> {
        let Some(session) = self.session.take() else {
            return Ok(None);
        };
        let snapshot = self.snapshot_of(&session);

        let poses: Vec<Transform> = session
            .slots
            .iter()
            .map(|&slot| {
                let abs = scene.absolute_transform(slot);
                Transform::at(abs.x, abs.y, abs.rotation)
            })
            .collect();
        scene.destroy(session.guide);

        let layer = scene.items_layer();
        let mut created = Vec::with_capacity(poses.len());
        for pose in poses {
            let item = Item::from_template(&session.template, new_item_id())?;
            created.push(scene.add_item(layer, item, pose));
        }

        tracing::debug!("Placement committed {} item(s)", created.len());
        Ok(Some((snapshot, created)))
    }

    /// Drop the session and its preview shapes
    pub fn cancel(&mut self, scene: &mut Scene) {
        if let Some(session) = self.session.take() {
            scene.destroy(session.guide);
        }
    }

    fn snapshot_of(&self, session: &PlacementSession) -> CreatorSnapshot {
        let strip_height = session.strip_height(self.settings.gap);
        let angle = session.rotation.to_radians();
        let top_left = rotate_point(
            Point::new(session.origin.x, session.origin.y - strip_height / 2.0),
            session.origin,
            angle,
        );

        CreatorSnapshot {
            origin: session.origin,
            pointer: session.pointer,
            rotation: session.rotation,
            length: session.length,
            count: session.count,
            points: rotated_rect_points(
                top_left.x,
                top_left.y,
                session.length,
                strip_height,
                angle,
            ),
        }
    }
}
