//! Editor facade
//!
//! [`Editor`] owns one scene and every tool that acts on it, routes pointer
//! input by [`InteractionMode`], dispatches [`Command`]s, and publishes
//! notifications on its own [`EventBus`].
//!
//! # Frames
//!
//! Animated layouts progress only through [`Editor::advance_frame`]. While a
//! transition is in flight, further layout commands are ignored: their
//! targets would be computed from half-moved items.

use planorama_core::{
    CreatorEvent, DesignerError, DesignerResult, EventBus, HandleSnapshot, InteractionMode, ItemEvent,
    PlanoramaEvent, PlanoramaItem, Point, SelectionEvent, TransformEvent,
};
use planorama_settings::Config;
use std::time::Duration;

use crate::commands::{Command, CommandOutcome};
use crate::creator::PlacementTool;
use crate::layout::{self, LayoutRequest};
use crate::model::{Item, ItemTemplate, TemplateLibrary};
use crate::scene::{NodeId, Scene};
use crate::selection_manager::{HandlePart, SelectionManager};
use crate::serialization::{self, ImportReport};
use crate::transform::Transform;
use crate::transition::{TransitionController, TransitionOutcome, TransitionSettings};

/// Interactive layout editor
#[derive(Debug)]
pub struct Editor {
    config: Config,
    scene: Scene,
    templates: TemplateLibrary,
    selection: SelectionManager,
    creator: PlacementTool,
    transition: TransitionController,
    bus: EventBus,
    mode: InteractionMode,
    hovered: Option<NodeId>,
    suppress_click: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl Editor {
    /// Build an editor around `config`.
    ///
    /// An invalid config is still accepted so a host can keep running, but
    /// the problem is logged; out-of-range snap steps disable snapping.
    pub fn new(config: Config) -> Self {
        if let Err(e) = config.validate() {
            tracing::warn!("Editor configured with invalid settings: {}", e);
        }
        Self {
            selection: SelectionManager::new(config.selection.clone()),
            creator: PlacementTool::new(config.creator.clone()),
            config,
            scene: Scene::new(),
            templates: TemplateLibrary::new(),
            transition: TransitionController::new(),
            bus: EventBus::new(),
            mode: InteractionMode::default(),
            hovered: None,
            suppress_click: false,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Notification bus; subscribe here to receive editor events
    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    /// Switch tools, discarding any in-flight placement, marquee or gesture
    pub fn set_mode(&mut self, mode: InteractionMode) {
        if mode == self.mode {
            return;
        }
        self.creator.cancel(&mut self.scene);
        self.selection.cancel_marquee();
        self.selection.end_gesture();
        self.hovered = None;
        tracing::debug!("Interaction mode {} -> {}", self.mode, mode);
        self.mode = mode;
    }

    // ---- templates -----------------------------------------------------

    pub fn register_template(&mut self, template: ItemTemplate) -> DesignerResult<()> {
        self.templates.register(template)
    }

    /// Select the template used by the placement tool; `None` clears it
    pub fn set_active_template(&mut self, name: Option<&str>) -> bool {
        let found = self.templates.set_active(name);
        if !found {
            self.report("set-active-template", "unknown template");
        }
        found
    }

    pub fn templates(&self) -> &TemplateLibrary {
        &self.templates
    }

    /// Place one item of a registered template directly in the free layer
    pub fn add_item(
        &mut self,
        template: &str,
        position: Point,
        rotation: f64,
    ) -> DesignerResult<String> {
        let template = self
            .templates
            .get(template)
            .ok_or_else(|| DesignerError::UnknownTemplate {
                template: template.to_string(),
            })?;
        let item = Item::from_template(template, crate::model::new_item_id())?;
        let id = item.id.clone();
        let layer = self.scene.items_layer();
        self.scene
            .add_item(layer, item, Transform::at(position.x, position.y, rotation));
        Ok(id)
    }

    // ---- queries -------------------------------------------------------

    /// Ids of the selected items in container order
    pub fn selected_ids(&self) -> Vec<String> {
        self.selection
            .selected(&self.scene)
            .into_iter()
            .filter_map(|node| self.scene.item(node).map(|item| item.id.clone()))
            .collect()
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn creator(&self) -> &PlacementTool {
        &self.creator
    }

    /// Transform handle around the current selection
    pub fn handle(&self) -> Option<HandleSnapshot> {
        self.selection.handle(&self.scene)
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_running()
    }

    /// Records for every item on the scene
    pub fn export_all(&self) -> Vec<PlanoramaItem> {
        serialization::export_all(&self.scene)
    }

    /// Record for one item id
    pub fn export_item(&self, id: &str) -> Option<PlanoramaItem> {
        let node = self.scene.find_item(id)?;
        serialization::export_item(&self.scene, node)
    }

    // ---- pointer input -------------------------------------------------

    pub fn pointer_down(&mut self, point: Point) {
        self.suppress_click = false;
        match self.mode {
            InteractionMode::Create => self.start_placement(point),
            InteractionMode::Select => self.select_pointer_down(point),
            InteractionMode::Viewport => {}
        }
    }

    pub fn pointer_move(&mut self, point: Point) {
        match self.mode {
            InteractionMode::Create => {
                if let Some(snapshot) = self.creator.update(&mut self.scene, point) {
                    self.emit(PlanoramaEvent::Creator(CreatorEvent::Moved(snapshot)));
                }
            }
            InteractionMode::Select => {
                if self.selection.is_gesturing() {
                    self.selection.update_gesture(&mut self.scene, point);
                    if let Some(handle) = self.handle() {
                        self.emit(PlanoramaEvent::Transform(TransformEvent::Changed(handle)));
                    }
                } else {
                    self.selection.update_marquee(point);
                }
            }
            InteractionMode::Viewport => self.track_hover(point),
        }
    }

    pub fn pointer_up(&mut self, point: Point) {
        match self.mode {
            InteractionMode::Create => self.commit_placement(point),
            InteractionMode::Select => {
                if self.selection.is_gesturing() {
                    self.suppress_click = self.selection.end_gesture();
                    if let Some(handle) = self.handle() {
                        self.emit(PlanoramaEvent::Transform(TransformEvent::Ended(handle)));
                    }
                } else if self.selection.marquee().is_some() {
                    self.selection.update_marquee(point);
                    match self.selection.finish_marquee(&mut self.scene) {
                        Some(_) => self.emit_selection(),
                        None => self.report("marquee", "no selection change"),
                    }
                }
            }
            InteractionMode::Viewport => {}
        }
    }

    /// Click on `point`; `multi` is the add-to-selection modifier
    pub fn click(&mut self, point: Point, multi: bool) {
        if std::mem::take(&mut self.suppress_click) {
            return;
        }
        let Some(node) = self.scene.item_at(point) else {
            return;
        };
        match self.mode {
            InteractionMode::Select => {
                if self.selection.select(&mut self.scene, node, multi) {
                    self.emit_selection();
                }
            }
            InteractionMode::Viewport => {
                if let Some(record) = serialization::export_item(&self.scene, node) {
                    self.emit(PlanoramaEvent::Item(ItemEvent::Click(record)));
                }
            }
            InteractionMode::Create => {}
        }
    }

    fn select_pointer_down(&mut self, point: Point) {
        let target = self.scene.item_at(point);

        if !self.selection.is_empty(&self.scene) {
            if target.is_some_and(|node| !self.selection.contains(&self.scene, node)) {
                // Unselected item: the click decides what happens
                return;
            }
            if let Some(part) = self.selection.hit_handle(&self.scene, point) {
                self.begin_gesture(part, point);
                return;
            }
            if target.is_none() {
                self.selection.release(&mut self.scene);
                self.emit_selection();
            }
        }

        if target.is_none() {
            self.selection.begin_marquee(point);
        }
    }

    fn begin_gesture(&mut self, part: HandlePart, point: Point) {
        if self.selection.begin_gesture(&self.scene, part, point) {
            if let Some(handle) = self.handle() {
                self.emit(PlanoramaEvent::Transform(TransformEvent::Started(handle)));
            }
        }
    }

    fn start_placement(&mut self, point: Point) {
        let Some(template) = self.templates.active().cloned() else {
            self.report("creator", "no active template");
            return;
        };
        match self.creator.start(&mut self.scene, &template, point) {
            Ok(snapshot) => self.emit(PlanoramaEvent::Creator(CreatorEvent::Started(snapshot))),
            Err(e) => tracing::warn!("Placement not started: {}", e),
        }
    }

    fn commit_placement(&mut self, point: Point) {
        if !self.creator.is_painting() {
            return;
        }
        if let Some(snapshot) = self.creator.update(&mut self.scene, point) {
            self.emit(PlanoramaEvent::Creator(CreatorEvent::Moved(snapshot)));
        }
        match self.creator.commit(&mut self.scene) {
            Ok(Some((snapshot, nodes))) => {
                let created = nodes
                    .iter()
                    .filter_map(|&node| self.scene.item(node).map(|item| item.id.clone()))
                    .collect();
                self.emit(PlanoramaEvent::Creator(CreatorEvent::Ended { snapshot, created }));
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("Placement commit failed: {}", e),
        }
    }

    fn track_hover(&mut self, point: Point) {
        let target = self.scene.item_at(point);
        if target == self.hovered {
            return;
        }
        if let Some(record) = self
            .hovered
            .and_then(|node| serialization::export_item(&self.scene, node))
        {
            self.emit(PlanoramaEvent::Item(ItemEvent::Unhover(record)));
        }
        if let Some(record) = target.and_then(|node| serialization::export_item(&self.scene, node)) {
            self.emit(PlanoramaEvent::Item(ItemEvent::Hover(record)));
        }
        self.hovered = target;
    }

    // ---- commands ------------------------------------------------------

    pub fn execute(&mut self, command: Command) -> CommandOutcome {
        let name = command.name();
        let defaults = self.config.layout.clone();
        let outcome = match command {
            Command::AlignX { gap } => self.run_layout(LayoutRequest::AlignX {
                gap: gap.unwrap_or(defaults.gap),
            }),
            Command::AlignY { gap } => self.run_layout(LayoutRequest::AlignY {
                gap: gap.unwrap_or(defaults.gap),
            }),
            Command::AlignGrid { columns, gap } => self.run_layout(LayoutRequest::Grid {
                columns: columns.unwrap_or(defaults.columns),
                gap: gap.unwrap_or(defaults.gap),
            }),
            Command::SpreadCircle { radius, facing } => self.run_layout(LayoutRequest::Circle {
                radius: radius.unwrap_or(defaults.spread.radius),
                facing: facing.unwrap_or(defaults.spread.facing),
            }),
            Command::Rotate { angle } => self.run_layout(LayoutRequest::Rotate {
                angle: angle.unwrap_or(defaults.rotation_angle),
            }),
            Command::Discard => self.discard(),
            Command::Delete => self.delete(),
            Command::Clone => self.clone_selection(),
            Command::SelectByIds { ids } => self.select_by_ids(&ids),
            Command::UpdateItem { id, props } => self.update_item(&id, &props),
            Command::ImportAll { items } => {
                self.import_all(&items);
                CommandOutcome::Applied
            }
        };
        tracing::debug!("{} -> {:?}", name, outcome);
        outcome
    }

    fn run_layout(&mut self, request: LayoutRequest) -> CommandOutcome {
        if self.transition.is_running() {
            tracing::warn!(
                "{} ignored: a layout transition is still running",
                request.name()
            );
            return CommandOutcome::Ignored;
        }
        if self.selection.is_empty(&self.scene) {
            self.report(request.name(), "empty selection");
            return CommandOutcome::Ignored;
        }

        let nodes = self.selection.take_for_layout(&mut self.scene);
        let entries = layout::collect_entries(&self.scene, &nodes);
        let result = layout::compute(request, &entries);

        let settings = TransitionSettings {
            duration: self.config.animation.duration(),
            easing: self.config.animation.easing,
            performance_item_limit: self.config.selection.performance_item_limit,
        };
        match self.transition.start(&mut self.scene, &result, &settings) {
            TransitionOutcome::Completed(order) => {
                self.complete_layout(&order);
                CommandOutcome::Applied
            }
            TransitionOutcome::Animating => CommandOutcome::Animating,
            TransitionOutcome::Busy => {
                self.selection.populate(&mut self.scene, &nodes);
                CommandOutcome::Ignored
            }
        }
    }

    fn complete_layout(&mut self, order: &[NodeId]) {
        self.selection.populate(&mut self.scene, order);
        self.emit_selection();
    }

    /// Advance running transitions by one frame.
    ///
    /// Returns true on the frame the transition completes.
    pub fn advance_frame(&mut self, dt: Duration) -> bool {
        match self.transition.advance(&mut self.scene, dt) {
            Some(order) => {
                self.complete_layout(&order);
                true
            }
            None => false,
        }
    }

    /// Jump any running transition to its end
    pub fn finish_transitions(&mut self) -> bool {
        match self.transition.finish_now(&mut self.scene) {
            Some(order) => {
                self.complete_layout(&order);
                true
            }
            None => false,
        }
    }

    fn select_mode_only(&self, operation: &str) -> bool {
        if self.mode == InteractionMode::Select {
            true
        } else {
            self.report(operation, "requires select mode");
            false
        }
    }

    fn discard(&mut self) -> CommandOutcome {
        if !self.select_mode_only("discard") {
            return CommandOutcome::Ignored;
        }
        if self.selection.is_empty(&self.scene) {
            self.report("discard", "empty selection");
            return CommandOutcome::Ignored;
        }
        self.selection.release(&mut self.scene);
        self.emit_selection();
        CommandOutcome::Applied
    }

    fn delete(&mut self) -> CommandOutcome {
        if !self.select_mode_only("delete") {
            return CommandOutcome::Ignored;
        }
        if !self.selection.delete(&mut self.scene) {
            self.report("delete", "empty selection");
            return CommandOutcome::Ignored;
        }
        self.emit_selection();
        CommandOutcome::Applied
    }

    fn clone_selection(&mut self) -> CommandOutcome {
        if !self.select_mode_only("clone") {
            return CommandOutcome::Ignored;
        }
        if self.selection.clone_selection(&mut self.scene).is_empty() {
            self.report("clone", "empty selection");
            return CommandOutcome::Ignored;
        }
        self.emit_selection();
        CommandOutcome::Applied
    }

    fn select_by_ids(&mut self, ids: &[String]) -> CommandOutcome {
        let found = self.selection.select_by_ids(&mut self.scene, ids);
        if found.len() < ids.len() {
            self.report("select-by-ids", "some ids are unknown");
        }
        if found.is_empty() {
            return CommandOutcome::Ignored;
        }
        self.emit_selection();
        CommandOutcome::Applied
    }

    fn update_item(&mut self, id: &str, props: &planorama_core::ItemProps) -> CommandOutcome {
        let Some(item) = self
            .scene
            .find_item(id)
            .and_then(|node| self.scene.item_mut(node))
        else {
            self.report("update-item", "unknown id");
            return CommandOutcome::Ignored;
        };
        let skipped = item.apply_props(props);
        for part in skipped {
            self.report("update-item", &format!("item has no {}", part));
        }
        CommandOutcome::Applied
    }

    /// Import records; see [`serialization::import_all`]
    pub fn import_all(&mut self, records: &[PlanoramaItem]) -> ImportReport {
        let report = serialization::import_all(&mut self.scene, &self.templates, records);
        if !report.skipped.is_empty() {
            self.report("import-all", "some records were skipped");
        }
        report
    }

    // ---- notifications -------------------------------------------------

    fn emit(&self, event: PlanoramaEvent) {
        // Publishing without listeners is routine
        self.bus.publish(event);
    }

    fn emit_selection(&self) {
        let items = serialization::export_nodes(&self.scene, &self.selection.selected(&self.scene));
        self.emit(PlanoramaEvent::Selection(SelectionEvent::ItemsSelected { items }));
    }

    /// Debug-only report of an absorbed no-op
    fn report(&self, operation: &str, reason: &str) {
        if self.config.debug {
            tracing::debug!("{} ignored: {}", operation, reason);
        }
    }
}
