//! Export and import of [`PlanoramaItem`] records
//!
//! Export walks the free layer and then the selection container and reports
//! absolute poses, so a record never depends on the container's transform.
//!
//! Import policy:
//! - a record whose `id` exists on the scene updates that item's properties
//! - an unknown `id` is recreated from its `type` template at the recorded
//!   pose, with the recorded properties applied on top
//! - an unknown `id` with an unknown `type` is skipped

use planorama_core::PlanoramaItem;

use crate::model::{Item, TemplateLibrary};
use crate::scene::{NodeId, Scene};
use crate::transform::Transform;

/// Record for one item node
pub fn export_item(scene: &Scene, node: NodeId) -> Option<PlanoramaItem> {
    let item = scene.item(node)?;
    let transform = scene.absolute_transform(node);
    Some(PlanoramaItem {
        id: item.id.clone(),
        item_type: item.item_type.clone(),
        transform: transform.record(),
        scale: transform.scale(),
        bounding_box: scene.client_rect(node)?,
        item_props: item.props(),
    })
}

/// Records for `nodes`, skipping anything that is not an item
pub fn export_nodes(scene: &Scene, nodes: &[NodeId]) -> Vec<PlanoramaItem> {
    nodes
        .iter()
        .filter_map(|&node| export_item(scene, node))
        .collect()
}

/// Records for every item on the scene
pub fn export_all(scene: &Scene) -> Vec<PlanoramaItem> {
    export_nodes(scene, &scene.all_items())
}

/// Outcome of an import, by item id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub updated: Vec<String>,
    pub created: Vec<String>,
    pub skipped: Vec<String>,
}

impl ImportReport {
    pub fn total(&self) -> usize {
        self.updated.len() + self.created.len() + self.skipped.len()
    }
}

/// Apply `records` to the scene
pub fn import_all(
    scene: &mut Scene,
    templates: &TemplateLibrary,
    records: &[PlanoramaItem],
) -> ImportReport {
    let mut report = ImportReport::default();

    for record in records {
        if let Some(node) = scene.find_item(&record.id) {
            if let Some(item) = scene.item_mut(node) {
                for part in item.apply_props(&record.item_props) {
                    tracing::debug!("Import of {} skipped missing {}", record.id, part);
                }
            }
            report.updated.push(record.id.clone());
            continue;
        }

        let Some(template) = templates.get(&record.item_type) else {
            tracing::debug!(
                "Import of {} skipped: unknown type '{}'",
                record.id,
                record.item_type
            );
            report.skipped.push(record.id.clone());
            continue;
        };

        let mut item = match Item::from_template(template, record.id.clone()) {
            Ok(item) => item,
            Err(e) => {
                tracing::warn!("Import of {} failed: {}", record.id, e);
                report.skipped.push(record.id.clone());
                continue;
            }
        };
        for part in item.apply_props(&record.item_props) {
            tracing::debug!("Import of {} skipped missing {}", record.id, part);
        }

        let layer = scene.items_layer();
        scene.add_item(
            layer,
            item,
            Transform::from_record(&record.transform, record.scale),
        );
        report.created.push(record.id.clone());
    }

    report
}

/// Serialize records as pretty JSON
pub fn to_json(records: &[PlanoramaItem]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

/// Parse records from JSON
pub fn from_json(json: &str) -> serde_json::Result<Vec<PlanoramaItem>> {
    serde_json::from_str(json)
}
