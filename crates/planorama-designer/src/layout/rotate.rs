//! Uniform rotation: every item gets the same angle, positions stay.

use super::{LayoutEntry, LayoutResult, LayoutTarget};

pub fn rotate_items(entries: &[LayoutEntry], angle: f64) -> LayoutResult {
    LayoutResult {
        targets: entries
            .iter()
            .map(|entry| LayoutTarget {
                node: entry.node,
                x: entry.transform.x,
                y: entry.transform.y,
                rotation: Some(angle),
            })
            .collect(),
    }
}
