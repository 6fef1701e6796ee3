//! Circular spread.
//!
//! Items keep their selection order and are placed at equal angular steps
//! on a circle around the selection's mean center, with their box centers
//! on the circle.

use planorama_core::{Facing, Point};

use super::{mean_center, LayoutEntry, LayoutResult, LayoutTarget};
use crate::geometry::rotate_point;

/// Rotation in degrees of the `index`-th of `count` items for `facing`
pub fn facing_rotation(index: usize, count: usize, facing: Facing) -> Option<f64> {
    let outward = (index as f64 * (360.0 / count as f64) + 90.0) % 360.0;
    match facing {
        Facing::Outward => Some(outward),
        Facing::Inward => Some((outward + 180.0) % 360.0),
        Facing::None => None,
    }
}

/// Distribute items on a circle of `radius`
pub fn spread_circle(entries: &[LayoutEntry], radius: f64, facing: Facing) -> LayoutResult {
    if entries.is_empty() {
        return LayoutResult::default();
    }

    let count = entries.len();
    let center = mean_center(entries);
    let angle_step = std::f64::consts::TAU / count as f64;

    let targets = entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let rotation = facing_rotation(i, count, facing);

            // Box center offset after the new rotation is applied
            let to_center = match rotation {
                Some(r) => rotate_point(
                    entry.center_offset(),
                    Point::zero(),
                    (r - entry.transform.rotation).to_radians(),
                ),
                None => entry.center_offset(),
            };

            let angle = i as f64 * angle_step;
            let on_circle = Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            );

            LayoutTarget {
                node: entry.node,
                x: on_circle.x - to_center.x,
                y: on_circle.y - to_center.y,
                rotation,
            }
        })
        .collect();

    LayoutResult { targets }
}
