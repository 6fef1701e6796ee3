//! Linear alignment along one axis.
//!
//! Items are sorted by their leading edge, laid out edge to edge with `gap`
//! between them, and the whole run is centered on the selection's mean
//! center. The cross-axis center of every item is the mean cross-axis
//! center.

use super::{mean_center, sort_stable_by_key, LayoutEntry, LayoutResult, LayoutTarget};

#[derive(Debug, Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

/// Lay items out left to right
pub fn align_x(entries: &[LayoutEntry], gap: f64) -> LayoutResult {
    align(entries, gap, Axis::Horizontal)
}

/// Lay items out top to bottom
pub fn align_y(entries: &[LayoutEntry], gap: f64) -> LayoutResult {
    align(entries, gap, Axis::Vertical)
}

fn align(entries: &[LayoutEntry], gap: f64, axis: Axis) -> LayoutResult {
    if entries.is_empty() {
        return LayoutResult::default();
    }

    let extent = |e: &LayoutEntry| match axis {
        Axis::Horizontal => e.bbox.width,
        Axis::Vertical => e.bbox.height,
    };

    let center = mean_center(entries);
    let total: f64 = entries.iter().map(|e| extent(e) + gap).sum::<f64>() - gap;
    let (main_center, cross_center) = match axis {
        Axis::Horizontal => (center.x, center.y),
        Axis::Vertical => (center.y, center.x),
    };
    let start = main_center - total / 2.0;

    let mut sorted = entries.to_vec();
    match axis {
        Axis::Horizontal => sort_stable_by_key(&mut sorted, LayoutEntry::x_key),
        Axis::Vertical => sort_stable_by_key(&mut sorted, LayoutEntry::y_key),
    }

    let mut offset = 0.0;
    let targets = sorted
        .iter()
        .map(|entry| {
            let size = extent(entry);
            let to_center = entry.center_offset();
            let main = start + offset + size / 2.0;
            offset += size + gap;

            let (x, y) = match axis {
                Axis::Horizontal => (main - to_center.x, cross_center - to_center.y),
                Axis::Vertical => (cross_center - to_center.x, main - to_center.y),
            };
            LayoutTarget {
                node: entry.node,
                x,
                y,
                rotation: None,
            }
        })
        .collect();

    LayoutResult { targets }
}
