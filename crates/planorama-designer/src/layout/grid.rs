//! Grid packing.
//!
//! Items are sorted row-major by their top edge then left edge and placed
//! into `ceil(n / columns)` rows. Each column is as wide as its widest
//! occupant and each row as tall as its tallest; items are centered in
//! their cells.
//!
//! Horizontally the grid is centered on the mean center of all items.
//! Vertically it is centered on the mean center of the first item of every
//! row, so re-running the layout on its own output keeps the grid in place.

use super::{mean_center, LayoutEntry, LayoutResult, LayoutTarget};
use std::cmp::Ordering;

/// Pack items into a grid with `columns` columns
pub fn align_grid(entries: &[LayoutEntry], columns: usize, gap: f64) -> LayoutResult {
    if entries.is_empty() {
        return LayoutResult::default();
    }
    let columns = columns.max(1);

    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        a.y_key()
            .partial_cmp(&b.y_key())
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.x_key().partial_cmp(&b.x_key()).unwrap_or(Ordering::Equal))
    });

    let rows = sorted.len().div_ceil(columns);
    let used_columns = columns.min(sorted.len());

    let mut col_widths = vec![0.0_f64; used_columns];
    let mut row_heights = vec![0.0_f64; rows];
    for (i, entry) in sorted.iter().enumerate() {
        let (row, col) = (i / columns, i % columns);
        col_widths[col] = col_widths[col].max(entry.bbox.width);
        row_heights[row] = row_heights[row].max(entry.bbox.height);
    }

    let packed_width = col_widths.iter().sum::<f64>() + gap * (used_columns - 1) as f64;
    let packed_height = row_heights.iter().sum::<f64>() + gap * (rows - 1) as f64;

    let start_x = mean_center(entries).x - packed_width / 2.0;
    let row_leaders: Vec<LayoutEntry> = sorted.iter().step_by(columns).copied().collect();
    let start_y = mean_center(&row_leaders).y - packed_height / 2.0;

    let col_starts = running_starts(&col_widths, gap, start_x);
    let row_starts = running_starts(&row_heights, gap, start_y);

    let targets = sorted
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let (row, col) = (i / columns, i % columns);
            let cell_center_x = col_starts[col] + col_widths[col] / 2.0;
            let cell_center_y = row_starts[row] + row_heights[row] / 2.0;
            let to_center = entry.center_offset();
            LayoutTarget {
                node: entry.node,
                x: cell_center_x - to_center.x,
                y: cell_center_y - to_center.y,
                rotation: None,
            }
        })
        .collect();

    LayoutResult { targets }
}

/// Leading coordinate of each track given track sizes
fn running_starts(sizes: &[f64], gap: f64, start: f64) -> Vec<f64> {
    let mut next = start;
    sizes
        .iter()
        .map(|size| {
            let current = next;
            next += size + gap;
            current
        })
        .collect()
}
