//! Geometry utilities
//!
//! Pure functions over scene-space points and angles. Angles returned to
//! callers are in degrees unless the name says otherwise.

use planorama_core::{BoundingBox, Point, RectPoints};

/// Euclidean distance between two points.
pub fn distance(p1: Point, p2: Point) -> f64 {
    (p2.x - p1.x).hypot(p2.y - p1.y)
}

/// Angle of the vector `p1 -> p2` in degrees, in `(-180, 180]`.
pub fn rotation_angle(p1: Point, p2: Point) -> f64 {
    (p2.y - p1.y).atan2(p2.x - p1.x).to_degrees()
}

/// Round `value` to the nearest multiple of `step`.
///
/// A step that is not a positive finite number disables snapping.
pub fn snap(value: f64, step: f64) -> f64 {
    if step.is_finite() && step > 0.0 {
        (value / step).round() * step
    } else {
        value
    }
}

/// Snap an angle to the nearest multiple of `step`.
///
/// Negative input is first wrapped into `[0, 360)`; the result is also in
/// `[0, 360)`, so an angle that rounds up to 360 becomes 0.
pub fn nearest_angle(angle_deg: f64, step: f64) -> f64 {
    let normalized = if angle_deg < 0.0 {
        angle_deg + 360.0
    } else {
        angle_deg
    };
    snap(normalized, step).rem_euclid(360.0)
}

pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Linear interpolation between `min` and `max`.
pub fn lerp(min: f64, max: f64, fraction: f64) -> f64 {
    min + (max - min) * fraction
}

/// Rotate `point` around `pivot` by `angle_rad`.
pub fn rotate_point(point: Point, pivot: Point, angle_rad: f64) -> Point {
    let (sin, cos) = angle_rad.sin_cos();
    let dx = point.x - pivot.x;
    let dy = point.y - pivot.y;
    Point::new(pivot.x + dx * cos - dy * sin, pivot.y + dx * sin + dy * cos)
}

/// Corners, edge midpoints and center of a `w x h` rectangle whose top-left
/// corner is at `(x, y)`, rotated by `angle_rad` around that corner.
pub fn rotated_rect_points(x: f64, y: f64, w: f64, h: f64, angle_rad: f64) -> RectPoints {
    let origin = Point::new(x, y);
    let at = |dx: f64, dy: f64| rotate_point(Point::new(x + dx, y + dy), origin, angle_rad);

    RectPoints {
        top_left: origin,
        top_right: at(w, 0.0),
        bottom_left: at(0.0, h),
        bottom_right: at(w, h),
        center_left: at(0.0, h / 2.0),
        center_right: at(w, h / 2.0),
        center_top: at(w / 2.0, 0.0),
        center_bottom: at(w / 2.0, h),
        center: at(w / 2.0, h / 2.0),
    }
}

/// Center of a bounding box; the origin when there is none.
pub fn bounding_box_center(bbox: Option<&BoundingBox>) -> Point {
    bbox.map(BoundingBox::center).unwrap_or_default()
}

/// Average of a set of points, or `None` when empty.
pub fn centroid<I>(points: I) -> Option<Point>
where
    I: IntoIterator<Item = Point>,
{
    let (sum, count) = points
        .into_iter()
        .fold((Point::zero(), 0usize), |(sum, n), p| (sum + p, n + 1));
    (count > 0).then(|| Point::new(sum.x / count as f64, sum.y / count as f64))
}
