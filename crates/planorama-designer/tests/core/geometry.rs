use planorama_core::Point;
use planorama_designer::geometry::{
    centroid, distance, lerp, nearest_angle, rotate_point, rotated_rect_points, rotation_angle,
};
use planorama_designer::transform::{apply, rotation_about, translation};
use planorama_designer::Transform;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_distance_and_angle() {
    let a = Point::new(1.0, 1.0);
    let b = Point::new(4.0, 5.0);
    assert!(close(distance(a, b), 5.0));
    assert!(close(rotation_angle(Point::zero(), Point::new(0.0, 10.0)), 90.0));
    assert!(close(rotation_angle(Point::zero(), Point::new(-10.0, 0.0)), 180.0));
}

#[test]
fn test_nearest_angle_wraps() {
    assert_eq!(nearest_angle(-90.0, 5.0), 270.0);
    assert_eq!(nearest_angle(358.0, 5.0), 0.0);
    assert_eq!(nearest_angle(42.4, 5.0), 40.0);
    assert_eq!(nearest_angle(42.6, 5.0), 45.0);
}

#[test]
fn test_lerp_endpoints() {
    assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
    assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
    assert_eq!(lerp(10.0, 20.0, 0.25), 12.5);
}

#[test]
fn test_rotate_point_quarter_turn() {
    // Clockwise on screen: +x turns into +y
    let p = rotate_point(Point::new(10.0, 0.0), Point::zero(), 90f64.to_radians());
    assert!(close(p.x, 0.0));
    assert!(close(p.y, 10.0));
}

#[test]
fn test_rotated_rect_points_unrotated() {
    let pts = rotated_rect_points(10.0, 20.0, 100.0, 50.0, 0.0);
    assert_eq!(pts.top_left, Point::new(10.0, 20.0));
    assert!(close(pts.bottom_right.x, 110.0));
    assert!(close(pts.bottom_right.y, 70.0));
    assert!(close(pts.center.x, 60.0));
    assert!(close(pts.center_top.y, 20.0));
}

#[test]
fn test_centroid() {
    assert!(centroid(Vec::<Point>::new()).is_none());
    let c = centroid(vec![Point::new(0.0, 0.0), Point::new(10.0, 20.0)]).unwrap();
    assert_eq!(c, Point::new(5.0, 10.0));
}

#[test]
fn test_matrix_decomposition_round_trip() {
    let t = Transform {
        x: 12.0,
        y: -7.0,
        rotation: 135.0,
        scale_x: 2.0,
        scale_y: 0.5,
    };
    let back = Transform::from_matrix(&t.to_matrix());
    assert!(close(back.x, 12.0));
    assert!(close(back.y, -7.0));
    assert!(close(back.rotation, 135.0));
    assert!(close(back.scale_x, 2.0));
    assert!(close(back.scale_y, 0.5));
}

#[test]
fn test_decomposed_rotation_range() {
    let back = Transform::from_matrix(&Transform::at(0.0, 0.0, 270.0).to_matrix());
    assert!(close(back.rotation, -90.0));
}

#[test]
fn test_rotation_about_pivot() {
    let m = rotation_about(Point::new(10.0, 10.0), 180.0);
    let p = apply(&m, Point::new(20.0, 10.0));
    assert!(close(p.x, 0.0));
    assert!(close(p.y, 10.0));

    let moved = apply(&translation(5.0, -5.0), Point::new(1.0, 1.0));
    assert_eq!(moved, Point::new(6.0, -4.0));
}
