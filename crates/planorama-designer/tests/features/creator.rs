use planorama_core::Point;
use planorama_designer::{ItemTemplate, PlacementTool, Scene};
use planorama_settings::CreatorSettings;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn tool_with(gap: f64) -> PlacementTool {
    PlacementTool::new(CreatorSettings {
        gap,
        ..CreatorSettings::default()
    })
}

#[test]
fn test_slot_width_is_template_width_plus_gap() {
    let mut scene = Scene::new();
    let mut tool = tool_with(10.0);
    let template = ItemTemplate::new("chair", 90.0, 40.0);

    tool.start(&mut scene, &template, Point::zero()).unwrap();
    assert_eq!(tool.session().unwrap().slot_width(), 100.0);

    // 250 units: two slots
    let snap = tool.update(&mut scene, Point::new(150.0, 200.0)).unwrap();
    assert!(close(snap.length, 250.0));
    assert_eq!(snap.count, 2);

    // 90 units: none, and commit creates nothing
    let snap = tool.update(&mut scene, Point::new(90.0, 0.0)).unwrap();
    assert_eq!(snap.count, 0);
    let (_, created) = tool.commit(&mut scene).unwrap().unwrap();
    assert!(created.is_empty());
    assert_eq!(scene.item_count(), 0);
}

#[test]
fn test_placed_items_follow_guide() {
    let mut scene = Scene::new();
    let mut tool = tool_with(10.0);
    let template = ItemTemplate::new("chair", 90.0, 40.0);

    tool.start(&mut scene, &template, Point::new(50.0, 50.0))
        .unwrap();
    tool.update(&mut scene, Point::new(360.0, 50.0));
    let (snapshot, created) = tool.commit(&mut scene).unwrap().unwrap();

    assert_eq!(snapshot.count, 3);
    assert_eq!(created.len(), 3);
    for (i, &node) in created.iter().enumerate() {
        let t = scene.absolute_transform(node);
        assert!(close(t.x, 50.0 + 5.0 + 100.0 * i as f64));
        assert!(close(t.y, 50.0 - 20.0));
        assert!(close(t.rotation, 0.0));
        assert_eq!(scene.parent(node), Some(scene.items_layer()));
    }
}

#[test]
fn test_snapshot_outline_is_rotated_strip() {
    let mut scene = Scene::new();
    let mut tool = tool_with(10.0);
    let template = ItemTemplate::new("chair", 90.0, 40.0);

    tool.start(&mut scene, &template, Point::zero()).unwrap();
    let snap = tool.update(&mut scene, Point::new(0.0, 200.0)).unwrap();
    assert_eq!(snap.rotation, 90.0);

    // Strip is 50 high, centered on the guide line, so its top-left sits at x = 25
    assert!(close(snap.points.top_left.x, 25.0));
    assert!(close(snap.points.top_left.y, 0.0));
    assert!(close(snap.points.bottom_right.x, -25.0));
    assert!(close(snap.points.bottom_right.y, 200.0));
}

#[test]
fn test_item_rotation_setting() {
    let mut scene = Scene::new();
    let mut tool = PlacementTool::new(CreatorSettings {
        item_rotation: 180.0,
        ..CreatorSettings::default()
    });
    let template = ItemTemplate::new("chair", 90.0, 40.0);

    tool.start(&mut scene, &template, Point::zero()).unwrap();
    tool.update(&mut scene, Point::new(150.0, 0.0));
    let (_, created) = tool.commit(&mut scene).unwrap().unwrap();

    let t = scene.absolute_transform(created[0]);
    assert!(close(t.rotation.abs(), 180.0));
}

#[test]
fn test_invalid_template_is_rejected() {
    let mut scene = Scene::new();
    let mut tool = tool_with(10.0);
    let template = ItemTemplate::new("broken", 0.0, 40.0);
    assert!(tool.start(&mut scene, &template, Point::zero()).is_err());
    assert!(!tool.is_painting());
}

#[test]
fn test_cancel_removes_preview() {
    let mut scene = Scene::new();
    let mut tool = tool_with(10.0);
    let template = ItemTemplate::new("chair", 90.0, 40.0);

    tool.start(&mut scene, &template, Point::zero()).unwrap();
    tool.update(&mut scene, Point::new(400.0, 0.0));
    tool.cancel(&mut scene);

    assert!(!tool.is_painting());
    assert_eq!(scene.children(scene.transform_layer()).len(), 1);
    assert_eq!(scene.item_count(), 0);
}
