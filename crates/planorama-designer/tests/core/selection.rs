use planorama_core::Point;
use planorama_designer::{
    HandlePart, Item, ItemTemplate, NodeId, Scene, SelectionManager, Transform,
};
use planorama_settings::SelectionSettings;

fn setup(positions: &[(f64, f64)]) -> (SelectionManager, Scene, Vec<NodeId>) {
    let mut scene = Scene::new();
    let layer = scene.items_layer();
    let template = ItemTemplate::new("crate", 20.0, 20.0);
    let nodes = positions
        .iter()
        .enumerate()
        .map(|(i, &(x, y))| {
            let item = Item::from_template(&template, format!("item-{i}")).unwrap();
            scene.add_item(layer, item, Transform::at(x, y, 0.0))
        })
        .collect();
    (
        SelectionManager::new(SelectionSettings::default()),
        scene,
        nodes,
    )
}

fn marquee(
    manager: &mut SelectionManager,
    scene: &mut Scene,
    from: Point,
    to: Point,
) -> Option<Vec<NodeId>> {
    manager.begin_marquee(from);
    manager.update_marquee(to);
    manager.finish_marquee(scene)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_marquee_exactly_one_item() {
    let (mut manager, mut scene, nodes) = setup(&[(0.0, 0.0), (100.0, 0.0)]);
    let hits = marquee(
        &mut manager,
        &mut scene,
        Point::new(0.0, 0.0),
        Point::new(20.0, 20.0),
    )
    .unwrap();
    assert_eq!(hits, vec![nodes[0]]);
    assert_eq!(manager.selected(&scene), vec![nodes[0]]);
}

#[test]
fn test_marquee_touching_edge_is_not_a_hit() {
    let (mut manager, mut scene, _) = setup(&[(0.0, 0.0)]);
    let hits = marquee(
        &mut manager,
        &mut scene,
        Point::new(20.0, 0.0),
        Point::new(40.0, 20.0),
    );
    assert!(hits.is_none());
    assert!(manager.is_empty(&scene));
}

#[test]
fn test_marquee_dragged_backwards() {
    let (mut manager, mut scene, nodes) = setup(&[(0.0, 0.0), (100.0, 0.0)]);
    let hits = marquee(
        &mut manager,
        &mut scene,
        Point::new(150.0, 30.0),
        Point::new(-5.0, -5.0),
    )
    .unwrap();
    assert_eq!(hits, nodes);
}

#[test]
fn test_marquee_without_movement_selects_nothing() {
    let (mut manager, mut scene, _) = setup(&[(0.0, 0.0)]);
    manager.begin_marquee(Point::new(10.0, 10.0));
    assert!(!manager.marquee().unwrap().visible);
    assert!(manager.finish_marquee(&mut scene).is_none());
    assert!(manager.is_empty(&scene));

    // Returning to the anchor after moving still counts as a drag
    manager.begin_marquee(Point::new(10.0, 10.0));
    manager.update_marquee(Point::new(30.0, 30.0));
    manager.update_marquee(Point::new(10.0, 10.0));
    assert!(manager.marquee().unwrap().visible);
}

#[test]
fn test_marquee_ignored_when_selection_exists() {
    let (mut manager, mut scene, nodes) = setup(&[(0.0, 0.0), (100.0, 0.0)]);
    manager.select(&mut scene, nodes[0], false);
    let hits = marquee(
        &mut manager,
        &mut scene,
        Point::new(90.0, -10.0),
        Point::new(130.0, 30.0),
    );
    assert!(hits.is_none());
    assert_eq!(manager.selected(&scene), vec![nodes[0]]);
}

#[test]
fn test_click_selection_replaces_or_adds() {
    let (mut manager, mut scene, nodes) = setup(&[(0.0, 0.0), (100.0, 0.0)]);
    assert!(manager.select(&mut scene, nodes[0], false));
    assert!(manager.select(&mut scene, nodes[1], false));
    assert_eq!(manager.selected(&scene), vec![nodes[1]]);

    assert!(manager.select(&mut scene, nodes[0], true));
    assert_eq!(manager.selected(&scene).len(), 2);

    let items_layer = scene.items_layer();
    assert!(!manager.select(&mut scene, items_layer, false));
}

#[test]
fn test_release_restores_free_layer() {
    let (mut manager, mut scene, nodes) = setup(&[(5.0, 5.0), (100.0, 0.0)]);
    manager.populate(&mut scene, &nodes);
    let released = manager.release(&mut scene);

    assert_eq!(released.len(), 2);
    assert!(manager.is_empty(&scene));
    assert!(scene.transform(scene.selection_container()).unwrap().is_identity());
    let t = scene.absolute_transform(nodes[0]);
    assert!(close(t.x, 5.0));
    assert!(close(t.y, 5.0));
}

#[test]
fn test_select_by_ids_keeps_existing() {
    let (mut manager, mut scene, nodes) = setup(&[(0.0, 0.0), (50.0, 0.0), (100.0, 0.0)]);
    manager.select(&mut scene, nodes[0], false);
    let found = manager.select_by_ids(
        &mut scene,
        &["item-2".to_string(), "item-missing".to_string()],
    );
    assert_eq!(found, vec![nodes[2]]);
    assert_eq!(manager.selected(&scene), vec![nodes[0], nodes[2]]);
}

#[test]
fn test_delete_and_clone() {
    let (mut manager, mut scene, nodes) = setup(&[(0.0, 0.0), (50.0, 0.0)]);
    manager.populate(&mut scene, &nodes);
    let clones = manager.clone_selection(&mut scene);

    assert_eq!(clones.len(), 2);
    assert_eq!(scene.item_count(), 4);
    assert_eq!(manager.selected(&scene), clones);
    let offset = manager.settings().clone_offset;
    let copy = scene.absolute_transform(clones[1]);
    assert!(close(copy.x, 50.0 + offset));
    assert!(close(copy.y, offset));

    assert!(manager.delete(&mut scene));
    assert_eq!(scene.item_count(), 2);
    assert!(!manager.delete(&mut scene));
}

#[test]
fn test_handle_moves_selection() {
    let (mut manager, mut scene, nodes) = setup(&[(0.0, 0.0), (40.0, 0.0)]);
    manager.populate(&mut scene, &nodes);

    let handle = manager.handle(&scene).unwrap();
    assert_eq!(handle.item_count, 2);
    let padding = manager.settings().handle_padding;
    assert!(close(handle.bounds.x, -padding));
    assert!(close(handle.bounds.width, 60.0 + 2.0 * padding));

    let start = Point::new(30.0, 10.0);
    assert_eq!(manager.hit_handle(&scene, start), Some(HandlePart::Body));
    assert!(manager.begin_gesture(&scene, HandlePart::Body, start));
    manager.update_gesture(&mut scene, Point::new(55.0, 20.0));
    assert!(manager.end_gesture());

    let moved = scene.absolute_transform(nodes[1]);
    assert!(close(moved.x, 65.0));
    assert!(close(moved.y, 10.0));
}

#[test]
fn test_rotate_grip_single_item() {
    let (mut manager, mut scene, nodes) = setup(&[(0.0, 0.0)]);
    manager.populate(&mut scene, &nodes);
    let handle = manager.handle(&scene).unwrap();

    assert_eq!(
        manager.hit_handle(&scene, handle.grip),
        Some(HandlePart::RotateGrip)
    );
    assert!(manager.begin_gesture(&scene, HandlePart::RotateGrip, handle.grip));

    // Grip straight above the center; moving it to the right is a quarter turn
    let center = handle.bounds.center();
    let radius = center.y - handle.grip.y;
    manager.update_gesture(&mut scene, Point::new(center.x + radius, center.y));
    manager.end_gesture();

    let rotated = scene.absolute_transform(nodes[0]);
    assert!(close(rotated.rotation, 90.0));
    // Rotation is about the handle center, which stays put
    let rect = scene.client_rect(nodes[0]).unwrap();
    assert!(close(rect.center().x, 10.0));
    assert!(close(rect.center().y, 10.0));
}

#[test]
fn test_gesture_without_motion_reports_no_change() {
    let (mut manager, mut scene, nodes) = setup(&[(0.0, 0.0)]);
    manager.populate(&mut scene, &nodes);
    assert!(manager.begin_gesture(&scene, HandlePart::Body, Point::new(5.0, 5.0)));
    assert!(!manager.end_gesture());
}

#[test]
fn test_cache_follows_item_limit() {
    let (_, mut scene, nodes) = setup(&[(0.0, 0.0), (30.0, 0.0), (60.0, 0.0)]);
    let mut manager = SelectionManager::new(SelectionSettings {
        performance_item_limit: 2,
        ..SelectionSettings::default()
    });
    manager.populate(&mut scene, &nodes);
    assert!(manager.is_cached());
    manager.release(&mut scene);
    assert!(!manager.is_cached());
}
