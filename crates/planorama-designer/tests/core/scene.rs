use planorama_core::Point;
use planorama_designer::{Item, ItemTemplate, NodeId, Scene, Transform};

fn place(scene: &mut Scene, id: &str, x: f64, y: f64, rotation: f64) -> NodeId {
    let template = ItemTemplate::new("desk", 100.0, 50.0);
    let item = Item::from_template(&template, id).unwrap();
    let layer = scene.items_layer();
    scene.add_item(layer, item, Transform::at(x, y, rotation))
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_new_scene_layers() {
    let scene = Scene::new();
    assert_eq!(scene.parent(scene.items_layer()), Some(scene.root()));
    assert_eq!(scene.parent(scene.transform_layer()), Some(scene.root()));
    assert_eq!(
        scene.parent(scene.selection_container()),
        Some(scene.transform_layer())
    );
    assert_eq!(scene.item_count(), 0);
}

#[test]
fn test_client_rect_of_rotated_item() {
    let mut scene = Scene::new();
    let node = place(&mut scene, "item-a", 0.0, 0.0, 90.0);
    let rect = scene.client_rect(node).unwrap();
    // 100x50 turned a quarter clockwise around its origin
    assert!(close(rect.x, -50.0));
    assert!(close(rect.y, 0.0));
    assert!(close(rect.width, 50.0));
    assert!(close(rect.height, 100.0));
}

#[test]
fn test_find_item_and_duplicate_id() {
    let mut scene = Scene::new();
    let first = place(&mut scene, "item-a", 0.0, 0.0, 0.0);
    assert_eq!(scene.find_item("item-a"), Some(first));

    let second = place(&mut scene, "item-a", 10.0, 10.0, 0.0);
    assert_eq!(scene.find_item("item-a"), Some(second));
    assert!(!scene.contains(first));
    assert_eq!(scene.item_count(), 1);
}

#[test]
fn test_reparent_preserving_keeps_absolute_pose() {
    let mut scene = Scene::new();
    let node = place(&mut scene, "item-a", 40.0, 30.0, 20.0);
    let container = scene.selection_container();
    scene.set_transform(container, Transform::at(100.0, -50.0, 45.0));

    let before = scene.absolute_transform(node);
    scene.reparent_preserving(node, container, false);
    let after = scene.absolute_transform(node);

    assert_eq!(scene.parent(node), Some(container));
    assert!(close(before.x, after.x));
    assert!(close(before.y, after.y));
    assert!(close(before.rotation, after.rotation));
}

#[test]
fn test_item_at_uses_outline() {
    let mut scene = Scene::new();
    let node = place(&mut scene, "item-a", 0.0, 0.0, 45.0);
    // Inside the rotated outline
    assert_eq!(scene.item_at(Point::new(10.0, 30.0)), Some(node));
    // Inside the axis-aligned bounds but outside the outline
    assert_eq!(scene.item_at(Point::new(60.0, 10.0)), None);
}

#[test]
fn test_item_at_prefers_topmost() {
    let mut scene = Scene::new();
    let _below = place(&mut scene, "item-a", 0.0, 0.0, 0.0);
    let above = place(&mut scene, "item-b", 50.0, 0.0, 0.0);
    assert_eq!(scene.item_at(Point::new(75.0, 25.0)), Some(above));
}

#[test]
fn test_destroy_protects_layers() {
    let mut scene = Scene::new();
    let node = place(&mut scene, "item-a", 0.0, 0.0, 0.0);
    scene.reparent_preserving(node, scene.selection_container(), false);

    scene.destroy(scene.items_layer());
    assert!(scene.contains(scene.items_layer()));

    scene.destroy(scene.selection_container());
    assert!(scene.contains(scene.selection_container()));
    assert!(!scene.contains(node));
    assert!(scene.find_item("item-a").is_none());
}

#[test]
fn test_clone_item_copies_pose() {
    let mut scene = Scene::new();
    let node = place(&mut scene, "item-a", 10.0, 20.0, 30.0);
    let copy = scene.clone_item(node, "item-b").unwrap();
    assert_eq!(scene.transform(copy), scene.transform(node));
    assert_eq!(scene.item(copy).unwrap().id, "item-b");
    assert_eq!(scene.item_count(), 2);
}
