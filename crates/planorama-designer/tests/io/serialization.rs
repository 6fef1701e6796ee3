use planorama_core::{BackgroundProps, ItemProps, LabelProps};
use planorama_designer::serialization::{export_all, from_json, import_all, to_json};
use planorama_designer::{
    BackgroundTemplate, Item, ItemTemplate, LabelTemplate, Scene, TemplateLibrary, Transform,
};
use std::fs;

fn library() -> TemplateLibrary {
    let mut library = TemplateLibrary::new();
    library
        .register(
            ItemTemplate::new("table", 120.0, 80.0)
                .with_label(LabelTemplate::default())
                .with_background(BackgroundTemplate::default()),
        )
        .unwrap();
    library
        .register(ItemTemplate::new("plant", 30.0, 30.0).with_src("plant.png"))
        .unwrap();
    library
}

fn populated_scene(library: &TemplateLibrary) -> Scene {
    let mut scene = Scene::new();
    let layer = scene.items_layer();
    let table = Item::from_template(library.get("table").unwrap(), "item-table").unwrap();
    scene.add_item(layer, table, Transform::at(10.0, 20.0, 30.0));
    let plant = Item::from_template(library.get("plant").unwrap(), "item-plant").unwrap();
    scene.add_item(layer, plant, Transform::at(-40.0, 5.0, 0.0));
    scene
}

#[test]
fn test_export_reports_absolute_pose_and_props() {
    let library = library();
    let mut scene = populated_scene(&library);
    let table = scene.find_item("item-table").unwrap();
    let container = scene.selection_container();
    scene.set_transform(container, Transform::at(500.0, 500.0, 0.0));
    scene.reparent_preserving(table, container, false);

    let records = export_all(&scene);
    assert_eq!(records.len(), 2);
    // Free items first, then selected ones
    assert_eq!(records[0].id, "item-plant");
    let table = &records[1];
    assert_eq!(table.item_type, "table");
    assert!((table.transform.x - 10.0).abs() < 1e-9);
    assert!((table.transform.rotation - 30.0).abs() < 1e-9);
    let label = table.item_props.label.as_ref().unwrap();
    assert_eq!(label.text.as_deref(), Some("item-table"));
    assert!(table.item_props.background.is_some());
    assert!(records[0].item_props.is_empty());
}

#[test]
fn test_import_into_empty_scene_recreates_items() {
    let library = library();
    let source = populated_scene(&library);
    let json = to_json(&export_all(&source)).unwrap();

    let mut target = Scene::new();
    let report = import_all(&mut target, &library, &from_json(&json).unwrap());
    assert_eq!(report.created.len(), 2);
    assert!(report.updated.is_empty());

    let node = target.find_item("item-table").unwrap();
    let t = target.absolute_transform(node);
    assert!((t.x - 10.0).abs() < 1e-9);
    assert!((t.y - 20.0).abs() < 1e-9);
    assert!((t.rotation - 30.0).abs() < 1e-9);
}

#[test]
fn test_import_updates_existing_items() {
    let library = library();
    let mut scene = populated_scene(&library);
    let mut records = export_all(&scene);
    assert_eq!(records[0].id, "item-table");
    records[0].item_props = ItemProps {
        background: Some(BackgroundProps {
            background_color: Some("#ff0000".to_string()),
            ..BackgroundProps::default()
        }),
        label: Some(LabelProps {
            text: Some("Table 1".to_string()),
            ..LabelProps::default()
        }),
    };
    // A moved pose is not applied to an existing item
    records[0].transform.x = 999.0;
    records[1].item_props.label = Some(LabelProps {
        text: Some("ignored".to_string()),
        ..LabelProps::default()
    });

    let report = import_all(&mut scene, &library, &records);
    assert_eq!(report.updated.len(), 2);

    let node = scene.find_item("item-table").unwrap();
    let item = scene.item(node).unwrap();
    assert_eq!(item.label.as_ref().unwrap().text, "Table 1");
    assert_eq!(item.background.as_ref().unwrap().background_color, "#ff0000");
    assert_eq!(item.background.as_ref().unwrap().stroke_color, "#000000");
    assert!((scene.absolute_transform(node).x - 10.0).abs() < 1e-9);

    let plant = scene.item(scene.find_item("item-plant").unwrap()).unwrap();
    assert!(plant.label.is_none());
}

#[test]
fn test_import_skips_unknown_types() {
    let library = library();
    let mut records = export_all(&populated_scene(&library));
    records[1].id = "item-other".to_string();
    records[1].item_type = "sofa".to_string();

    let mut scene = Scene::new();
    let report = import_all(&mut scene, &library, &records);
    assert_eq!(report.skipped, vec!["item-other".to_string()]);
    assert_eq!(report.created, vec!["item-table".to_string()]);
    assert_eq!(report.total(), 2);
    assert_eq!(scene.item_count(), 1);
}

#[test]
fn test_records_round_trip_through_file() {
    let library = library();
    let records = export_all(&populated_scene(&library));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("layout.json");
    fs::write(&path, to_json(&records).unwrap()).unwrap();

    let loaded = from_json(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(loaded.len(), records.len());
    for (a, b) in loaded.iter().zip(&records) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.item_type, b.item_type);
        assert_eq!(a.item_props, b.item_props);
        assert!((a.transform.x - b.transform.x).abs() < 1e-9);
        assert!((a.transform.rotation - b.transform.rotation).abs() < 1e-9);
        assert!((a.bounding_box.width - b.bounding_box.width).abs() < 1e-9);
    }

    let raw: serde_json::Value = serde_json::from_str(&to_json(&records).unwrap()).unwrap();
    assert_eq!(raw[0]["type"], "table");
    assert!(raw[0].get("boundingBox").is_some());
    assert!(raw[0]["itemProps"]["label"].get("fontSize").is_some());
    assert!(raw[1]["itemProps"].get("label").is_none());
}
