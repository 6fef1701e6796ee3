use planorama_core::Easing;
use planorama_designer::{
    Item, ItemTemplate, LayoutResult, LayoutTarget, NodeId, Scene, Transform,
    TransitionController, TransitionOutcome, TransitionSettings,
};
use std::time::Duration;

fn setup(count: usize) -> (Scene, LayoutResult) {
    let mut scene = Scene::new();
    let layer = scene.items_layer();
    let template = ItemTemplate::new("lamp", 10.0, 10.0);
    let targets = (0..count)
        .map(|i| {
            let item = Item::from_template(&template, format!("item-{i}")).unwrap();
            let node = scene.add_item(layer, item, Transform::identity());
            LayoutTarget {
                node,
                x: 100.0,
                y: 10.0 * i as f64,
                rotation: Some(90.0),
            }
        })
        .collect();
    (scene, LayoutResult { targets })
}

fn settings(ms: u64, limit: usize) -> TransitionSettings {
    TransitionSettings {
        duration: Duration::from_millis(ms),
        easing: Easing::Linear,
        performance_item_limit: limit,
    }
}

#[test]
fn test_zero_duration_completes_immediately() {
    let (mut scene, result) = setup(3);
    let mut controller = TransitionController::new();
    let outcome = controller.start(&mut scene, &result, &settings(0, 100));

    assert_eq!(outcome, TransitionOutcome::Completed(result.order()));
    assert!(!controller.is_running());
    let t = scene.transform(result.targets[2].node).unwrap();
    assert_eq!((t.x, t.y, t.rotation), (100.0, 20.0, 90.0));
}

#[test]
fn test_large_batch_skips_animation() {
    let (mut scene, result) = setup(5);
    let mut controller = TransitionController::new();
    let outcome = controller.start(&mut scene, &result, &settings(200, 4));
    assert!(matches!(outcome, TransitionOutcome::Completed(_)));
}

#[test]
fn test_completion_fires_exactly_once() {
    let (mut scene, result) = setup(3);
    let mut controller = TransitionController::new();
    assert_eq!(
        controller.start(&mut scene, &result, &settings(200, 100)),
        TransitionOutcome::Animating
    );

    let frame = Duration::from_millis(50);
    let mut completions = Vec::new();
    for _ in 0..10 {
        if let Some(order) = controller.advance(&mut scene, frame) {
            completions.push(order);
        }
    }
    assert_eq!(completions, vec![result.order()]);
    assert!(!controller.is_running());
}

#[test]
fn test_linear_progress_midway() {
    let (mut scene, result) = setup(1);
    let node: NodeId = result.targets[0].node;
    let mut controller = TransitionController::new();
    controller.start(&mut scene, &result, &settings(200, 100));

    assert!(controller
        .advance(&mut scene, Duration::from_millis(100))
        .is_none());
    let t = scene.transform(node).unwrap();
    assert!((t.x - 50.0).abs() < 1e-9);
    assert!((t.rotation - 45.0).abs() < 1e-9);
}

#[test]
fn test_final_pose_is_exact() {
    let (mut scene, result) = setup(2);
    let mut controller = TransitionController::new();
    controller.start(
        &mut scene,
        &result,
        &TransitionSettings {
            easing: Easing::EaseInOut,
            ..settings(160, 100)
        },
    );
    for _ in 0..20 {
        controller.advance(&mut scene, Duration::from_millis(16));
    }
    let t = scene.transform(result.targets[1].node).unwrap();
    assert_eq!((t.x, t.y, t.rotation), (100.0, 10.0, 90.0));
}

#[test]
fn test_finish_now_jumps_to_targets() {
    let (mut scene, result) = setup(2);
    let mut controller = TransitionController::new();
    controller.start(&mut scene, &result, &settings(1000, 100));
    controller.advance(&mut scene, Duration::from_millis(10));

    assert_eq!(controller.finish_now(&mut scene), Some(result.order()));
    assert!(controller.finish_now(&mut scene).is_none());
    let t = scene.transform(result.targets[0].node).unwrap();
    assert_eq!(t.x, 100.0);
}

#[test]
fn test_back_to_back_batches_each_complete_once() {
    let (mut scene, result) = setup(2);
    let first = LayoutResult {
        targets: vec![result.targets[0]],
    };
    let second = LayoutResult {
        targets: vec![result.targets[1]],
    };
    let mut controller = TransitionController::new();
    assert_eq!(
        controller.start(&mut scene, &first, &settings(200, 100)),
        TransitionOutcome::Animating
    );
    assert_eq!(
        controller.start(&mut scene, &second, &settings(200, 100)),
        TransitionOutcome::Busy
    );

    let mut completions = Vec::new();
    for _ in 0..20 {
        if let Some(order) = controller.advance(&mut scene, Duration::from_millis(16)) {
            completions.push(order);
        }
    }
    assert_eq!(completions, vec![first.order()]);
    assert_eq!(scene.transform(second.targets[0].node), Some(Transform::identity()));

    assert_eq!(
        controller.start(&mut scene, &second, &settings(0, 100)),
        TransitionOutcome::Completed(second.order())
    );
}
