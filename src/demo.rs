//! Headless scripted session
//!
//! Drives an [`Editor`] the way a host UI would: place a row of items with
//! the drag-to-place tool, marquee-select them, and run the batch layouts,
//! stepping transitions at the configured frame interval.

use planorama_core::{DesignerResult, Facing, InteractionMode, PlanoramaItem, Point};
use planorama_designer::{BackgroundTemplate, Command, CommandOutcome, Editor, ItemTemplate, LabelTemplate};
use planorama_settings::Config;

/// Template registered for the demo session
pub const DEMO_TEMPLATE: &str = "chair";

fn demo_template() -> ItemTemplate {
    ItemTemplate::new(DEMO_TEMPLATE, 90.0, 40.0)
        .with_label(LabelTemplate {
            font_size: Some(12.0),
            ..LabelTemplate::default()
        })
        .with_background(BackgroundTemplate::default())
}

/// Run the scripted session and return the exported scene
pub fn run_session(config: Config) -> DesignerResult<Vec<PlanoramaItem>> {
    let mut editor = Editor::new(config);
    editor.register_template(demo_template())?;
    editor.set_active_template(Some(DEMO_TEMPLATE));

    editor.set_mode(InteractionMode::Create);
    editor.pointer_down(Point::new(100.0, 100.0));
    editor.pointer_move(Point::new(350.0, 180.0));
    editor.pointer_up(Point::new(620.0, 260.0));
    tracing::info!("Placed {} item(s)", editor.scene().item_count());

    editor.set_mode(InteractionMode::Select);
    editor.pointer_down(Point::new(0.0, -200.0));
    editor.pointer_move(Point::new(900.0, 600.0));
    editor.pointer_up(Point::new(900.0, 600.0));
    tracing::info!("Selected {} item(s)", editor.selected_ids().len());

    let script = [
        Command::AlignX { gap: None },
        Command::AlignGrid {
            columns: None,
            gap: None,
        },
        Command::SpreadCircle {
            radius: Some(250.0),
            facing: Some(Facing::Outward),
        },
    ];
    for command in script {
        let name = command.name();
        if editor.execute(command) == CommandOutcome::Animating {
            settle(&mut editor);
        }
        tracing::info!("{} done", name);
    }

    Ok(editor.export_all())
}

/// Step frames until the running transition completes
fn settle(editor: &mut Editor) {
    let frame = editor.config().animation.frame_interval();
    if frame.is_zero() {
        editor.finish_transitions();
        return;
    }
    let mut frames = 0u32;
    while editor.is_animating() {
        editor.advance_frame(frame);
        frames += 1;
    }
    tracing::debug!("Transition settled after {} frame(s)", frames);
}
