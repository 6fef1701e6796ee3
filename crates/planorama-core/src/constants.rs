//! Default values shared by the settings and designer crates.

/// Gap in pixels between items for linear and grid layouts.
pub const DEFAULT_GAP: f64 = 10.0;
/// Column count for the grid layout.
pub const DEFAULT_COLUMNS: usize = 3;
/// Target angle in degrees for the uniform rotation layout.
pub const DEFAULT_ROTATION_ANGLE: f64 = 0.0;
/// Radius in pixels for the circular spread.
pub const DEFAULT_SPREAD_RADIUS: f64 = 500.0;

/// Tween duration in milliseconds.
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 200;
/// Frame interval used by headless runners.
pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;

/// Selections larger than this are applied without animation and cached.
pub const DEFAULT_PERFORMANCE_ITEM_LIMIT: usize = 100;
/// Padding between the selection bounds and the transform handle frame.
pub const DEFAULT_HANDLE_PADDING: f64 = 10.0;
/// Distance of the rotation grip above the handle frame.
pub const DEFAULT_ROTATE_ANCHOR_OFFSET: f64 = 60.0;
/// Rotation snapping step in degrees for handle rotation.
pub const DEFAULT_ROTATION_SNAP_STEP: f64 = 1.0;
/// Offset applied on both axes to cloned items.
pub const DEFAULT_CLONE_OFFSET: f64 = 20.0;

/// Angle snapping step in degrees for the placement guide.
pub const DEFAULT_ANGLE_SNAP_STEP: f64 = 5.0;
/// Lead-in of the first placement slot along the guide line.
pub const DEFAULT_SLOT_LEAD_IN: f64 = 5.0;

/// Corner radius of item backgrounds.
pub const BACKGROUND_CORNER_RADIUS: f64 = 8.0;
/// Font family used when a label template does not name one.
pub const DEFAULT_FONT_FAMILY: &str = "Arial";
/// Font size used when a label template does not name one.
pub const DEFAULT_FONT_SIZE: f64 = 14.0;
/// Label alignment percentage used when a label template does not name one.
pub const DEFAULT_LABEL_ALIGNMENT: f64 = 50.0;

/// Prefix of generated item ids.
pub const ITEM_ID_PREFIX: &str = "item-";
