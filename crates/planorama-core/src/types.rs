//! Shared value types used across the editor.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Current interaction mode of the editor
///
/// The mode decides which tool receives pointer input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    /// Pan/zoom; pointer input only produces hover and click notifications
    #[default]
    Viewport,
    /// Marquee and click selection, transform handle
    Select,
    /// Drag-to-place with the active item template
    Create,
}

impl std::fmt::Display for InteractionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Viewport => write!(f, "viewport"),
            Self::Select => write!(f, "select"),
            Self::Create => write!(f, "create"),
        }
    }
}

/// Rotation applied to items by a circular spread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    /// Item tops point away from the circle center
    Outward,
    /// Item tops point toward the circle center
    Inward,
    /// Rotation is left untouched
    #[default]
    None,
}

/// Easing curve for animated transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto the curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}
