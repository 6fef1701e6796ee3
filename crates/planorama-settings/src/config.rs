//! Configuration for the Planorama editor
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML files; the default location is the platform config directory.
//!
//! Configuration is organized into logical sections:
//! - Animation (tween duration, easing, headless frame interval)
//! - Layout defaults (gap, grid columns, rotation angle, circular spread)
//! - Selection tuning (performance cutoff, handle geometry, clone offset)
//! - Placement tool tuning (angle snapping, slot spacing)
//!
//! Every field has a default, so partial files are accepted.

use planorama_core::constants::*;
use planorama_core::{Easing, Facing};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{ConfigError, ConfigResult, SettingsResult};

const APP_DIR_NAME: &str = "planorama";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Animation settings for layout transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Tween duration in milliseconds; 0 applies layouts instantly
    pub duration_ms: u64,
    /// Easing curve for tweens
    pub easing: Easing,
    /// Frame interval used when a host does not drive frames itself
    pub frame_interval_ms: u64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_ANIMATION_DURATION_MS,
            easing: Easing::default(),
            frame_interval_ms: DEFAULT_FRAME_INTERVAL_MS,
        }
    }
}

impl AnimationSettings {
    /// Tween duration
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Frame interval
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

/// Circular spread defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpreadSettings {
    pub radius: f64,
    pub facing: Facing,
}

impl Default for SpreadSettings {
    fn default() -> Self {
        Self {
            radius: DEFAULT_SPREAD_RADIUS,
            facing: Facing::None,
        }
    }
}

/// Layout command defaults, used when a command omits a parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Gap in pixels between items
    pub gap: f64,
    /// Grid column count
    pub columns: usize,
    /// Uniform rotation angle in degrees
    pub rotation_angle: f64,
    pub spread: SpreadSettings,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP,
            columns: DEFAULT_COLUMNS,
            rotation_angle: DEFAULT_ROTATION_ANGLE,
            spread: SpreadSettings::default(),
        }
    }
}

/// Selection and transform handle settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionSettings {
    /// Above this many selected items, layouts skip animation and the
    /// container is cached
    pub performance_item_limit: usize,
    /// Padding between selection bounds and the handle frame
    pub handle_padding: f64,
    /// Distance of the rotation grip above the frame
    pub rotate_anchor_offset: f64,
    /// Handle rotation snapping step in degrees
    pub rotation_snap_step: f64,
    /// Offset on both axes applied to clones
    pub clone_offset: f64,
}

impl Default for SelectionSettings {
    fn default() -> Self {
        Self {
            performance_item_limit: DEFAULT_PERFORMANCE_ITEM_LIMIT,
            handle_padding: DEFAULT_HANDLE_PADDING,
            rotate_anchor_offset: DEFAULT_ROTATE_ANCHOR_OFFSET,
            rotation_snap_step: DEFAULT_ROTATION_SNAP_STEP,
            clone_offset: DEFAULT_CLONE_OFFSET,
        }
    }
}

/// Placement tool settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatorSettings {
    /// Guide angle snapping step in degrees
    pub angle_snap_step: f64,
    /// Gap added to the template width to get the slot width
    pub gap: f64,
    /// Extra rotation in degrees applied to every placed item
    pub item_rotation: f64,
    /// Offset of the first slot along the guide line
    pub slot_lead_in: f64,
}

impl Default for CreatorSettings {
    fn default() -> Self {
        Self {
            angle_snap_step: DEFAULT_ANGLE_SNAP_STEP,
            gap: DEFAULT_GAP,
            item_rotation: 0.0,
            slot_lead_in: DEFAULT_SLOT_LEAD_IN,
        }
    }
}

/// Complete editor configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Report absorbed no-ops through the debug log
    pub debug: bool,
    pub animation: AnimationSettings,
    pub layout: LayoutSettings,
    pub selection: SelectionSettings,
    pub creator: CreatorSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config_dir>/planorama/config.toml`
    pub fn default_path() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
            .ok_or_else(|| {
                ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
            })
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)?;

        let config: Self = match Format::from_path(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load the config at `path` if given, else the default location if it
    /// exists, else the built-in defaults
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Ok(default) if default.exists() => Self::load_from_file(&default),
            _ => Ok(Self::default()),
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let finite_non_negative = |key: &str, v: f64| {
            if v.is_finite() && v >= 0.0 {
                Ok(())
            } else {
                Err(ConfigError::out_of_range(key, v))
            }
        };
        let positive = |key: &str, v: f64| {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(ConfigError::out_of_range(key, v))
            }
        };

        finite_non_negative("layout.gap", self.layout.gap)?;
        if self.layout.columns == 0 {
            return Err(ConfigError::out_of_range("layout.columns", 0));
        }
        if !self.layout.rotation_angle.is_finite() {
            return Err(ConfigError::out_of_range(
                "layout.rotation_angle",
                self.layout.rotation_angle,
            ));
        }
        positive("layout.spread.radius", self.layout.spread.radius)?;

        if self.animation.frame_interval_ms == 0 {
            return Err(ConfigError::out_of_range("animation.frame_interval_ms", 0));
        }

        finite_non_negative("selection.handle_padding", self.selection.handle_padding)?;
        finite_non_negative(
            "selection.rotate_anchor_offset",
            self.selection.rotate_anchor_offset,
        )?;
        positive(
            "selection.rotation_snap_step",
            self.selection.rotation_snap_step,
        )?;
        if !self.selection.clone_offset.is_finite() {
            return Err(ConfigError::out_of_range(
                "selection.clone_offset",
                self.selection.clone_offset,
            ));
        }

        positive("creator.angle_snap_step", self.creator.angle_snap_step)?;
        finite_non_negative("creator.gap", self.creator.gap)?;
        finite_non_negative("creator.slot_lead_in", self.creator.slot_lead_in)?;
        if !self.creator.item_rotation.is_finite() {
            return Err(ConfigError::out_of_range(
                "creator.item_rotation",
                self.creator.item_rotation,
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
