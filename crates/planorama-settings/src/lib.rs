//! Planorama Settings Crate
//!
//! Handles editor configuration: animation, layout defaults, selection and
//! placement tuning, and the debug reporting flag.

pub mod config;
pub mod error;

pub use config::{
    AnimationSettings, Config, CreatorSettings, LayoutSettings, SelectionSettings,
    SpreadSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
