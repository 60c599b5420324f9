//! ZoneKit Settings Crate
//!
//! Handles the persisted editor configuration: loading, saving and
//! validation.

pub mod config;
pub mod error;

pub use config::{Config, EditorSettings, GridSettings, APP_DIR_NAME, CONFIG_FILE_NAME};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
