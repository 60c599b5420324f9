//! Configuration and settings management for ZoneKit
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform configuration directory.
//!
//! Configuration is organized into logical sections:
//! - Editor settings (undo depth, canvas size, label placement)
//! - Grid settings (question counts, option letters, matrix shape, DNI length)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult, SettingsResult};

/// Application directory name under the platform config directory
pub const APP_DIR_NAME: &str = "zonekit";

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Editor preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Undo snapshots kept
    pub history_depth: usize,
    /// Canvas width in pixels
    pub canvas_width: f64,
    /// Canvas height in pixels
    pub canvas_height: f64,
    /// Label inset from a zone's top-left corner
    pub label_offset: f64,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            history_depth: 20,
            canvas_width: 800.0,
            canvas_height: 600.0,
            label_offset: 4.0,
        }
    }
}

/// Grid generation defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Questions in the simple answer grid when none is given
    pub default_question_count: u32,
    /// Option letters, one column each
    pub answer_options: Vec<String>,
    /// Questions in the segmented answer grid
    pub segmented_question_count: u32,
    /// Rows anchored together in the segmented grid
    pub segment_rows: u32,
    pub matrix_prefix: String,
    pub matrix_rows: u32,
    pub matrix_columns: u32,
    /// Digits in a DNI number
    pub dni_length: usize,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            default_question_count: 10,
            answer_options: vec!["A".to_string(), "B".to_string(), "C".to_string()],
            segmented_question_count: 50,
            segment_rows: 3,
            matrix_prefix: "D".to_string(),
            matrix_rows: 10,
            matrix_columns: 8,
            dni_length: 8,
        }
    }
}

/// On-disk formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(ConfigFormat::Json),
            Some("toml") => Ok(ConfigFormat::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Editor preferences
    pub editor: EditorSettings,
    /// Grid generation defaults
    pub grids: GridSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// `<config dir>/zonekit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string())
        })?;
        Ok(base.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Loads `path` if given, otherwise the default file if it exists,
    /// otherwise the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match Self::default_path() {
            Ok(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let editor = &self.editor;
        if editor.history_depth == 0 {
            return Err(ConfigError::out_of_range("editor.history_depth", 0));
        }
        if !is_positive(editor.canvas_width) {
            return Err(ConfigError::out_of_range(
                "editor.canvas_width",
                editor.canvas_width,
            ));
        }
        if !is_positive(editor.canvas_height) {
            return Err(ConfigError::out_of_range(
                "editor.canvas_height",
                editor.canvas_height,
            ));
        }
        if !editor.label_offset.is_finite() || editor.label_offset < 0.0 {
            return Err(ConfigError::out_of_range(
                "editor.label_offset",
                editor.label_offset,
            ));
        }

        let grids = &self.grids;
        if grids.default_question_count == 0 {
            return Err(ConfigError::out_of_range("grids.default_question_count", 0));
        }
        if grids.answer_options.len() < 2 || grids.answer_options.iter().any(|o| o.is_empty()) {
            return Err(ConfigError::out_of_range(
                "grids.answer_options",
                grids.answer_options.join(","),
            ));
        }
        if grids.segmented_question_count == 0 {
            return Err(ConfigError::out_of_range("grids.segmented_question_count", 0));
        }
        if grids.segment_rows < 2 {
            return Err(ConfigError::out_of_range("grids.segment_rows", grids.segment_rows));
        }
        if grids.matrix_prefix.is_empty() {
            return Err(ConfigError::out_of_range("grids.matrix_prefix", "\"\""));
        }
        if grids.matrix_rows < 2 || grids.matrix_columns < 2 {
            return Err(ConfigError::out_of_range(
                "grids.matrix_rows/matrix_columns",
                format!("{}x{}", grids.matrix_rows, grids.matrix_columns),
            ));
        }
        if grids.dni_length == 0 {
            return Err(ConfigError::out_of_range("grids.dni_length", 0));
        }

        Ok(())
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
