//! # ZoneKit
//!
//! A zone layout editor for scanned answer sheets and ID forms:
//! - Named rectangular zones over a fixed-size template image
//! - Undo history of full registry snapshots
//! - Anchor-based grid generation (DNI digit matrix, answer grids)
//! - Copy/paste with collision-safe, optionally renumbered names
//! - JSON interchange of zone sets
//!
//! ## Architecture
//!
//! ZoneKit is organized as a workspace with multiple crates:
//!
//! 1. **zonekit-core** - Zone types, error taxonomy, change-notification events
//! 2. **zonekit-layout** - Registry, history, grids, clipboard and the editor
//! 3. **zonekit-settings** - Persisted configuration
//! 4. **zonekit** - Command-line host that integrates all crates

pub mod cli;

pub use zonekit_core::{CanvasPoint, LayoutError, LayoutEvent, Result, Zone};
pub use zonekit_layout::{
    EditorConfig, GridOperation, HeadlessInteraction, Interaction, ZoneEditor, EXPORT_FILE_NAME,
};
pub use zonekit_settings::Config;

use zonekit_layout::{AnswerGridParams, MatrixGridParams, SegmentedGridParams};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable multi-line records
    #[default]
    Pretty,
    /// One JSON object per record
    Json,
}

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, keeping stdout for command results
/// - RUST_LOG environment variable support (default `info`)
/// - Pretty or JSON formatting
pub fn init_logging(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    let registry = tracing_subscriber::registry().with(env_filter);
    match format {
        LogFormat::Pretty => registry.with(layer.pretty()).try_init()?,
        LogFormat::Json => registry.with(layer.json()).try_init()?,
    }

    Ok(())
}

/// Maps persisted settings onto the layout engine's configuration.
pub fn editor_config(config: &Config) -> EditorConfig {
    let grids = &config.grids;
    EditorConfig {
        history_depth: config.editor.history_depth,
        canvas_width: config.editor.canvas_width,
        canvas_height: config.editor.canvas_height,
        label_offset: config.editor.label_offset,
        matrix: MatrixGridParams::new(
            grids.matrix_prefix.clone(),
            grids.matrix_rows,
            grids.matrix_columns,
        ),
        answers: AnswerGridParams::new(
            grids.default_question_count,
            grids.answer_options.clone(),
        ),
        segmented: SegmentedGridParams::new(
            grids.segmented_question_count,
            grids.segment_rows,
            grids.answer_options.clone(),
        ),
        dni_length: grids.dni_length,
    }
}
