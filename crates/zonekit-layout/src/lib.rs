//! # ZoneKit Layout
//!
//! The zone layout engine: an in-memory registry of named rectangular
//! regions over a template image, its undo history, the anchor-based grid
//! generators that derive large regular layouts from a few manually placed
//! zones, and the selection/clipboard subsystem with paste renumbering.
//!
//! ## Architecture
//!
//! ```text
//! ZoneEditor (context object owned by the host)
//!   ├── ZoneRegistry  (authoritative zones, publishes ZoneEvents)
//!   ├── HistoryStack  (bounded full-registry snapshots)
//!   ├── SelectionSet  (selected names, selection order)
//!   ├── ClipboardBuffer
//!   ├── InputState    (Idle / Drawing / Dragging / AwaitingPastePlacement)
//!   └── Interaction   (injected prompts and confirmations)
//!
//! GridGenerator  (pure planning: anchors -> cells)
//! interchange    (JSON import/export)
//! ```
//!
//! Rendering, image loading and status display are collaborators: they
//! subscribe to the editor's [`zonekit_core::EventBus`] and feed pointer
//! events back in.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zonekit_layout::{EditorConfig, HeadlessInteraction, ZoneEditor};
//! use zonekit_core::Zone;
//!
//! let mut editor = ZoneEditor::new(EditorConfig::default(), HeadlessInteraction);
//! editor.upsert_zone(Zone::new("D00", 0.0, 0.0, 20.0, 20.0));
//! editor.upsert_zone(Zone::new("D10", 0.0, 40.0, 20.0, 20.0));
//! editor.upsert_zone(Zone::new("D01", 30.0, 0.0, 20.0, 20.0));
//! editor.generate_matrix_grid()?;
//! assert_eq!(editor.registry().len(), 80);
//! ```

pub mod clipboard;
pub mod editor;
pub mod grid;
pub mod history;
pub mod interaction;
pub mod interchange;
pub mod naming;
pub mod registry;
pub mod selection;

pub use clipboard::{ClipboardBuffer, Renumbering};
pub use editor::{EditorConfig, InputOutcome, InputState, RubberBand, ZoneEditor};
pub use grid::{
    AnswerGridParams, AnswerGroup, GridGenerator, GridOperation, GridPlan, MatrixGridParams,
    SegmentedGridParams,
};
pub use history::{HistoryEntry, HistoryStack, DEFAULT_HISTORY_DEPTH};
pub use interaction::{HeadlessInteraction, Interaction, ScriptedInteraction};
pub use interchange::{parse_zones, to_json, EXPORT_FILE_NAME};
pub use naming::ZoneName;
pub use registry::ZoneRegistry;
pub use selection::SelectionSet;
