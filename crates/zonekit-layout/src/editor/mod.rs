//! Zone editor context object for host integration.
//! Owns the layout state and routes pointer input and commands to it.
//!
//! This module is split into submodules:
//! - `zones`: Upsert, rename, delete, move, undo, selection
//! - `input`: Pointer state machine (draw, drag, paste placement)
//! - `grids`: Anchor-based grid generation
//! - `clipboard`: Copy and paste with renumbering
//! - `file_io`: Interchange import/export
//! - `dni`: DNI preview highlighting

mod clipboard;
mod dni;
mod file_io;
mod grids;
mod input;
mod zones;

pub use input::{InputOutcome, InputState, RubberBand};

use std::sync::Arc;

use zonekit_core::{
    EventBus, InputMode, LayoutEvent, NotificationEvent, StyleEvent, ZoneStyle,
};

use crate::clipboard::ClipboardBuffer;
use crate::grid::{AnswerGridParams, MatrixGridParams, SegmentedGridParams};
use crate::history::{HistoryStack, DEFAULT_HISTORY_DEPTH};
use crate::interaction::{HeadlessInteraction, Interaction};
use crate::registry::ZoneRegistry;
use crate::selection::SelectionSet;

/// Editor settings
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
    /// Undo snapshots kept before the oldest is dropped
    pub history_depth: usize,
    /// Canvas size in pixels; drawing is clamped to it
    pub canvas_width: f64,
    pub canvas_height: f64,
    /// Inset of a zone's label from its top-left corner
    pub label_offset: f64,
    pub matrix: MatrixGridParams,
    pub answers: AnswerGridParams,
    pub segmented: SegmentedGridParams,
    /// Digits expected by the DNI preview
    pub dni_length: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_depth: DEFAULT_HISTORY_DEPTH,
            canvas_width: 800.0,
            canvas_height: 600.0,
            label_offset: 4.0,
            matrix: MatrixGridParams::default(),
            answers: AnswerGridParams::default(),
            segmented: SegmentedGridParams::default(),
            dni_length: 8,
        }
    }
}

/// Editor state for host integration.
///
/// Every mutating operation snapshots history before it changes the
/// registry, and only after its validation has passed.
pub struct ZoneEditor<I: Interaction = HeadlessInteraction> {
    registry: ZoneRegistry,
    history: HistoryStack,
    selection: SelectionSet,
    clipboard: ClipboardBuffer,
    input: InputState,
    config: EditorConfig,
    events: Arc<EventBus>,
    interaction: I,
}

impl<I: Interaction> ZoneEditor<I> {
    /// Creates an empty editor with its own event bus.
    pub fn new(config: EditorConfig, interaction: I) -> Self {
        Self::with_event_bus(config, interaction, Arc::new(EventBus::new()))
    }

    /// Creates an empty editor publishing on an existing bus.
    pub fn with_event_bus(config: EditorConfig, interaction: I, events: Arc<EventBus>) -> Self {
        Self {
            registry: ZoneRegistry::with_event_bus(Arc::clone(&events)),
            history: HistoryStack::new(config.history_depth),
            selection: SelectionSet::new(),
            clipboard: ClipboardBuffer::default(),
            input: InputState::Idle,
            config,
            events,
            interaction,
        }
    }

    /// Bus renderers and list views subscribe to.
    pub fn events(&self) -> &Arc<EventBus> {
        &self.events
    }

    pub fn registry(&self) -> &ZoneRegistry {
        &self.registry
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn clipboard(&self) -> &ClipboardBuffer {
        &self.clipboard
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn interaction(&self) -> &I {
        &self.interaction
    }

    pub fn interaction_mut(&mut self) -> &mut I {
        &mut self.interaction
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Number of undoable snapshots.
    pub fn history_depth(&self) -> usize {
        self.history.depth()
    }

    pub fn input_state(&self) -> &InputState {
        &self.input
    }

    pub fn mode(&self) -> InputMode {
        self.input.mode()
    }

    /// Where a renderer should place the label of `zone`.
    pub fn label_position(&self, zone: &zonekit_core::Zone) -> zonekit_core::CanvasPoint {
        zonekit_core::CanvasPoint::new(
            zone.left + self.config.label_offset,
            zone.top + self.config.label_offset,
        )
    }

    fn publish(&self, event: LayoutEvent) {
        let _ = self.events.publish(event);
    }

    /// Status line for the operator.
    fn notify(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("{}", message);
        self.publish(LayoutEvent::Notification(NotificationEvent::Status {
            message,
        }));
    }

    fn style(&self, name: &str, style: ZoneStyle) {
        self.publish(LayoutEvent::Style(StyleEvent::ZoneStyled {
            name: name.to_string(),
            style,
        }));
    }

    fn set_input(&mut self, state: InputState) {
        let before = self.input.mode();
        self.input = state;
        let after = self.input.mode();
        if before != after {
            tracing::debug!("Input mode {} -> {}", before, after);
            self.publish(LayoutEvent::Input(after));
        }
    }
}

impl Default for ZoneEditor<HeadlessInteraction> {
    fn default() -> Self {
        Self::new(EditorConfig::default(), HeadlessInteraction)
    }
}

impl<I: Interaction> std::fmt::Debug for ZoneEditor<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZoneEditor")
            .field("zones", &self.registry.len())
            .field("history_depth", &self.history.depth())
            .field("selected", &self.selection.len())
            .field("clipboard", &self.clipboard.len())
            .field("mode", &self.input.mode())
            .finish()
    }
}
