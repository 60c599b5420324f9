//! Pointer input state machine.
//!
//! ```text
//! Idle --down on empty--> Drawing --up--> Idle (name prompt)
//! Idle --down on zone---> Dragging --up--> Idle (edit prompt if not moved)
//! Idle --prepare_paste--> AwaitingPastePlacement --down--> Idle (paste)
//! ```
//!
//! Events are routed by the current state; nothing is queued.

use zonekit_core::{CanvasPoint, InputMode, Result, Zone};

use super::ZoneEditor;
use crate::interaction::Interaction;

/// Where pointer input currently goes
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputState {
    #[default]
    Idle,
    /// Rubber band between `origin` and `current`
    Drawing {
        origin: CanvasPoint,
        current: CanvasPoint,
    },
    /// Zone `name` follows the pointer; `last` is the previous pointer
    /// position
    Dragging {
        name: String,
        last: CanvasPoint,
        moved: bool,
    },
    /// The next pointer-down places the clipboard
    AwaitingPastePlacement,
}

impl InputState {
    pub fn mode(&self) -> InputMode {
        match self {
            InputState::Idle => InputMode::Idle,
            InputState::Drawing { .. } => InputMode::Drawing,
            InputState::Dragging { .. } => InputMode::Dragging,
            InputState::AwaitingPastePlacement => InputMode::AwaitingPastePlacement,
        }
    }
}

/// Normalized rectangle of an in-progress drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RubberBand {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl RubberBand {
    /// Rectangle spanned by two corners in any order.
    pub fn from_corners(a: CanvasPoint, b: CanvasPoint) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    pub fn into_zone(self, name: impl Into<String>) -> Zone {
        Zone::new(name, self.left, self.top, self.width, self.height)
    }
}

/// What a pointer event did
#[derive(Debug, Clone, PartialEq)]
pub enum InputOutcome {
    /// Nothing changed
    None,
    SelectionToggled { name: String, selected: bool },
    DrawingStarted,
    DragStarted { name: String },
    ZoneCreated(Zone),
    ZoneMoved(Zone),
    ZoneRenamed { from: String, to: String },
    ZoneDeleted { name: String },
    /// Names of the pasted zones
    Pasted(Vec<String>),
    /// A drawing or paste was abandoned
    Discarded,
}

impl<I: Interaction> ZoneEditor<I> {
    /// Pointer pressed at `point`. `toggle` is the selection modifier
    /// (Ctrl).
    pub fn pointer_down(&mut self, point: CanvasPoint, toggle: bool) -> Result<InputOutcome> {
        match self.input {
            InputState::AwaitingPastePlacement => {
                return self.paste_at(point).map(InputOutcome::Pasted);
            }
            InputState::Drawing { .. } | InputState::Dragging { .. } => {
                tracing::debug!("Pointer down without matching up, resetting input");
                self.set_input(InputState::Idle);
            }
            InputState::Idle => {}
        }

        let hit = self.registry.hit_test(point).map(|z| z.name.clone());
        let outcome = match hit {
            Some(name) if toggle => {
                let selected = self.toggle_selection(&name);
                InputOutcome::SelectionToggled { name, selected }
            }
            Some(name) => {
                self.set_input(InputState::Dragging {
                    name: name.clone(),
                    last: point,
                    moved: false,
                });
                InputOutcome::DragStarted { name }
            }
            None => {
                let origin = self.clamp_to_canvas(point);
                let current =
                    self.clamp_to_canvas(CanvasPoint::new(origin.x + 1.0, origin.y + 1.0));
                self.set_input(InputState::Drawing { origin, current });
                InputOutcome::DrawingStarted
            }
        };
        Ok(outcome)
    }

    /// Pointer moved to `point`.
    ///
    /// The first movement of a drag snapshots history once for the whole
    /// drag.
    pub fn pointer_move(&mut self, point: CanvasPoint) -> InputOutcome {
        let point = match &self.input {
            InputState::Drawing { .. } => self.clamp_to_canvas(point),
            _ => point,
        };
        match &mut self.input {
            InputState::Drawing { current, .. } => {
                *current = point;
                InputOutcome::None
            }
            InputState::Dragging { name, last, moved } => {
                let (dx, dy) = (point.x - last.x, point.y - last.y);
                *last = point;
                let first_move = !*moved;
                *moved = true;
                let name = name.clone();
                if first_move {
                    self.snapshot();
                }
                let Some(zone) = self.registry.find(&name) else {
                    return InputOutcome::None;
                };
                let (left, top) = (zone.left + dx, zone.top + dy);
                match self.registry.set_position(&name, left, top) {
                    Some(zone) => InputOutcome::ZoneMoved(zone),
                    None => InputOutcome::None,
                }
            }
            _ => InputOutcome::None,
        }
    }

    /// Pointer released.
    ///
    /// A drawing ends at the corner the last `pointer_move` tracked, so a
    /// click without movement leaves a 1x1 zone.
    pub fn pointer_up(&mut self, _point: CanvasPoint) -> InputOutcome {
        match std::mem::take(&mut self.input) {
            InputState::Drawing { origin, current } => {
                self.set_input_from(InputMode::Drawing);
                self.finish_drawing(RubberBand::from_corners(origin, current))
            }
            InputState::Dragging { name, moved, .. } => {
                self.set_input_from(InputMode::Dragging);
                if moved {
                    match self.registry.find(&name) {
                        Some(zone) => InputOutcome::ZoneMoved(zone.clone()),
                        None => InputOutcome::None,
                    }
                } else {
                    self.edit_zone(&name)
                }
            }
            other => {
                self.input = other;
                InputOutcome::None
            }
        }
    }

    /// Abandons any drawing, drag or pending paste.
    pub fn cancel(&mut self) -> InputOutcome {
        match self.input {
            InputState::Idle => InputOutcome::None,
            InputState::Dragging { .. } => {
                self.set_input(InputState::Idle);
                InputOutcome::None
            }
            InputState::Drawing { .. } | InputState::AwaitingPastePlacement => {
                self.set_input(InputState::Idle);
                InputOutcome::Discarded
            }
        }
    }

    /// The rectangle being drawn, if any.
    pub fn rubber_band(&self) -> Option<RubberBand> {
        match &self.input {
            InputState::Drawing { origin, current } => {
                Some(RubberBand::from_corners(*origin, *current))
            }
            _ => None,
        }
    }

    /// Asks what to do with an existing zone: rename it, or delete it when
    /// the answer is blank.
    pub fn edit_zone(&mut self, name: &str) -> InputOutcome {
        if !self.registry.contains(name) {
            return InputOutcome::None;
        }
        let message = format!(
            "Zone: \"{}\"\n1. Type a new name\n2. Leave blank to delete",
            name
        );
        let Some(answer) = self.interaction.prompt_text(&message, Some(name)) else {
            return InputOutcome::None;
        };
        let answer = answer.trim();
        if answer.is_empty() {
            self.delete_zone(name);
            InputOutcome::ZoneDeleted {
                name: name.to_string(),
            }
        } else if answer == name {
            InputOutcome::None
        } else {
            self.rename_zone(name, answer);
            InputOutcome::ZoneRenamed {
                from: name.to_string(),
                to: answer.to_string(),
            }
        }
    }

    fn finish_drawing(&mut self, band: RubberBand) -> InputOutcome {
        let Some(answer) = self
            .interaction
            .prompt_text("Zone name (e.g. 1A, D00):", None)
        else {
            return InputOutcome::Discarded;
        };
        let name = answer.trim();
        if name.is_empty() {
            return InputOutcome::Discarded;
        }
        if self.registry.contains(name) {
            let question = format!("Zone \"{}\" already exists. Overwrite it?", name);
            if !self.interaction.confirm(&question) {
                return InputOutcome::Discarded;
            }
        }
        let zone = self.upsert_zone(band.into_zone(name));
        tracing::debug!("Drew zone {}", zone);
        InputOutcome::ZoneCreated(zone)
    }

    /// Publishes the return to idle after the state was taken out.
    fn set_input_from(&mut self, before: InputMode) {
        self.input = InputState::Idle;
        if before != InputMode::Idle {
            self.publish(zonekit_core::LayoutEvent::Input(InputMode::Idle));
        }
    }

    fn clamp_to_canvas(&self, point: CanvasPoint) -> CanvasPoint {
        CanvasPoint::new(
            point.x.max(0.0).min(self.config.canvas_width),
            point.y.max(0.0).min(self.config.canvas_height),
        )
    }
}
