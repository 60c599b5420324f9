//! Event type definitions for the event bus.
//!
//! Layout changes are published as events so renderers and zone lists can
//! mirror the registry without holding zones themselves.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::data::{Zone, ZoneStyle};

/// Root event enum for all layout events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LayoutEvent {
    /// Registry structure changes
    Zone(ZoneEvent),
    /// Selection membership changes
    Selection(SelectionEvent),
    /// Requested restyling of individual zones
    Style(StyleEvent),
    /// Undo availability
    History(HistoryEvent),
    /// Input routing mode switched
    Input(InputMode),
    /// Transient status messages
    Notification(NotificationEvent),
}

impl LayoutEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            LayoutEvent::Zone(_) => EventCategory::Zone,
            LayoutEvent::Selection(_) => EventCategory::Selection,
            LayoutEvent::Style(_) => EventCategory::Style,
            LayoutEvent::History(_) => EventCategory::History,
            LayoutEvent::Input(_) => EventCategory::Input,
            LayoutEvent::Notification(_) => EventCategory::Notification,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            LayoutEvent::Zone(e) => e.description(),
            LayoutEvent::Selection(SelectionEvent::Changed { selected }) => {
                format!("{} zones selected", selected.len())
            }
            LayoutEvent::Style(StyleEvent::ZoneStyled { name, style }) => {
                format!("Zone {} styled {}", name, style)
            }
            LayoutEvent::History(HistoryEvent::DepthChanged { depth }) => {
                format!("Undo depth {}", depth)
            }
            LayoutEvent::Input(mode) => format!("Input mode {}", mode),
            LayoutEvent::Notification(NotificationEvent::Status { message }) => message.clone(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Zone added/removed/cleared.
    Zone,
    /// Selection changed.
    Selection,
    /// Zone restyled.
    Style,
    /// Undo history changed.
    History,
    /// Input mode changed.
    Input,
    /// Status message.
    Notification,
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventCategory::Zone => write!(f, "Zone"),
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::Style => write!(f, "Style"),
            EventCategory::History => write!(f, "History"),
            EventCategory::Input => write!(f, "Input"),
            EventCategory::Notification => write!(f, "Notification"),
        }
    }
}

/// Registry structure events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ZoneEvent {
    /// A zone was inserted (or re-inserted under an existing name).
    Added(Zone),
    /// The zone with this name was removed.
    Removed {
        /// Name of the removed zone.
        name: String,
    },
    /// A zone changed geometry without changing its list position.
    Updated(Zone),
    /// A zone changed name without changing its list position.
    Renamed {
        /// Previous name.
        from: String,
        /// The zone under its new name.
        zone: Zone,
    },
    /// Every zone was removed at once.
    Cleared,
}

impl ZoneEvent {
    fn description(&self) -> String {
        match self {
            ZoneEvent::Added(zone) => format!("Zone added: {}", zone),
            ZoneEvent::Removed { name } => format!("Zone removed: {}", name),
            ZoneEvent::Updated(zone) => format!("Zone updated: {}", zone),
            ZoneEvent::Renamed { from, zone } => format!("Zone {} renamed to {}", from, zone.name),
            ZoneEvent::Cleared => "All zones cleared".to_string(),
        }
    }
}

/// Selection events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionEvent {
    /// The selection now holds exactly these names, in selection order.
    Changed {
        /// Selected zone names.
        selected: Vec<String>,
    },
}

/// Style events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StyleEvent {
    /// The renderer should show `name` with `style`.
    ZoneStyled {
        /// Zone name.
        name: String,
        /// Requested style.
        style: ZoneStyle,
    },
}

/// History events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HistoryEvent {
    /// Number of undoable snapshots changed; zero disables undo.
    DepthChanged {
        /// Snapshots available.
        depth: usize,
    },
}

/// How positional input is currently routed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InputMode {
    /// Clicks select, drag or start drawing
    #[default]
    Idle,
    /// A rubber band is being drawn
    Drawing,
    /// A zone is being dragged
    Dragging,
    /// The next click places the clipboard contents
    AwaitingPastePlacement,
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputMode::Idle => write!(f, "idle"),
            InputMode::Drawing => write!(f, "drawing"),
            InputMode::Dragging => write!(f, "dragging"),
            InputMode::AwaitingPastePlacement => write!(f, "awaiting paste placement"),
        }
    }
}

/// Notification events
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationEvent {
    /// Short-lived status line.
    Status {
        /// Message text.
        message: String,
    },
}
