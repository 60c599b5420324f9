//! # ZoneKit Core
//!
//! Core types, errors, and change notifications for ZoneKit.
//! Provides the zone data model shared by every crate, the error taxonomy
//! of the layout engine, and the event bus that mirrors layout changes to
//! renderers and list views.

pub mod data;
pub mod error;
pub mod event_bus;

pub use data::{CanvasPoint, Zone, ZoneStyle};

pub use error::{LayoutError, MissingGroup, Result};

// Re-export event bus for convenience
pub use event_bus::{
    EventBus, EventBusConfig, EventBusError, EventCategory, EventFilter, HistoryEvent, InputMode,
    LayoutEvent, NotificationEvent, SelectionEvent, StyleEvent, SubscriptionId, ZoneEvent,
};
