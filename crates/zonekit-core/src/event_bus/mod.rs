//! # Event Bus Module
//!
//! Publish/subscribe channel that mirrors layout changes to collaborators.
//!
//! ## Overview
//!
//! - The registry and the editor publish typed [`LayoutEvent`]s
//! - Renderers and list views subscribe with an [`EventFilter`]
//! - Synchronous handlers run on the publishing thread; async consumers
//!   can poll a broadcast receiver instead
//!
//! Each editor owns its bus; there is no process-wide instance.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zonekit_core::event_bus::{EventBus, EventCategory, EventFilter, LayoutEvent};
//!
//! let bus = EventBus::new();
//! let subscription = bus.subscribe(
//!     EventFilter::Categories(vec![EventCategory::Zone]),
//!     |event| println!("{}", event.description()),
//! );
//! bus.unsubscribe(subscription);
//! ```

mod bus;
mod events;

pub use bus::*;
pub use events::*;
