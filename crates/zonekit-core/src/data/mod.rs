//! Data models for zones and canvas coordinates
//!
//! This module provides:
//! - `Zone`, the named rectangle that is the unit of output
//! - `CanvasPoint`, a position in the canvas pixel space
//! - `ZoneStyle`, the visual state a renderer should show for a zone

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

impl CanvasPoint {
    /// Creates a new canvas point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for CanvasPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// A named rectangular region over the template image.
///
/// The field layout doubles as the interchange record:
/// `{"name": ..., "left": ..., "top": ..., "width": ..., "height": ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    /// Unique, case-sensitive key
    pub name: String,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Zone {
    /// Creates a zone. Width and height are expected to be non-negative.
    pub fn new(name: impl Into<String>, left: f64, top: f64, width: f64, height: f64) -> Self {
        debug_assert!(
            width >= 0.0 && height >= 0.0,
            "zone extents must be non-negative, got {width}x{height}"
        );
        Self {
            name: name.into(),
            left,
            top,
            width,
            height,
        }
    }

    /// Right edge (`left + width`).
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (`top + height`).
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Returns true if the point lies inside the rectangle, edges included.
    pub fn contains_point(&self, point: CanvasPoint) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// Returns a copy of this zone shifted by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            left: self.left + dx,
            top: self.top + dy,
            ..self.clone()
        }
    }
}

impl fmt::Display for Zone {
    /// Same summary the zone list shows: `1A → [120, 340] w:20 h:20`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} → [{}, {}] w:{} h:{}",
            self.name,
            self.left.round(),
            self.top.round(),
            self.width.round(),
            self.height.round()
        )
    }
}

/// Visual state requested for a zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ZoneStyle {
    /// Unselected outline
    #[default]
    Normal,
    /// Part of the current selection
    Selected,
    /// Marked by a DNI preview
    Highlighted,
}

impl fmt::Display for ZoneStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ZoneStyle::Normal => write!(f, "normal"),
            ZoneStyle::Selected => write!(f, "selected"),
            ZoneStyle::Highlighted => write!(f, "highlighted"),
        }
    }
}
