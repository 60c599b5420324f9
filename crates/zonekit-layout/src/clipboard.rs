//! Copy/paste of zone sets.
//!
//! A paste keeps the relative geometry of the copied zones: the top-left
//! corner of their bounding box lands on the placement point. Names can be
//! renumbered on the way and never collide with existing zones.

use zonekit_core::{CanvasPoint, Zone};

use crate::naming::{leading_number, unique_name, ZoneName};
use crate::registry::ZoneRegistry;
use crate::selection::SelectionSet;

/// Zones captured by the last copy, in selection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClipboardBuffer {
    zones: Vec<Zone>,
}

impl ClipboardBuffer {
    pub fn new(zones: Vec<Zone>) -> Self {
        Self { zones }
    }

    /// Copies the selected zones that still exist.
    pub fn from_selection(selection: &SelectionSet, registry: &ZoneRegistry) -> Self {
        Self {
            zones: selection
                .names()
                .iter()
                .filter_map(|name| registry.find(name))
                .cloned()
                .collect(),
        }
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Minimum `left` and minimum `top` over the buffer.
    pub fn origin(&self) -> Option<CanvasPoint> {
        if self.zones.is_empty() {
            return None;
        }
        let (x, y) = self
            .zones
            .iter()
            .fold((f64::INFINITY, f64::INFINITY), |(x, y), zone| {
                (x.min(zone.left), y.min(zone.top))
            });
        Some(CanvasPoint::new(x, y))
    }

    /// The structured name of the first buffered zone, if it has one.
    pub fn renumber_candidate(&self) -> Option<ZoneName> {
        self.zones.first().and_then(|zone| ZoneName::parse(&zone.name))
    }
}

/// Rewrites the leading number of pasted names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renumbering {
    pub from: u32,
    pub to: u32,
}

impl Renumbering {
    pub fn new(from: u32, to: u32) -> Self {
        Self { from, to }
    }

    /// `"1B"` becomes `"16B"` and `"1A_1"` becomes `"16A_1"` for `1 -> 16`.
    /// Names with another number or no numeric prefix are returned
    /// unchanged.
    pub fn apply(&self, name: &str) -> String {
        match leading_number(name) {
            Some((number, rest)) if number == self.from => format!("{}{}", self.to, rest),
            _ => name.to_string(),
        }
    }
}

/// Computes the zones a paste at `placement` inserts.
///
/// `taken` reports names already in use; names produced earlier in the same
/// paste are treated as taken too.
pub fn plan_paste(
    buffer: &ClipboardBuffer,
    placement: CanvasPoint,
    renumbering: Option<&Renumbering>,
    taken: impl Fn(&str) -> bool,
) -> Vec<Zone> {
    let Some(origin) = buffer.origin() else {
        return Vec::new();
    };
    let dx = placement.x - origin.x;
    let dy = placement.y - origin.y;

    let mut pasted: Vec<Zone> = Vec::with_capacity(buffer.len());
    for zone in buffer.zones() {
        let base = match renumbering {
            Some(r) => r.apply(&zone.name),
            None => zone.name.clone(),
        };
        let name = unique_name(&base, |candidate| {
            taken(candidate) || pasted.iter().any(|z| z.name == candidate)
        });
        pasted.push(Zone {
            name,
            ..zone.translated(dx, dy)
        });
    }
    pasted
}
