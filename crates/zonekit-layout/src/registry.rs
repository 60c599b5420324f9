use std::sync::Arc;

use zonekit_core::{CanvasPoint, EventBus, LayoutEvent, Zone, ZoneEvent};

/// Authoritative store of named zones.
///
/// `ZoneRegistry` is responsible for:
/// - Keeping at most one zone per name (names are case-sensitive)
/// - Keeping zones in last-write order: an upsert moves the name to the end
/// - Mirroring every structural change to the event bus so renderers and
///   zone lists stay in sync
///
/// The registry never snapshots history itself; [`crate::ZoneEditor`]
/// decides when a change is undoable.
#[derive(Debug, Default)]
pub struct ZoneRegistry {
    zones: Vec<Zone>,
    events: Option<Arc<EventBus>>,
}

impl ZoneRegistry {
    /// Creates an empty registry that publishes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty registry publishing its changes on `events`.
    pub fn with_event_bus(events: Arc<EventBus>) -> Self {
        Self {
            zones: Vec::new(),
            events: Some(events),
        }
    }

    /// Inserts a zone built from its parts, replacing any zone with the
    /// same name.
    ///
    /// # Returns
    ///
    /// A copy of the stored zone.
    pub fn upsert(
        &mut self,
        name: impl Into<String>,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> Zone {
        let zone = Zone::new(name, left, top, width, height);
        self.insert(zone.clone());
        zone
    }

    /// Inserts `zone`, replacing any zone with the same name.
    ///
    /// The replaced zone is removed first (and announced as removed), then
    /// the new record is appended at the end of the list.
    pub fn insert(&mut self, zone: Zone) {
        self.remove(&zone.name);
        tracing::debug!("Zone {} stored", zone);
        self.publish(ZoneEvent::Added(zone.clone()));
        self.zones.push(zone);
    }

    /// Removes the zone named `name`, if present.
    pub fn remove(&mut self, name: &str) -> Option<Zone> {
        let index = self.position(name)?;
        let zone = self.zones.remove(index);
        self.publish(ZoneEvent::Removed {
            name: zone.name.clone(),
        });
        Some(zone)
    }

    /// Looks up a zone by name.
    pub fn find(&self, name: &str) -> Option<&Zone> {
        self.zones.iter().find(|z| z.name == name)
    }

    /// Returns true if a zone named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// All zones in last-write order.
    pub fn list(&self) -> &[Zone] {
        &self.zones
    }

    /// Iterates over zones in last-write order.
    pub fn iter(&self) -> impl Iterator<Item = &Zone> {
        self.zones.iter()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Removes every zone.
    pub fn clear(&mut self) {
        self.zones.clear();
        self.publish(ZoneEvent::Cleared);
    }

    /// Replaces the whole registry with `zones`, inserting them one by one.
    ///
    /// Duplicate names in `zones` collapse to the last occurrence, exactly
    /// as a sequence of upserts would.
    pub fn replace_all(&mut self, zones: Vec<Zone>) {
        self.clear();
        for zone in zones {
            self.insert(zone);
        }
    }

    /// Deep copy of the current zone list.
    pub fn snapshot(&self) -> Vec<Zone> {
        self.zones.clone()
    }

    /// Moves a zone to a new position, keeping its place in list order.
    ///
    /// # Returns
    ///
    /// The updated zone, or `None` if no zone has that name.
    pub fn set_position(&mut self, name: &str, left: f64, top: f64) -> Option<Zone> {
        let index = self.position(name)?;
        let zone = &mut self.zones[index];
        zone.left = left;
        zone.top = top;
        let updated = zone.clone();
        self.publish(ZoneEvent::Updated(updated.clone()));
        Some(updated)
    }

    /// Renames a zone in place, keeping its geometry and list position.
    ///
    /// If a different zone already owns `to` it is removed first, so the
    /// uniqueness invariant holds after the rename.
    ///
    /// # Returns
    ///
    /// The renamed zone, or `None` if `from` does not exist.
    pub fn rename(&mut self, from: &str, to: &str) -> Option<Zone> {
        if !self.contains(from) {
            return None;
        }
        if from != to {
            self.remove(to);
        }
        let index = self.position(from)?;
        let zone = &mut self.zones[index];
        zone.name = to.to_string();
        let renamed = zone.clone();
        self.publish(ZoneEvent::Renamed {
            from: from.to_string(),
            zone: renamed.clone(),
        });
        Some(renamed)
    }

    /// Returns the topmost zone containing `point`.
    ///
    /// Zones later in the list are drawn on top, so the search runs from
    /// the end.
    pub fn hit_test(&self, point: CanvasPoint) -> Option<&Zone> {
        self.zones.iter().rev().find(|z| z.contains_point(point))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.zones.iter().position(|z| z.name == name)
    }

    fn publish(&self, event: ZoneEvent) {
        if let Some(events) = &self.events {
            let _ = events.publish(LayoutEvent::Zone(event));
        }
    }
}
