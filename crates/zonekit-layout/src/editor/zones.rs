//! Zone CRUD, undo and selection for the editor.

use zonekit_core::{HistoryEvent, LayoutEvent, SelectionEvent, Zone, ZoneStyle};

use super::ZoneEditor;
use crate::interaction::Interaction;

impl<I: Interaction> ZoneEditor<I> {
    /// Pushes an undo snapshot of the current registry.
    pub(crate) fn snapshot(&mut self) {
        self.history.snapshot(&self.registry);
        self.publish_history_depth();
    }

    fn publish_history_depth(&self) {
        self.publish(LayoutEvent::History(HistoryEvent::DepthChanged {
            depth: self.history.depth(),
        }));
    }

    /// Stores `zone`, replacing any zone with the same name.
    pub fn upsert_zone(&mut self, zone: Zone) -> Zone {
        self.snapshot();
        self.registry.insert(zone.clone());
        zone
    }

    /// Removes a zone and drops it from the selection.
    ///
    /// Unknown names are ignored without touching history.
    pub fn delete_zone(&mut self, name: &str) -> Option<Zone> {
        if !self.registry.contains(name) {
            return None;
        }
        self.snapshot();
        let removed = self.registry.remove(name);
        if self.selection.remove(name) {
            self.publish_selection();
        }
        self.notify(format!("Zone {} deleted", name));
        removed
    }

    /// Renames a zone in place. A blank `to` deletes it instead.
    ///
    /// A different zone already called `to` is replaced.
    pub fn rename_zone(&mut self, from: &str, to: &str) -> Option<Zone> {
        let to = to.trim();
        if to.is_empty() {
            self.delete_zone(from);
            return None;
        }
        if !self.registry.contains(from) {
            return None;
        }
        if from == to {
            return self.registry.find(from).cloned();
        }
        self.snapshot();
        let renamed = self.registry.rename(from, to);

        // The replaced zone's selection entry must not carry over.
        let from_selected = self.selection.contains(from);
        let to_selected = self.selection.contains(to);
        if from_selected {
            self.selection.rename(from, to);
        } else if to_selected {
            self.selection.remove(to);
        }
        if from_selected || to_selected {
            self.publish_selection();
        }
        renamed
    }

    /// Moves a zone, keeping its place in list order.
    pub fn move_zone(&mut self, name: &str, left: f64, top: f64) -> Option<Zone> {
        if !self.registry.contains(name) {
            return None;
        }
        self.snapshot();
        self.registry.set_position(name, left, top)
    }

    /// Restores the registry to the latest snapshot.
    ///
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        if !self.history.undo(&mut self.registry) {
            tracing::debug!("Nothing to undo");
            return false;
        }
        self.clear_selection();
        self.publish_history_depth();
        self.notify("Action undone");
        true
    }

    /// Toggles `name` in the selection.
    ///
    /// Returns whether the zone is selected afterwards; names that do not
    /// exist are never selected.
    pub fn toggle_selection(&mut self, name: &str) -> bool {
        if !self.registry.contains(name) {
            return false;
        }
        let selected = self.selection.toggle(name);
        let style = if selected {
            ZoneStyle::Selected
        } else {
            ZoneStyle::Normal
        };
        self.style(name, style);
        self.publish_selection();
        if !self.selection.is_empty() {
            self.notify(format!(
                "{} zones selected. Use Ctrl+C to copy.",
                self.selection.len()
            ));
        }
        selected
    }

    /// Empties the selection, restyling the zones that still exist.
    pub fn clear_selection(&mut self) {
        let previous = self.selection.clear();
        if previous.is_empty() {
            return;
        }
        for name in previous.iter().filter(|n| self.registry.contains(n)) {
            self.style(name, ZoneStyle::Normal);
        }
        self.publish_selection();
    }

    pub(crate) fn publish_selection(&self) {
        self.publish(LayoutEvent::Selection(SelectionEvent::Changed {
            selected: self.selection.names().to_vec(),
        }));
    }
}
