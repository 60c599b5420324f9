//! Interchange import/export for the editor.

use std::path::Path;

use zonekit_core::{Result, Zone};

use super::ZoneEditor;
use crate::interaction::Interaction;
use crate::interchange;

impl<I: Interaction> ZoneEditor<I> {
    /// Replaces every zone with the contents of an interchange document.
    ///
    /// Malformed input leaves the registry and history untouched.
    pub fn import_json(&mut self, text: &str) -> Result<usize> {
        self.import_zones(interchange::parse_zones(text))
    }

    fn import_zones(&mut self, parsed: Result<Vec<Zone>>) -> Result<usize> {
        let zones = match parsed {
            Ok(zones) => zones,
            Err(e) => {
                tracing::warn!("Import rejected: {}", e);
                return Err(e);
            }
        };
        self.snapshot();
        self.clear_selection();
        self.registry.replace_all(zones);
        let count = self.registry.len();
        self.notify(format!("{} zones imported", count));
        Ok(count)
    }

    /// Serializes the registry in list order.
    pub fn export_json(&self) -> Result<String> {
        interchange::to_json(self.registry.list())
    }

    /// Writes the interchange document to `path`.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        interchange::write_file(path, self.registry.list())?;
        tracing::info!("Saved {} zones to {}", self.registry.len(), path.display());
        Ok(())
    }

    /// Imports the interchange document at `path`.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        tracing::debug!("Loading zones from {}", path.display());
        self.import_zones(interchange::read_file(path))
    }
}
