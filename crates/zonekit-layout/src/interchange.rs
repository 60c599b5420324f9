//! JSON interchange format for zone sets.
//!
//! A file is an array of records, in registry order:
//!
//! ```json
//! [
//!   { "name": "1A", "left": 120.0, "top": 340.0, "width": 20.0, "height": 20.0 }
//! ]
//! ```
//!
//! Parsing is all-or-nothing. Any record that is not a valid zone rejects
//! the whole document.

use std::path::Path;

use serde::de::{self, Deserializer};
use serde::Deserialize;
use zonekit_core::{Result, Zone};

/// Suggested file name for exports.
pub const EXPORT_FILE_NAME: &str = "plantilla_zonas.json";

/// Deserializes one record, rejecting values no zone can hold.
fn checked_zone<'de, D>(deserializer: D) -> std::result::Result<Zone, D::Error>
where
    D: Deserializer<'de>,
{
    let zone = Zone::deserialize(deserializer)?;
    if zone.name.is_empty() {
        return Err(de::Error::custom("zone name must not be empty"));
    }
    let numbers = [zone.left, zone.top, zone.width, zone.height];
    if numbers.iter().any(|n| !n.is_finite()) {
        return Err(de::Error::custom(format!(
            "zone {} has a non-finite coordinate",
            zone.name
        )));
    }
    if zone.width < 0.0 || zone.height < 0.0 {
        return Err(de::Error::custom(format!(
            "zone {} has a negative extent",
            zone.name
        )));
    }
    Ok(zone)
}

#[derive(Deserialize)]
struct Record(#[serde(deserialize_with = "checked_zone")] Zone);

/// Parses an interchange document.
pub fn parse_zones(text: &str) -> Result<Vec<Zone>> {
    let records: Vec<Record> = serde_json::from_str(text)?;
    Ok(records.into_iter().map(|Record(zone)| zone).collect())
}

/// Serializes zones as pretty-printed JSON with two-space indentation.
pub fn to_json(zones: &[Zone]) -> Result<String> {
    Ok(serde_json::to_string_pretty(zones)?)
}

/// Reads and parses an interchange file.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<Zone>> {
    let text = std::fs::read_to_string(path.as_ref())?;
    parse_zones(&text)
}

/// Writes zones to an interchange file.
pub fn write_file(path: impl AsRef<Path>, zones: &[Zone]) -> Result<()> {
    std::fs::write(path.as_ref(), to_json(zones)?)?;
    Ok(())
}
