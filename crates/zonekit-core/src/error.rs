//! Error handling for ZoneKit
//!
//! Every failure of the layout engine is reported synchronously to the
//! caller before any mutation or history snapshot happens:
//! - Validation errors (missing anchor zones, invalid user input)
//! - Parse errors (malformed interchange data)
//! - I/O errors (reading or writing interchange files)
//!
//! Declined confirmations are not errors; operations report them as a
//! silent no-op.

use std::fmt;
use thiserror::Error;

/// Anchors missing for one row range of a segmented grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingGroup {
    /// First question number of the group (1-based).
    pub first_row: u32,
    /// Last question number of the group, inclusive.
    pub last_row: u32,
    /// Anchor names that do not exist yet.
    pub missing: Vec<String>,
}

impl fmt::Display for MissingGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} for questions {}-{}",
            self.missing.join(", "),
            self.first_row,
            self.last_row
        )
    }
}

fn join_groups(groups: &[MissingGroup]) -> String {
    groups
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Layout engine error type
#[derive(Error, Debug)]
pub enum LayoutError {
    /// Reference zones required by a grid algorithm do not exist
    #[error("{operation} needs the anchor zones {}; create them manually first", .missing.join(", "))]
    MissingAnchors {
        /// The grid algorithm that was requested.
        operation: String,
        /// Names of the anchors that are absent.
        missing: Vec<String>,
    },

    /// One or more groups of a segmented grid lack their anchors
    #[error("Missing anchor zones: {}", join_groups(.0))]
    MissingGroupAnchors(Vec<MissingGroup>),

    /// A user-supplied value failed validation
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        /// The parameter that was rejected.
        field: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Interchange data could not be parsed
    #[error("Malformed zone data: {0}")]
    Parse(#[from] serde_json::Error),

    /// Reading or writing an interchange file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl LayoutError {
    /// Shorthand for [`LayoutError::InvalidInput`].
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for errors caused by missing anchors or rejected input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingAnchors { .. } | Self::MissingGroupAnchors(_) | Self::InvalidInput { .. }
        )
    }
}

/// Result type alias for layout operations
pub type Result<T> = std::result::Result<T, LayoutError>;
