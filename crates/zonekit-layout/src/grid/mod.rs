//! # Grid Generation Module
//!
//! Derives many zones from a few manually placed anchor zones by linear
//! interpolation of position.
//!
//! Supports:
//! - Fixed matrices (the 10×8 DNI digit grid), anchored by three cells
//! - Simple answer grids (N questions × option letters), anchored by four
//!   cells
//! - Segmented answer grids (e.g. 50 questions over several printed
//!   columns), each group of rows anchored separately
//!
//! Generation is split in two steps. [`GridGenerator::plan`] validates
//! the anchors and computes every cell without touching the registry;
//! [`GridGenerator::apply`] writes a plan. The editor snapshots history
//! between the two, so a failed validation never leaves a snapshot or a
//! partial grid behind.

mod answers;
mod matrix;
mod segmented;

pub use answers::AnswerGridParams;
pub use matrix::MatrixGridParams;
pub use segmented::{AnswerGroup, SegmentedGridParams};

use zonekit_core::{LayoutError, Result, Zone};

use crate::registry::ZoneRegistry;

/// Which grid to generate, with its parameters
#[derive(Debug, Clone, PartialEq)]
pub enum GridOperation {
    /// Fixed row × column matrix
    Matrix(MatrixGridParams),
    /// Questions × options with four anchors
    Answers(AnswerGridParams),
    /// Questions × options anchored per group of rows
    Segmented(SegmentedGridParams),
}

impl GridOperation {
    /// Human-readable name used in messages.
    pub fn label(&self) -> &'static str {
        match self {
            GridOperation::Matrix(_) => "DNI grid",
            GridOperation::Answers(_) => "Answer grid",
            GridOperation::Segmented(_) => "Complete answer grid",
        }
    }

    /// Validate the parameters (not the anchors)
    pub fn is_valid(&self) -> bool {
        match self {
            GridOperation::Matrix(params) => params.is_valid(),
            GridOperation::Answers(params) => params.is_valid(),
            GridOperation::Segmented(params) => params.is_valid(),
        }
    }
}

/// Cells computed for one grid request.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPlan {
    /// Label of the operation that produced the plan.
    pub operation: &'static str,
    /// Zones to upsert, in generation order.
    pub cells: Vec<Zone>,
    /// Cell names left untouched because they are anchors or already exist.
    pub kept: Vec<String>,
}

impl GridPlan {
    fn new(operation: &'static str) -> Self {
        Self {
            operation,
            cells: Vec::new(),
            kept: Vec::new(),
        }
    }
}

/// Planner and writer for grid operations
pub struct GridGenerator;

impl GridGenerator {
    /// Validates anchors and computes every cell of `operation`.
    ///
    /// Reads `registry` only.
    pub fn plan(operation: &GridOperation, registry: &ZoneRegistry) -> Result<GridPlan> {
        let label = operation.label();
        match operation {
            GridOperation::Matrix(params) => params.plan(label, registry),
            GridOperation::Answers(params) => params.plan(label, registry),
            GridOperation::Segmented(params) => params.plan(label, registry),
        }
    }

    /// Upserts every planned cell. Returns the number of zones written.
    pub fn apply(plan: GridPlan, registry: &mut ZoneRegistry) -> usize {
        let count = plan.cells.len();
        for cell in plan.cells {
            registry.insert(cell);
        }
        tracing::info!(
            "{}: {} cells written, {} kept",
            plan.operation,
            count,
            plan.kept.len()
        );
        count
    }
}

/// Looks up every anchor, failing with the full list of missing names.
fn require_anchors<'a>(
    operation: &str,
    registry: &'a ZoneRegistry,
    names: &[String],
) -> Result<Vec<&'a Zone>> {
    let missing: Vec<String> = names
        .iter()
        .filter(|n| !registry.contains(n))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(LayoutError::MissingAnchors {
            operation: operation.to_string(),
            missing,
        });
    }
    Ok(names.iter().filter_map(|n| registry.find(n)).collect())
}

fn options_are_valid(options: &[String], minimum: usize) -> bool {
    options.len() >= minimum && options.iter().all(|o| !o.is_empty())
}

fn invalid_params(operation: &str, params: impl std::fmt::Debug) -> LayoutError {
    LayoutError::invalid_input(
        format!("{} parameters", operation),
        format!("{:?}", params),
    )
}
