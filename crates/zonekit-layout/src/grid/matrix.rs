use zonekit_core::{Result, Zone};

use super::{invalid_params, require_anchors, GridPlan};
use crate::naming::matrix_cell;
use crate::registry::ZoneRegistry;

/// Parameters for a fixed matrix such as the DNI digit grid.
///
/// Rows are digit values, columns are digit positions: cell `D37` marks
/// digit 3 in position 7.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixGridParams {
    /// Name prefix of every cell
    pub prefix: String,
    /// Number of rows
    pub rows: u32,
    /// Number of columns
    pub columns: u32,
}

impl MatrixGridParams {
    pub fn new(prefix: impl Into<String>, rows: u32, columns: u32) -> Self {
        Self {
            prefix: prefix.into(),
            rows,
            columns,
        }
    }

    /// Two rows and two columns are needed to derive spacing.
    pub fn is_valid(&self) -> bool {
        !self.prefix.is_empty() && self.rows >= 2 && self.columns >= 2
    }

    pub fn total_cells(&self) -> u32 {
        self.rows * self.columns
    }

    pub fn cell_name(&self, row: u32, col: u32) -> String {
        matrix_cell(&self.prefix, row, col)
    }

    /// Anchors at (0,0), (1,0) and (0,1), in that order.
    pub fn anchor_names(&self) -> [String; 3] {
        [
            self.cell_name(0, 0),
            self.cell_name(1, 0),
            self.cell_name(0, 1),
        ]
    }

    /// Every cell except the three anchors is (re)written, overwriting a
    /// previous generation.
    pub(super) fn plan(&self, label: &'static str, registry: &ZoneRegistry) -> Result<GridPlan> {
        if !self.is_valid() {
            return Err(invalid_params(label, self));
        }
        let anchor_names = self.anchor_names();
        let anchors = require_anchors(label, registry, &anchor_names)?;
        let (origin, next_row, next_col) = (anchors[0], anchors[1], anchors[2]);

        let horizontal_spacing = next_col.left - origin.left;
        let vertical_spacing = next_row.top - origin.top;

        let mut plan = GridPlan::new(label);
        for row in 0..self.rows {
            for col in 0..self.columns {
                let name = self.cell_name(row, col);
                if anchor_names.contains(&name) {
                    plan.kept.push(name);
                    continue;
                }
                plan.cells.push(Zone::new(
                    name,
                    origin.left + f64::from(col) * horizontal_spacing,
                    origin.top + f64::from(row) * vertical_spacing,
                    origin.width,
                    origin.height,
                ));
            }
        }
        Ok(plan)
    }
}

impl Default for MatrixGridParams {
    fn default() -> Self {
        Self::new("D", 10, 8)
    }
}
