use zonekit_core::{LayoutError, MissingGroup, Result, Zone};

use super::{invalid_params, options_are_valid, GridPlan};
use crate::naming::answer_cell;
use crate::registry::ZoneRegistry;

/// Parameters for a long answer grid split into groups of rows, each group
/// anchored on its own (questions printed across several columns).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentedGridParams {
    /// Total number of questions
    pub questions: u32,
    /// Questions per anchored group
    pub rows_per_group: u32,
    /// Option letters, at least two
    pub options: Vec<String>,
}

/// One anchored block of consecutive questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerGroup {
    pub first_row: u32,
    pub last_row: u32,
    /// `[first option, second option]` of `first_row`, followed by the
    /// first option of the next group's first row unless this is the
    /// final group.
    pub anchors: Vec<String>,
}

impl AnswerGroup {
    pub fn rows(&self) -> u32 {
        self.last_row - self.first_row + 1
    }

    pub fn is_final(&self) -> bool {
        self.anchors.len() < 3
    }
}

impl SegmentedGridParams {
    pub fn new(questions: u32, rows_per_group: u32, options: Vec<String>) -> Self {
        Self {
            questions,
            rows_per_group,
            options,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.questions > 0 && self.rows_per_group >= 2 && options_are_valid(&self.options, 2)
    }

    /// Splits `1..=questions` into groups of `rows_per_group`.
    pub fn groups(&self) -> Vec<AnswerGroup> {
        let step = self.rows_per_group.max(1);
        (1..=self.questions)
            .step_by(step as usize)
            .map(|start| {
                let last_row = (start + step - 1).min(self.questions);
                let mut anchors = vec![
                    answer_cell(start, &self.options[0]),
                    answer_cell(start, &self.options[1]),
                ];
                if start + step <= self.questions {
                    anchors.push(answer_cell(start + step, &self.options[0]));
                }
                AnswerGroup {
                    first_row: start,
                    last_row,
                    anchors,
                }
            })
            .collect()
    }

    /// All groups are checked before anything is computed; a single
    /// missing anchor anywhere fails the whole operation.
    ///
    /// Cells that already exist (anchors or zones placed by hand) are kept.
    pub(super) fn plan(&self, label: &'static str, registry: &ZoneRegistry) -> Result<GridPlan> {
        if !self.is_valid() {
            return Err(invalid_params(label, self));
        }
        let groups = self.groups();

        let missing: Vec<MissingGroup> = groups
            .iter()
            .filter_map(|group| {
                let absent: Vec<String> = group
                    .anchors
                    .iter()
                    .filter(|a| !registry.contains(a))
                    .cloned()
                    .collect();
                (!absent.is_empty()).then(|| MissingGroup {
                    first_row: group.first_row,
                    last_row: group.last_row,
                    missing: absent,
                })
            })
            .collect();
        if !missing.is_empty() {
            return Err(LayoutError::MissingGroupAnchors(missing));
        }

        let mut plan = GridPlan::new(label);
        for group in &groups {
            let (Some(first), Some(second)) = (
                registry.find(&group.anchors[0]),
                registry.find(&group.anchors[1]),
            ) else {
                continue;
            };
            let horizontal_spacing = second.left - first.left;
            // Without a closing anchor the cells are assumed square.
            let vertical_spacing = match group.anchors.get(2).and_then(|n| registry.find(n)) {
                Some(closing) => (closing.top - first.top) / f64::from(group.rows() - 1),
                None => horizontal_spacing,
            };

            for (offset, question) in (group.first_row..=group.last_row).enumerate() {
                for (column, option) in self.options.iter().enumerate() {
                    let name = answer_cell(question, option);
                    if registry.contains(&name) {
                        plan.kept.push(name);
                        continue;
                    }
                    plan.cells.push(Zone::new(
                        name,
                        first.left + column as f64 * horizontal_spacing,
                        first.top + offset as f64 * vertical_spacing,
                        first.width,
                        first.height,
                    ));
                }
            }
        }
        Ok(plan)
    }
}

impl Default for SegmentedGridParams {
    fn default() -> Self {
        Self::new(50, 3, vec!["A".into(), "B".into(), "C".into()])
    }
}
