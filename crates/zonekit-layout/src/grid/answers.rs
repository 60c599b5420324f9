use zonekit_core::{LayoutError, Result, Zone};

use super::{invalid_params, options_are_valid, require_anchors, GridPlan};
use crate::naming::answer_cell;
use crate::registry::ZoneRegistry;

/// Parameters for a simple answer grid: `questions` rows, one column per
/// option letter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerGridParams {
    /// Number of questions (rows), starting at 1
    pub questions: u32,
    /// Option letters (columns), at least three
    pub options: Vec<String>,
}

impl AnswerGridParams {
    pub fn new(questions: u32, options: Vec<String>) -> Self {
        Self { questions, options }
    }

    /// Builds parameters from the user-supplied question count.
    ///
    /// An absent or blank value falls back to `defaults`; anything that is
    /// not a positive integer is rejected.
    pub fn from_input(input: Option<&str>, defaults: &Self) -> Result<Self> {
        let Some(text) = input.map(str::trim).filter(|t| !t.is_empty()) else {
            return Ok(defaults.clone());
        };
        match text.parse::<u32>() {
            Ok(questions) if questions > 0 => Ok(Self {
                questions,
                options: defaults.options.clone(),
            }),
            _ => Err(LayoutError::invalid_input(
                "question count",
                format!("'{}' is not a positive integer", text),
            )),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.questions > 0 && options_are_valid(&self.options, 3)
    }

    pub fn total_cells(&self) -> u32 {
        self.questions * self.options.len() as u32
    }

    /// First three options of question 1, then the first option of
    /// question 2.
    pub fn anchor_names(&self) -> Vec<String> {
        vec![
            answer_cell(1, &self.options[0]),
            answer_cell(1, &self.options[1]),
            answer_cell(1, &self.options[2]),
            answer_cell(2, &self.options[0]),
        ]
    }

    /// Every cell except the four anchors is (re)written.
    pub(super) fn plan(&self, label: &'static str, registry: &ZoneRegistry) -> Result<GridPlan> {
        if !self.is_valid() {
            return Err(invalid_params(label, self));
        }
        let anchor_names = self.anchor_names();
        let anchors = require_anchors(label, registry, &anchor_names)?;
        let (first, second_option, second_question) = (anchors[0], anchors[1], anchors[3]);

        let horizontal_spacing = second_option.left - first.left;
        let vertical_spacing = second_question.top - first.top;

        let mut plan = GridPlan::new(label);
        for question in 1..=self.questions {
            for (column, option) in self.options.iter().enumerate() {
                let name = answer_cell(question, option);
                if anchor_names.contains(&name) {
                    plan.kept.push(name);
                    continue;
                }
                plan.cells.push(Zone::new(
                    name,
                    first.left + column as f64 * horizontal_spacing,
                    first.top + f64::from(question - 1) * vertical_spacing,
                    first.width,
                    first.height,
                ));
            }
        }
        Ok(plan)
    }
}

impl Default for AnswerGridParams {
    fn default() -> Self {
        Self::new(10, vec!["A".into(), "B".into(), "C".into()])
    }
}
