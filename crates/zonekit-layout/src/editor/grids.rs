//! Grid generation for the editor.

use zonekit_core::Result;

use super::ZoneEditor;
use crate::grid::{AnswerGridParams, GridGenerator, GridOperation};
use crate::interaction::Interaction;

impl<I: Interaction> ZoneEditor<I> {
    /// Generates the configured digit matrix from its three anchors.
    pub fn generate_matrix_grid(&mut self) -> Result<usize> {
        self.run_grid(GridOperation::Matrix(self.config.matrix.clone()))
    }

    /// Generates the simple answer grid.
    ///
    /// `question_count` is the raw user input; absent or blank uses the
    /// configured count.
    pub fn generate_answer_grid(&mut self, question_count: Option<&str>) -> Result<usize> {
        let params = match AnswerGridParams::from_input(question_count, &self.config.answers) {
            Ok(params) => params,
            Err(e) => {
                self.report_failure(&e);
                return Err(e);
            }
        };
        self.run_grid(GridOperation::Answers(params))
    }

    /// Asks the operator for the question count, then generates the
    /// simple answer grid. A cancelled prompt does nothing.
    pub fn prompt_answer_grid(&mut self) -> Result<Option<usize>> {
        let default = self.config.answers.questions.to_string();
        let Some(answer) = self
            .interaction
            .prompt_text("Number of questions:", Some(&default))
        else {
            return Ok(None);
        };
        self.generate_answer_grid(Some(&answer)).map(Some)
    }

    /// Generates the segmented answer grid, every group from its own
    /// anchors.
    pub fn generate_segmented_grid(&mut self) -> Result<usize> {
        self.run_grid(GridOperation::Segmented(self.config.segmented.clone()))
    }

    /// Validates, snapshots once, then writes every cell.
    ///
    /// On error nothing is written and no snapshot is taken.
    pub fn run_grid(&mut self, operation: GridOperation) -> Result<usize> {
        let plan = match GridGenerator::plan(&operation, &self.registry) {
            Ok(plan) => plan,
            Err(e) => {
                self.report_failure(&e);
                return Err(e);
            }
        };
        self.snapshot();
        let count = GridGenerator::apply(plan, &mut self.registry);
        self.notify(format!("{} generated ({} zones)", operation.label(), count));
        Ok(count)
    }

    fn report_failure(&self, error: &zonekit_core::LayoutError) {
        tracing::warn!("{}", error);
        self.publish(zonekit_core::LayoutEvent::Notification(
            zonekit_core::NotificationEvent::Status {
                message: error.to_string(),
            },
        ));
    }
}
