//! DNI preview: highlights the matrix cell of every digit.

use zonekit_core::{LayoutError, Result, ZoneStyle};

use super::ZoneEditor;
use crate::interaction::Interaction;

impl<I: Interaction> ZoneEditor<I> {
    /// Highlights `D{digit}{position}` for each digit of `value`.
    ///
    /// Every matrix cell is reset to the normal style first. Only style
    /// events are published; the registry and history are not touched.
    /// Returns the names that were highlighted.
    pub fn preview_dni(&mut self, value: &str) -> Result<Vec<String>> {
        let value = value.trim();
        let expected = self.config.dni_length;
        if value.len() != expected || !value.bytes().all(|b| b.is_ascii_digit()) {
            let error = LayoutError::invalid_input(
                "DNI",
                format!("expected exactly {} digits, got '{}'", expected, value),
            );
            tracing::warn!("{}", error);
            return Err(error);
        }

        let matrix = &self.config.matrix;
        for row in 0..matrix.rows {
            for col in 0..matrix.columns {
                let name = matrix.cell_name(row, col);
                if self.registry.contains(&name) {
                    self.style(&name, ZoneStyle::Normal);
                }
            }
        }

        let mut highlighted = Vec::new();
        for (position, digit) in value.bytes().enumerate() {
            let name = matrix.cell_name(u32::from(digit - b'0'), position as u32);
            if self.registry.contains(&name) {
                self.style(&name, ZoneStyle::Highlighted);
                highlighted.push(name);
            }
        }
        tracing::debug!("DNI preview highlighted {} cells", highlighted.len());
        Ok(highlighted)
    }

    /// Asks for a DNI number and previews it. A cancelled prompt does
    /// nothing.
    pub fn prompt_dni_preview(&mut self) -> Result<Option<Vec<String>>> {
        let message = format!("DNI number ({} digits):", self.config.dni_length);
        let Some(answer) = self.interaction.prompt_text(&message, None) else {
            return Ok(None);
        };
        self.preview_dni(&answer).map(Some)
    }
}
