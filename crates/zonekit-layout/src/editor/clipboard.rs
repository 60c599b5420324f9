//! Copy and paste for the editor.

use zonekit_core::{CanvasPoint, Result, ZoneStyle};

use super::{InputState, ZoneEditor};
use crate::clipboard::{plan_paste, ClipboardBuffer, Renumbering};
use crate::interaction::Interaction;

impl<I: Interaction> ZoneEditor<I> {
    /// Copies the selected zones, replacing the previous clipboard.
    ///
    /// With nothing selected the clipboard is left as it was. Returns the
    /// number of zones copied.
    pub fn copy_selection(&mut self) -> usize {
        if self.selection.is_empty() {
            return 0;
        }
        self.clipboard = ClipboardBuffer::from_selection(&self.selection, &self.registry);
        let count = self.clipboard.len();
        self.notify(format!("{} zones copied. Use Ctrl+V to paste.", count));
        count
    }

    /// Arms paste placement: the next pointer-down places the clipboard.
    ///
    /// Returns false when the clipboard is empty.
    pub fn prepare_paste(&mut self) -> bool {
        if self.clipboard.is_empty() {
            self.notify("Nothing to paste");
            return false;
        }
        self.set_input(InputState::AwaitingPastePlacement);
        self.notify("Click where the pasted zones should go");
        true
    }

    /// Leaves paste placement without pasting.
    pub fn cancel_paste(&mut self) {
        if self.input == InputState::AwaitingPastePlacement {
            self.set_input(InputState::Idle);
            tracing::debug!("Paste cancelled");
        }
    }

    /// Pastes the clipboard with its bounding-box corner at `placement`.
    ///
    /// The pasted zones become the selection. Returns their names in
    /// clipboard order.
    pub fn paste_at(&mut self, placement: CanvasPoint) -> Result<Vec<String>> {
        self.set_input(InputState::Idle);
        if self.clipboard.is_empty() {
            return Ok(Vec::new());
        }

        let renumbering = self.ask_renumbering();
        let registry = &self.registry;
        let pasted = plan_paste(&self.clipboard, placement, renumbering.as_ref(), |name| {
            registry.contains(name)
        });

        self.snapshot();
        let names: Vec<String> = pasted.iter().map(|z| z.name.clone()).collect();
        for zone in pasted {
            self.registry.insert(zone);
        }

        self.clear_selection();
        for name in &names {
            self.selection.toggle(name);
            self.style(name, ZoneStyle::Selected);
        }
        self.publish_selection();
        self.notify(format!("{} zones pasted", names.len()));
        Ok(names)
    }

    /// Offers to renumber when the first copied name is `<number><letters>`.
    ///
    /// A declined confirm, a cancelled prompt or an answer that is not a
    /// number all paste without renumbering.
    fn ask_renumbering(&mut self) -> Option<Renumbering> {
        let candidate = self.clipboard.renumber_candidate()?;
        if !self
            .interaction
            .confirm("Renumber the pasted zones automatically?")
        {
            return None;
        }
        let message = format!("Number for the new zones (current: {}):", candidate.number);
        let default = candidate.number.saturating_add(1).to_string();
        let answer = self.interaction.prompt_text(&message, Some(&default))?;
        let answer = answer.trim();
        match answer.parse::<u32>() {
            Ok(number) => Some(Renumbering::new(candidate.number, number)),
            Err(_) => {
                tracing::warn!(
                    "Renumber start '{}' is not a non-negative integer; pasting without renumbering",
                    answer
                );
                None
            }
        }
    }
}
