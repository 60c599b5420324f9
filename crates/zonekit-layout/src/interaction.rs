//! Blocking user prompts the editor needs mid-operation.
//!
//! The host implements [`Interaction`] with whatever dialogs it has. A
//! `None` from [`Interaction::prompt_text`] or `false` from
//! [`Interaction::confirm`] means the user declined, and the operation
//! that asked becomes a no-op.

use std::collections::VecDeque;

/// Source of free-text answers and yes/no confirmations.
pub trait Interaction {
    /// Asks for text, pre-filled with `default` when given.
    fn prompt_text(&mut self, message: &str, default: Option<&str>) -> Option<String>;

    /// Asks a yes/no question.
    fn confirm(&mut self, message: &str) -> bool;
}

/// Declines every prompt. Used by batch tools where nobody is asked.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeadlessInteraction;

impl Interaction for HeadlessInteraction {
    fn prompt_text(&mut self, _message: &str, _default: Option<&str>) -> Option<String> {
        None
    }

    fn confirm(&mut self, _message: &str) -> bool {
        false
    }
}

/// Replays pre-recorded answers in order and records every question.
///
/// When the script runs out, text prompts get `None` and confirmations
/// get `false`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInteraction {
    texts: VecDeque<Option<String>>,
    confirms: VecDeque<bool>,
    asked: Vec<String>,
}

impl ScriptedInteraction {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the answer to the next text prompt.
    pub fn with_text(mut self, answer: impl Into<String>) -> Self {
        self.texts.push_back(Some(answer.into()));
        self
    }

    /// Queues a cancelled text prompt.
    pub fn with_cancel(mut self) -> Self {
        self.texts.push_back(None);
        self
    }

    /// Queues the answer to the next confirmation.
    pub fn with_confirm(mut self, answer: bool) -> Self {
        self.confirms.push_back(answer);
        self
    }

    /// Every message shown so far, prompts and confirmations interleaved.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// True once every queued answer has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.texts.is_empty() && self.confirms.is_empty()
    }
}

impl Interaction for ScriptedInteraction {
    fn prompt_text(&mut self, message: &str, _default: Option<&str>) -> Option<String> {
        self.asked.push(message.to_string());
        self.texts.pop_front().flatten()
    }

    fn confirm(&mut self, message: &str) -> bool {
        self.asked.push(message.to_string());
        self.confirms.pop_front().unwrap_or(false)
    }
}
