//! Clue data and the reveal state machine.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Display state of a clue.
///
/// Every clue starts `Hidden` (only its point value visible) and advances
/// one state per activation: `Hidden` → `Question` → `Answer`. The state
/// never moves backward and never skips; `Answer` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Showing {
    /// Nothing revealed; the cell shows its point value.
    #[default]
    Hidden,
    /// The question text is displayed.
    Question,
    /// The answer text is displayed; no further transitions.
    Answer,
}

/// Result of activating a clue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealStep {
    /// The clue moved from `Hidden` to `Question`.
    QuestionShown,
    /// The clue moved from `Question` to `Answer`; judgment is now due.
    AnswerShown,
    /// The clue was already in `Answer`; nothing changed.
    AlreadyAnswered,
}

/// One question/answer pair with its display state.
///
/// A clue is owned exclusively by its [`Category`](super::Category) and its
/// display state is mutated only through [`Clue::advance`], which is the
/// whole of the reveal state machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    #[serde(default)]
    showing: Showing,
}

impl Clue {
    /// Creates a new hidden clue.
    ///
    /// # Errors
    ///
    /// Returns an error if the question or answer is empty (after trimming).
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Result<Self> {
        let question = question.into();
        let answer = answer.into();

        if question.trim().is_empty() {
            anyhow::bail!("Clue question cannot be empty");
        }
        if answer.trim().is_empty() {
            anyhow::bail!("Clue answer cannot be empty");
        }

        Ok(Self {
            question,
            answer,
            showing: Showing::Hidden,
        })
    }

    /// The question text.
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    /// The answer text.
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// Current display state.
    #[must_use]
    pub const fn showing(&self) -> Showing {
        self.showing
    }

    /// Advances the display state by one step.
    ///
    /// `Hidden` becomes `Question`, `Question` becomes `Answer`, and
    /// `Answer` stays put ([`RevealStep::AlreadyAnswered`]). This is the
    /// only way the display state changes.
    pub fn advance(&mut self) -> RevealStep {
        match self.showing {
            Showing::Hidden => {
                self.showing = Showing::Question;
                RevealStep::QuestionShown
            }
            Showing::Question => {
                self.showing = Showing::Answer;
                RevealStep::AnswerShown
            }
            Showing::Answer => RevealStep::AlreadyAnswered,
        }
    }
}
