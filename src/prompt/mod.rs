//! Interactive question sequencing.
//!
//! Questions are asked strictly in order over a [`LineInput`], and each
//! answer is stored in a [`ConfigRecord`]. The only validation is that the
//! extension name is not blank; every other answer is coerced.

mod input;
mod record;
mod sequencer;

#[cfg(test)]
mod tests;

use crate::features::Feature;

pub use input::{LineInput, StdioInput};
pub use record::{Answer, ConfigRecord};
pub use sequencer::{Abort, Outcome, SequenceState, Sequencer, run_sequence};

/// The only answer that turns a yes/no question on.
pub const AFFIRMATIVE: &str = "y";

/// Identifier of a question, and of its answer in the [`ConfigRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuestionKey {
    Name,
    Description,
    Feature(Feature),
}

impl QuestionKey {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionKey::Name => "name",
            QuestionKey::Description => "description",
            QuestionKey::Feature(feature) => feature.key(),
        }
    }

    pub fn kind(self) -> AnswerKind {
        match self {
            QuestionKey::Name | QuestionKey::Description => AnswerKind::Text,
            QuestionKey::Feature(_) => AnswerKind::Flag,
        }
    }
}

/// How an answer is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind {
    /// Stored exactly as typed.
    Text,
    /// Stored as `true` iff the trimmed, lowercased answer is [`AFFIRMATIVE`].
    Flag,
}

/// A static prompt descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub key: QuestionKey,
    pub prompt: &'static str,
}

impl Question {
    pub fn new(key: QuestionKey, prompt: &'static str) -> Self {
        Self { key, prompt }
    }

    pub fn kind(&self) -> AnswerKind {
        self.key.kind()
    }

    /// Name and description, followed by one question per feature in `features`.
    pub fn sequence(features: &[Feature]) -> Vec<Question> {
        let mut questions = vec![
            Question::new(QuestionKey::Name, "Enter the name of your extension: "),
            Question::new(
                QuestionKey::Description,
                "Enter the description of your extension: ",
            ),
        ];
        questions.extend(features.iter().map(|feature| feature.question()));
        questions
    }
}
