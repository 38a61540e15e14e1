//! The question-answer state machine.

use super::{AFFIRMATIVE, Answer, AnswerKind, ConfigRecord, LineInput, Question, QuestionKey};
use crate::error::{CrxError, Result};
use std::fmt;
use tracing::debug;

/// Why a sequence stopped before completing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Abort {
    /// A required question was answered with blank text.
    MissingRequiredField(&'static str),
}

impl fmt::Display for Abort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Abort::MissingRequiredField("name") => f.write_str(
                "(Warning) Extension name is required. Please run the CLI again and enter the correct details.",
            ),
            Abort::MissingRequiredField(field) => write!(f, "(Warning) {} is required.", field),
        }
    }
}

/// Result of running a full sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Completed(ConfigRecord),
    Aborted(Abort),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceState {
    /// Waiting for the answer to the question at this index.
    AwaitingQuestion(usize),
    Completed,
    Aborted(Abort),
}

/// Walks an ordered list of questions, one answer at a time.
///
/// The sequencer does no I/O itself; [`run_sequence`] drives it from a
/// [`LineInput`].
#[derive(Debug)]
pub struct Sequencer<'q> {
    questions: &'q [Question],
    state: SequenceState,
    record: ConfigRecord,
}

impl<'q> Sequencer<'q> {
    pub fn new(questions: &'q [Question]) -> Self {
        let state = if questions.is_empty() {
            SequenceState::Completed
        } else {
            SequenceState::AwaitingQuestion(0)
        };
        Self {
            questions,
            state,
            record: ConfigRecord::new(),
        }
    }

    pub fn state(&self) -> SequenceState {
        self.state
    }

    /// The question awaiting an answer, if the sequence is still running.
    pub fn current(&self) -> Option<&'q Question> {
        match self.state {
            SequenceState::AwaitingQuestion(index) => self.questions.get(index),
            _ => None,
        }
    }

    /// Store `raw` as the answer to the current question and advance.
    ///
    /// Answering in a terminal state changes nothing.
    pub fn answer(&mut self, raw: &str) -> SequenceState {
        let SequenceState::AwaitingQuestion(index) = self.state else {
            return self.state;
        };
        let question = &self.questions[index];
        let normalized = raw.trim().to_lowercase();

        if question.key == QuestionKey::Name && normalized.is_empty() {
            debug!("blank extension name, aborting");
            self.state =
                SequenceState::Aborted(Abort::MissingRequiredField(QuestionKey::Name.as_str()));
            return self.state;
        }

        let answer = match question.kind() {
            AnswerKind::Text => Answer::Text(raw.to_string()),
            AnswerKind::Flag => Answer::Flag(normalized == AFFIRMATIVE),
        };
        debug!(key = question.key.as_str(), ?answer, "stored answer");
        self.record.insert(question.key, answer);

        self.state = if index + 1 < self.questions.len() {
            SequenceState::AwaitingQuestion(index + 1)
        } else {
            SequenceState::Completed
        };
        self.state
    }

    pub fn into_record(self) -> ConfigRecord {
        self.record
    }
}

/// Ask every question in order and collect the answers.
///
/// The input is closed once the sequence completes or aborts. An aborted
/// sequence returns no answers. Read errors are returned as
/// [`CrxError::InputError`].
pub fn run_sequence(questions: &[Question], input: &mut impl LineInput) -> Result<Outcome> {
    let mut sequencer = Sequencer::new(questions);

    loop {
        match sequencer.state() {
            SequenceState::AwaitingQuestion(index) => {
                let raw = input
                    .ask(questions[index].prompt)
                    .map_err(CrxError::InputError)?;
                sequencer.answer(&raw);
            }
            SequenceState::Completed => {
                input.close();
                return Ok(Outcome::Completed(sequencer.into_record()));
            }
            SequenceState::Aborted(reason) => {
                input.close();
                return Ok(Outcome::Aborted(reason));
            }
        }
    }
}
