//! The configuration record built by the sequencer.

use super::QuestionKey;
use crate::features::Feature;
use std::collections::BTreeMap;

/// A stored answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    Flag(bool),
}

/// Answers keyed by question.
///
/// Built one entry per question by the [`Sequencer`](super::Sequencer), then
/// moved into the generator. A feature whose question was never asked reads
/// as disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigRecord {
    answers: BTreeMap<QuestionKey, Answer>,
}

impl ConfigRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: QuestionKey, answer: Answer) {
        self.answers.insert(key, answer);
    }

    pub fn with_text(mut self, key: QuestionKey, text: impl Into<String>) -> Self {
        self.insert(key, Answer::Text(text.into()));
        self
    }

    pub fn with_feature(mut self, feature: Feature, enabled: bool) -> Self {
        self.insert(QuestionKey::Feature(feature), Answer::Flag(enabled));
        self
    }

    pub fn get(&self, key: QuestionKey) -> Option<&Answer> {
        self.answers.get(&key)
    }

    pub fn contains(&self, key: QuestionKey) -> bool {
        self.answers.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Question keys in storage order.
    pub fn keys(&self) -> impl Iterator<Item = QuestionKey> + '_ {
        self.answers.keys().copied()
    }

    /// The extension's display name, as typed. Empty if absent.
    pub fn name(&self) -> &str {
        self.text(QuestionKey::Name)
    }

    /// The extension's description, as typed. Empty if absent.
    pub fn description(&self) -> &str {
        self.text(QuestionKey::Description)
    }

    pub fn is_enabled(&self, feature: Feature) -> bool {
        matches!(
            self.get(QuestionKey::Feature(feature)),
            Some(Answer::Flag(true))
        )
    }

    /// Enabled features in canonical order.
    pub fn enabled_features(&self) -> Vec<Feature> {
        Feature::ALL
            .into_iter()
            .filter(|feature| self.is_enabled(*feature))
            .collect()
    }

    fn text(&self, key: QuestionKey) -> &str {
        match self.get(key) {
            Some(Answer::Text(text)) => text,
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_defaults() {
        let record = ConfigRecord::new();
        assert!(record.is_empty());
        assert_eq!(record.name(), "");
        assert_eq!(record.description(), "");
        assert!(record.enabled_features().is_empty());
    }

    #[test]
    fn test_enabled_features_in_canonical_order() {
        let record = ConfigRecord::new()
            .with_feature(Feature::Options, true)
            .with_feature(Feature::Popup, false)
            .with_feature(Feature::Background, true);

        assert_eq!(
            record.enabled_features(),
            vec![Feature::Background, Feature::Options]
        );
        assert!(!record.is_enabled(Feature::ContentScripts));
    }

    #[test]
    fn test_text_answers_are_stored_verbatim() {
        let record = ConfigRecord::new()
            .with_text(QuestionKey::Name, "  My Tool ")
            .with_text(QuestionKey::Description, "Does\tthings");

        assert_eq!(record.name(), "  My Tool ");
        assert_eq!(record.description(), "Does\tthings");
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_keys_follow_question_order() {
        let record = ConfigRecord::new()
            .with_feature(Feature::Popup, true)
            .with_text(QuestionKey::Description, "d")
            .with_text(QuestionKey::Name, "n");

        let keys: Vec<_> = record.keys().map(QuestionKey::as_str).collect();
        assert_eq!(keys, vec!["name", "description", "popup"]);
    }
}
