//! The user's answer set.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Question;

/// Mapping from question id to the selected option label.
///
/// Unanswered questions are absent. Values are not checked against the
/// catalog here: a stale label simply scores as unanswered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: IndexMap<String, String>,
}

impl AnswerSet {
    /// Create an empty answer set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the answer to a question
    pub fn answer(&mut self, question_id: impl Into<String>, option: impl Into<String>) {
        self.answers.insert(question_id.into(), option.into());
    }

    /// Builder-style variant of [`AnswerSet::answer`]
    #[must_use]
    pub fn with_answer(mut self, question_id: impl Into<String>, option: impl Into<String>) -> Self {
        self.answer(question_id, option);
        self
    }

    /// Remove the answer to a question, returning the previous label
    pub fn clear_answer(&mut self, question_id: &str) -> Option<String> {
        self.answers.shift_remove(question_id)
    }

    /// Drop every answer whose question id fails `keep`
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.answers.retain(|id, _| keep(id));
    }

    /// Raw label stored for a question, if any
    #[must_use]
    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    /// Index of the selected option, if the question is answered with one of its own options.
    #[must_use]
    pub fn selected_index(&self, question: &Question) -> Option<usize> {
        self.get(&question.id)
            .and_then(|answer| question.option_index(answer))
    }

    /// Whether the question has a present answer that is one of its options
    #[must_use]
    pub fn is_validly_answered(&self, question: &Question) -> bool {
        self.selected_index(question).is_some()
    }

    /// Number of stored answers, valid or not
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterate `(question_id, label)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.answers.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            answers: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
