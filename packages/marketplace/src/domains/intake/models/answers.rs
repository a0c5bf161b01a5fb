use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single questionnaire answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    YesNo(bool),
}

impl AnswerValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::YesNo(_) => None,
        }
    }

    /// Non-blank text; yes/no answers always count as given
    pub fn is_filled(&self) -> bool {
        match self {
            Self::Text(text) => !text.trim().is_empty(),
            Self::YesNo(_) => true,
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::YesNo(true) => f.write_str("Yes"),
            Self::YesNo(false) => f.write_str("No"),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        Self::YesNo(value)
    }
}

/// Answers keyed by FAQ id.
///
/// Iterates in the order questions were first answered; answering the same
/// question again replaces the value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntakeAnswers(IndexMap<String, AnswerValue>);

impl IntakeAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, faq_id: &str, value: AnswerValue) {
        self.0.insert(faq_id.to_string(), value);
    }

    pub fn get(&self, faq_id: &str) -> Option<&AnswerValue> {
        self.0.get(faq_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

impl<K: Into<String>, V: Into<AnswerValue>> FromIterator<(K, V)> for IntakeAnswers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
