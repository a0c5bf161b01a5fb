use serde::Serialize;

/// How a follow-up question expects to be answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "options", rename_all = "snake_case")]
pub enum AnswerKind {
    /// Free text; must be non-blank before the intake moves on
    Text,
    YesNo,
    /// Exactly one of the listed labels
    Choice(&'static [&'static str]),
}

impl AnswerKind {
    pub fn is_free_text(self) -> bool {
        matches!(self, Self::Text)
    }

    pub fn options(self) -> &'static [&'static str] {
        match self {
            Self::Choice(options) => options,
            _ => &[],
        }
    }
}

/// One question in a category's questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FaqItem {
    /// Unique within its category; used as the answer key
    pub id: &'static str,
    pub kind: AnswerKind,
    pub question: &'static str,
}
