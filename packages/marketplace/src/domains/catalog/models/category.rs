use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::faq::FaqItem;

/// Service categories, in catalog order.
///
/// Order matters: the classifier walks categories in this order and keeps the
/// first one on a tie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryId {
    Plumber,
    Electrician,
    Painter,
    Driver,
    #[default]
    General,
}

impl CategoryId {
    pub const ALL: [CategoryId; 5] = [
        CategoryId::Plumber,
        CategoryId::Electrician,
        CategoryId::Painter,
        CategoryId::Driver,
        CategoryId::General,
    ];

    /// Position in catalog order
    pub fn index(self) -> usize {
        match self {
            Self::Plumber => 0,
            Self::Electrician => 1,
            Self::Painter => 2,
            Self::Driver => 3,
            Self::General => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plumber => "Plumber",
            Self::Electrician => "Electrician",
            Self::Painter => "Painter",
            Self::Driver => "Driver",
            Self::General => "General",
        }
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown service category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for CategoryId {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// A service category: how to recognise it and what to ask about it.
#[derive(Debug, Serialize)]
pub struct CategoryDefinition {
    pub id: CategoryId,
    pub title: &'static str,
    pub icon: &'static str,
    /// Lowercase substrings the classifier looks for
    pub keywords: &'static [&'static str],
    /// Follow-up questionnaire, never empty
    pub faqs: &'static [FaqItem],
}

impl CategoryDefinition {
    pub fn faq(&self, faq_id: &str) -> Option<&'static FaqItem> {
        self.faqs.iter().find(|faq| faq.id == faq_id)
    }

    pub fn last_faq_index(&self) -> usize {
        self.faqs.len().saturating_sub(1)
    }
}
