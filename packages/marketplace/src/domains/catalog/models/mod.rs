pub mod category;
pub mod faq;

pub use category::{CategoryDefinition, CategoryId, UnknownCategory};
pub use faq::{AnswerKind, FaqItem};
