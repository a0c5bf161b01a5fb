pub mod models;
pub mod registry;

// Re-export commonly used types
pub use models::{AnswerKind, CategoryDefinition, CategoryId, FaqItem, UnknownCategory};
pub use registry::{all, lookup, FALLBACK_CATEGORY};
