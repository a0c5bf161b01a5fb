pub mod answers;

pub use answers::{AnswerValue, IntakeAnswers};
