pub mod commands;
pub mod events;
pub mod machines;
pub mod models;
pub mod session;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use commands::IntakeCommand;
pub use events::IntakeEvent;
pub use machines::IntakeMachine;
pub use models::{AnswerValue, IntakeAnswers};
pub use session::IntakeSession;
pub use state::{category_def, current_faq, faq_progress, ChatState, ChatStep};
pub use utils::classify;
