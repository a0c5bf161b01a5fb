// Odd Jobs Marketplace - Intake & Matching Core
//
// Conversational intake that classifies a customer's problem, walks a
// category questionnaire and recommends workers from the live roster.
// Storage, auth and rendering sit behind the collaborator traits in kernel/.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;

pub use config::*;
