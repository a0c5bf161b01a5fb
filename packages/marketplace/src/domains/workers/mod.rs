pub mod actions;
pub mod data;
pub mod models;

pub use actions::{quick_book_worker, toggle_availability};
pub use data::{parse_roster, sort_roster, RosterFeed, RosterReader, RosterSnapshot};
pub use models::{
    WorkerDocument, WorkerProfile, DEFAULT_HOURLY_RATE, DEFAULT_RATING, MAX_RATING,
};
