pub mod book;
pub mod transition;

pub use book::{book, build_description, quick_book, DESCRIPTION_DELIMITER};
pub use transition::request_transition;
