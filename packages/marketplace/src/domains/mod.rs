pub mod catalog;
pub mod intake;
pub mod jobs;
pub mod matching;
pub mod workers;
