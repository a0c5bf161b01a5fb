pub mod worker;

pub use worker::{
    WorkerDocument, WorkerProfile, DEFAULT_HOURLY_RATE, DEFAULT_RATING, MAX_RATING,
};
