//! Typed ids for marketplace entities.

pub use super::id::Id;

/// Marker for worker profiles (people offering skills).
pub struct Worker;

/// Marker for customers (people posting odd jobs).
pub struct Customer;

/// Marker for job records.
pub struct JobRecord;

pub type WorkerId = Id<Worker>;

pub type CustomerId = Id<Customer>;

pub type JobId = Id<JobRecord>;
