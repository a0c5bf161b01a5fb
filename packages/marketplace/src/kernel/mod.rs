//! Kernel module - store collaborators, dispatch and machine plumbing.

pub mod deps;
pub mod dispatch;
pub mod machine;
pub mod memory;
pub mod test_dependencies;
pub mod traits;

pub use deps::MarketplaceDeps;
pub use dispatch::{run_dispatch_worker, spawn_dispatch_worker, DispatchRequest, Dispatcher};
pub use machine::Machine;
pub use memory::{InMemoryStore, JobList, StoreError};
pub use traits::*;
