pub mod classifier;

pub use classifier::{classify, keyword_hits};
