//! # career-tokens
//!
//! Token counting via `tiktoken-rs` (`cl100k_base`), used to hold retrieval
//! results to a context budget measured the way a downstream generator
//! measures it. Results are cached per content hash.

pub mod budget;
pub mod counter;

pub use budget::{Allocation, TokenBudget};
pub use counter::TokenCounter;
