//! Request-level operations over the article store
//!
//! - query: page/limit window reads
//! - deletion: identifier validation and delete outcomes

pub mod deletion;
pub mod query;

pub use deletion::{DeletionError, DeletionService};
pub use query::QueryService;
