//! Subcommand implementations

pub mod articles;
pub mod serve;
