//! Repository implementations for database access

pub mod articles;

pub use articles::PgArticleStore;
