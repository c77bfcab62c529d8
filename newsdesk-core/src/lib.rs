//! newsdesk-core: domain types shared by the article server and its clients
//!
//! - `Article`: one scraped news row, opaque beyond `id`, `headline` and `url`
//! - `PageRequest`: the validated `{page, limit}` window over the feed
//! - `ArticleId`: identifier parsing for deletes
//! - `DeleteOutcome`: the two successful results of a delete

pub mod article;
pub mod error;
pub mod pagination;

pub use article::{Article, ArticleId, DeleteOutcome, MessageBody};
pub use error::ValidationError;
pub use pagination::{PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};
