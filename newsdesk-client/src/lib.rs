//! newsdesk-client: talk to the article server and keep a local page in sync
//!
//! `ArticleApi` is the network seam; `FeedView` holds the visible page,
//! applies deletes optimistically and refetches when the server disagrees.

pub mod api;
pub mod error;
pub mod view;

pub use api::{ArticleApi, HttpArticleApi};
pub use error::{ClientError, ViewError};
pub use view::{DeleteResolution, FeedView, PendingDelete, ViewState};
