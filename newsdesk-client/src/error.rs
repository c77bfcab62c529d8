//! Client-side error types

use newsdesk_core::ArticleId;
use thiserror::Error;

/// Network or HTTP failure talking to the article server
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },
}

/// A user action the view refused to apply
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("articles are still loading")]
    Loading,

    #[error("articles could not be loaded; refresh first")]
    Unavailable,

    #[error("article {0} is not on this page")]
    NotListed(ArticleId),
}
