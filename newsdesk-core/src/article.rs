//! Article records and delete outcomes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ValidationError;

/// Store-assigned article identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArticleId(i64);

impl ArticleId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(self) -> i64 {
        self.0
    }

    /// Parse an identifier taken from a query string.
    ///
    /// Any finite number is accepted. Integral values give `Some(id)`; a
    /// number no row can carry (fractional, or outside `i64`) gives `None`.
    /// Missing, blank and non-numeric values are rejected.
    pub fn parse(raw: Option<&str>) -> Result<Option<Self>, ValidationError> {
        let value = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingIdentifier)?;

        if let Ok(id) = value.parse::<i64>() {
            return Ok(Some(Self(id)));
        }

        let number = value
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .ok_or_else(|| ValidationError::InvalidIdentifier {
                value: value.to_owned(),
            })?;

        // 2^63 is exactly representable; i64::MAX is not
        if number.fract() == 0.0 && number >= i64::MIN as f64 && number < i64::MAX as f64 {
            Ok(Some(Self(number as i64)))
        } else {
            Ok(None)
        }
    }
}

impl FromStr for ArticleId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidIdentifier {
                value: s.to_owned(),
            })
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One scraped news item.
///
/// Columns other than `id`, `headline` and `url` are carried through
/// untouched in `extra` and serialized flat next to the known fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub headline: String,
    pub url: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Article {
    pub fn new(id: i64, headline: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: ArticleId::new(id),
            headline: headline.into(),
            url: url.into(),
            extra: Map::new(),
        }
    }
}

/// Result of a delete that reached the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

impl DeleteOutcome {
    /// Map a removed-row count onto an outcome.
    pub fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 {
            Self::NotFound
        } else {
            Self::Deleted
        }
    }
}

/// `{"message": ...}` body used by every non-list response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
