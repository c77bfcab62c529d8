//! Pagination types
//!
//! Query strings are parsed leniently: the leading integer of a value is
//! used (`"2.5"` is page 2), and anything missing, non-numeric or
//! non-positive falls back to the default instead of being rejected.
//! Oversized values saturate rather than wrap or reset.

use serde::{Deserialize, Serialize};

/// Page used when none (or garbage) is supplied
pub const DEFAULT_PAGE: u32 = 1;

/// Items per page when none (or garbage) is supplied
pub const DEFAULT_LIMIT: u32 = 50;

/// Largest window a single request may read
pub const MAX_LIMIT: u32 = 500;

/// A 1-indexed window of `limit` articles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    /// Create a page request, clamping page to >= 1 and limit to 1..=MAX_LIMIT.
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page: page.max(1),
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Build a page request from raw query-string values.
    pub fn from_params(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::or_defaults(
            page.and_then(leading_integer).unwrap_or(0),
            limit.and_then(leading_integer).unwrap_or(0),
        )
    }

    /// Apply the default policy to numeric input: zero means "use the
    /// default", a page beyond `u32::MAX` saturates (and so reads past the
    /// end) and a limit above `MAX_LIMIT` is clamped to it.
    pub fn or_defaults(page: u64, limit: u64) -> Self {
        let page = match page {
            0 => DEFAULT_PAGE,
            n => u32::try_from(n).unwrap_or(u32::MAX),
        };
        let limit = match limit {
            0 => DEFAULT_LIMIT,
            n => u32::try_from(n.min(u64::from(MAX_LIMIT))).unwrap_or(MAX_LIMIT),
        };
        Self::new(page, limit)
    }

    /// Rows to skip: `(page - 1) * limit`.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Leading non-negative integer of `raw`, saturating at `u64::MAX`.
///
/// `"12abc"` and `"2.5"` give 12 and 2; negatives and non-numeric input give
/// `None`.
fn leading_integer(raw: &str) -> Option<u64> {
    let s = raw.trim_start();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let digits = &s[..end];
    if digits.is_empty() {
        return None;
    }

    Some(digits.bytes().fold(0u64, |acc, b| {
        acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_calculation() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(2, 50).offset(), 50);
        assert_eq!(PageRequest::new(3, 25).offset(), 50);
    }

    #[test]
    fn defaults_when_missing() {
        assert_eq!(PageRequest::from_params(None, None), PageRequest::default());
        assert_eq!(PageRequest::default(), PageRequest::new(1, 50));
    }

    #[test]
    fn defaults_when_not_positive_or_not_numeric() {
        assert_eq!(
            PageRequest::from_params(Some("0"), Some("-5")),
            PageRequest::new(1, 50)
        );
        assert_eq!(
            PageRequest::from_params(Some("two"), Some("")),
            PageRequest::new(1, 50)
        );
    }

    #[test]
    fn keeps_valid_values() {
        assert_eq!(
            PageRequest::from_params(Some("2"), Some("50")),
            PageRequest::new(2, 50)
        );
    }

    #[test]
    fn clamps_limit_to_ceiling() {
        assert_eq!(PageRequest::from_params(None, Some("10000")).limit, MAX_LIMIT);
        assert_eq!(
            PageRequest::from_params(None, Some("5000000000")).limit,
            MAX_LIMIT
        );
        assert_eq!(
            PageRequest::from_params(None, Some("99999999999999999999999")).limit,
            MAX_LIMIT
        );
    }

    #[test]
    fn oversized_page_saturates_past_the_end() {
        let page = PageRequest::from_params(Some("5000000000"), Some("50"));
        assert_eq!(page.page, u32::MAX);
        assert!(page.offset() > 1_000_000_000);
    }

    #[test]
    fn uses_leading_integer() {
        assert_eq!(
            PageRequest::from_params(Some("2.5"), Some("50")),
            PageRequest::new(2, 50)
        );
        assert_eq!(
            PageRequest::from_params(Some(" 3abc"), Some("+20")),
            PageRequest::new(3, 20)
        );
        assert_eq!(
            PageRequest::from_params(Some("0.9"), Some(".5")),
            PageRequest::default()
        );
    }

    #[test]
    fn zero_numeric_input_uses_defaults() {
        assert_eq!(PageRequest::or_defaults(0, 0), PageRequest::default());
        assert_eq!(PageRequest::or_defaults(4, 0), PageRequest::new(4, 50));
        assert_eq!(PageRequest::or_defaults(0, 7), PageRequest::new(1, 7));
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let page = PageRequest::new(u32::MAX, MAX_LIMIT);
        assert_eq!(page.offset(), u64::from(u32::MAX - 1) * u64::from(MAX_LIMIT));
    }
}
