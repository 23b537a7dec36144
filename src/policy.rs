//! Paging policies and the limits applied to their parameters

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default number of pages when none is configured
pub const DEFAULT_NUM_PAGES: usize = 2;
/// Default cap on the requested page count
pub const DEFAULT_MAX_PAGES: usize = 10;
/// Default floor on the word target
pub const DEFAULT_MIN_WORDS: usize = 10;

/// How content is split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PagingPolicy {
    /// Split into a target number of pages
    ByCount {
        target_pages: usize,
        #[serde(default = "default_max_pages")]
        max_allowed: usize,
    },
    /// Split after roughly this many words
    ByWords { words_per_page: usize },
}

fn default_max_pages() -> usize {
    DEFAULT_MAX_PAGES
}

impl PagingPolicy {
    /// Count policy with the default cap
    pub fn by_count(target_pages: usize) -> Self {
        PagingPolicy::ByCount {
            target_pages,
            max_allowed: DEFAULT_MAX_PAGES,
        }
    }

    pub fn by_words(words_per_page: usize) -> Self {
        PagingPolicy::ByWords { words_per_page }
    }

    /// Whether this policy would never insert a marker
    pub fn is_noop(&self) -> bool {
        match *self {
            PagingPolicy::ByCount { target_pages, .. } => target_pages < 2,
            PagingPolicy::ByWords { words_per_page } => words_per_page == 0,
        }
    }

    /// Parse a policy from its JSON form, e.g. `{"type":"by_words","words_per_page":200}`
    pub fn from_json(json: &str) -> Result<Self, Error> {
        serde_json::from_str(json).map_err(Error::InvalidPolicy)
    }

    pub fn paging_type(&self) -> PagingType {
        match self {
            PagingPolicy::ByCount { .. } => PagingType::Pages,
            PagingPolicy::ByWords { .. } => PagingType::Words,
        }
    }
}

impl Default for PagingPolicy {
    fn default() -> Self {
        Self::by_count(DEFAULT_NUM_PAGES)
    }
}

/// Configured paging mode, as stored in settings
///
/// Unknown names fall back to [`PagingType::Pages`] when deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PagingType {
    #[default]
    Pages,
    Words,
}

impl PagingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PagingType::Pages => "pages",
            PagingType::Words => "words",
        }
    }

    /// Parse a stored value, falling back to the default for anything unknown
    pub fn sanitize(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl FromStr for PagingType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pages" => Ok(PagingType::Pages),
            "words" => Ok(PagingType::Words),
            other => Err(Error::UnknownPagingType(other.to_string())),
        }
    }
}

impl fmt::Display for PagingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for PagingType {
    fn from(value: String) -> Self {
        PagingType::sanitize(&value)
    }
}

impl From<PagingType> for String {
    fn from(value: PagingType) -> Self {
        value.as_str().to_string()
    }
}

/// Bounds applied to policy parameters before pagination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolicyLimits {
    /// Largest page count that may be requested
    pub max_pages: usize,
    /// Smallest non-zero word target
    pub min_words: usize,
}

impl Default for PolicyLimits {
    fn default() -> Self {
        Self {
            max_pages: DEFAULT_MAX_PAGES,
            min_words: DEFAULT_MIN_WORDS,
        }
    }
}

impl PolicyLimits {
    /// Clamp a page count into `[2, max_pages]`
    pub fn sanitize_num_pages(&self, num_pages: usize) -> usize {
        num_pages.min(self.max_pages).max(2)
    }

    /// Zero stays zero (word paging disabled), anything else is raised to `min_words`
    pub fn sanitize_num_words(&self, num_words: usize) -> usize {
        if num_words == 0 {
            return 0;
        }
        num_words.max(self.min_words)
    }
}

/// Coerce a raw setting value to a count
///
/// Takes the leading integer of the trimmed text; negative or non-numeric
/// input yields 0.
pub fn coerce_count(raw: &str) -> usize {
    let raw = raw.trim();
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 0;
    }
    digits[..end].parse().unwrap_or(usize::MAX)
}

/// Coerce a signed value, as returned by override hooks, to a count
pub fn coerce_signed(value: i64) -> usize {
    usize::try_from(value).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_num_pages() {
        let limits = PolicyLimits::default();
        assert_eq!(limits.sanitize_num_pages(0), 2);
        assert_eq!(limits.sanitize_num_pages(1), 2);
        assert_eq!(limits.sanitize_num_pages(5), 5);
        assert_eq!(limits.sanitize_num_pages(42), 10);

        let wide = PolicyLimits {
            max_pages: 50,
            ..Default::default()
        };
        assert_eq!(wide.sanitize_num_pages(42), 42);
    }

    #[test]
    fn test_sanitize_num_words() {
        let limits = PolicyLimits::default();
        assert_eq!(limits.sanitize_num_words(0), 0);
        assert_eq!(limits.sanitize_num_words(3), 10);
        assert_eq!(limits.sanitize_num_words(250), 250);
    }

    #[test]
    fn test_coerce_count() {
        assert_eq!(coerce_count("12"), 12);
        assert_eq!(coerce_count(" 7 "), 7);
        assert_eq!(coerce_count("12abc"), 12);
        assert_eq!(coerce_count("+4"), 4);
        assert_eq!(coerce_count("-3"), 0);
        assert_eq!(coerce_count("abc"), 0);
        assert_eq!(coerce_count(""), 0);
    }

    #[test]
    fn test_coerce_signed() {
        assert_eq!(coerce_signed(-1), 0);
        assert_eq!(coerce_signed(0), 0);
        assert_eq!(coerce_signed(9), 9);
    }

    #[test]
    fn test_paging_type_sanitize() {
        assert_eq!(PagingType::sanitize("words"), PagingType::Words);
        assert_eq!(PagingType::sanitize("WORDS"), PagingType::Words);
        assert_eq!(PagingType::sanitize("pages"), PagingType::Pages);
        assert_eq!(PagingType::sanitize("chapters"), PagingType::Pages);
        assert!("chapters".parse::<PagingType>().is_err());
    }

    #[test]
    fn test_paging_type_serde() {
        let parsed: PagingType = serde_json::from_str("\"bogus\"").unwrap();
        assert_eq!(parsed, PagingType::Pages);
        assert_eq!(serde_json::to_string(&PagingType::Words).unwrap(), "\"words\"");
    }

    #[test]
    fn test_policy_serde() {
        let policy: PagingPolicy =
            serde_json::from_str(r#"{"type":"by_count","target_pages":3}"#).unwrap();
        assert_eq!(policy, PagingPolicy::by_count(3));

        let policy: PagingPolicy =
            serde_json::from_str(r#"{"type":"by_words","words_per_page":120}"#).unwrap();
        assert_eq!(policy, PagingPolicy::by_words(120));
    }

    #[test]
    fn test_policy_from_json_error() {
        let err = PagingPolicy::from_json(r#"{"type":"by_chapter"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidPolicy(_)));
    }

    #[test]
    fn test_noop_policies() {
        assert!(PagingPolicy::by_count(1).is_noop());
        assert!(PagingPolicy::by_words(0).is_noop());
        assert!(!PagingPolicy::by_count(2).is_noop());
        assert!(!PagingPolicy::by_words(1).is_noop());
        assert_eq!(PagingPolicy::default().paging_type(), PagingType::Pages);
    }
}
