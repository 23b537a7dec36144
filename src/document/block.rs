//! Block-level text unit

use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

fn markup_tag() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"))
}

/// Remove markup tags, keeping the text between them
pub fn strip_tags(text: &str) -> Cow<'_, str> {
    markup_tag().replace_all(text, "")
}

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Count the pieces left by splitting tag-stripped text on whitespace runs
///
/// Every piece counts, so leading or trailing whitespace adds an empty token
/// and an empty block counts as one. Punctuation-only tokens count as words.
pub fn word_count(text: &str) -> usize {
    whitespace_run().split(&strip_tags(text)).count()
}

/// A paragraph-level unit of text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    text: String,
}

impl Block {
    pub fn new(text: String) -> Self {
        Self { text }
    }

    /// Raw block text, markup included
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of words in this block
    pub fn word_count(&self) -> usize {
        word_count(&self.text)
    }

    pub(crate) fn push_marker(&mut self, marker: &str) {
        self.text.push_str(marker);
    }
}

impl From<&str> for Block {
    fn from(text: &str) -> Self {
        Self::new(text.to_string())
    }
}
