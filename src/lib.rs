//! Autopage: automatic page-break insertion for long-form content
//!
//! This crate provides:
//! - Block segmentation of paragraph and line-break markup
//! - Break planning by target page count or by approximate words per page
//! - A host pipeline with opt-out, already-marked detection and per-item overrides
//! - WASM bindings and a command-line front end
//!
//! ```
//! use autopage::{paginate, PagingPolicy};
//!
//! let content = "<p>One</p><p>Two</p><p>Three</p>Four";
//! let paged = paginate(content, &PagingPolicy::by_count(2));
//! assert_eq!(paged, "One\r\n\r\nTwo<!--nextpage-->\r\n\r\nThree\r\n\r\nFour");
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod host;
pub mod pagination;
pub mod policy;
pub mod wasm;

// Re-export WASM types for direct use
pub use wasm::WasmAutoPager;

// Re-export primary types
pub use config::Settings;
pub use document::{join, segment, Block, ParagraphSequence, BLOCK_SEPARATOR};
pub use error::{Error, Result};
pub use host::{AutoPager, Item, NoOverrides, Outcome, PolicyOverrides, SkipReason};
pub use pagination::{
    paginate, split_pages, BreakPlan, Pagination, Paginator, DEFAULT_MARKER,
};
pub use policy::{PagingPolicy, PagingType, PolicyLimits};

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(n: usize) -> String {
        (1..=n)
            .map(|i| format!("Block {i}"))
            .collect::<Vec<_>>()
            .join("<br />")
    }

    fn marker_count(text: &str) -> usize {
        text.matches(DEFAULT_MARKER).count()
    }

    #[test]
    fn test_by_count_scenarios() {
        assert_eq!(marker_count(&paginate(&blocks(6), &PagingPolicy::by_count(3))), 2);
        assert_eq!(marker_count(&paginate(&blocks(5), &PagingPolicy::by_count(4))), 3);
        assert_eq!(marker_count(&paginate(&blocks(3), &PagingPolicy::by_count(10))), 2);
    }

    #[test]
    fn test_by_words_scenario() {
        let content = [4, 7, 3, 12]
            .iter()
            .map(|&n| vec!["w"; n].join(" "))
            .collect::<Vec<_>>()
            .join("<br>");
        let out = paginate(&content, &PagingPolicy::by_words(10));
        assert_eq!(marker_count(&out), 1);
        assert_eq!(split_pages(&out).len(), 2);
    }

    #[test]
    fn test_unchanged_without_separator() {
        let content = "<div>No paragraph markup here</div>";
        assert_eq!(paginate(content, &PagingPolicy::default()), content);
        assert_eq!(paginate(content, &PagingPolicy::by_words(10)), content);
    }
}
