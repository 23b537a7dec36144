//! Page-break insertion
//!
//! Content is segmented into blocks, a [`BreakPlan`] is computed from the
//! [`PagingPolicy`], and the marker is appended to every planned block before
//! the blocks are joined back together.

mod count;
mod words;

pub use count::plan_by_count;
pub use words::plan_by_words;

use crate::document::{segment, ParagraphSequence};
use crate::policy::PagingPolicy;
use log::{debug, trace};
use regex::{Regex, RegexBuilder};
use smallvec::SmallVec;
use std::sync::OnceLock;

/// Page-break marker recognised by the host
pub const DEFAULT_MARKER: &str = "<!--nextpage-->";

/// 0-based indices of the blocks that end a page
pub type BreakPlan = SmallVec<[usize; 8]>;

/// Result of a pagination call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    /// Output text; equal to the input when nothing was applied
    pub content: String,
    /// Blocks found while segmenting
    pub block_count: usize,
    /// Blocks that received a marker
    pub breaks: BreakPlan,
}

impl Pagination {
    fn unchanged(content: &str, block_count: usize) -> Self {
        Self {
            content: content.to_string(),
            block_count,
            breaks: BreakPlan::new(),
        }
    }

    /// Whether any marker was inserted
    pub fn applied(&self) -> bool {
        !self.breaks.is_empty()
    }

    /// Number of pages in the output
    pub fn page_count(&self) -> usize {
        self.breaks.len() + 1
    }
}

/// Inserts page-break markers according to a policy
///
/// Holds no per-call state and can be shared freely.
#[derive(Debug, Clone)]
pub struct Paginator {
    marker: String,
    /// Case-insensitive literal match of `marker`
    pattern: Regex,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    /// Paginator using [`DEFAULT_MARKER`]
    pub fn new() -> Self {
        Self::with_marker(DEFAULT_MARKER)
    }

    /// Paginator using a custom marker; an empty one falls back to [`DEFAULT_MARKER`]
    pub fn with_marker(marker: impl Into<String>) -> Self {
        let mut marker = marker.into();
        if marker.is_empty() {
            marker = DEFAULT_MARKER.to_string();
        }
        let pattern = RegexBuilder::new(&regex::escape(&marker))
            .case_insensitive(true)
            .build()
            .expect("escaped marker is a valid pattern");
        Self { marker, pattern }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Paginate `content`, returning only the output text
    pub fn paginate(&self, content: &str, policy: &PagingPolicy) -> String {
        self.paginate_with_report(content, policy).content
    }

    /// Paginate `content` and report where markers went
    ///
    /// Content with no block separator, a no-op policy, fewer than two blocks,
    /// or an empty plan is returned unchanged.
    pub fn paginate_with_report(&self, content: &str, policy: &PagingPolicy) -> Pagination {
        if policy.is_noop() {
            trace!("policy {:?} never paginates", policy);
            return Pagination::unchanged(content, 0);
        }

        let mut blocks = segment(content);
        if !blocks.is_splittable() {
            debug!(
                "skipping pagination: {} separator(s), {} block(s)",
                blocks.separator_count(),
                blocks.len()
            );
            return Pagination::unchanged(content, blocks.len());
        }

        let plan = plan(&blocks, policy);
        debug!(
            "{:?} over {} blocks -> {} break(s)",
            policy,
            blocks.len(),
            plan.len()
        );
        if plan.is_empty() {
            return Pagination::unchanged(content, blocks.len());
        }

        self.apply(&mut blocks, &plan);

        Pagination {
            content: blocks.join(),
            block_count: blocks.len(),
            breaks: plan,
        }
    }

    /// Paginate an already segmented sequence in place
    pub fn paginate_blocks(
        &self,
        blocks: &mut ParagraphSequence,
        policy: &PagingPolicy,
    ) -> BreakPlan {
        if policy.is_noop() || blocks.len() < 2 {
            return BreakPlan::new();
        }
        let plan = plan(blocks, policy);
        self.apply(blocks, &plan);
        plan
    }

    fn apply(&self, blocks: &mut ParagraphSequence, plan: &BreakPlan) {
        for &index in plan {
            blocks.mark(index, &self.marker);
        }
    }

    /// Whether `content` already carries this paginator's marker
    ///
    /// Matching is case-insensitive.
    pub fn is_marked(&self, content: &str) -> bool {
        self.pattern.is_match(content)
    }

    /// Split marked content into its pages
    pub fn split_pages<'a>(&self, content: &'a str) -> Vec<&'a str> {
        self.pattern.split(content).collect()
    }
}

fn default_paginator() -> &'static Paginator {
    static PAGINATOR: OnceLock<Paginator> = OnceLock::new();
    PAGINATOR.get_or_init(Paginator::new)
}

/// Compute the break plan for a policy without touching the blocks
pub fn plan(blocks: &ParagraphSequence, policy: &PagingPolicy) -> BreakPlan {
    match *policy {
        PagingPolicy::ByCount {
            target_pages,
            max_allowed,
        } => plan_by_count(blocks.len(), target_pages.min(max_allowed)),
        PagingPolicy::ByWords { words_per_page } => {
            plan_by_words(blocks.blocks(), words_per_page)
        }
    }
}

/// Paginate with the default marker
pub fn paginate(content: &str, policy: &PagingPolicy) -> String {
    default_paginator().paginate(content, policy)
}

/// Split content on [`DEFAULT_MARKER`], ignoring case
pub fn split_pages(content: &str) -> Vec<&str> {
    default_paginator().split_pages(content)
}
