//! Host pipeline: pre-checks, per-item policy resolution, and pagination
//!
//! The paginator itself is a pure transform. Everything that depends on the
//! surrounding content system lives here:
//! - supported item kinds
//! - the per-item opt-out flag
//! - already-marked detection, which keeps repeated runs idempotent
//! - override hooks that adjust the page or word target per item

mod item;

pub use item::Item;

use crate::config::Settings;
use crate::pagination::Paginator;
use crate::policy::{coerce_signed, PagingPolicy, PagingType};
use log::{debug, info};
use rustc_hash::FxHashSet;
use std::fmt;

/// Per-item adjustment of the configured parameters
///
/// Return values are coerced: anything negative becomes 0.
pub trait PolicyOverrides {
    /// Page target for `item`, given the configured `default`
    fn target_pages(&self, default: usize, _item: &Item) -> i64 {
        i64::try_from(default).unwrap_or(i64::MAX)
    }

    /// Word target for `item`, given the configured `default`
    fn words_per_page(&self, default: usize, _item: &Item) -> i64 {
        i64::try_from(default).unwrap_or(i64::MAX)
    }
}

/// Leaves the configured parameters untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOverrides;

impl PolicyOverrides for NoOverrides {}

/// Why an item was left alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Item kind is not configured for paging
    UnsupportedKind,
    /// Item opted out
    Disabled,
    /// Content already carries a page-break marker
    AlreadyMarked,
    /// Page target below 2 and no word target
    NoParameters,
    /// Word target below the configured minimum
    BelowMinimum,
    /// Content has no block boundary to split on
    NothingToSplit,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::UnsupportedKind => "unsupported item kind",
            SkipReason::Disabled => "autopaging disabled for item",
            SkipReason::AlreadyMarked => "content already paginated",
            SkipReason::NoParameters => "no page or word target",
            SkipReason::BelowMinimum => "word target below minimum",
            SkipReason::NothingToSplit => "nothing to split",
        };
        f.write_str(text)
    }
}

/// Result of processing one item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Paginated { pages: usize },
    Skipped(SkipReason),
}

impl Outcome {
    pub fn is_paginated(&self) -> bool {
        matches!(self, Outcome::Paginated { .. })
    }
}

/// Applies automatic pagination to host items
pub struct AutoPager<O = NoOverrides> {
    settings: Settings,
    supported: FxHashSet<String>,
    paginator: Paginator,
    overrides: O,
}

impl AutoPager<NoOverrides> {
    pub fn new(settings: Settings) -> Self {
        Self::with_overrides(settings, NoOverrides)
    }
}

impl<O: PolicyOverrides> AutoPager<O> {
    /// Create a pager that consults `overrides` for every item
    pub fn with_overrides(settings: Settings, overrides: O) -> Self {
        let settings = settings.normalized();
        let supported = settings.post_types.iter().cloned().collect();
        let paginator = Paginator::with_marker(settings.marker.clone());
        Self {
            settings,
            supported,
            paginator,
            overrides,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    /// Host-side checks that run before any policy is resolved
    pub fn check(&self, item: &Item) -> Result<(), SkipReason> {
        if !self.supported.contains(&item.kind) {
            return Err(SkipReason::UnsupportedKind);
        }
        if self.paginator.is_marked(&item.content) {
            return Err(SkipReason::AlreadyMarked);
        }
        if item.autopaging_disabled {
            return Err(SkipReason::Disabled);
        }
        Ok(())
    }

    /// Resolve the policy for `item` from settings and overrides
    ///
    /// The word policy applies only when configured and non-zero; otherwise
    /// the page count is used, capped at `max_pages`.
    pub fn resolve_policy(&self, item: &Item) -> Result<PagingPolicy, SkipReason> {
        let limits = self.settings.limits;
        let num_pages = coerce_signed(self.overrides.target_pages(self.settings.num_pages, item));
        let num_words =
            coerce_signed(self.overrides.words_per_page(self.settings.num_words, item));

        if num_pages < 2 && num_words == 0 {
            return Err(SkipReason::NoParameters);
        }

        match self.settings.paging_type {
            PagingType::Words if num_words > 0 => {
                if num_words < limits.min_words {
                    return Err(SkipReason::BelowMinimum);
                }
                Ok(PagingPolicy::ByWords {
                    words_per_page: num_words,
                })
            }
            _ => {
                if num_pages < 2 {
                    return Err(SkipReason::NoParameters);
                }
                Ok(PagingPolicy::ByCount {
                    target_pages: num_pages.min(limits.max_pages),
                    max_allowed: limits.max_pages,
                })
            }
        }
    }

    /// Paginate one item in place
    pub fn process(&self, item: &mut Item) -> Outcome {
        let policy = match self.check(item).and_then(|_| self.resolve_policy(item)) {
            Ok(policy) => policy,
            Err(reason) => {
                debug!("item {}: skipped ({})", item.id, reason);
                return Outcome::Skipped(reason);
            }
        };

        let report = self.paginator.paginate_with_report(&item.content, &policy);
        if !report.applied() {
            debug!("item {}: {} block(s), no break placed", item.id, report.block_count);
            return Outcome::Skipped(SkipReason::NothingToSplit);
        }

        let pages = report.page_count();
        item.content = report.content;
        debug!("item {}: split into {} pages", item.id, pages);
        Outcome::Paginated { pages }
    }

    /// Paginate every eligible item, returning how many were changed
    pub fn process_all(&self, items: &mut [Item]) -> usize {
        let paginated = items
            .iter_mut()
            .map(|item| self.process(item))
            .filter(Outcome::is_paginated)
            .count();
        info!("paginated {} of {} item(s)", paginated, items.len());
        paginated
    }
}
