//! Global pagination settings

use crate::error::{Error, Result};
use crate::pagination::DEFAULT_MARKER;
use crate::policy::{PagingType, PolicyLimits, DEFAULT_NUM_PAGES};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Site-wide settings the host resolves per-item policies from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Item kinds that are paginated automatically
    pub post_types: Vec<String>,

    /// Split by page count or by words per page
    pub paging_type: PagingType,

    /// Target page count; 0 falls back to the default
    pub num_pages: usize,

    /// Approximate words per page; 0 leaves word paging unset
    pub num_words: usize,

    pub limits: PolicyLimits,

    /// Page-break marker inserted between pages
    pub marker: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            post_types: vec!["post".to_string()],
            paging_type: PagingType::default(),
            num_pages: DEFAULT_NUM_PAGES,
            num_words: 0,
            limits: PolicyLimits::default(),
            marker: DEFAULT_MARKER.to_string(),
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.normalized())
    }

    /// Load settings from a JSON file, or use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Settings::default());
        };

        let content = std::fs::read_to_string(path).map_err(|source| Error::ReadSettings {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Apply the stored-value fallbacks and sanitizers
    ///
    /// A zero page count means "unset" and reverts to the default before being
    /// clamped into `[2, max_pages]`; a non-zero word target is raised to
    /// `min_words`; an empty marker reverts to [`DEFAULT_MARKER`].
    pub fn normalized(mut self) -> Self {
        if self.num_pages == 0 {
            self.num_pages = DEFAULT_NUM_PAGES;
        }
        self.num_pages = self.limits.sanitize_num_pages(self.num_pages);
        self.num_words = self.limits.sanitize_num_words(self.num_words);
        if self.marker.is_empty() {
            self.marker = DEFAULT_MARKER.to_string();
        }
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
