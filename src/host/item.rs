//! Content items handed over by the host

use serde::{Deserialize, Serialize};

/// A piece of content the host may paginate
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    /// Item kind, matched against the supported kinds in settings
    pub kind: String,
    pub content: String,
    /// Per-item opt-out
    #[serde(default)]
    pub autopaging_disabled: bool,
}

impl Item {
    pub fn new(id: u64, kind: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            kind: kind.into(),
            content: content.into(),
            autopaging_disabled: false,
        }
    }

    /// Mark this item as opted out of automatic paging
    pub fn disable_autopaging(mut self) -> Self {
        self.autopaging_disabled = true;
        self
    }
}
