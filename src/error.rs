//! Error types for the fallible edges of the crate

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading settings or parsing policy input
///
/// Pagination itself never fails; degenerate input is returned unchanged.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read settings from {path}")]
    ReadSettings {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings: {0}")]
    InvalidSettings(#[from] serde_json::Error),

    #[error("Invalid paging policy: {0}")]
    InvalidPolicy(#[source] serde_json::Error),

    #[error("Unknown paging type '{0}' (expected 'pages' or 'words')")]
    UnknownPagingType(String),
}

pub type Result<T> = std::result::Result<T, Error>;
