//! Runtime configuration for a bookshelf session.
//!
//! # Responsibility
//! - Collect the data path, teardown policy and logging options in one place.
//!
//! # Invariants
//! - `BookshelfConfig::default()` matches the zero-flag CLI invocation.

use crate::logging::default_log_level;
use crate::store::DEFAULT_DATA_FILE;
use std::path::PathBuf;

/// What happens to persisted records when a session ends normally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExitPolicy {
    /// Leave the store as last flushed.
    #[default]
    Keep,
    /// Clear the catalog and flush the empty state.
    ClearStore,
}

impl ExitPolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Keep => "keep",
            Self::ClearStore => "clear_store",
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookshelfConfig {
    /// Flat file holding the catalog.
    pub data_file: PathBuf,
    pub exit_policy: ExitPolicy,
    /// One of `trace|debug|info|warn|error`.
    pub log_level: String,
    /// Absolute log directory; logging stays off when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for BookshelfConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            exit_policy: ExitPolicy::default(),
            log_level: default_log_level().to_string(),
            log_dir: None,
        }
    }
}
