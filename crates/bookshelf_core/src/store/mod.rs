//! Persistence boundary for catalog contents.
//!
//! # Responsibility
//! - Define the full-snapshot save/load contract used by the catalog.
//! - Provide the flat-file store and an in-memory counterpart.
//!
//! # Invariants
//! - `save` always replaces the whole persisted state; there are no
//!   incremental writes.
//! - `load` on a store that was never written returns an empty list.

use crate::model::book::BookRecord;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;
use std::path::PathBuf;

pub mod flat_file;
pub mod memory;

pub use flat_file::{decode_records, encode_records, FlatFileStore, DEFAULT_DATA_FILE};
pub use memory::MemoryStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for snapshot reads and writes.
#[derive(Debug)]
pub enum StoreError {
    Io { path: PathBuf, source: io::Error },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "`{}`: {source}", path.display()),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

/// Snapshot persistence used by `Catalog`.
pub trait BookStore {
    /// Replaces the persisted state with `records`, in the given order.
    fn save(&self, records: &[BookRecord]) -> StoreResult<()>;
    /// Reads the persisted records in stored order.
    fn load(&self) -> StoreResult<Vec<BookRecord>>;
}
