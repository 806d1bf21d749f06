//! In-memory store for headless runs and tests.

use super::{BookStore, StoreError, StoreResult};
use crate::model::book::BookRecord;
use std::cell::{Cell, RefCell};
use std::io;

const MEMORY_STORE_PATH: &str = "<memory>";

/// Store that keeps the last saved snapshot in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    snapshot: RefCell<Vec<BookRecord>>,
    saves: Cell<usize>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `records` as its persisted state.
    pub fn with_records(records: Vec<BookRecord>) -> Self {
        Self {
            snapshot: RefCell::new(records),
            ..Self::default()
        }
    }

    /// Returns a copy of the last saved snapshot.
    pub fn snapshot(&self) -> Vec<BookRecord> {
        self.snapshot.borrow().clone()
    }

    /// Number of successful saves since creation.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Makes subsequent saves fail with an I/O error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }
}

impl BookStore for MemoryStore {
    fn save(&self, records: &[BookRecord]) -> StoreResult<()> {
        if self.fail_writes.get() {
            return Err(StoreError::io(
                MEMORY_STORE_PATH,
                io::Error::other("writes disabled"),
            ));
        }
        *self.snapshot.borrow_mut() = records.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn load(&self) -> StoreResult<Vec<BookRecord>> {
        Ok(self.snapshot())
    }
}
