//! Book catalog service.
//!
//! # Responsibility
//! - Hold the ordered in-memory collection of book records.
//! - Flush the full collection to the store after every mutation.
//!
//! # Invariants
//! - Traversal order is most-recently-inserted first.
//! - By-id operations resolve to the first match in traversal order.
//! - Read-only operations never touch the store.
//! - A failed flush leaves the in-memory change in place.

use crate::config::ExitPolicy;
use crate::model::book::{BookId, BookRecord};
use crate::store::{BookStore, StoreResult};
use log::{error, info};
use std::collections::VecDeque;

/// In-memory book collection backed by a snapshot store.
pub struct Catalog<S: BookStore> {
    books: VecDeque<BookRecord>,
    store: S,
}

impl<S: BookStore> Catalog<S> {
    /// Creates an empty catalog without reading the store.
    pub fn new(store: S) -> Self {
        Self {
            books: VecDeque::new(),
            store,
        }
    }

    /// Creates a catalog populated from the store.
    ///
    /// Records are inserted one by one at the front without flushing, so the
    /// loaded traversal order is the reverse of the stored order.
    pub fn open(store: S) -> StoreResult<Self> {
        let records = store.load()?;
        let mut catalog = Self::new(store);
        for record in records {
            catalog.add_without_flush(record.id, record.title, record.author);
        }
        info!(
            "event=catalog_open module=catalog status=ok records={}",
            catalog.books.len()
        );
        Ok(catalog)
    }

    /// Inserts a record at the front and flushes.
    pub fn add(
        &mut self,
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> StoreResult<()> {
        self.add_without_flush(id, title, author);
        self.flush("add")
    }

    /// Inserts a record at the front without touching the store.
    pub fn add_without_flush(
        &mut self,
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
    ) {
        self.books.push_front(BookRecord::new(id, title, author));
    }

    /// Removes the first record with `id`.
    ///
    /// Returns `Ok(false)` without flushing when no record matches.
    pub fn delete(&mut self, id: BookId) -> StoreResult<bool> {
        let Some(position) = self.books.iter().position(|book| book.id == id) else {
            return Ok(false);
        };
        self.books.remove(position);
        self.flush("delete")?;
        Ok(true)
    }

    /// Returns the first record with `id`.
    pub fn find_by_id(&self, id: BookId) -> Option<&BookRecord> {
        self.books.iter().find(|book| book.id == id)
    }

    pub fn count(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Removes every record and flushes the empty state.
    pub fn clear_all(&mut self) -> StoreResult<()> {
        self.books.clear();
        self.flush("clear_all")
    }

    /// Iterates records front to back.
    pub fn list_all(&self) -> impl Iterator<Item = &BookRecord> + '_ {
        self.books.iter()
    }

    /// Runs end-of-session teardown.
    ///
    /// `ExitPolicy::ClearStore` empties both memory and the persisted file.
    pub fn shutdown(&mut self, policy: ExitPolicy) -> StoreResult<()> {
        info!(
            "event=catalog_shutdown module=catalog status=start policy={} records={}",
            policy.as_str(),
            self.books.len()
        );
        match policy {
            ExitPolicy::Keep => Ok(()),
            ExitPolicy::ClearStore => self.clear_all(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn flush(&mut self, reason: &str) -> StoreResult<()> {
        let result = self.store.save(self.books.make_contiguous());
        match &result {
            Ok(()) => info!(
                "event=catalog_flush module=catalog status=ok reason={} records={}",
                reason,
                self.books.len()
            ),
            Err(err) => error!(
                "event=catalog_flush module=catalog status=error reason={} records={} error={}",
                reason,
                self.books.len(),
                err
            ),
        }
        result
    }
}
