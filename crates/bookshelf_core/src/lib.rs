//! Core catalog logic for Bookshelf.
//! This crate is the single source of truth for catalog and file-format rules.

pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod shell;
pub mod store;

pub use config::{BookshelfConfig, ExitPolicy};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::book::{BookId, BookRecord};
pub use service::catalog::Catalog;
pub use shell::{execute, Command, Outcome, Request, Session, ShellError};
pub use store::{
    BookStore, FlatFileStore, MemoryStore, StoreError, StoreResult, DEFAULT_DATA_FILE,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
