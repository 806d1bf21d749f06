//! Domain model for the book catalog.
//!
//! # Responsibility
//! - Define the record shape shared by the catalog, stores and shell.
//!
//! # Invariants
//! - A record is identified by a caller-supplied `BookId` that is not unique.
//! - Title and author are single-line text.

pub mod book;
