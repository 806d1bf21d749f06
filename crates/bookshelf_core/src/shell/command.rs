//! Menu commands and their dispatch against a catalog.
//!
//! # Responsibility
//! - Map menu choices to commands.
//! - Execute fully-specified requests and report outcomes as values.
//!
//! # Invariants
//! - `execute` performs no terminal I/O.
//! - Store failures become `Outcome::StoreFailed`; they never abort a session.

use crate::model::book::{BookId, BookRecord};
use crate::service::catalog::Catalog;
use crate::store::BookStore;

/// Menu entry, numbered 1 to 7 in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Add,
    Delete,
    Display,
    Search,
    Count,
    ClearAll,
    Exit,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::Add,
        Command::Delete,
        Command::Display,
        Command::Search,
        Command::Count,
        Command::ClearAll,
        Command::Exit,
    ];

    /// Parses a menu choice such as `"3"`; surrounding whitespace is ignored.
    pub fn from_choice(input: &str) -> Option<Self> {
        let choice = input.trim().parse::<u8>().ok()?;
        Self::ALL
            .into_iter()
            .find(|command| command.choice() == choice)
    }

    pub fn choice(self) -> u8 {
        match self {
            Self::Add => 1,
            Self::Delete => 2,
            Self::Display => 3,
            Self::Search => 4,
            Self::Count => 5,
            Self::ClearAll => 6,
            Self::Exit => 7,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Add => "Add Book",
            Self::Delete => "Delete Book",
            Self::Display => "Display All Books",
            Self::Search => "Search Book by ID",
            Self::Count => "Count Total Books",
            Self::ClearAll => "Clear All Books",
            Self::Exit => "Exit",
        }
    }
}

/// A command together with the arguments it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Add(BookRecord),
    Delete(BookId),
    Display,
    Search(BookId),
    Count,
    ClearAll,
    Exit,
}

impl Request {
    pub fn command(&self) -> Command {
        match self {
            Self::Add(_) => Command::Add,
            Self::Delete(_) => Command::Delete,
            Self::Display => Command::Display,
            Self::Search(_) => Command::Search,
            Self::Count => Command::Count,
            Self::ClearAll => Command::ClearAll,
            Self::Exit => Command::Exit,
        }
    }
}

/// Result of executing one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added,
    Deleted(BookId),
    NotFound(BookId),
    /// All records in traversal order; empty when the catalog is empty.
    Listing(Vec<BookRecord>),
    Found(BookRecord),
    Count(usize),
    Cleared,
    Exit,
    /// The in-memory change was applied but could not be persisted.
    StoreFailed(String),
}

/// Runs `request` against `catalog`.
pub fn execute<S: BookStore>(catalog: &mut Catalog<S>, request: Request) -> Outcome {
    match request {
        Request::Add(record) => match catalog.add(record.id, record.title, record.author) {
            Ok(()) => Outcome::Added,
            Err(err) => Outcome::StoreFailed(err.to_string()),
        },
        Request::Delete(id) => match catalog.delete(id) {
            Ok(true) => Outcome::Deleted(id),
            Ok(false) => Outcome::NotFound(id),
            Err(err) => Outcome::StoreFailed(err.to_string()),
        },
        Request::Display => Outcome::Listing(catalog.list_all().cloned().collect()),
        Request::Search(id) => match catalog.find_by_id(id) {
            Some(record) => Outcome::Found(record.clone()),
            None => Outcome::NotFound(id),
        },
        Request::Count => Outcome::Count(catalog.count()),
        Request::ClearAll => match catalog.clear_all() {
            Ok(()) => Outcome::Cleared,
            Err(err) => Outcome::StoreFailed(err.to_string()),
        },
        Request::Exit => Outcome::Exit,
    }
}
