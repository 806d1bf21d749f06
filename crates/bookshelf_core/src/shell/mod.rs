//! Interactive text front end.
//!
//! # Responsibility
//! - Dispatch menu commands against a catalog without owning any I/O policy.
//! - Drive a full session from configuration, input and output streams.
//!
//! # Invariants
//! - Catalog errors during a session are reported in the output, not
//!   returned; only terminal stream failures end a session early.

use crate::config::BookshelfConfig;
use crate::service::catalog::Catalog;
use crate::store::{FlatFileStore, StoreError};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

pub mod command;
pub mod render;
pub mod session;

pub use command::{execute, Command, Outcome, Request};
pub use session::Session;

/// Failure that ends a shell session.
#[derive(Debug)]
pub enum ShellError {
    /// Reading input or writing output failed.
    Io(io::Error),
    /// The catalog could not be loaded or the teardown flush failed.
    Store(StoreError),
}

impl Display for ShellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "terminal i/o failed: {err}"),
            Self::Store(err) => write!(f, "book store failed: {err}"),
        }
    }
}

impl Error for ShellError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<io::Error> for ShellError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<StoreError> for ShellError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Opens the configured flat-file catalog and runs one menu session.
///
/// Applies `config.exit_policy` once the session ends.
pub fn run<R: BufRead, W: Write>(
    config: &BookshelfConfig,
    input: R,
    output: W,
) -> Result<(), ShellError> {
    let store = FlatFileStore::new(&config.data_file);
    let mut catalog = Catalog::open(store)?;
    info!(
        "event=session_start module=shell status=ok data_file={} exit_policy={}",
        config.data_file.display(),
        config.exit_policy.as_str()
    );

    let mut session = Session::new(input, output);
    session.run(&mut catalog)?;
    catalog.shutdown(config.exit_policy)?;
    Ok(())
}
