//! Bookshelf command-line entry point.
//!
//! # Responsibility
//! - Translate flags into `BookshelfConfig`.
//! - Start logging when a log directory is given, then run the menu on
//!   stdin/stdout.

use bookshelf_core::{core_version, default_log_level, init_logging, BookshelfConfig, ExitPolicy};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Interactive book catalog backed by a flat text file.
#[derive(Parser, Debug)]
#[command(author, version = core_version(), about)]
struct Args {
    /// File holding the catalog
    #[arg(long, default_value = bookshelf_core::DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Empty the catalog file when the session exits
    #[arg(long)]
    clear_on_exit: bool,

    /// Log level (trace|debug|info|warn|error); only valid with --log-dir
    #[arg(long, requires = "log_dir")]
    log_level: Option<String>,

    /// Absolute directory for rotated log files; logging is off when omitted
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

impl From<Args> for BookshelfConfig {
    fn from(args: Args) -> Self {
        Self {
            data_file: args.data_file,
            exit_policy: if args.clear_on_exit {
                ExitPolicy::ClearStore
            } else {
                ExitPolicy::Keep
            },
            log_level: args
                .log_level
                .unwrap_or_else(|| default_log_level().to_string()),
            log_dir: args.log_dir,
        }
    }
}

fn main() -> ExitCode {
    let config = BookshelfConfig::from(Args::parse());

    if let Some(log_dir) = &config.log_dir {
        if let Err(err) = init_logging(&config.log_level, log_dir) {
            eprintln!("bookshelf: {err}");
            return ExitCode::FAILURE;
        }
    }

    let stdin = io::stdin();
    match bookshelf_core::shell::run(&config, stdin.lock(), io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=session_end module=cli status=error error={err}");
            eprintln!("bookshelf: {err}");
            ExitCode::FAILURE
        }
    }
}
