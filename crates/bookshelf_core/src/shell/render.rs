//! Text rendering for the interactive menu.

use super::command::{Command, Outcome};
use crate::model::book::BookRecord;
use std::io::{self, Write};

const RULE: &str = "-------------------------------------------";
const DOUBLE_RULE: &str = "===========================================";
const TABLE_RULE_WIDTH: usize = 70;

pub fn write_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{DOUBLE_RULE}")?;
    writeln!(out, "|       WELCOME TO BOOK MANAGEMENT       |")?;
    writeln!(out, "{DOUBLE_RULE}")?;
    for command in Command::ALL {
        let entry = format!("{}. {}", command.choice(), command.label());
        writeln!(out, "| {entry:<40}|")?;
    }
    writeln!(out, "{DOUBLE_RULE}")?;
    write!(out, "\nEnter your choice (1-7): ")?;
    out.flush()
}

pub fn write_ui_break<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n{RULE}\n")
}

pub fn write_invalid_choice<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "\n[ERROR] Invalid choice! Please try again.")
}

pub fn write_invalid_id<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "[ERROR] Invalid book ID, please enter a whole number.")
}

pub fn write_outcome<W: Write>(out: &mut W, outcome: &Outcome) -> io::Result<()> {
    match outcome {
        Outcome::Added => write_banner(out, "     [SUCCESS] Book added successfully!     "),
        Outcome::Deleted(_) => write_banner(out, "     Book deleted successfully!             "),
        Outcome::NotFound(id) => {
            write_banner(out, &format!("  [ERROR] Book with ID {id} not found!"))
        }
        Outcome::Listing(records) if records.is_empty() => {
            write_banner(out, "  [INFO] No books available in the system!")
        }
        Outcome::Listing(records) => write_table(out, records),
        Outcome::Found(record) => {
            writeln!(out, "\n{RULE}")?;
            writeln!(out, "Book Found:")?;
            writeln!(out, "Book ID: {}", record.id)?;
            writeln!(out, "Title: {}", record.title)?;
            writeln!(out, "Author: {}", record.author)?;
            writeln!(out, "{RULE}")
        }
        Outcome::Count(count) => writeln!(out, "Total books in the system: {count}"),
        Outcome::Cleared => write_banner(out, "  All books have been cleared successfully!"),
        Outcome::Exit => writeln!(out, "\nGoodbye! Exiting the program."),
        Outcome::StoreFailed(message) => {
            write_banner(out, &format!("  [ERROR] Could not save books: {message}"))
        }
    }
}

fn write_banner<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "\n{RULE}")?;
    writeln!(out, "{message}")?;
    writeln!(out, "{RULE}")
}

fn write_table<W: Write>(out: &mut W, records: &[BookRecord]) -> io::Result<()> {
    writeln!(out, "\n{DOUBLE_RULE}")?;
    writeln!(out, "             List of Books                 ")?;
    writeln!(out, "{DOUBLE_RULE}")?;
    writeln!(out, "{:<10}{:<30}{:<30}", "Book ID", "Title", "Author")?;
    writeln!(out, "{}", "-".repeat(TABLE_RULE_WIDTH))?;
    for record in records {
        writeln!(
            out,
            "{:<10}{:<30}{:<30}",
            record.id, record.title, record.author
        )?;
    }
    writeln!(out, "{RULE}")
}
