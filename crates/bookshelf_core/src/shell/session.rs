//! Interactive menu session over arbitrary line input and text output.
//!
//! # Invariants
//! - End of input ends the session as if `Exit` had been chosen.
//! - An id prompt repeats until a whole number is entered.
//! - Title and author lines are kept verbatim apart from the line ending;
//!   invalid UTF-8 is replaced with U+FFFD rather than ending the session.

use super::command::{execute, Command, Outcome, Request};
use super::render::{
    write_invalid_choice, write_invalid_id, write_menu, write_outcome, write_ui_break,
};
use crate::model::book::{BookId, BookRecord};
use crate::service::catalog::Catalog;
use crate::store::BookStore;
use log::{debug, info};
use std::io::{self, BufRead, Write};

pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs the menu loop until `Exit` or end of input.
    ///
    /// Returns the number of commands executed, including the final exit.
    pub fn run<S: BookStore>(&mut self, catalog: &mut Catalog<S>) -> io::Result<usize> {
        let mut executed = 0;
        loop {
            write_menu(&mut self.output)?;
            let request = match self.read_line()? {
                None => Request::Exit,
                Some(line) => match Command::from_choice(&line) {
                    Some(Command::Exit) => Request::Exit,
                    Some(command) => {
                        write_ui_break(&mut self.output)?;
                        self.read_request(command)?.unwrap_or(Request::Exit)
                    }
                    None => {
                        debug!("event=menu_choice module=shell status=invalid");
                        write_invalid_choice(&mut self.output)?;
                        write_ui_break(&mut self.output)?;
                        continue;
                    }
                },
            };

            let command = request.command();
            let outcome = execute(catalog, request);
            executed += 1;
            debug!(
                "event=menu_command module=shell status=done command={:?}",
                command
            );
            write_outcome(&mut self.output, &outcome)?;
            write_ui_break(&mut self.output)?;

            if outcome == Outcome::Exit {
                info!(
                    "event=session_end module=shell status=ok commands={}",
                    executed
                );
                return Ok(executed);
            }
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prompts for the arguments of `command`; `None` on end of input.
    fn read_request(&mut self, command: Command) -> io::Result<Option<Request>> {
        let request = match command {
            Command::Add => {
                writeln!(self.output, "Enter Book Details:")?;
                let Some(id) = self.prompt_id("Book ID: ")? else {
                    return Ok(None);
                };
                let Some(title) = self.prompt_line("Book Title: ")? else {
                    return Ok(None);
                };
                let Some(author) = self.prompt_line("Author Name: ")? else {
                    return Ok(None);
                };
                Request::Add(BookRecord::new(id, title, author))
            }
            Command::Delete => match self.prompt_id("Enter Book ID to delete: ")? {
                Some(id) => Request::Delete(id),
                None => return Ok(None),
            },
            Command::Search => match self.prompt_id("Enter Book ID to search: ")? {
                Some(id) => Request::Search(id),
                None => return Ok(None),
            },
            Command::Display => Request::Display,
            Command::Count => Request::Count,
            Command::ClearAll => Request::ClearAll,
            Command::Exit => Request::Exit,
        };
        Ok(Some(request))
    }

    fn prompt_id(&mut self, prompt: &str) -> io::Result<Option<BookId>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match line.trim().parse::<BookId>() {
                Ok(id) => return Ok(Some(id)),
                Err(_) => write_invalid_id(&mut self.output)?,
            }
        }
    }

    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Ok(None);
        }
        if raw.last() == Some(&b'\n') {
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
    }
}
