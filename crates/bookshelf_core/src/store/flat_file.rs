//! Line-oriented text file store.
//!
//! # Responsibility
//! - Serialize records as `id`, `title`, `author` lines, three per record.
//! - Restore records from the same layout, tolerating a missing file.
//!
//! # Invariants
//! - The file has no header, footer or escaping.
//! - A missing file is an empty catalog, not an error.
//! - Malformed trailing data is dropped; everything before it is kept.
//! - Bytes that are not valid UTF-8 are replaced with U+FFFD on load.

use super::{BookStore, StoreError, StoreResult};
use crate::model::book::{BookId, BookRecord};
use log::{debug, error, info, warn};
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// File name used when no data path is configured.
pub const DEFAULT_DATA_FILE: &str = "books.txt";

/// Store that keeps the catalog in a flat text file.
#[derive(Debug, Clone)]
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_snapshot(&self, records: &[BookRecord]) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = BufWriter::new(File::create(&self.path)?);
        writer.write_all(encode_records(records).as_bytes())?;
        writer.flush()
    }
}

impl BookStore for FlatFileStore {
    fn save(&self, records: &[BookRecord]) -> StoreResult<()> {
        let started_at = Instant::now();

        if let Some(record) = records.iter().find(|record| record.has_line_breaks()) {
            warn!(
                "event=store_save module=store status=lossy reason=line_break_in_field id={}",
                record.id
            );
        }

        match self.write_snapshot(records) {
            Ok(()) => {
                debug!(
                    "event=store_save module=store status=ok records={} duration_ms={}",
                    records.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=store status=error path={} duration_ms={} error={}",
                    self.path.display(),
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(StoreError::io(&self.path, err))
            }
        }
    }

    fn load(&self) -> StoreResult<Vec<BookRecord>> {
        let started_at = Instant::now();

        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(
                    "event=store_load module=store status=missing path={}",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(err) => {
                error!(
                    "event=store_load module=store status=error path={} error={}",
                    self.path.display(),
                    err
                );
                return Err(StoreError::io(&self.path, err));
            }
        };

        let text = String::from_utf8_lossy(&bytes);
        if matches!(text, Cow::Owned(_)) {
            warn!(
                "event=store_load module=store status=lossy reason=invalid_utf8 path={}",
                self.path.display()
            );
        }

        let records = decode_records(&text);
        info!(
            "event=store_load module=store status=ok records={} duration_ms={}",
            records.len(),
            started_at.elapsed().as_millis()
        );
        Ok(records)
    }
}

/// Renders records in the three-lines-per-record file layout.
pub fn encode_records(records: &[BookRecord]) -> String {
    let mut text = String::new();
    for record in records {
        text.push_str(&record.id.to_string());
        text.push('\n');
        text.push_str(&record.title);
        text.push('\n');
        text.push_str(&record.author);
        text.push('\n');
    }
    text
}

/// Parses the file layout back into records, in file order.
///
/// Blank lines before an id are skipped. Parsing stops at the first id that
/// is not a valid integer or at a group with fewer than three lines.
pub fn decode_records(text: &str) -> Vec<BookRecord> {
    let mut lines = text.lines();
    let mut records = Vec::new();

    loop {
        let Some(id_line) = lines.by_ref().find(|line| !line.trim().is_empty()) else {
            break;
        };
        let Ok(id) = id_line.trim().parse::<BookId>() else {
            warn!(
                "event=store_decode module=store status=truncated reason=invalid_id kept={}",
                records.len()
            );
            break;
        };
        let (Some(title), Some(author)) = (lines.next(), lines.next()) else {
            warn!(
                "event=store_decode module=store status=truncated reason=incomplete_record kept={}",
                records.len()
            );
            break;
        };
        records.push(BookRecord::new(id, title, author));
    }

    records
}
