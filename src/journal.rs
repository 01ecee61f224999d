use chrono::{Local, NaiveDate, NaiveTime};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Append-only, date-partitioned journal storage.
///
/// One text file per calendar day under `<root>/<dir>/<YYYY-MM-DD>.txt`, one
/// entry per line formatted `[HH:MM:SS] <text>`. Files are created lazily and
/// never truncated or rewritten.
#[derive(Debug)]
pub struct Journal {
    root: PathBuf,
    dir: String,
}

impl Journal {
    pub fn new(root: impl Into<PathBuf>, dir: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            dir: dir.into(),
        }
    }

    /// Journal rooted at the process working directory.
    pub fn from_current_dir(dir: &str) -> Result<Self> {
        Ok(Self::new(std::env::current_dir()?, dir))
    }

    /// Parse a `YYYY-MM-DD` day argument.
    pub fn parse_day(day: &str) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|_| Error::InvalidDay(day.to_string()))
    }

    /// Today's local calendar date.
    pub fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Path of a day's file relative to the journal root.
    ///
    /// This is the form shown in confirmations and errors; it never contains
    /// the working-directory prefix.
    pub fn relative_day_file(&self, date: NaiveDate) -> PathBuf {
        Path::new(&self.dir).join(format!("{}.txt", date.format("%Y-%m-%d")))
    }

    fn day_file(&self, date: NaiveDate) -> PathBuf {
        self.root.join(self.relative_day_file(date))
    }

    /// Append a note to today's journal file and return a confirmation line.
    pub fn append_note(&self, note: &str) -> Result<String> {
        let now = Local::now();
        self.append_note_at(now.date_naive(), now.time(), note)
    }

    /// Append a note to a specific day with an explicit timestamp.
    ///
    /// Validation happens before any filesystem access, so a rejected note
    /// leaves the journal untouched.
    fn append_note_at(&self, date: NaiveDate, time: NaiveTime, note: &str) -> Result<String> {
        let note = note.trim();
        if note.is_empty() {
            return Err(Error::EmptyNote);
        }

        std::fs::create_dir_all(self.root.join(&self.dir))?;

        let path = self.day_file(date);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        writeln!(file, "[{}] {}", time.format("%H:%M:%S"), note)?;

        let rel = self.relative_day_file(date);
        log::info!("Journal: appended note to {}", rel.display());
        Ok(format!("\u{1F4DD} Logged note to {}", rel.display()))
    }

    /// Read a full day's journal file as raw text.
    ///
    /// A missing file is an error naming the relative path, not an empty
    /// journal.
    pub fn read_day(&self, date: NaiveDate) -> Result<String> {
        let path = self.day_file(date);
        if !path.exists() {
            return Err(Error::JournalNotFound(self.relative_day_file(date)));
        }
        Ok(std::fs::read_to_string(&path)?)
    }
}
