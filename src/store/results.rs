/// Result log persistence
///
/// An ordered JSON array of `ResultRecord`s. Every mutation reads the whole
/// file, changes it in memory and writes it back. No locking; a crash in the
/// middle of a write can leave a broken file, which later reads treat as
/// unreadable.

use crate::error::Result;
use crate::store::models::ResultRecord;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// What the log file held when it was read
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogContents {
    /// No log file yet
    Missing,
    /// The file exists but could not be read or decoded
    Unreadable(String),
    /// Records in insertion order (possibly none)
    Records(Vec<ResultRecord>),
}

impl LogContents {
    /// Records, with missing/unreadable logs counting as empty
    pub fn into_records(self) -> Vec<ResultRecord> {
        match self {
            LogContents::Records(records) => records,
            _ => Vec::new(),
        }
    }
}

/// Owns the on-disk result log
#[derive(Debug, Clone)]
pub struct ResultLog {
    path: PathBuf,
}

impl ResultLog {
    /// Create a log handle
    ///
    /// Nothing is touched on disk until the first append.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the log file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record in insertion order
    pub fn list_all(&self) -> LogContents {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return LogContents::Missing,
            Err(e) => return LogContents::Unreadable(e.to_string()),
        };

        if content.trim().is_empty() {
            return LogContents::Records(Vec::new());
        }

        match serde_json::from_str::<Vec<ResultRecord>>(&content) {
            Ok(records) => LogContents::Records(records),
            Err(e) => LogContents::Unreadable(e.to_string()),
        }
    }

    /// Append one record and rewrite the file
    ///
    /// A missing or unreadable log is started over from empty.
    ///
    /// # Returns
    /// * `Ok(())` - Record persisted
    /// * `Err(ExplainerError)` - If the file could not be written
    pub fn append(&self, record: ResultRecord) -> Result<()> {
        let mut records = match self.list_all() {
            LogContents::Records(records) => records,
            LogContents::Missing => Vec::new(),
            LogContents::Unreadable(reason) => {
                warn!(path = %self.path.display(), %reason, "result log unreadable, starting fresh");
                eprintln!(
                    "Warning: '{}' could not be read ({}); starting a new log.",
                    self.path.display(),
                    reason
                );
                Vec::new()
            }
        };

        records.push(record);
        self.write(&records)?;

        debug!(path = %self.path.display(), total = records.len(), "appended result");
        Ok(())
    }

    /// Delete the most recent record
    ///
    /// # Returns
    /// * `Ok(Some(record))` - The record that was removed
    /// * `Ok(None)` - Nothing to clear (empty, missing or unreadable log)
    /// * `Err(ExplainerError)` - If the shortened log could not be written
    pub fn remove_last(&self) -> Result<Option<ResultRecord>> {
        let mut records = match self.list_all() {
            LogContents::Records(records) => records,
            LogContents::Missing => return Ok(None),
            LogContents::Unreadable(reason) => {
                warn!(path = %self.path.display(), %reason, "result log unreadable, nothing removed");
                return Ok(None);
            }
        };

        let Some(removed) = records.pop() else {
            return Ok(None);
        };

        self.write(&records)?;

        debug!(path = %self.path.display(), remaining = records.len(), "removed last result");
        Ok(Some(removed))
    }

    fn write(&self, records: &[ResultRecord]) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(records)?;
        fs::write(&self.path, json)?;

        Ok(())
    }
}
