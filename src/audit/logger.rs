//! Line-delimited JSON audit log

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::warn;

use crate::error::{ExpenseError, ExpenseResult};

use super::entry::AuditEntry;

/// Appends entries to, and reads them back from, one JSONL file
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry and flush it to disk
    pub fn append(&self, entry: &AuditEntry) -> ExpenseResult<()> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| {
                file.write_all(&line)?;
                file.sync_data()
            })
            .map_err(|e| {
                ExpenseError::Storage(format!(
                    "Failed to append to audit log {}: {}",
                    self.path.display(),
                    e
                ))
            })
    }

    /// Every readable entry, oldest first
    ///
    /// Lines that no longer parse are skipped with a warning.
    pub fn entries(&self) -> ExpenseResult<Vec<AuditEntry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut entries = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str(&line) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!("Skipping audit log line {}: {}", index + 1, e),
            }
        }
        Ok(entries)
    }

    /// The last `count` entries, oldest first
    pub fn recent(&self, count: usize) -> ExpenseResult<Vec<AuditEntry>> {
        let mut entries = self.entries()?;
        let keep_from = entries.len().saturating_sub(count);
        Ok(entries.split_off(keep_from))
    }
}
