//! Report data contract.
//!
//! Plain, serializable snapshots of registry state. A formatter needs
//! nothing beyond these types to render a report: each record carries its
//! code, severity and sequence, and every field survives a serde
//! round-trip unchanged.

use serde::{Deserialize, Serialize};

use crate::consts::REPORT_CAPACITY;
use crate::entry::{ErrorCode, ErrorEntry};
use crate::severity::Severity;

/// Snapshot of the active error set, oldest raised first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub entries: heapless::Vec<ErrorEntry, REPORT_CAPACITY>,
}

impl Report {
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ErrorEntry> {
        self.entries.iter()
    }

    /// Raw codes in report order.
    pub fn codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.entries.iter().map(|e| e.code.get())
    }

    pub fn contains(&self, code: i32) -> bool {
        self.codes().any(|c| c == code)
    }
}

impl FromIterator<ErrorEntry> for Report {
    /// Panics past [`REPORT_CAPACITY`] entries; registry snapshots never
    /// exceed it.
    fn from_iter<I: IntoIterator<Item = ErrorEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Whether a logged code is still active at snapshot time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorStatus {
    Active,
    Cleared,
}

/// One error log record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub code: ErrorCode,
    pub severity: Severity,
    pub sequence: u64,
    pub status: ErrorStatus,
}

impl LogRecord {
    #[inline]
    pub const fn new(entry: ErrorEntry, status: ErrorStatus) -> Self {
        Self {
            code: entry.code,
            severity: entry.severity,
            sequence: entry.sequence,
            status,
        }
    }

    /// The logged occurrence without its status.
    #[inline]
    pub const fn entry(&self) -> ErrorEntry {
        ErrorEntry::new(self.code, self.severity, self.sequence)
    }
}

/// Snapshot of the error log, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogReport {
    /// Configured log bound at snapshot time.
    pub capacity: usize,
    /// Entries dropped by FIFO eviction before this snapshot.
    pub evicted: u64,
    pub records: heapless::Vec<LogRecord, REPORT_CAPACITY>,
}

impl LogReport {
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Raw codes in log order.
    pub fn codes(&self) -> impl Iterator<Item = i32> + '_ {
        self.records.iter().map(|r| r.code.get())
    }

    /// Logged occurrences without status.
    pub fn entries(&self) -> impl Iterator<Item = ErrorEntry> + '_ {
        self.records.iter().map(LogRecord::entry)
    }
}
