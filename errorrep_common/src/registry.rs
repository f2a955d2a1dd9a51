//! Error registry: active errors, bounded error log, current error.
//!
//! Built once at startup from a [`RegistryConfig`] and owned by the caller.
//! All storage is reserved at construction; no operation allocates.
//!
//! ## Structures
//!
//! - **Active set**: codes raised and not yet cleared, oldest first.
//!   Re-raising an active code refreshes its entry in place.
//! - **Error log**: FIFO ring of every raised entry, cleared or not,
//!   bounded by `log_capacity`. The oldest entry is evicted when full.
//! - **Current error**: copy of the first entry carrying the highest
//!   severity seen this session. Never lowered by clearing or eviction.
//!
//! ## Ordering
//!
//! Every accepted `set_error` takes the next value of a monotonic sequence
//! counter (starting at 1). Sequence numbers follow call order only; there
//! is no wall-clock input.
//!
//! ## Failure Semantics
//!
//! A rejected call returns [`RegistryError`] and leaves every structure
//! untouched, so the registry stays usable afterwards.

use heapless::{Deque, Vec};
use tracing::{debug, info, warn};

use crate::config::{ConfigError, RegistryConfig};
use crate::consts::{MAX_ACTIVE_ERRORS, MAX_LOG_CAPACITY};
use crate::entry::{ErrorCode, ErrorEntry};
use crate::error::RegistryError;
use crate::report::{ErrorStatus, LogRecord, LogReport, Report};
use crate::severity::Severity;

// ─── Current-Error Resolution ───────────────────────────────────────

/// Fold one raised entry into the current-error slot.
///
/// The held entry is replaced only by a strictly higher severity, so among
/// entries sharing the maximal severity the earliest one is kept.
#[inline]
pub fn resolve_current(current: Option<ErrorEntry>, candidate: ErrorEntry) -> Option<ErrorEntry> {
    match current {
        Some(held) if held.severity >= candidate.severity => Some(held),
        _ => Some(candidate),
    }
}

/// Resolve the current error over a whole entry sequence, in raise order.
pub fn resolve_current_all<I>(entries: I) -> Option<ErrorEntry>
where
    I: IntoIterator<Item = ErrorEntry>,
{
    entries.into_iter().fold(None, resolve_current)
}

// ─── ErrorRegistry ──────────────────────────────────────────────────

/// Central error registry.
#[derive(Debug, Clone)]
pub struct ErrorRegistry {
    /// Active entries in first-raise order.
    active: Vec<ErrorEntry, MAX_ACTIVE_ERRORS>,
    /// Raise history, oldest at the front.
    log: Deque<ErrorEntry, MAX_LOG_CAPACITY>,
    /// Configured log bound (`1..=MAX_LOG_CAPACITY`).
    log_capacity: usize,
    /// Session high-water mark.
    current: Option<ErrorEntry>,
    /// Last issued sequence number (0 = none issued yet).
    sequence: u64,
    /// Log entries dropped by FIFO eviction.
    evicted: u64,
}

impl Default for ErrorRegistry {
    fn default() -> Self {
        Self::with_capacity(RegistryConfig::default().log_capacity)
    }
}

impl ErrorRegistry {
    /// Create an empty registry from a validated config.
    ///
    /// # Errors
    ///
    /// `ConfigError::ValidationError` if `log_capacity` is out of range.
    pub fn new(config: RegistryConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(log_capacity = config.log_capacity, "error registry initialized");
        Ok(Self::with_capacity(config.log_capacity))
    }

    /// Capacity is clamped to `1..=MAX_LOG_CAPACITY`.
    fn with_capacity(log_capacity: usize) -> Self {
        Self {
            active: Vec::new(),
            log: Deque::new(),
            log_capacity: log_capacity.clamp(1, MAX_LOG_CAPACITY),
            current: None,
            sequence: 0,
            evicted: 0,
        }
    }

    // ── Mutations ──

    /// Raise an error.
    ///
    /// Inserts or refreshes `code` in the active set, appends an entry to
    /// the log (evicting the oldest at capacity), and promotes the entry to
    /// current error if its severity is strictly higher.
    ///
    /// # Errors
    ///
    /// - `RegistryError::InvalidCode` if `code >= 0`.
    /// - `RegistryError::ActiveSetFull` if `code` is not active and all
    ///   [`MAX_ACTIVE_ERRORS`] slots are taken.
    pub fn set_error(&mut self, code: i32, severity: Severity) -> Result<ErrorEntry, RegistryError> {
        let code = ErrorCode::new(code).inspect_err(|e| warn!("set_error rejected: {e}"))?;
        let entry = ErrorEntry::new(code, severity, self.sequence + 1);

        match self.active_index(code) {
            Some(idx) => self.active[idx] = entry,
            None => self.active.push(entry).map_err(|_| {
                let err = RegistryError::ActiveSetFull {
                    capacity: MAX_ACTIVE_ERRORS,
                };
                warn!(code = code.get(), "set_error rejected: {err}");
                err
            })?,
        }
        self.sequence = entry.sequence;

        self.append_log(entry);

        let previous = self.current;
        self.current = resolve_current(previous, entry);
        if self.current != previous {
            info!(
                code = code.get(),
                severity = %severity,
                sequence = entry.sequence,
                "current error promoted"
            );
        }

        debug!(
            code = code.get(),
            severity = %severity,
            sequence = entry.sequence,
            active = self.active.len(),
            "error raised"
        );
        Ok(entry)
    }

    /// Resolve an active error.
    ///
    /// Returns whether `code` was active. Clearing an inactive code, or a
    /// non-negative value that can never be active, is a no-op. The log and
    /// the current error are never touched.
    pub fn clear_error(&mut self, code: i32) -> bool {
        let Ok(code) = ErrorCode::new(code) else {
            debug!(code, "clear_error ignored: not an error code");
            return false;
        };
        match self.active_index(code) {
            Some(idx) => {
                // Order-preserving removal keeps first-raise iteration order.
                let entry = self.active.remove(idx);
                debug!(
                    code = code.get(),
                    sequence = entry.sequence,
                    active = self.active.len(),
                    "error cleared"
                );
                true
            }
            None => false,
        }
    }

    fn append_log(&mut self, entry: ErrorEntry) {
        while self.log.len() >= self.log_capacity {
            let Some(oldest) = self.log.pop_front() else {
                break;
            };
            self.evicted += 1;
            debug!(
                code = oldest.code.get(),
                sequence = oldest.sequence,
                "error log full, oldest entry evicted"
            );
        }
        let pushed = self.log.push_back(entry);
        debug_assert!(pushed.is_ok(), "log_capacity exceeds log storage");
    }

    fn active_index(&self, code: ErrorCode) -> Option<usize> {
        self.active.iter().position(|e| e.code == code)
    }

    // ── Snapshots ──

    /// Snapshot of the active set, oldest raised first.
    pub fn error_report(&self) -> Report {
        self.active.iter().copied().collect()
    }

    /// Snapshot of the error log, oldest first, with each record's code
    /// status as of now.
    pub fn error_log(&self) -> LogReport {
        let records = self
            .log
            .iter()
            .map(|entry| {
                let status = if self.active_index(entry.code).is_some() {
                    ErrorStatus::Active
                } else {
                    ErrorStatus::Cleared
                };
                LogRecord::new(*entry, status)
            })
            .collect();
        LogReport {
            capacity: self.log_capacity,
            evicted: self.evicted,
            records,
        }
    }

    /// Highest-severity error of the session, earliest on ties.
    /// `None` until the first error is raised.
    #[inline]
    pub fn current_error(&self) -> Option<ErrorEntry> {
        self.current
    }

    // ── Queries ──

    pub fn is_active(&self, code: i32) -> bool {
        ErrorCode::new(code).is_ok_and(|code| self.active_index(code).is_some())
    }

    /// Active entry for `code`, if any.
    pub fn active_entry(&self, code: i32) -> Option<ErrorEntry> {
        let code = ErrorCode::new(code).ok()?;
        self.active.iter().find(|e| e.code == code).copied()
    }

    /// Active entries in first-raise order.
    pub fn active_errors(&self) -> impl Iterator<Item = &ErrorEntry> {
        self.active.iter()
    }

    /// Logged entries, oldest first.
    pub fn log_entries(&self) -> impl Iterator<Item = &ErrorEntry> {
        self.log.iter()
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        !self.active.is_empty()
    }

    /// Highest severity among active errors; the device status right now.
    pub fn highest_active_severity(&self) -> Option<Severity> {
        self.active.iter().map(|e| e.severity).max()
    }

    #[inline]
    pub fn log_len(&self) -> usize {
        self.log.len()
    }

    #[inline]
    pub fn log_capacity(&self) -> usize {
        self.log_capacity
    }

    /// Number of log entries dropped by FIFO eviction so far.
    #[inline]
    pub fn evicted_count(&self) -> u64 {
        self.evicted
    }

    /// Last issued sequence number (0 before the first raise).
    #[inline]
    pub fn last_sequence(&self) -> u64 {
        self.sequence
    }
}
