//! Shared registry handle for multi-context use.
//!
//! [`ErrorRegistry`] needs `&mut` for every mutation and so is single-owner
//! by construction. When more than one execution context (e.g. an
//! interrupt-driven worker and the main loop) must raise errors, they share
//! a [`SharedRegistry`]: one mutex guards all operations, so every call is
//! atomic with respect to every other call.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::entry::ErrorEntry;
use crate::error::RegistryError;
use crate::registry::ErrorRegistry;
use crate::report::{LogReport, Report};
use crate::severity::Severity;

/// Cloneable, lock-protected handle to one [`ErrorRegistry`].
#[derive(Debug, Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<ErrorRegistry>>,
}

impl SharedRegistry {
    pub fn new(registry: ErrorRegistry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }

    /// See [`ErrorRegistry::set_error`].
    pub fn set_error(&self, code: i32, severity: Severity) -> Result<ErrorEntry, RegistryError> {
        self.inner.lock().set_error(code, severity)
    }

    /// See [`ErrorRegistry::clear_error`].
    pub fn clear_error(&self, code: i32) -> bool {
        self.inner.lock().clear_error(code)
    }

    pub fn error_report(&self) -> Report {
        self.inner.lock().error_report()
    }

    pub fn error_log(&self) -> LogReport {
        self.inner.lock().error_log()
    }

    pub fn current_error(&self) -> Option<ErrorEntry> {
        self.inner.lock().current_error()
    }

    /// Run `f` with exclusive access, for compound operations that must
    /// not interleave with other callers.
    pub fn with<R>(&self, f: impl FnOnce(&mut ErrorRegistry) -> R) -> R {
        f(&mut self.inner.lock())
    }

    /// Whether the lock is currently held by some caller.
    pub fn is_locked(&self) -> bool {
        self.inner.is_locked()
    }
}

impl From<ErrorRegistry> for SharedRegistry {
    fn from(registry: ErrorRegistry) -> Self {
        Self::new(registry)
    }
}
