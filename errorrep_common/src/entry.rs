//! Error codes and raised-error entries.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::RegistryError;
use crate::severity::Severity;

// ─── ErrorCode ──────────────────────────────────────────────────────

/// Negative integer identifying one error condition.
///
/// Only constructible through [`ErrorCode::new`] (or `TryFrom<i32>`), so a
/// held `ErrorCode` is always valid. Deserialization applies the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct ErrorCode(i32);

impl ErrorCode {
    /// Validate a raw code.
    ///
    /// # Errors
    ///
    /// `RegistryError::InvalidCode` if `raw >= 0`.
    #[inline]
    pub const fn new(raw: i32) -> Result<Self, RegistryError> {
        if raw < 0 {
            Ok(Self(raw))
        } else {
            Err(RegistryError::InvalidCode(raw))
        }
    }

    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl TryFrom<i32> for ErrorCode {
    type Error = RegistryError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.0
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// ─── ErrorEntry ─────────────────────────────────────────────────────

/// One raised occurrence of an error. Immutable once created.
///
/// `sequence` is the registry's call-order ordinal, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub code: ErrorCode,
    pub severity: Severity,
    pub sequence: u64,
}

impl ErrorEntry {
    #[inline]
    pub const fn new(code: ErrorCode, severity: Severity, sequence: u64) -> Self {
        Self {
            code,
            severity,
            sequence,
        }
    }
}

impl fmt::Display for ErrorEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} [{}]", self.sequence, self.code, self.severity)
    }
}
