//! Severity model.
//!
//! A closed, totally ordered enumeration. `#[repr(u8)]` keeps each tag to
//! a single byte; comparison is the only thing the registry uses it for.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use static_assertions::const_assert_eq;

use crate::error::RegistryError;

/// Severity attached to an error when it is raised.
///
/// Ordering: `Debug < Info < Warning < Error < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
    /// Diagnostic detail, no action needed.
    Debug = 0,
    /// Notable status change.
    Info = 1,
    /// Degraded but operating.
    Warning = 2,
    /// Function failed.
    Error = 3,
    /// Device integrity at risk.
    Critical = 4,
}

const_assert_eq!(core::mem::size_of::<Severity>(), 1);

impl Severity {
    /// All severities, lowest first.
    pub const ALL: [Severity; 5] = [
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Critical,
    ];

    /// Convert from raw `u8`. Returns `None` for invalid values.
    #[inline]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Debug),
            1 => Some(Self::Info),
            2 => Some(Self::Warning),
            3 => Some(Self::Error),
            4 => Some(Self::Critical),
            _ => None,
        }
    }

    /// Raw tag.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Critical => "critical",
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::Debug
    }
}

impl TryFrom<u8> for Severity {
    type Error = RegistryError;

    fn try_from(value: u8) -> Result<Self, RegistryError> {
        Self::from_u8(value).ok_or(RegistryError::InvalidSeverity(value))
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.as_u8()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    /// Accepts the lowercase name, the uppercase firmware spelling
    /// (`WARNING`), `warn` as a short form, or the raw tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            other => other
                .parse::<u8>()
                .ok()
                .and_then(Self::from_u8)
                .ok_or_else(|| format!("unknown Severity: {s:?}")),
        }
    }
}
