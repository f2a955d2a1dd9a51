//! Registry error type.
//!
//! Only caller-contract violations are errors. Clearing an inactive code
//! and querying an empty registry are ordinary results, not failures.

use thiserror::Error;

/// Rejected registry call. The registry state is untouched when one of
/// these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Error codes must be negative integers.
    #[error("invalid error code {0}: codes must be negative")]
    InvalidCode(i32),

    /// Raw severity tag outside the known range.
    #[error("invalid severity tag {0}")]
    InvalidSeverity(u8),

    /// A new code was raised while every active slot is taken.
    #[error("active error set full ({capacity} codes)")]
    ActiveSetFull { capacity: usize },
}
