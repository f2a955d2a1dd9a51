//! Prelude module for common re-exports.
//!
//! ```rust
//! use errorrep_common::prelude::*;
//! ```

// ─── Logging ────────────────────────────────────────────────────────
pub use crate::config::LogLevel;

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{
    ConfigError, ConfigLoader, ErrorRepConfig, RegistryConfig, SharedConfig, load_config,
};

// ─── Limits ─────────────────────────────────────────────────────────
pub use crate::consts::{DEFAULT_LOG_CAPACITY, MAX_ACTIVE_ERRORS, MAX_LOG_CAPACITY};

// ─── Registry ───────────────────────────────────────────────────────
pub use crate::entry::{ErrorCode, ErrorEntry};
pub use crate::error::RegistryError;
pub use crate::registry::{ErrorRegistry, resolve_current, resolve_current_all};
pub use crate::severity::Severity;
pub use crate::shared::SharedRegistry;

// ─── Reports ────────────────────────────────────────────────────────
pub use crate::report::{ErrorStatus, LogRecord, LogReport, Report};
