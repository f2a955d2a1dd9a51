//! errorrep Common Library
//!
//! Centralized error/status registry for resource-constrained firmware.
//! Modules raise and clear negative error codes; the registry tracks which
//! are active, keeps a bounded history of every raise, and holds the most
//! severe error seen this session.
//!
//! # Module Structure
//!
//! - [`severity`] - Ordered severity levels
//! - [`entry`] - Error codes and raised-error entries
//! - [`registry`] - The registry engine and current-error resolution
//! - [`shared`] - Lock-protected registry handle for multi-context use
//! - [`report`] - Serializable snapshot types consumed by formatters
//! - [`config`] - Configuration loading traits and types
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use errorrep_common::prelude::*;
//!
//! let mut registry = ErrorRegistry::default();
//! registry.set_error(-1, Severity::Debug).unwrap();
//! registry.set_error(-2, Severity::Error).unwrap();
//! registry.set_error(-3, Severity::Debug).unwrap();
//!
//! assert_eq!(registry.current_error().map(|e| e.code.get()), Some(-2));
//! assert_eq!(registry.error_report().len(), 3);
//! ```

pub mod config;
pub mod consts;
pub mod entry;
pub mod error;
pub mod prelude;
pub mod registry;
pub mod report;
pub mod severity;
pub mod shared;
