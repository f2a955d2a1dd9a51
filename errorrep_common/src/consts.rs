//! Registry-wide constants.
//!
//! Single source of truth for all storage bounds and defaults.
//! Every fixed-capacity container in the crate is sized from here.

/// Maximum number of simultaneously active error codes.
pub const MAX_ACTIVE_ERRORS: usize = 64;

/// Upper bound for the configurable error log capacity.
///
/// Log storage is reserved at this size; `log_capacity` only limits how
/// much of it is used.
pub const MAX_LOG_CAPACITY: usize = 64;

/// Default error log capacity when no configuration is given.
pub const DEFAULT_LOG_CAPACITY: usize = 32;

/// Capacity of a report snapshot. Must hold either the full active set
/// or the full log.
pub const REPORT_CAPACITY: usize = 64;

/// Default configuration file path for the diagnostic front end.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/errorrep/config.toml";

static_assertions::const_assert!(REPORT_CAPACITY >= MAX_ACTIVE_ERRORS);
static_assertions::const_assert!(REPORT_CAPACITY >= MAX_LOG_CAPACITY);
static_assertions::const_assert!(DEFAULT_LOG_CAPACITY <= MAX_LOG_CAPACITY);
