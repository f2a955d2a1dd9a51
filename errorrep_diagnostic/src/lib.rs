//! # errorrep Diagnostic Library
//!
//! The console side of the registry: renders snapshots ([`formatter`]) and
//! replays command scripts against a registry ([`script`]). The
//! `errorrep_diagnostic` binary is a thin wrapper over both.

pub mod formatter;
pub mod script;
