//! Report formatter.
//!
//! Renders registry snapshots for a console: a fixed-width text table for
//! operators, or one JSON document per query for tooling. Works only on the
//! public report types; it never sees registry internals.

use std::io::Write;

use errorrep_common::entry::ErrorEntry;
use errorrep_common::report::{ErrorStatus, LogReport, Report};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rendering failure.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One rendered JSON document. The `kind` tag names the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Document {
    ActiveErrors(Report),
    ErrorLog(LogReport),
    CurrentError { current: Option<ErrorEntry> },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ReportFormatter {
    format: OutputFormat,
}

impl ReportFormatter {
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    pub const fn format(&self) -> OutputFormat {
        self.format
    }

    /// Active errors, in report order.
    pub fn write_report<W: Write>(&self, out: &mut W, report: &Report) -> Result<(), FormatError> {
        match self.format {
            OutputFormat::Json => write_json(out, &Document::ActiveErrors(report.clone())),
            OutputFormat::Text => {
                writeln!(out, "ACTIVE ERRORS ({})", report.len())?;
                if report.is_empty() {
                    writeln!(out, "  none")?;
                    return Ok(());
                }
                writeln!(out, "  {:>6}  {:>11}  {:<8}", "SEQ", "CODE", "SEVERITY")?;
                for e in report.iter() {
                    writeln!(out, "  {:>6}  {:>11}  {:<8}", e.sequence, e.code, e.severity)?;
                }
                Ok(())
            }
        }
    }

    /// Error log with per-record status.
    pub fn write_log<W: Write>(&self, out: &mut W, log: &LogReport) -> Result<(), FormatError> {
        match self.format {
            OutputFormat::Json => write_json(out, &Document::ErrorLog(log.clone())),
            OutputFormat::Text => {
                writeln!(
                    out,
                    "ERROR LOG ({}/{}, {} evicted)",
                    log.len(),
                    log.capacity,
                    log.evicted
                )?;
                if log.is_empty() {
                    writeln!(out, "  none")?;
                    return Ok(());
                }
                writeln!(
                    out,
                    "  {:>6}  {:>11}  {:<8}  {:<7}",
                    "SEQ", "CODE", "SEVERITY", "STATUS"
                )?;
                for r in &log.records {
                    let status = match r.status {
                        ErrorStatus::Active => "active",
                        ErrorStatus::Cleared => "cleared",
                    };
                    writeln!(
                        out,
                        "  {:>6}  {:>11}  {:<8}  {:<7}",
                        r.sequence, r.code, r.severity, status
                    )?;
                }
                Ok(())
            }
        }
    }

    pub fn write_current<W: Write>(
        &self,
        out: &mut W,
        current: Option<ErrorEntry>,
    ) -> Result<(), FormatError> {
        match self.format {
            OutputFormat::Json => write_json(out, &Document::CurrentError { current }),
            OutputFormat::Text => {
                match current {
                    Some(e) => writeln!(out, "CURRENT ERROR: {e}")?,
                    None => writeln!(out, "CURRENT ERROR: none")?,
                }
                Ok(())
            }
        }
    }
}

fn write_json<W: Write>(out: &mut W, doc: &Document) -> Result<(), FormatError> {
    serde_json::to_writer(&mut *out, doc)?;
    writeln!(out)?;
    Ok(())
}
