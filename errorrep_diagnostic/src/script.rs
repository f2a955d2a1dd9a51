//! Command script replay.
//!
//! One command per line:
//!
//! ```text
//! # comment
//! set <code> <severity>
//! clear <code>
//! report
//! log
//! current
//! ```
//!
//! Registry rejections are logged and counted; they do not stop the
//! script. Unparseable lines do.

use std::io::{BufRead, Write};
use std::str::FromStr;

use errorrep_common::registry::ErrorRegistry;
use errorrep_common::severity::Severity;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::formatter::{FormatError, ReportFormatter};

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Format(#[from] FormatError),
}

/// One script command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Set { code: i32, severity: Severity },
    Clear { code: i32 },
    Report,
    Log,
    Current,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let verb = words.next().ok_or("empty command")?;
        let cmd = match verb {
            "set" => {
                let code = parse_code(words.next())?;
                let severity = words
                    .next()
                    .ok_or("set: missing severity")?
                    .parse::<Severity>()?;
                Self::Set { code, severity }
            }
            "clear" => Self::Clear {
                code: parse_code(words.next())?,
            },
            "report" => Self::Report,
            "log" => Self::Log,
            "current" => Self::Current,
            other => return Err(format!("unknown command: {other:?}")),
        };
        match words.next() {
            Some(extra) => Err(format!("{verb}: unexpected argument {extra:?}")),
            None => Ok(cmd),
        }
    }
}

fn parse_code(word: Option<&str>) -> Result<i32, String> {
    let word = word.ok_or("missing error code")?;
    word.parse::<i32>()
        .map_err(|e| format!("invalid error code {word:?}: {e}"))
}

/// Parse one script line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(None);
    }
    line.parse().map(Some)
}

/// Outcome counts of a script run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptSummary {
    /// Commands executed, including rejected ones.
    pub executed: usize,
    /// `set` commands the registry rejected.
    pub rejected: usize,
}

/// Apply one command, writing query output through `formatter`.
/// Returns `false` if the registry rejected it.
pub fn execute<W: Write>(
    cmd: Command,
    registry: &mut ErrorRegistry,
    formatter: &ReportFormatter,
    out: &mut W,
) -> Result<bool, FormatError> {
    match cmd {
        Command::Set { code, severity } => match registry.set_error(code, severity) {
            Ok(_) => Ok(true),
            Err(e) => {
                warn!(code, %severity, "command rejected: {e}");
                Ok(false)
            }
        },
        Command::Clear { code } => {
            if !registry.clear_error(code) {
                debug!(code, "clear: code not active");
            }
            Ok(true)
        }
        Command::Report => formatter.write_report(out, &registry.error_report()).map(|_| true),
        Command::Log => formatter.write_log(out, &registry.error_log()).map(|_| true),
        Command::Current => formatter.write_current(out, registry.current_error()).map(|_| true),
    }
}

/// Replay every command in `input` against `registry`.
pub fn run_script<R: BufRead, W: Write>(
    input: R,
    registry: &mut ErrorRegistry,
    formatter: &ReportFormatter,
    out: &mut W,
) -> Result<ScriptSummary, ScriptError> {
    let mut summary = ScriptSummary::default();
    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let cmd = match parse_line(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(message) => {
                return Err(ScriptError::Parse {
                    line: idx + 1,
                    message,
                });
            }
        };
        summary.executed += 1;
        if !execute(cmd, registry, formatter, out)? {
            summary.rejected += 1;
        }
    }
    out.flush()?;
    info!(
        executed = summary.executed,
        rejected = summary.rejected,
        "script complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatter::OutputFormat;

    #[test]
    fn parse_commands() {
        assert_eq!(
            parse_line("set -2 error"),
            Ok(Some(Command::Set {
                code: -2,
                severity: Severity::Error
            }))
        );
        assert_eq!(
            parse_line("  clear -7   # resolved"),
            Ok(Some(Command::Clear { code: -7 }))
        );
        assert_eq!(parse_line("report"), Ok(Some(Command::Report)));
        assert_eq!(parse_line("log"), Ok(Some(Command::Log)));
        assert_eq!(parse_line("current"), Ok(Some(Command::Current)));
        assert_eq!(parse_line(""), Ok(None));
        assert_eq!(parse_line("# only a comment"), Ok(None));
    }

    #[test]
    fn parse_errors() {
        assert!(parse_line("set -2").is_err());
        assert!(parse_line("set x error").is_err());
        assert!(parse_line("set -2 fatal").is_err());
        assert!(parse_line("clear").is_err());
        assert!(parse_line("report now").is_err());
        assert!(parse_line("reset").is_err());
    }

    #[test]
    fn positive_code_parses_but_is_rejected_by_registry() {
        let script = "set 4 error\nset -1 info\n";
        let mut reg = ErrorRegistry::default();
        let mut out = Vec::new();
        let summary =
            run_script(script.as_bytes(), &mut reg, &ReportFormatter::default(), &mut out).unwrap();
        assert_eq!(
            summary,
            ScriptSummary {
                executed: 2,
                rejected: 1
            }
        );
        assert_eq!(reg.active_count(), 1);
    }

    #[test]
    fn parse_error_reports_line_number() {
        let script = "set -1 info\n\nbogus\n";
        let mut reg = ErrorRegistry::default();
        let mut out = Vec::new();
        let err = run_script(script.as_bytes(), &mut reg, &ReportFormatter::default(), &mut out)
            .unwrap_err();
        assert!(matches!(err, ScriptError::Parse { line: 3, .. }));
        // Commands before the bad line were applied.
        assert!(reg.is_active(-1));
    }

    #[test]
    fn queries_write_output() {
        let script = "set -1 debug\nset -2 error\nset -3 debug\ncurrent\n";
        let mut reg = ErrorRegistry::default();
        let mut out = Vec::new();
        run_script(
            script.as_bytes(),
            &mut reg,
            &ReportFormatter::new(OutputFormat::Text),
            &mut out,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "CURRENT ERROR: #2 -2 [error]\n");
    }
}
