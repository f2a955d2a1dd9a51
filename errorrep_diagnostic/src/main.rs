//! # errorrep Diagnostic Console
//!
//! Replays a command script against an error registry and prints the
//! requested reports.
//!
//! # Usage
//!
//! ```bash
//! # Script from a file, text output
//! errorrep_diagnostic --config config/errorrep.toml --script session.txt
//!
//! # Script from stdin, JSON reports
//! printf 'set -2 error\nclear -2\ncurrent\n' | errorrep_diagnostic --json
//!
//! # Fail with exit code 2 if the registry rejected any command
//! errorrep_diagnostic --script session.txt --strict -v
//! ```

#![deny(warnings)]

use clap::Parser;
use errorrep_common::config::{ErrorRepConfig, LogLevel, RegistryConfig, SharedConfig, load_config};
use errorrep_common::consts::DEFAULT_CONFIG_PATH;
use errorrep_common::registry::ErrorRegistry;
use errorrep_diagnostic::formatter::{OutputFormat, ReportFormatter};
use errorrep_diagnostic::script::run_script;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

/// errorrep Diagnostic Console - replay registry commands and print reports
#[derive(Parser, Debug)]
#[command(name = "errorrep_diagnostic")]
#[command(author = "RTS007")]
#[command(version)]
#[command(about = "Replay error registry commands and print reports")]
#[command(long_about = None)]
struct Args {
    /// Path to configuration file. Falls back to the default path, then to
    /// built-in defaults.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Command script (one command per line). Reads stdin if omitted.
    #[arg(short, long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Override `[registry] log_capacity`.
    #[arg(long, value_name = "N")]
    log_capacity: Option<usize>,

    /// Print reports as JSON documents
    #[arg(long)]
    json: bool,

    /// Output logs in JSON format
    #[arg(long)]
    log_json: bool,

    /// Exit with status 2 if any command was rejected
    #[arg(long)]
    strict: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = run() {
        error!("errorrep diagnostic failed: {}", e);
        std::process::exit(1);
    }
    Ok(())
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Config first: its log level drives the subscriber.
    let config = resolve_config(&args);
    let level = match (&config, args.verbose) {
        (_, true) => Level::DEBUG,
        (Ok(cfg), false) => cfg.shared.log_level.into(),
        (Err(_), false) => Level::INFO,
    };
    setup_tracing(level, args.log_json);
    let mut config = config?;

    if let Some(cap) = args.log_capacity {
        config.registry = RegistryConfig::with_log_capacity(cap);
    }

    info!(
        "{} v{} starting (log_capacity = {})",
        config.shared.service_name,
        env!("CARGO_PKG_VERSION"),
        config.registry.log_capacity
    );

    let mut registry = ErrorRegistry::new(config.registry)?;
    let formatter = ReportFormatter::new(if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let summary = match &args.script {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("cannot open script {}: {e}", path.display()))?;
            run_script(BufReader::new(file), &mut registry, &formatter, &mut out)?
        }
        None => run_script(io::stdin().lock(), &mut registry, &formatter, &mut out)?,
    };

    if args.strict && summary.rejected > 0 {
        error!("{} command(s) rejected by the registry", summary.rejected);
        std::process::exit(2);
    }
    Ok(())
}

/// Explicit `--config` must load; the default path is optional.
fn resolve_config(args: &Args) -> Result<ErrorRepConfig, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.config {
        return Ok(load_config(path)?);
    }
    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        return Ok(load_config(default_path)?);
    }
    Ok(ErrorRepConfig {
        shared: SharedConfig {
            log_level: LogLevel::default(),
            service_name: "errorrep".to_string(),
        },
        registry: RegistryConfig::default(),
    })
}

/// Setup tracing subscriber. Logs go to stderr so stdout carries only reports.
fn setup_tracing(level: Level, json: bool) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
}
