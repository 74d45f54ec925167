//! Command-line front end: argument parsing, logging, and wiring config
//! into the icon writer.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use extension_icons_common::blob::IconBlob;
use extension_icons_common::config::{Config, LogLevel, OutputConfig};
use extension_icons_common::writer::{IconReport, IconStatus, IconWriter};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Application-specific environment variable for log filtering (overrides config).
const LOG_ENV_VAR: &str = "ICONS_LOG";

#[derive(Parser)]
#[command(name = "create-icons")]
#[command(about = "Write placeholder PNG icons for an unpacked browser extension")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Write the placeholder icons (default)
    Create,
    /// Check that every icon exists and matches the placeholder
    Verify,
}

/// Flags that override the config file.
#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Config file to read instead of ~/.config/extension-icons/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory to write icons into
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Icon size in pixels; repeat or comma-separate to replace the default list
    #[arg(long = "size", global = true, value_name = "PX", value_delimiter = ',')]
    pub sizes: Vec<u32>,

    /// Create the output directory if it does not exist
    #[arg(long, global = true)]
    pub create_dir: bool,
}

impl OutputArgs {
    /// Load the config named by `--config`, or the default one.
    ///
    /// A missing file, or no resolvable config directory, yields defaults.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    /// Apply command-line overrides on top of the configured output.
    pub fn apply(&self, output: &mut OutputConfig) {
        if let Some(dir) = &self.dir {
            output.dir = dir.clone();
        }
        if !self.sizes.is_empty() {
            output.sizes = self.sizes.clone();
        }
        if self.create_dir {
            output.create_dir = true;
        }
    }
}

/// Entry point for the `create-icons` binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.output.load_config()?;

    init_logging(config.logging.level)?;

    let mut output = config.output;
    cli.output.apply(&mut output);
    debug!(dir = %output.dir.display(), sizes = ?output.sizes, "Resolved output");

    let blob = IconBlob::decode()?;
    match blob.dimensions() {
        Ok((width, height)) => {
            debug!(width, height, bytes = blob.len(), "Decoded placeholder");
        }
        Err(e) => warn!(error = %e, "Placeholder header unreadable"),
    }

    let writer = IconWriter::new(blob, output);
    let mut out = io::stdout().lock();

    match cli.command.unwrap_or(Commands::Create) {
        Commands::Create => {
            writer.run(&mut out)?;
        }
        Commands::Verify => {
            let reports = writer.verify()?;
            print_reports(&reports, writer.blob().len(), &mut out)?;
        }
    }

    Ok(())
}

fn init_logging(level: LogLevel) -> Result<()> {
    // ICONS_LOG env var overrides config file level
    let filter = EnvFilter::builder()
        .with_env_var(LOG_ENV_VAR)
        .with_default_directive(level.as_directive().parse()?)
        .from_env()
        .with_context(|| format!("Invalid {LOG_ENV_VAR} filter"))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    Ok(())
}

/// Print one line per verified icon; fails if any icon is not ready.
pub fn print_reports(
    reports: &[IconReport],
    expected_len: usize,
    out: &mut impl Write,
) -> Result<()> {
    let mut failures = 0;

    for report in reports {
        let path = report.path.display();
        match report.status {
            IconStatus::Ready => writeln!(out, "ok       {path}")?,
            IconStatus::Missing => {
                failures += 1;
                writeln!(out, "missing  {path}")?;
            }
            IconStatus::Mismatch { actual_len } => {
                failures += 1;
                writeln!(
                    out,
                    "mismatch {path} ({actual_len} bytes, expected {expected_len})"
                )?;
            }
        }
    }
    out.flush()?;

    if failures > 0 {
        anyhow::bail!(
            "{} of {} icons are missing or differ from the placeholder",
            failures,
            reports.len()
        );
    }

    Ok(())
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
