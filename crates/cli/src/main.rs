// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! vup - report elapsed time since a volume was mounted

mod env_check;
mod exit_error;
mod volume;

use anyhow::Result;
use clap::Parser;
use vup_core::{
    format_duration, Clock, Duration, FormatConfig, NegativeUptime, OutputStyle, SystemClock,
    Timestamp, FULL_PREFIX, PREFIX,
};

use crate::exit_error::ExitError;

/// Default volume to check: the tmpfs RAM disk.
const DEFAULT_VOLUME: &str = "/dev/shm";

const MAX_VOLUME_NAME_LEN: usize = 30;

#[derive(Parser)]
#[command(
    name = "vup",
    version,
    about = "Report elapsed time since a volume was mounted"
)]
struct Cli {
    /// Volume to check: a mount point, or the final component of one
    #[arg(long, value_name = "NAME")]
    volume: Option<String>,

    /// Prose output with a long prefix and a closing period
    #[arg(short, long, conflicts_with = "short")]
    full: bool,

    /// Compact output, e.g. "1d 2h 3m 4s"
    #[arg(short, long)]
    short: bool,

    /// Suppress the "Uptime:" prefix (ignored with --full)
    #[arg(long = "no-prefix")]
    no_prefix: bool,
}

fn main() {
    if let Err(e) = run() {
        let code = e.downcast_ref::<ExitError>().map_or(1, |c| c.code);
        let msg = format_error(&e);
        if !msg.is_empty() {
            eprintln!("Error: {}", msg);
        }
        std::process::exit(code);
    }
}

fn run() -> Result<()> {
    // The environment gate precedes argument parsing, so even --version
    // is refused on an unsupported host
    env_check::check_requirements()?;

    let cli = Cli::parse();

    let name = cli.volume.as_deref().unwrap_or(DEFAULT_VOLUME);
    let name = sanitize_volume_name(name)?;

    let config = FormatConfig {
        style: output_style(&cli),
        show_prefix: !cli.no_prefix,
    };

    let created = volume::volume_created(name)?;
    let uptime = uptime_since(&SystemClock, created)?;

    println!("{}", render_uptime(&uptime, &config));
    Ok(())
}

fn output_style(cli: &Cli) -> OutputStyle {
    if cli.full {
        OutputStyle::Full
    } else if cli.short {
        OutputStyle::Short
    } else {
        OutputStyle::Normal
    }
}

/// Strip a trailing `:` and validate length and character set.
///
/// Mount points may contain nearly anything, so only control characters
/// are rejected beyond the length bounds.
fn sanitize_volume_name(name: &str) -> Result<&str> {
    let name = name.strip_suffix(':').unwrap_or(name);
    if name.is_empty() {
        return Err(ExitError::usage("volume name is empty").into());
    }
    if name.chars().count() > MAX_VOLUME_NAME_LEN {
        return Err(ExitError::usage(format!(
            "volume name is too long (max {} characters)",
            MAX_VOLUME_NAME_LEN
        ))
        .into());
    }
    if name.chars().any(char::is_control) {
        return Err(ExitError::usage("volume name contains control characters").into());
    }
    Ok(name)
}

/// Elapsed time between `created` and the clock's "now".
fn uptime_since(clock: &impl Clock, created: Timestamp) -> Result<Duration, NegativeUptime> {
    Duration::from_delta(clock.now().delta(created))
}

/// Assemble the final output line, without the trailing newline.
fn render_uptime(uptime: &Duration, config: &FormatConfig) -> String {
    let clause = format_duration(uptime, config);
    match config.style {
        OutputStyle::Full => format!("{} {}.", FULL_PREFIX, clause),
        OutputStyle::Normal | OutputStyle::Short => {
            if config.show_prefix {
                format!("{} {}", PREFIX, clause)
            } else {
                clause
            }
        }
    }
}

/// Format an anyhow error, deduplicating the chain.
///
/// If the top-level Display already contains the source error text, we skip
/// the "Caused by" chain to avoid noisy duplicate output (common when
/// thiserror variants use `#[error("... {0}")]` with `#[from]`).
/// Otherwise we render the full chain so context isn't lost.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    // Walk the source chain; if every source message already appears
    // in the top-level string, the chain is redundant.
    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));

    if chain_redundant {
        return top;
    }

    // Non-redundant chain — render like anyhow's Debug.
    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
