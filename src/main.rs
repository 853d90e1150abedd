//! ircdecode - decode captured IRC protocol lines.
//!
//! Usage: `ircdecode [INPUT|-] [CONFIG]`
//!
//! Reads a capture (one CR LF terminated line per protocol message) from a
//! file or stdin and prints each decoded line, or the reason it was rejected.

mod config;
mod report;

use std::io::{self, BufWriter, Read};

use anyhow::Context;
use ircproto::Message;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::report::Reporter;

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let input_path = args.next().unwrap_or_else(|| "-".to_string());
    let config_path = args.next();

    // Load configuration
    let config = match &config_path {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {path}"))?,
        None => Config::default(),
    };

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log.level)),
        )
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let capture = read_input(&input_path).map_err(|e| {
        error!(path = %input_path, error = %e, "Failed to read input");
        e
    })?;

    info!(
        input = %input_path,
        bytes = capture.len(),
        format = ?config.output.format,
        "Decoding capture"
    );

    let stdout = io::stdout();
    let mut reporter = Reporter::new(BufWriter::new(stdout.lock()), &config.output);

    // Lines keep their terminator; the decoder checks it.
    for (index, line) in capture.split_inclusive('\n').enumerate() {
        let result = Message::decode(line);
        reporter.record(index + 1, line, &result)?;
    }

    let summary = reporter.finish()?;
    info!(
        decoded = summary.decoded,
        rejected = summary.rejected,
        "Finished decoding"
    );

    Ok(())
}

fn read_input(path: &str) -> anyhow::Result<String> {
    let mut capture = String::new();
    if path == "-" {
        io::stdin()
            .read_to_string(&mut capture)
            .context("failed to read stdin")?;
    } else {
        capture = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {path}"))?;
    }
    Ok(capture)
}
