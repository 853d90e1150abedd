//! Rendering of decode results.

use std::io::{self, Write};

use ircproto::{Message, MessageParseError, OriginKind};
use serde_json::json;

use crate::config::{OutputConfig, OutputFormat};

/// Running totals over one input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub decoded: usize,
    pub rejected: usize,
}

/// Writes one record per input line.
pub struct Reporter<W> {
    out: W,
    format: OutputFormat,
    show_errors: bool,
    summary: Summary,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, config: &OutputConfig) -> Self {
        Self {
            out,
            format: config.format,
            show_errors: config.show_errors,
            summary: Summary::default(),
        }
    }

    /// Record the outcome for the 1-based line `number`.
    pub fn record(
        &mut self,
        number: usize,
        raw: &str,
        result: &Result<Message, MessageParseError>,
    ) -> io::Result<()> {
        match result {
            Ok(msg) => {
                self.summary.decoded += 1;
                match self.format {
                    OutputFormat::Text => writeln!(self.out, "{}", render_text(number, msg)),
                    OutputFormat::Json => {
                        let record = json!({ "line": number, "message": msg });
                        writeln!(self.out, "{record}")
                    }
                }
            }
            Err(err) => {
                self.summary.rejected += 1;
                if !self.show_errors {
                    return Ok(());
                }
                match self.format {
                    OutputFormat::Text => {
                        writeln!(self.out, "{number}: error: {err} in {raw:?}")
                    }
                    OutputFormat::Json => {
                        let record =
                            json!({ "line": number, "error": err.to_string(), "raw": raw });
                        writeln!(self.out, "{record}")
                    }
                }
            }
        }
    }

    pub fn finish(mut self) -> io::Result<Summary> {
        self.out.flush()?;
        Ok(self.summary)
    }
}

fn render_text(number: usize, msg: &Message) -> String {
    let origin = match msg.origin.kind {
        OriginKind::None => "-".to_string(),
        kind => format!("{kind}({})", msg.origin),
    };
    format!("{number}: {origin} {} {:?}", msg.verb, msg.arguments)
}
