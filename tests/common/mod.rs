//! Integration test common infrastructure.
//!
//! Runs the ircdecode binary against captures written to a temporary
//! directory.

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// A capture on disk plus an optional config file.
pub struct TestCapture {
    dir: TempDir,
    input: PathBuf,
    config: Option<PathBuf>,
}

impl TestCapture {
    /// Write `capture` to a fresh temporary directory.
    pub fn new(capture: &str) -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("capture.irc");
        std::fs::write(&input, capture)?;
        Ok(Self {
            dir,
            input,
            config: None,
        })
    }

    /// Add a config file with the given TOML content.
    pub fn with_config(mut self, content: &str) -> anyhow::Result<Self> {
        let path = self.dir.path().join("ircdecode.toml");
        std::fs::write(&path, content)?;
        self.config = Some(path);
        Ok(self)
    }

    /// Run the binary and collect its output.
    pub fn run(&self) -> anyhow::Result<Output> {
        let mut command = Command::new(env!("CARGO_BIN_EXE_ircdecode"));
        command.arg(&self.input);
        if let Some(config) = &self.config {
            command.arg(config);
        }
        Ok(command.env("RUST_LOG", "off").output()?)
    }
}
