use std::io::Write;

use crate::core::{RunSummary, Script};
use crate::utils::error::Result;

pub struct ScriptRunner<S: Script> {
    script: S,
}

impl<S: Script> ScriptRunner<S> {
    pub fn new(script: S) -> Self {
        Self { script }
    }

    pub fn script(&self) -> &S {
        &self.script
    }

    /// Writes every line of the script, newline-terminated, then flushes `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<RunSummary> {
        tracing::debug!("Running script for {}", self.script.name());

        let mut summary = RunSummary::default();
        for line in self.script.lines() {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\n")?;
            summary.lines_written += 1;
            summary.bytes_written += line.len() + 1;
        }
        out.flush()?;

        tracing::debug!(
            "Wrote {} lines ({} bytes)",
            summary.lines_written,
            summary.bytes_written
        );
        Ok(summary)
    }

    /// The exact text `run` writes.
    pub fn render(&self) -> String {
        self.script
            .lines()
            .iter()
            .map(|line| format!("{}\n", line))
            .collect()
    }
}
