// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! JSON-lines command scripts.
//!
//! Each non-blank line that does not start with `#` holds one command,
//! for example `{"command": "add_item", "item": {...}}`. Lines run in
//! order; a failing line is reported and the script continues.

use std::io::{BufRead, Write};
use stockroom::{Command, CommandResult, CoreError, Model, execute};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that stop a replay.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// Reading the script or writing the transcript failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Counts from a finished replay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Commands that ran successfully.
    pub succeeded: usize,
    /// Commands the model rejected.
    pub rejected: usize,
    /// Lines that were not valid commands.
    pub malformed: usize,
}

impl ReplayReport {
    /// Returns true if every line ran successfully.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.rejected == 0 && self.malformed == 0
    }
}

impl std::fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} succeeded, {} rejected, {} malformed",
            self.succeeded, self.rejected, self.malformed
        )
    }
}

/// Runs every command in `script` against `model`, writing one transcript
/// line per command to `out`.
///
/// # Errors
///
/// Returns `ScriptError::Io` if the script cannot be read or the transcript
/// cannot be written.
pub fn replay(
    model: &mut Model,
    script: impl BufRead,
    out: &mut impl Write,
) -> Result<ReplayReport, ScriptError> {
    let mut report: ReplayReport = ReplayReport::default();

    for (offset, line) in script.lines().enumerate() {
        let line: String = line?;
        let line_number: usize = offset + 1;
        let text: &str = line.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }

        let command: Command = match serde_json::from_str(text) {
            Ok(command) => command,
            Err(err) => {
                warn!(line = line_number, error = %err, "Malformed command");
                writeln!(out, "{line_number}: malformed command: {err}")?;
                report.malformed += 1;
                continue;
            }
        };

        debug!(line = line_number, kind = %command.kind(), "Replaying command");
        let result: Result<CommandResult, CoreError> = execute(model, command);
        match result {
            Ok(result) => {
                writeln!(out, "{line_number}: {result}")?;
                report.succeeded += 1;
            }
            Err(err) => {
                writeln!(out, "{line_number}: error: {err}")?;
                report.rejected += 1;
            }
        }
    }

    Ok(report)
}
