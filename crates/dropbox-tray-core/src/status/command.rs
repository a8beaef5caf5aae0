use crate::{CoreError, CoreResult};

use std::{ffi::OsString, panic::Location, process::Command, process::Stdio};

use error_location::ErrorLocation;
use tracing::{instrument, trace};

/// External command that prints the sync client's status, one entry per line.
#[derive(Debug, Clone)]
pub struct StatusCommand {
    program: String,
    args: Vec<OsString>,
}

impl StatusCommand {
    /// Build a command from a program name and its arguments.
    pub fn new<I, A>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Program this command runs.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the command to completion and return its non-empty stdout lines.
    ///
    /// Blocks until the process exits. The exit code is ignored and stderr
    /// is discarded; only a failure to spawn or read is an error.
    #[track_caller]
    #[instrument(skip(self), fields(program = %self.program))]
    pub fn query(&self) -> CoreResult<Vec<String>> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|source| CoreError::StatusCommandFailed {
                program: self.program.clone(),
                source,
                location: ErrorLocation::from(Location::caller()),
            })?;

        let lines: Vec<String> = String::from_utf8_lossy(&output.stdout)
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        trace!(exit_status = ?output.status, line_count = lines.len(), "Status command finished");

        Ok(lines)
    }
}
