//! Status query side of a poll tick.
//!
//! Runs the status command and classifies its output. Any failure to run the
//! command is reported the same way as empty output: the client is offline.

use crate::{StatusCommand, StatusReport};

use tracing::{debug, instrument};

/// Queries the sync client and produces a [`StatusReport`] per tick.
#[derive(Debug, Clone)]
pub struct StatusPoller {
    command: StatusCommand,
}

impl StatusPoller {
    /// Create a poller around a status command.
    pub fn new(command: StatusCommand) -> Self {
        Self { command }
    }

    /// Run one status query. Blocks until the command exits.
    #[instrument(skip(self))]
    pub fn poll(&self) -> StatusReport {
        let lines = match self.command.query() {
            Ok(lines) => lines,
            Err(e) => {
                debug!(error = %e, "Status command unavailable, treating as offline");
                Vec::new()
            }
        };

        StatusReport::from_lines(lines)
    }
}
