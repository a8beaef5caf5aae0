//! Runtime settings for dropbox-tray.
//!
//! Everything here is compiled in. The only file read at startup is the
//! Dropbox client's own info file, which yields the folder to open.

use crate::{
    AppResult,
    config::{DEFAULT_POLL_INTERVAL_MS, DEFAULT_STATUS_ARGS, DEFAULT_STATUS_PROGRAM},
};

use std::{path::PathBuf, time::Duration};

use dropbox_tray_core::{ConfigLocator, StatusCommand};
use tracing::{info, instrument};

/// Settings for one run of the tray.
#[derive(Debug, Clone)]
pub struct TrayConfig {
    /// Synced Dropbox folder, opened on click.
    pub folder: PathBuf,
    /// Status CLI program.
    pub status_program: String,
    /// Arguments passed to the status CLI.
    pub status_args: Vec<String>,
    /// Delay between status polls.
    pub poll_interval: Duration,
}

impl TrayConfig {
    /// Build the configuration, locating the Dropbox folder from `~/.dropbox/info.json`.
    #[track_caller]
    #[instrument]
    pub fn load() -> AppResult<Self> {
        let folder = ConfigLocator::locate()?;
        let config = Self::with_folder(folder);

        info!(
            folder = ?config.folder,
            status_program = %config.status_program,
            poll_interval_ms = config.poll_interval.as_millis(),
            "Configuration loaded"
        );

        Ok(config)
    }

    /// Default settings around an already located folder.
    pub fn with_folder(folder: PathBuf) -> Self {
        Self {
            folder,
            status_program: DEFAULT_STATUS_PROGRAM.to_string(),
            status_args: DEFAULT_STATUS_ARGS.iter().map(|a| a.to_string()).collect(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        }
    }

    /// Status command described by this configuration.
    pub fn status_command(&self) -> StatusCommand {
        StatusCommand::new(self.status_program.clone(), self.status_args.iter())
    }
}
