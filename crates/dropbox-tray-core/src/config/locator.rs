//! Locates the synced Dropbox folder.
//!
//! The Dropbox client writes `~/.dropbox/info.json` with one entry per linked
//! account. Only the personal account's `path` is read.

use crate::{CoreError, CoreResult, config::INFO_FILE};

use std::{
    fs,
    io::ErrorKind,
    panic::Location,
    path::{Path, PathBuf},
};

use directories::BaseDirs;
use error_location::ErrorLocation;
use serde::Deserialize;
use tracing::{debug, info, instrument};

#[derive(Debug, Deserialize)]
struct DropboxInfo {
    personal: Account,
}

#[derive(Debug, Deserialize)]
struct Account {
    path: PathBuf,
}

/// Reads the Dropbox folder path out of the client's info file.
///
/// The result is read once at startup. A changed info file requires a restart.
pub struct ConfigLocator;

impl ConfigLocator {
    /// Locate the Dropbox folder using the info file in the user's home directory.
    #[track_caller]
    #[instrument]
    pub fn locate() -> CoreResult<PathBuf> {
        let info_path = Self::info_path()?;
        Self::locate_from(&info_path)
    }

    /// Locate the Dropbox folder using an explicit info file.
    #[track_caller]
    #[instrument]
    pub fn locate_from(info_path: &Path) -> CoreResult<PathBuf> {
        let contents = fs::read_to_string(info_path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CoreError::ConfigNotFound {
                path: info_path.to_path_buf(),
                location: ErrorLocation::from(Location::caller()),
            },
            _ => CoreError::ConfigError {
                reason: format!("Failed to read {:?}: {}", info_path, e),
                location: ErrorLocation::from(Location::caller()),
            },
        })?;

        let info: DropboxInfo =
            serde_json::from_str(&contents).map_err(|e| CoreError::ConfigError {
                reason: format!("Failed to parse {:?}: {}", info_path, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        info!(info_path = ?info_path, folder = ?info.personal.path, "Dropbox folder located");

        Ok(info.personal.path)
    }

    /// Path of the info file under the current user's home directory.
    #[track_caller]
    pub fn info_path() -> CoreResult<PathBuf> {
        let dirs = BaseDirs::new().ok_or_else(|| CoreError::ConfigError {
            reason: "Failed to determine home directory".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let path = dirs.home_dir().join(INFO_FILE);
        debug!(info_path = ?path, "Resolved Dropbox info path");

        Ok(path)
    }
}
