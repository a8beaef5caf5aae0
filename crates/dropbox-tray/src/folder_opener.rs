use crate::{AppError, AppResult};

use std::{panic::Location, path::Path};

use error_location::ErrorLocation;
use tracing::{info, instrument};

/// Open `folder` in the desktop's file manager.
///
/// Returns once the opener has been launched; the file manager itself runs
/// detached from this process.
#[track_caller]
#[instrument]
pub fn open_folder(folder: &Path) -> AppResult<()> {
    if !folder.is_dir() {
        return Err(AppError::FolderNotFound {
            path: folder.to_path_buf(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    open::that_detached(folder).map_err(|e| AppError::OpenFailed {
        reason: format!("{:?}: {}", folder, e),
        location: ErrorLocation::from(Location::caller()),
    })?;

    info!(folder = ?folder, "Opened Dropbox folder");

    Ok(())
}
