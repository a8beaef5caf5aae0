//! Process signal setup.

use crate::AppResult;

/// Put SIGINT back to the OS default so an interrupt kills the process
/// outright instead of being intercepted by a library handler.
#[cfg(unix)]
#[track_caller]
pub fn restore_default_interrupt() -> AppResult<()> {
    use crate::AppError;

    use std::panic::Location;

    use error_location::ErrorLocation;
    use nix::sys::signal::{SigHandler, Signal, signal};
    use tracing::debug;

    // SAFETY: installing SIG_DFL runs no handler code, and this is called on
    // the main thread before any other thread is started.
    let previous = unsafe { signal(Signal::SIGINT, SigHandler::SigDfl) }.map_err(|e| {
        AppError::SignalSetupFailed {
            reason: format!("Failed to reset SIGINT: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    debug!(previous = ?previous, "SIGINT restored to default disposition");

    Ok(())
}

/// Interrupt handling is already the OS default on non-Unix targets.
#[cfg(not(unix))]
pub fn restore_default_interrupt() -> AppResult<()> {
    Ok(())
}
