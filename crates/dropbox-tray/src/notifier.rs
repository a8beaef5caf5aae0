//! Desktop notifications for failures the user needs to see.

use crate::config::APP_NAME;

use notify_rust::Notification;
use tracing::{debug, warn};

/// Show a desktop notification. Failures are logged and otherwise ignored.
pub fn notify(summary: &str, body: &str) {
    match Notification::new()
        .appname(APP_NAME)
        .summary(summary)
        .body(body)
        .show()
    {
        Ok(_) => debug!(summary, "Notification shown"),
        Err(e) => warn!(error = %e, summary, "Failed to show notification"),
    }
}
