mod tray_config;

pub(crate) use tray_config::TrayConfig;

pub(crate) const APP_NAME: &str = "Dropbox";
pub(crate) const DEFAULT_STATUS_PROGRAM: &str = "dropbox-cli";
pub(crate) const DEFAULT_STATUS_ARGS: [&str; 1] = ["status"];
pub(crate) const DEFAULT_POLL_INTERVAL_MS: u64 = 500;
pub(crate) const DEFAULT_LOG_FILTER: &str = "dropbox_tray=info,dropbox_tray_core=info";
