//! Background status polling.
//!
//! Runs the status command on a fixed interval off the UI thread and hands
//! each report to the event loop, which owns the tray icon.

use crate::{AppError, AppResult, TrayCommand};

use std::{panic::Location, time::Duration};

use dropbox_tray_core::{StatusPoller, StatusReport};
use error_location::ErrorLocation;
use tao::event_loop::EventLoopProxy;
use tokio::{sync::watch, time::MissedTickBehavior};
use tracing::{debug, error, info, instrument};

/// Destination for polled status reports.
pub trait ReportSink {
    /// Hand a report to the UI side.
    fn deliver(&self, report: StatusReport) -> AppResult<()>;
}

impl ReportSink for EventLoopProxy<TrayCommand> {
    #[track_caller]
    fn deliver(&self, report: StatusReport) -> AppResult<()> {
        self.send_event(TrayCommand::Apply(report))
            .map_err(|_| AppError::ChannelSendFailed {
                message: "Event loop closed before status report was delivered".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}

/// Polls the sync client and forwards reports to the UI thread.
pub struct StatusWatcher<S> {
    poller: StatusPoller,
    poll_interval: Duration,
    sink: S,
}

impl<S: ReportSink> StatusWatcher<S> {
    /// Create a watcher that polls every `poll_interval`.
    pub fn new(poller: StatusPoller, poll_interval: Duration, sink: S) -> Self {
        Self {
            poller,
            poll_interval,
            sink,
        }
    }

    /// Run the poll loop until shutdown is signalled or the sink closes.
    ///
    /// Polls never overlap: a slow status command delays the next tick
    /// instead of queueing more.
    #[instrument(skip(self, shutdown_rx), fields(interval_ms = self.poll_interval.as_millis()))]
    pub async fn run(&self, mut shutdown_rx: watch::Receiver<bool>) -> AppResult<()> {
        let mut ticker = tokio::time::interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!("Status watcher started");

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    self.tick().await?;
                }

                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        debug!("Shutdown signal received");
                        break;
                    }
                }
            }
        }

        info!("Status watcher stopped");

        Ok(())
    }

    async fn tick(&self) -> AppResult<()> {
        // The status command blocks until it exits; keep it off the async workers.
        let poller = self.poller.clone();
        let report = match tokio::task::spawn_blocking(move || poller.poll()).await {
            Ok(report) => report,
            Err(e) => {
                error!(error = ?e, "Status poll task panicked");
                return Ok(());
            }
        };

        self.sink.deliver(report)
    }
}
