use crate::{AppResult, TrayAction, TrayCommand, config::TrayConfig, folder_opener, notifier};

use std::time::Duration;

use tao::event_loop::EventLoopProxy;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, instrument, warn};
use tray_icon::{
    TrayIconEvent,
    menu::{MenuEvent, MenuId},
};

/// Handles user interaction with the tray icon.
///
/// Runs on the async runtime thread. Tray mutations go back to the main
/// thread through `tray_proxy` because `TrayIcon` is `!Send` and must
/// remain on the UI thread.
pub struct App {
    pub(crate) config: TrayConfig,
    pub(crate) tray_proxy: EventLoopProxy<TrayCommand>,
    pub(crate) shutdown_tx: watch::Sender<bool>,
    pub(crate) open_menu_id: MenuId,
    pub(crate) quit_menu_id: MenuId,
}

impl App {
    /// Run the interaction loop until Quit is chosen or the channels close.
    #[instrument(skip(self))]
    pub(crate) async fn run(self) -> AppResult<()> {
        info!(folder = ?self.config.folder, "Dropbox tray starting");

        // MenuEvent and TrayIconEvent both expose blocking crossbeam receivers.
        // One persistent blocking task per receiver forwards into tokio; each
        // stops when its async side is dropped.
        let (menu_tx, mut menu_rx) = mpsc::channel(32);
        let menu_handle = tokio::task::spawn_blocking(move || {
            let receiver = MenuEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if menu_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        let (icon_tx, mut icon_rx) = mpsc::channel(32);
        let icon_handle = tokio::task::spawn_blocking(move || {
            let receiver = TrayIconEvent::receiver();
            while let Ok(event) = receiver.recv() {
                if icon_tx.blocking_send(event).is_err() {
                    break;
                }
            }
        });

        loop {
            tokio::select! {
                Some(event) = menu_rx.recv() => {
                    if self.handle_menu_event(event) == Some(TrayAction::Quit) {
                        break;
                    }
                }

                Some(event) = icon_rx.recv() => {
                    self.handle_icon_event(event);
                }

                else => {
                    info!("All channels closed, shutting down");
                    break;
                }
            }
        }

        drop(menu_rx);
        drop(icon_rx);

        for (name, handle) in [("Menu", menu_handle), ("Tray icon", icon_handle)] {
            match tokio::time::timeout(Duration::from_secs(1), handle).await {
                Ok(Ok(())) => debug!(forwarder = name, "Event forwarder stopped cleanly"),
                Ok(Err(e)) => error!(forwarder = name, error = ?e, "Event forwarder task panicked"),
                Err(_) => debug!(
                    forwarder = name,
                    "Event forwarder did not stop within timeout, \
                     will be cleaned up on exit"
                ),
            }
        }

        let _ = self.shutdown_tx.send(true);
        info!("Dropbox tray shut down successfully");

        Ok(())
    }

    /// Handle a tray menu event, returning the action it triggered.
    #[instrument(skip(self))]
    fn handle_menu_event(&self, event: MenuEvent) -> Option<TrayAction> {
        let action = TrayAction::for_menu_event(&event, &self.open_menu_id, &self.quit_menu_id);

        match action {
            Some(TrayAction::OpenFolder) => self.open_folder(),
            Some(TrayAction::Quit) => {
                info!("Quit requested from tray menu");
                if self.tray_proxy.send_event(TrayCommand::Shutdown).is_err() {
                    warn!("Event loop already closed");
                }
            }
            None => {}
        }

        action
    }

    /// Handle a click on the tray icon itself.
    #[instrument(skip(self))]
    fn handle_icon_event(&self, event: TrayIconEvent) {
        if TrayAction::for_icon_event(&event) == Some(TrayAction::OpenFolder) {
            self.open_folder();
        }
    }

    fn open_folder(&self) {
        if let Err(e) = folder_opener::open_folder(&self.config.folder) {
            warn!(error = %e, "Failed to open Dropbox folder");
            notifier::notify("Could not open Dropbox folder", &e.to_string());
        }
    }
}
