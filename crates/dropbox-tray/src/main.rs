//! Dropbox Tray: tray icon showing Dropbox sync status.

mod app;
mod config;
mod error;
mod folder_opener;
mod notifier;
mod signal;
mod status_watcher;
mod tray_action;
mod tray_command;
mod tray_manager;

pub(crate) use {
    app::App,
    error::{AppError, Result as AppResult},
    status_watcher::StatusWatcher,
    tray_action::TrayAction,
    tray_command::TrayCommand,
    tray_manager::TrayManager,
};

use crate::config::{DEFAULT_LOG_FILTER, TrayConfig};

use dropbox_tray_core::{StatusPoller, TrayState};
use tao::{
    event::{Event, StartCause},
    event_loop::{ControlFlow, EventLoopBuilder},
};
use tokio::sync::watch;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Application entry point.
fn main() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = signal::restore_default_interrupt() {
        error!("Failed to restore SIGINT: {:?}", e);
        std::process::exit(1);
    }

    let event_loop = EventLoopBuilder::<TrayCommand>::with_user_event().build();
    let tray_proxy = event_loop.create_proxy();

    // Tray icon and its displayed state live on the main thread - TrayIcon is !Send.
    let mut tray_state = TrayState::new();
    let mut tray_manager: Option<TrayManager> = None;

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::UserEvent(cmd) => match cmd {
                TrayCommand::Apply(report) => {
                    if let Some(manager) = tray_manager.as_mut() {
                        if let Err(e) = tray_state.apply(&report, manager) {
                            error!(error = ?e, "Failed to update tray icon");
                        }
                    }
                }
                TrayCommand::Shutdown => {
                    *control_flow = ControlFlow::ExitWithCode(0);
                }
            },
            Event::NewEvents(StartCause::Init) => {
                // No polling starts unless the Dropbox folder is known.
                let config = match TrayConfig::load() {
                    Ok(c) => c,
                    Err(e) => {
                        error!("Failed to load config: {:?}", e);
                        notifier::notify("Dropbox tray could not start", &e.to_string());
                        std::process::exit(1);
                    }
                };

                let manager = match TrayManager::new(&tray_state) {
                    Ok(tm) => tm,
                    Err(e) => {
                        error!("Failed to create TrayManager: {:?}", e);
                        std::process::exit(1);
                    }
                };

                #[cfg(target_os = "macos")]
                unsafe {
                    use core_foundation::runloop::{CFRunLoopGetMain, CFRunLoopWakeUp};
                    CFRunLoopWakeUp(CFRunLoopGetMain());
                }

                let (shutdown_tx, shutdown_rx) = watch::channel(false);
                let watcher = StatusWatcher::new(
                    StatusPoller::new(config.status_command()),
                    config.poll_interval,
                    tray_proxy.clone(),
                );
                let app = App {
                    config,
                    tray_proxy: tray_proxy.clone(),
                    shutdown_tx,
                    open_menu_id: manager.open_item_id().clone(),
                    quit_menu_id: manager.quit_item_id().clone(),
                };
                tray_manager = Some(manager);

                // Spawn tokio runtime on separate thread.
                // TrayManager stays on the main thread.
                std::thread::spawn(move || {
                    let rt = match tokio::runtime::Runtime::new() {
                        Ok(rt) => rt,
                        Err(e) => {
                            error!("Failed to create tokio runtime: {:?}", e);
                            std::process::exit(1);
                        }
                    };

                    rt.block_on(async {
                        tokio::join!(
                            async {
                                if let Err(e) = watcher.run(shutdown_rx).await {
                                    error!(error = ?e, "Status watcher error");
                                }
                            },
                            async {
                                if let Err(e) = app.run().await {
                                    error!(error = ?e, "App error");
                                }
                            }
                        );
                    });
                });
            }
            _ => {}
        }
    });
}
