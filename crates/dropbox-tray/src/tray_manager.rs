//! System tray icon driven by Dropbox status.
//!
//! Owns the OS tray icon and its context menu ("Open Dropbox Folder", "Quit")
//! and renders [`IconState`] frames and status tooltips pushed by [`TrayState`].
//!
//! [`TrayState`]: dropbox_tray_core::TrayState

use crate::{AppError, AppResult};

use std::{collections::HashMap, panic::Location};

use dropbox_tray_core::{IconState, TraySurface, TrayState};
use error_location::ErrorLocation;
use tracing::{info, instrument};
use tray_icon::menu::{Menu, MenuId, MenuItem, PredefinedMenuItem};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

/// System tray icon manager.
pub struct TrayManager {
    tray_icon: TrayIcon,
    icons: HashMap<IconState, Icon>,
    open_item_id: MenuId,
    quit_item_id: MenuId,
}

impl TrayManager {
    /// Create the tray icon showing `initial`.
    #[track_caller]
    #[instrument(skip(initial))]
    pub fn new(initial: &TrayState) -> AppResult<Self> {
        let menu = Menu::new();

        let open_item = MenuItem::new("Open Dropbox Folder", true, None);
        let quit_item = MenuItem::new("Quit", true, None);

        let open_id = open_item.id().clone();
        let quit_id = quit_item.id().clone();

        menu.append_items(&[&open_item, &PredefinedMenuItem::separator(), &quit_item])
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to build tray menu: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let icons = IconState::ALL
            .into_iter()
            .map(|state| Self::load_icon(state).map(|icon| (state, icon)))
            .collect::<AppResult<HashMap<_, _>>>()?;

        let initial_icon = Self::cached_icon(&icons, initial.icon())?;

        let tray_icon = TrayIconBuilder::new()
            .with_tooltip(initial.tooltip())
            .with_menu(Box::new(menu))
            .with_menu_on_left_click(false)
            .with_icon(initial_icon)
            .build()
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to create tray icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        tray_icon.set_visible(true).map_err(|e| AppError::TrayError {
            reason: format!("Failed to show tray icon: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        info!("System tray icon initialized");

        Ok(Self {
            tray_icon,
            icons,
            open_item_id: open_id,
            quit_item_id: quit_id,
        })
    }

    /// Decode the embedded PNG for `state` into a tray icon.
    ///
    /// Icons are embedded via include_bytes! so they work regardless of
    /// install location.
    #[track_caller]
    pub(crate) fn load_icon(state: IconState) -> AppResult<Icon> {
        let png_bytes: &[u8] = match state {
            IconState::Offline => include_bytes!("../resources/icons/offline.png"),
            IconState::Idle => include_bytes!("../resources/icons/idle.png"),
            IconState::Busy => include_bytes!("../resources/icons/busy.png"),
            IconState::BusyAlt => include_bytes!("../resources/icons/busy2.png"),
            IconState::Error => include_bytes!("../resources/icons/error.png"),
        };

        let img = image::load_from_memory(png_bytes).map_err(|e| AppError::IconError {
            reason: format!("Failed to decode {}: {}", state.file_name(), e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let rgba = img.into_rgba8();
        let (width, height) = (rgba.width(), rgba.height());

        Icon::from_rgba(rgba.into_raw(), width, height).map_err(|e| AppError::IconError {
            reason: format!("Failed to create icon from {}: {}", state.file_name(), e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    #[track_caller]
    fn cached_icon(icons: &HashMap<IconState, Icon>, state: IconState) -> AppResult<Icon> {
        icons.get(&state).cloned().ok_or_else(|| AppError::IconError {
            reason: format!("Icon {} was not loaded", state.file_name()),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Get the "Open Dropbox Folder" menu item ID.
    pub fn open_item_id(&self) -> &MenuId {
        &self.open_item_id
    }

    /// Get the "Quit" menu item ID.
    pub fn quit_item_id(&self) -> &MenuId {
        &self.quit_item_id
    }
}

impl TraySurface for TrayManager {
    type Error = AppError;

    #[track_caller]
    fn set_icon(&mut self, icon: IconState) -> AppResult<()> {
        let icon = Self::cached_icon(&self.icons, icon)?;

        self.tray_icon
            .set_icon(Some(icon))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update icon: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }

    #[track_caller]
    fn set_tooltip(&mut self, text: &str) -> AppResult<()> {
        self.tray_icon
            .set_tooltip(Some(text))
            .map_err(|e| AppError::TrayError {
                reason: format!("Failed to update tooltip: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })
    }
}
