use tray_icon::{
    MouseButton, MouseButtonState, TrayIconEvent,
    menu::{MenuEvent, MenuId},
};

/// User actions reachable from the tray.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayAction {
    /// Open the Dropbox folder in the file manager.
    OpenFolder,
    /// Exit the application.
    Quit,
}

impl TrayAction {
    /// Action for a menu event, given the ids of the tray's menu items.
    pub fn for_menu_event(event: &MenuEvent, open_id: &MenuId, quit_id: &MenuId) -> Option<Self> {
        if event.id == *open_id {
            Some(TrayAction::OpenFolder)
        } else if event.id == *quit_id {
            Some(TrayAction::Quit)
        } else {
            None
        }
    }

    /// Action for an event on the icon itself. Only a left-button release opens the folder.
    pub fn for_icon_event(event: &TrayIconEvent) -> Option<Self> {
        match event {
            TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } => Some(TrayAction::OpenFolder),
            _ => None,
        }
    }
}
