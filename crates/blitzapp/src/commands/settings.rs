//! Workspace-wide settings: the global hotkey, the two behaviour flags and the
//! remembered window geometry. Each setter reports `SettingsChanged` only when the
//! value actually changed.

use crate::commands::{CmdMessage, CmdResult, WorkspaceEvent};
use crate::model::{Geometry, HotkeySpec, Workspace};

fn changed(message: String) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_event(WorkspaceEvent::SettingsChanged);
    result.add_message(CmdMessage::success(message));
    result
}

pub fn set_hotkey(workspace: &mut Workspace, hotkey: HotkeySpec) -> CmdResult {
    if workspace.hotkey_spec == hotkey {
        return CmdResult::default();
    }
    let message = format!("Hotkey set to {}", hotkey);
    workspace.hotkey_spec = hotkey;
    changed(message)
}

pub fn set_hide_on_open(workspace: &mut Workspace, value: bool) -> CmdResult {
    if workspace.hide_on_open == value {
        return CmdResult::default();
    }
    workspace.hide_on_open = value;
    changed(format!("Hide on open: {}", value))
}

pub fn set_check_for_updates(workspace: &mut Workspace, value: bool) -> CmdResult {
    if workspace.check_for_updates == value {
        return CmdResult::default();
    }
    workspace.check_for_updates = value;
    changed(format!("Check for updates: {}", value))
}

pub fn set_geometry(workspace: &mut Workspace, geometry: Geometry) -> CmdResult {
    if workspace.geometry == geometry {
        return CmdResult::default();
    }
    workspace.geometry = geometry;
    let mut result = CmdResult::default();
    result.add_event(WorkspaceEvent::SettingsChanged);
    result
}
