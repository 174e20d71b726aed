use crate::commands::{current_selection, CmdMessage, CmdResult, WorkspaceEvent};
use crate::model::Workspace;

/// Deletes the note at `index`.
///
/// Selection afterwards:
/// - a note before the selected one was removed: the index shifts down with it
/// - the selected last note was removed: the new last note is selected
/// - no notes remain: the index is left at 0 and there is no selection
///
/// # Panics
/// If `index >= workspace.len()`.
pub fn run(workspace: &mut Workspace, index: usize) -> CmdResult {
    let before = current_selection(workspace);
    let note = workspace.notes.remove(index);

    if workspace.is_empty() {
        workspace.selected_index = 0;
    } else if index < workspace.selected_index {
        workspace.selected_index -= 1;
    } else if workspace.selected_index >= workspace.len() {
        workspace.selected_index = workspace.len() - 1;
    }

    let mut result = CmdResult::default();
    result.add_event(WorkspaceEvent::NoteRemoved { id: note.id, index });

    let after = current_selection(workspace);
    if before != after || before == Some(index) {
        result.add_event(WorkspaceEvent::SelectionChanged { index: after });
    }
    result.add_message(CmdMessage::success(format!("Note removed: {}", note.name)));
    result
}
