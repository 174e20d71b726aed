use crate::commands::{CmdMessage, CmdResult, WorkspaceEvent};
use crate::model::{Note, NoteDefaults, NoteId, Workspace};

/// Appends `note`. Into an empty workspace, the new note also becomes selected.
pub fn run(workspace: &mut Workspace, note: Note) -> CmdResult {
    let was_empty = workspace.is_empty();
    let id = note.id;
    let name = note.name.clone();
    workspace.notes.push(note);
    let index = workspace.len() - 1;

    let mut result = CmdResult::default();
    result.add_event(WorkspaceEvent::NoteAdded { id, index });
    if was_empty {
        workspace.selected_index = 0;
        result.add_event(WorkspaceEvent::SelectionChanged { index: Some(0) });
    }
    result.add_message(CmdMessage::success(format!("Note added: {}", name)));
    result
}

/// The "new file" action: appends a note with the configured name and selects it.
pub fn new_note(workspace: &mut Workspace, defaults: &NoteDefaults) -> (NoteId, CmdResult) {
    let note = Note::new(&defaults.new_note_name, &defaults.icon);
    let id = note.id;
    let mut result = run(workspace, note);

    let index = workspace.len() - 1;
    if workspace.selected_index != index {
        workspace.selected_index = index;
        result.add_event(WorkspaceEvent::SelectionChanged { index: Some(index) });
    }
    (id, result)
}
