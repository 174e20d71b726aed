use crate::codec;
use crate::commands::{CmdResult, DisplayNote};
use crate::model::Workspace;

pub fn run(workspace: &Workspace) -> CmdResult {
    let notes = workspace
        .notes
        .iter()
        .enumerate()
        .map(|(index, note)| DisplayNote {
            index,
            name: note.name.clone(),
            icon: note.icon.clone(),
            selected: index == workspace.selected_index,
            is_empty: note.persisted_document.is_empty()
                || codec::decode(&note.persisted_document).is_empty(),
        })
        .collect();
    CmdResult::default().with_listed_notes(notes)
}
