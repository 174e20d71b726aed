use crate::commands::{CmdMessage, CmdResult, WorkspaceEvent};
use crate::model::Workspace;

/// # Panics
/// If `index >= workspace.len()`.
pub fn run(workspace: &mut Workspace, index: usize, new_name: &str) -> CmdResult {
    let note = &mut workspace.notes[index];
    let mut result = CmdResult::default();

    if note.name == new_name {
        result.add_message(CmdMessage::info(format!("Note is already named {}", new_name)));
        return result;
    }

    let old = std::mem::replace(&mut note.name, new_name.to_string());
    result.add_event(WorkspaceEvent::NoteRenamed {
        id: note.id,
        name: new_name.to_string(),
    });
    result.add_message(CmdMessage::success(format!(
        "Renamed {} to {}",
        old, new_name
    )));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::{names, workspace_with_notes};

    #[test]
    fn test_rename_updates_name_only() {
        let mut ws = workspace_with_notes(&["A", "B"]);
        let id = ws.notes[1].id;
        let result = run(&mut ws, 1, "Groceries");

        assert_eq!(names(&ws), vec!["A", "Groceries"]);
        assert_eq!(ws.notes[1].id, id);
        assert_eq!(
            result.events,
            vec![WorkspaceEvent::NoteRenamed {
                id,
                name: "Groceries".into()
            }]
        );
    }

    #[test]
    fn test_rename_to_same_name_is_not_a_modification() {
        let mut ws = workspace_with_notes(&["A"]);
        let result = run(&mut ws, 0, "A");
        assert!(!result.is_modification());
    }
}
