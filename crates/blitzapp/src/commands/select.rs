use crate::commands::{CmdResult, WorkspaceEvent};
use crate::model::Workspace;

/// Sets the selected note. The caller flushes the outgoing note first and decodes
/// the incoming one afterwards.
///
/// # Panics
/// If `index >= workspace.len()`.
pub fn run(workspace: &mut Workspace, index: usize) -> CmdResult {
    assert!(
        index < workspace.len(),
        "select index {} out of range for {} notes",
        index,
        workspace.len()
    );

    let mut result = CmdResult::default();
    if workspace.selected_index != index {
        workspace.selected_index = index;
        result.add_event(WorkspaceEvent::SelectionChanged { index: Some(index) });
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::workspace_with_notes;

    #[test]
    fn test_select_changes_index() {
        let mut ws = workspace_with_notes(&["A", "B", "C"]);
        let result = run(&mut ws, 2);
        assert_eq!(ws.selected_index, 2);
        assert_eq!(
            result.events,
            vec![WorkspaceEvent::SelectionChanged { index: Some(2) }]
        );
    }

    #[test]
    fn test_reselecting_is_quiet() {
        let mut ws = workspace_with_notes(&["A", "B"]);
        assert!(!run(&mut ws, 0).is_modification());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_select_past_end_panics() {
        let mut ws = workspace_with_notes(&["A"]);
        run(&mut ws, 1);
    }
}
