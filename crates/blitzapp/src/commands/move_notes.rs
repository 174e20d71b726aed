//! Reordering.
//!
//! The note at `source` ends up at position `target`; every other note keeps its
//! relative order. Stated as the list edit a drag-and-drop performs:
//!
//! ```text
//! source < target:  insert at target + 1, then remove at source
//! source > target:  insert at target,     then remove at source + 1
//! ```
//!
//! Both come to the same thing as taking the note out and putting it back at
//! `target` in the shortened list, which is how it is done here. Afterwards the
//! moved note is selected.

use crate::commands::{CmdResult, WorkspaceEvent};
use crate::model::Workspace;

/// # Panics
/// If either index is `>= workspace.len()`.
pub fn run(workspace: &mut Workspace, source: usize, target: usize) -> CmdResult {
    let len = workspace.len();
    assert!(
        source < len && target < len,
        "move {} -> {} out of range for {} notes",
        source,
        target,
        len
    );

    let mut result = CmdResult::default();
    if source == target {
        return result;
    }

    let note = workspace.notes.remove(source);
    let id = note.id;
    workspace.notes.insert(target, note);

    result.add_event(WorkspaceEvent::NoteMoved {
        id,
        from: source,
        to: target,
    });
    if workspace.selected_index != target {
        workspace.selected_index = target;
        result.add_event(WorkspaceEvent::SelectionChanged {
            index: Some(target),
        });
    }
    log::debug!("moved note {} from {} to {}", id, source, target);
    result
}
