use crate::codec;
use crate::commands::{CmdResult, WorkspaceEvent};
use crate::document::Document;
use crate::error::{BlitzError, Result};
use crate::model::{NoteId, Workspace};

/// Stores a live document and scroll position in the note `id`.
///
/// Encoding never fails; an element that cannot be packaged is left out and
/// logged by the codec. A non-finite scroll offset is stored as 0.0, since the
/// record has no way to represent it.
pub fn run(
    workspace: &mut Workspace,
    id: NoteId,
    document: &Document,
    scroll_offset: f64,
) -> Result<CmdResult> {
    let note = workspace
        .note_mut(id)
        .ok_or(BlitzError::NoteNotFound(id))?;

    let scroll_offset = if scroll_offset.is_finite() {
        scroll_offset
    } else {
        log::warn!("scroll offset {} of note {} is not finite, storing 0", scroll_offset, id);
        0.0
    };

    let persisted = codec::encode(document);
    let mut result = CmdResult::default();
    if note.persisted_document == persisted && note.scroll_offset == scroll_offset {
        return Ok(result);
    }

    note.persisted_document = persisted;
    note.scroll_offset = scroll_offset;
    result.add_event(WorkspaceEvent::DocumentFlushed { id });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures::workspace_with_notes;
    use crate::document::Block;

    #[test]
    fn test_flush_encodes_into_note() {
        let mut ws = workspace_with_notes(&["A", "B"]);
        let id = ws.notes[1].id;
        let doc = Document::from_blocks(vec![Block::text("hi"), Block::link("/tmp")]);

        let result = run(&mut ws, id, &doc, 42.5).unwrap();

        assert_eq!(result.events, vec![WorkspaceEvent::DocumentFlushed { id }]);
        assert_eq!(ws.notes[1].scroll_offset, 42.5);
        assert_eq!(codec::decode(&ws.notes[1].persisted_document), doc);
        assert!(ws.notes[0].persisted_document.is_empty());
    }

    #[test]
    fn test_unchanged_flush_is_not_a_modification() {
        let mut ws = workspace_with_notes(&["A"]);
        let id = ws.notes[0].id;
        let doc = Document::from_blocks(vec![Block::text("same")]);

        run(&mut ws, id, &doc, 1.0).unwrap();
        let again = run(&mut ws, id, &doc, 1.0).unwrap();
        assert!(!again.is_modification());
    }

    #[test]
    fn test_non_finite_scroll_offset_is_stored_as_zero() {
        let mut ws = workspace_with_notes(&["A"]);
        let id = ws.notes[0].id;
        let doc = Document::from_blocks(vec![Block::text("x")]);

        run(&mut ws, id, &doc, f64::NAN).unwrap();
        assert_eq!(ws.notes[0].scroll_offset, 0.0);

        let again = run(&mut ws, id, &doc, f64::INFINITY).unwrap();
        assert!(!again.is_modification());
    }

    #[test]
    fn test_unknown_note_is_an_error() {
        let mut ws = workspace_with_notes(&["A"]);
        let err = run(&mut ws, NoteId::new(), &Document::new(), 0.0).unwrap_err();
        assert!(matches!(err, BlitzError::NoteNotFound(_)));
    }
}
