//! # Storage Layer
//!
//! The whole workspace is one JSON record (`data.json`). This module reads and
//! writes that record through a [`StorageBackend`], which only knows how to move
//! strings in and out of storage.
//!
//! ## Load Never Fails
//!
//! [`load`] always hands back a usable [`Workspace`]:
//!
//! | Storage state                         | Result                              |
//! |---------------------------------------|-------------------------------------|
//! | no record yet                         | fresh workspace                     |
//! | unreadable (I/O error)                | fresh workspace, error in `recovered` |
//! | not JSON, or no `notes` list          | fresh workspace, error in `recovered` |
//! | `selectedIndex` past the last note    | record kept, index clamped          |
//! | valid                                 | record as stored                    |
//!
//! A fresh workspace has one default note selected. The swallowed error is logged
//! at `warn` and returned in [`LoadOutcome::recovered`] so a UI can still tell the
//! user their data was reset.
//!
//! An empty `notes` list is a valid record: it is what removing the last note
//! leaves behind.
//!
//! ## Save
//!
//! [`save`] writes pretty-printed JSON. It is the one storage operation that
//! reports failure. Callers flush the live document into its note before saving.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: `<data dir>/data.json`, atomic writes.
//! - [`mem_backend::MemBackend`]: For testing logic without filesystem I/O.

use crate::error::{BlitzError, Result};
use crate::model::{NoteDefaults, Workspace};

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;

/// What [`load`] produced.
#[derive(Debug)]
pub struct LoadOutcome {
    pub workspace: Workspace,
    /// The error that forced a fresh workspace, if any.
    pub recovered: Option<BlitzError>,
}

pub fn load<B: StorageBackend>(backend: &B, defaults: &NoteDefaults) -> LoadOutcome {
    let fallback = |err: BlitzError| {
        log::warn!(
            "could not load workspace from {}, starting fresh: {}",
            backend.record_path().display(),
            err
        );
        LoadOutcome {
            workspace: Workspace::fresh(defaults),
            recovered: Some(err),
        }
    };

    let content = match backend.read_record() {
        Ok(Some(content)) => content,
        Ok(None) => {
            log::info!(
                "no workspace at {}, starting fresh",
                backend.record_path().display()
            );
            return LoadOutcome {
                workspace: Workspace::fresh(defaults),
                recovered: None,
            };
        }
        Err(err) => return fallback(err),
    };

    match serde_json::from_str::<Workspace>(&content) {
        Ok(mut workspace) => {
            normalize(&mut workspace);
            log::debug!("loaded workspace with {} note(s)", workspace.len());
            LoadOutcome {
                workspace,
                recovered: None,
            }
        }
        Err(err) => fallback(BlitzError::Serialization(err)),
    }
}

pub fn save<B: StorageBackend>(backend: &B, workspace: &Workspace) -> Result<()> {
    let content = serde_json::to_string_pretty(workspace).map_err(BlitzError::Serialization)?;
    backend.write_record(&content)?;
    log::debug!(
        "saved workspace with {} note(s) to {}",
        workspace.len(),
        backend.record_path().display()
    );
    Ok(())
}

fn normalize(workspace: &mut Workspace) {
    if workspace.is_empty() {
        workspace.selected_index = 0;
    } else if workspace.selected_index >= workspace.len() {
        log::warn!(
            "selected index {} out of range for {} note(s), selecting the last one",
            workspace.selected_index,
            workspace.len()
        );
        workspace.selected_index = workspace.len() - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::mem_backend::MemBackend;
    use super::*;
    use crate::model::Note;

    fn defaults() -> NoteDefaults {
        NoteDefaults::default()
    }

    #[test]
    fn test_missing_record_is_fresh_without_error() {
        let outcome = load(&MemBackend::new(), &defaults());
        assert_eq!(outcome.workspace.len(), 1);
        assert_eq!(outcome.workspace.selected_index, 0);
        assert!(outcome.recovered.is_none());
    }

    #[test]
    fn test_corrupt_record_falls_back() {
        let backend = MemBackend::with_record("{ this is not json");
        let outcome = load(&backend, &defaults());

        assert_eq!(outcome.workspace.len(), 1);
        assert_eq!(outcome.workspace.notes[0].name, "Notes");
        assert_eq!(outcome.workspace.selected_index, 0);
        assert!(matches!(
            outcome.recovered,
            Some(BlitzError::Serialization(_))
        ));
    }

    #[test]
    fn test_record_without_notes_falls_back() {
        let backend = MemBackend::with_record(
            r#"{"geometry":{"left":1,"top":2,"width":3,"height":4},"selectedIndex":0}"#,
        );
        let outcome = load(&backend, &defaults());
        assert_eq!(outcome.workspace.len(), 1);
        assert!(outcome.recovered.is_some());
    }

    #[test]
    fn test_out_of_range_selection_is_clamped() {
        let backend = MemBackend::with_record(
            r#"{
                "geometry": {"left":0,"top":0,"width":800,"height":600},
                "selectedIndex": 9,
                "notes": [{"name":"a","icon":"i"},{"name":"b","icon":"i"}]
            }"#,
        );
        let outcome = load(&backend, &defaults());
        assert_eq!(outcome.workspace.len(), 2);
        assert_eq!(outcome.workspace.selected_index, 1);
        assert!(outcome.recovered.is_none());
    }

    #[test]
    fn test_fractional_geometry_is_kept() {
        let backend = MemBackend::with_record(
            r#"{
                "geometry": {"left":460.5,"top":190.25,"width":1000.0,"height":700,"isMaximized":false},
                "selectedIndex": 1,
                "notes": [{"name":"a","icon":"i"},{"name":"b","icon":"i"}]
            }"#,
        );
        let outcome = load(&backend, &defaults());
        assert!(outcome.recovered.is_none());
        assert_eq!(outcome.workspace.len(), 2);
        assert_eq!(outcome.workspace.geometry.left, 460.5);
        assert_eq!(outcome.workspace.geometry.top, 190.25);
        assert_eq!(outcome.workspace.geometry.height, 700.0);
    }

    #[test]
    fn test_empty_note_list_is_kept() {
        let backend = MemBackend::with_record(
            r#"{"geometry":{"left":0,"top":0,"width":1,"height":1},"selectedIndex":3,"notes":[]}"#,
        );
        let outcome = load(&backend, &defaults());
        assert!(outcome.workspace.is_empty());
        assert_eq!(outcome.workspace.selected_index, 0);
    }

    #[test]
    fn test_save_then_load_round_trips_fields() {
        let backend = MemBackend::new();
        let mut ws = Workspace::fresh(&defaults());
        ws.notes.push(Note {
            persisted_document: "abc=".into(),
            scroll_offset: 12.0,
            ..Note::new("second", "res/star.png")
        });
        ws.selected_index = 1;
        ws.hide_on_open = false;
        ws.hotkey_spec.key = "N".into();

        save(&backend, &ws).unwrap();
        let loaded = load(&backend, &defaults()).workspace;

        assert_eq!(loaded.selected_index, 1);
        assert!(!loaded.hide_on_open);
        assert_eq!(loaded.hotkey_spec.key, "N");
        assert_eq!(loaded.geometry, ws.geometry);
        assert_eq!(loaded.notes[1].name, "second");
        assert_eq!(loaded.notes[1].icon, "res/star.png");
        assert_eq!(loaded.notes[1].persisted_document, "abc=");
        assert_eq!(loaded.notes[1].scroll_offset, 12.0);
    }

    #[test]
    fn test_save_is_pretty_printed() {
        let backend = MemBackend::new();
        save(&backend, &Workspace::fresh(&defaults())).unwrap();
        let record = backend.record().unwrap();
        assert!(record.contains("\n  \"geometry\""));
    }

    #[test]
    fn test_save_reports_write_errors() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let err = save(&backend, &Workspace::fresh(&defaults())).unwrap_err();
        assert!(matches!(err, BlitzError::Store(_)));
    }
}
