//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every client. It owns the [`Workspace`] and its storage backend for
//! the lifetime of the process.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Validates inputs**: positions and handles are checked here; the commands
//!   below assume they are valid
//! - **Dispatches** to the appropriate command function
//! - **Saves** after every command that modified the workspace
//! - **Publishes** the resulting [`WorkspaceEvent`]s to subscribers
//!
//! ## Hand-off Points
//!
//! The live [`Document`] of the note being edited belongs to the client, wrapped
//! in an [`ActiveNote`]. It crosses into the workspace only at these points:
//!
//! ```text
//! open_selected() ──► ActiveNote { document: decode(note) }
//!                           │ client edits, autolinks
//! flush(&active)  ◄─────────┤ encode back into the note, save
//! select(i, Some(&active)) ◄┘ flush outgoing, switch, decode incoming
//! shutdown(Some(&active))     flush, save
//! ```
//!
//! ## Generic Over StorageBackend
//!
//! `BlitzApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `BlitzApi<FsBackend>`
//! - Testing: `BlitzApi<MemBackend>`

use crate::autolink;
use crate::codec;
use crate::commands::{self, CmdResult, WorkspaceEvent};
use crate::document::Document;
use crate::error::{BlitzError, Result};
use crate::model::{Geometry, HotkeySpec, Note, NoteDefaults, NoteId, Workspace};
use crate::store::{self, StorageBackend};

/// A callback receiving every published event.
pub type Subscriber = Box<dyn FnMut(&WorkspaceEvent)>;

/// The note currently open in the editor, with its live document.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveNote {
    pub id: NoteId,
    pub name: String,
    pub document: Document,
    pub scroll_offset: f64,
}

pub struct BlitzApi<B: StorageBackend> {
    backend: B,
    workspace: Workspace,
    defaults: NoteDefaults,
    load_error: Option<BlitzError>,
    subscribers: Vec<Subscriber>,
}

impl<B: StorageBackend> BlitzApi<B> {
    /// Loads the workspace from `backend`, falling back to a fresh one.
    pub fn new(backend: B, defaults: NoteDefaults) -> Self {
        let outcome = store::load(&backend, &defaults);
        Self {
            backend,
            workspace: outcome.workspace,
            defaults,
            load_error: outcome.recovered,
            subscribers: Vec::new(),
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn defaults(&self) -> &NoteDefaults {
        &self.defaults
    }

    /// The error that made [`BlitzApi::new`] start from a fresh workspace.
    pub fn load_error(&self) -> Option<&BlitzError> {
        self.load_error.as_ref()
    }

    pub fn subscribe<F>(&mut self, subscriber: F)
    where
        F: FnMut(&WorkspaceEvent) + 'static,
    {
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn list_notes(&self) -> CmdResult {
        commands::list::run(&self.workspace)
    }

    /// Handle of the note at `index`.
    pub fn note_id(&self, index: usize) -> Result<NoteId> {
        self.check_index(index)?;
        Ok(self.workspace.notes[index].id)
    }

    pub fn open(&self, id: NoteId) -> Result<ActiveNote> {
        let note = self
            .workspace
            .note(id)
            .ok_or(BlitzError::NoteNotFound(id))?;
        Ok(ActiveNote {
            id,
            name: note.name.clone(),
            document: codec::decode(&note.persisted_document),
            scroll_offset: note.scroll_offset,
        })
    }

    /// Decodes the selected note. `None` for an empty workspace.
    pub fn open_selected(&self) -> Option<ActiveNote> {
        let id = self.workspace.selected_note()?.id;
        self.open(id).ok()
    }

    /// Stores the live state of `active` into its note.
    pub fn flush(&mut self, active: &ActiveNote) -> Result<CmdResult> {
        let result = commands::flush::run(
            &mut self.workspace,
            active.id,
            &active.document,
            active.scroll_offset,
        )?;
        self.commit(result)
    }

    /// Flushes `outgoing`, selects `index` and opens it.
    pub fn select(&mut self, index: usize, outgoing: Option<&ActiveNote>) -> Result<ActiveNote> {
        self.check_index(index)?;
        if let Some(active) = outgoing {
            self.flush(active)?;
        }
        let result = commands::select::run(&mut self.workspace, index);
        self.commit(result)?;
        self.open(self.workspace.notes[index].id)
    }

    /// Flushes `outgoing` and writes the workspace, changed or not.
    pub fn shutdown(&mut self, outgoing: Option<&ActiveNote>) -> Result<()> {
        if let Some(active) = outgoing {
            let result = commands::flush::run(
                &mut self.workspace,
                active.id,
                &active.document,
                active.scroll_offset,
            )?;
            self.publish(&result.events);
        }
        store::save(&self.backend, &self.workspace)?;
        self.publish(&[WorkspaceEvent::Saved]);
        Ok(())
    }

    pub fn save(&mut self) -> Result<()> {
        store::save(&self.backend, &self.workspace)?;
        self.publish(&[WorkspaceEvent::Saved]);
        Ok(())
    }

    pub fn add_note(&mut self, name: &str, icon: Option<&str>) -> Result<(NoteId, CmdResult)> {
        if name.trim().is_empty() {
            return Err(BlitzError::Api("Note name cannot be empty".to_string()));
        }
        let note = Note::new(name, icon.unwrap_or(self.defaults.icon.as_str()));
        let id = note.id;
        let result = commands::add::run(&mut self.workspace, note);
        Ok((id, self.commit(result)?))
    }

    /// The "new file" action.
    pub fn new_note(&mut self) -> Result<(NoteId, CmdResult)> {
        let (id, result) = commands::add::new_note(&mut self.workspace, &self.defaults);
        Ok((id, self.commit(result)?))
    }

    pub fn remove_note(&mut self, id: NoteId) -> Result<CmdResult> {
        let index = self.index_of(id)?;
        self.remove_at(index)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<CmdResult> {
        self.check_index(index)?;
        let result = commands::remove::run(&mut self.workspace, index);
        self.commit(result)
    }

    pub fn rename_note(&mut self, id: NoteId, new_name: &str) -> Result<CmdResult> {
        let index = self.index_of(id)?;
        self.rename_at(index, new_name)
    }

    pub fn rename_at(&mut self, index: usize, new_name: &str) -> Result<CmdResult> {
        self.check_index(index)?;
        if new_name.trim().is_empty() {
            return Err(BlitzError::Api("Note name cannot be empty".to_string()));
        }
        let result = commands::rename::run(&mut self.workspace, index, new_name);
        self.commit(result)
    }

    /// Drag-and-drop reorder: the note `id` lands at `target`.
    pub fn move_note(&mut self, id: NoteId, target: usize) -> Result<CmdResult> {
        let source = self.index_of(id)?;
        self.move_notes(source, target)
    }

    pub fn move_notes(&mut self, source: usize, target: usize) -> Result<CmdResult> {
        self.check_index(source)?;
        self.check_index(target)?;
        let result = commands::move_notes::run(&mut self.workspace, source, target);
        self.commit(result)
    }

    /// Decodes the note `id`, applies `edit` to its document and flushes it back.
    ///
    /// For one-shot clients that do not keep an [`ActiveNote`] around.
    pub fn edit_note<F, R>(&mut self, id: NoteId, edit: F) -> Result<R>
    where
        F: FnOnce(&mut Document) -> R,
    {
        let mut active = self.open(id)?;
        let value = edit(&mut active.document);
        self.flush(&active)?;
        Ok(value)
    }

    /// Runs the autolinker over the note `id`. Returns whether links were made.
    pub fn autolink_note(&mut self, id: NoteId) -> Result<bool> {
        self.edit_note(id, autolink::apply)
    }

    pub fn set_hotkey(&mut self, hotkey: HotkeySpec) -> Result<CmdResult> {
        if hotkey.key.trim().is_empty() {
            return Err(BlitzError::Api("Hotkey needs a key".to_string()));
        }
        let result = commands::settings::set_hotkey(&mut self.workspace, hotkey);
        self.commit(result)
    }

    pub fn set_hide_on_open(&mut self, value: bool) -> Result<CmdResult> {
        let result = commands::settings::set_hide_on_open(&mut self.workspace, value);
        self.commit(result)
    }

    pub fn set_check_for_updates(&mut self, value: bool) -> Result<CmdResult> {
        let result = commands::settings::set_check_for_updates(&mut self.workspace, value);
        self.commit(result)
    }

    pub fn set_geometry(&mut self, geometry: Geometry) -> Result<CmdResult> {
        let finite = [geometry.left, geometry.top, geometry.width, geometry.height]
            .iter()
            .all(|value| value.is_finite());
        if !finite || geometry.width <= 0.0 || geometry.height <= 0.0 {
            return Err(BlitzError::Api(format!(
                "Invalid window geometry {}x{} at {},{}",
                geometry.width, geometry.height, geometry.left, geometry.top
            )));
        }
        let result = commands::settings::set_geometry(&mut self.workspace, geometry);
        self.commit(result)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.workspace.len() {
            Ok(())
        } else {
            Err(BlitzError::Api(format!(
                "No note at position {} (workspace has {} notes)",
                index + 1,
                self.workspace.len()
            )))
        }
    }

    fn index_of(&self, id: NoteId) -> Result<usize> {
        self.workspace
            .index_of(id)
            .ok_or(BlitzError::NoteNotFound(id))
    }

    /// Saves if `result` changed anything, then publishes its events.
    fn commit(&mut self, mut result: CmdResult) -> Result<CmdResult> {
        if result.is_modification() {
            store::save(&self.backend, &self.workspace)?;
            result.add_event(WorkspaceEvent::Saved);
            self.publish(&result.events);
        }
        Ok(result)
    }

    fn publish(&mut self, events: &[WorkspaceEvent]) {
        for event in events {
            for subscriber in self.subscribers.iter_mut() {
                subscriber(event);
            }
        }
    }
}
