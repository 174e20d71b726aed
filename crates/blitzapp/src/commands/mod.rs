//! # Command Layer
//!
//! Each workspace operation lives in its own submodule as a plain function over an
//! in-memory [`Workspace`]. Commands never touch storage: saving is the API's job,
//! done after every command that changed something.
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`], not strings. It carries:
//! - `events`: the [`WorkspaceEvent`]s the command caused, in order
//! - `listed_notes`: notes to display (as [`DisplayNote`], for `list`)
//! - `messages`: leveled messages for the UI to render
//!
//! An empty `events` list means the workspace was not modified, and the API skips
//! the save.
//!
//! ## Index Contract
//!
//! Index-keyed commands (`select`, `move_notes`, `remove`, `rename`) take
//! positions that the caller has already checked against the note count. They do
//! not validate again and panic on an out-of-range index, which is a bug in the
//! caller. [`crate::api::BlitzApi`] is the layer that turns bad user input into
//! [`crate::error::BlitzError::Api`].
//!
//! ## Command Modules
//!
//! - [`add`]: Append a note, or create a "new file" note and select it
//! - [`remove`]: Delete a note, keeping the selection in range
//! - [`rename`]: Change a note's name
//! - [`select`]: Change the selected note
//! - [`move_notes`]: Reorder notes
//! - [`flush`]: Encode a live document into its note
//! - [`list`]: Describe the notes for display
//! - [`settings`]: Hotkey, flags and window geometry

use crate::model::{NoteId, Workspace};
use serde::Serialize;

pub mod add;
pub mod flush;
pub mod list;
pub mod move_notes;
pub mod remove;
pub mod rename;
pub mod select;
pub mod settings;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A state change published to subscribed views.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkspaceEvent {
    NoteAdded { id: NoteId, index: usize },
    NoteRemoved { id: NoteId, index: usize },
    NoteRenamed { id: NoteId, name: String },
    NoteMoved {
        id: NoteId,
        from: usize,
        to: usize,
    },
    /// `None` when the last note was removed.
    SelectionChanged { index: Option<usize> },
    DocumentFlushed { id: NoteId },
    SettingsChanged,
    Saved,
}

/// A note paired with its position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayNote {
    pub index: usize,
    pub name: String,
    pub icon: String,
    pub selected: bool,
    /// The document has no blocks, whether never edited or cleared.
    pub is_empty: bool,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub events: Vec<WorkspaceEvent>,
    pub listed_notes: Vec<DisplayNote>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn add_event(&mut self, event: WorkspaceEvent) {
        self.events.push(event);
    }

    pub fn with_listed_notes(mut self, notes: Vec<DisplayNote>) -> Self {
        self.listed_notes = notes;
        self
    }

    /// Whether the command changed the workspace.
    pub fn is_modification(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Index of the selected note, or `None` for an empty workspace.
pub(crate) fn current_selection(workspace: &Workspace) -> Option<usize> {
    if workspace.is_empty() {
        None
    } else {
        Some(workspace.selected_index)
    }
}
