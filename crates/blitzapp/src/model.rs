//! # Data Model
//!
//! The persisted workspace record and the types it is made of.
//!
//! ```text
//! Workspace
//! ├── geometry        {left, top, width, height, isMaximized}
//! ├── hotkeySpec      {alt, control, shift, key}
//! ├── hideOnOpen
//! ├── checkForUpdates
//! ├── selectedIndex
//! └── notes[]         {name, icon, persistedDocument, scrollOffset}
//! ```
//!
//! Field names are camelCase on disk. A note's [`NoteId`] is not part of the
//! record: it is minted when the note is created or loaded, and only lives as long
//! as the process. Clients hold it across reorders, where positions shift.
//!
//! `notes` has no serde default. A record without a note list is structurally
//! invalid and is rejected by the parser, which sends the loader down its
//! fallback path.

use crate::error::BlitzError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Process-local handle of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoteId(Uuid);

impl NoteId {
    pub fn new() -> Self {
        NoteId(Uuid::new_v4())
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    #[serde(skip)]
    pub id: NoteId,
    pub name: String,
    pub icon: String,
    /// Output of [`crate::codec::encode`]; empty for a note never edited.
    #[serde(default)]
    pub persisted_document: String,
    #[serde(default)]
    pub scroll_offset: f64,
}

impl Note {
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            id: NoteId::new(),
            name: name.into(),
            icon: icon.into(),
            persisted_document: String::new(),
            scroll_offset: 0.0,
        }
    }
}

/// Size of the display the default window is centered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayArea {
    pub width: i32,
    pub height: i32,
}

/// Window placement in device-independent pixels. Positions may be fractional
/// under display scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub is_maximized: bool,
}

impl Geometry {
    /// A `width × height` window centered on `display`.
    pub fn centered(display: DisplayArea, width: i32, height: i32) -> Self {
        Self {
            left: f64::from((display.width - width) / 2),
            top: f64::from((display.height - height) / 2),
            width: f64::from(width),
            height: f64::from(height),
            is_maximized: false,
        }
    }
}

/// The global key chord that brings the window up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotkeySpec {
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub control: bool,
    #[serde(default)]
    pub shift: bool,
    pub key: String,
}

impl Default for HotkeySpec {
    fn default() -> Self {
        Self {
            alt: false,
            control: true,
            shift: false,
            key: "Space".to_string(),
        }
    }
}

impl fmt::Display for HotkeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.control {
            write!(f, "Ctrl+")?;
        }
        if self.alt {
            write!(f, "Alt+")?;
        }
        if self.shift {
            write!(f, "Shift+")?;
        }
        write!(f, "{}", self.key)
    }
}

/// Parses chords like `ctrl+alt+n` or `Shift+F12`. Modifier names are
/// case-insensitive; the last segment is the key.
impl FromStr for HotkeySpec {
    type Err = BlitzError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut spec = HotkeySpec {
            alt: false,
            control: false,
            shift: false,
            key: String::new(),
        };
        let segments: Vec<&str> = text.split('+').map(str::trim).collect();
        let (key, modifiers) = match segments.split_last() {
            Some((key, modifiers)) if !key.is_empty() => (key, modifiers),
            _ => return Err(BlitzError::Api(format!("Hotkey needs a key: {}", text))),
        };

        for modifier in modifiers {
            match modifier.to_ascii_lowercase().as_str() {
                "ctrl" | "control" => spec.control = true,
                "alt" => spec.alt = true,
                "shift" => spec.shift = true,
                other => {
                    return Err(BlitzError::Api(format!("Unknown modifier: {}", other)));
                }
            }
        }
        spec.key = key.to_string();
        Ok(spec)
    }
}

/// What a fresh workspace is built from.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteDefaults {
    pub note_name: String,
    pub icon: String,
    pub new_note_name: String,
    pub width: i32,
    pub height: i32,
    pub display: DisplayArea,
}

impl Default for NoteDefaults {
    fn default() -> Self {
        Self {
            note_name: "Notes".to_string(),
            icon: "res/edit.png".to_string(),
            new_note_name: "new file".to_string(),
            width: 1000,
            height: 700,
            display: DisplayArea {
                width: 1920,
                height: 1080,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub geometry: Geometry,
    #[serde(default)]
    pub hotkey_spec: HotkeySpec,
    #[serde(default = "default_true")]
    pub hide_on_open: bool,
    #[serde(default = "default_true")]
    pub check_for_updates: bool,
    #[serde(default)]
    pub selected_index: usize,
    pub notes: Vec<Note>,
}

fn default_true() -> bool {
    true
}

impl Workspace {
    /// One default note, centered geometry, first note selected.
    pub fn fresh(defaults: &NoteDefaults) -> Self {
        Self {
            geometry: Geometry::centered(defaults.display, defaults.width, defaults.height),
            hotkey_spec: HotkeySpec::default(),
            hide_on_open: true,
            check_for_updates: true,
            selected_index: 0,
            notes: vec![Note::new(&defaults.note_name, &defaults.icon)],
        }
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn index_of(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }

    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn note_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|note| note.id == id)
    }

    /// `None` when there are no notes.
    pub fn selected_note(&self) -> Option<&Note> {
        self.notes.get(self.selected_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_workspace() {
        let ws = Workspace::fresh(&NoteDefaults::default());
        assert_eq!(ws.len(), 1);
        assert_eq!(ws.selected_index, 0);
        assert_eq!(ws.notes[0].name, "Notes");
        assert_eq!(ws.notes[0].icon, "res/edit.png");
        assert!(ws.notes[0].persisted_document.is_empty());
        assert_eq!(
            ws.geometry,
            Geometry {
                left: 460.0,
                top: 190.0,
                width: 1000.0,
                height: 700.0,
                is_maximized: false
            }
        );
        assert!(ws.hide_on_open);
        assert!(ws.check_for_updates);
    }

    #[test]
    fn test_record_uses_camel_case_and_omits_ids() {
        let ws = Workspace::fresh(&NoteDefaults::default());
        let json = serde_json::to_value(&ws).unwrap();

        assert!(json.get("hotkeySpec").is_some());
        assert!(json.get("selectedIndex").is_some());
        assert!(json["geometry"].get("isMaximized").is_some());
        let note = &json["notes"][0];
        assert!(note.get("persistedDocument").is_some());
        assert!(note.get("scrollOffset").is_some());
        assert!(note.get("id").is_none());
    }

    #[test]
    fn test_missing_note_list_is_rejected() {
        let json = r#"{"geometry":{"left":0,"top":0,"width":10,"height":10}}"#;
        assert!(serde_json::from_str::<Workspace>(json).is_err());
    }

    #[test]
    fn test_loaded_notes_get_distinct_ids() {
        let json = r#"{
            "geometry": {"left":0,"top":0,"width":10,"height":10},
            "notes": [{"name":"a","icon":"x"},{"name":"b","icon":"y"}]
        }"#;
        let ws: Workspace = serde_json::from_str(json).unwrap();
        assert_ne!(ws.notes[0].id, ws.notes[1].id);
        assert_eq!(ws.hotkey_spec, HotkeySpec::default());
        assert!(ws.hide_on_open);
    }

    #[test]
    fn test_hotkey_display() {
        let spec = HotkeySpec {
            alt: true,
            control: true,
            shift: false,
            key: "N".into(),
        };
        assert_eq!(spec.to_string(), "Ctrl+Alt+N");
        assert_eq!(HotkeySpec::default().to_string(), "Ctrl+Space");
    }

    #[test]
    fn test_parse_hotkey() {
        let spec: HotkeySpec = "ctrl+Alt+n".parse().unwrap();
        assert!(spec.control && spec.alt && !spec.shift);
        assert_eq!(spec.key, "n");

        let bare: HotkeySpec = "F12".parse().unwrap();
        assert!(!bare.control);
        assert_eq!(bare.key, "F12");

        assert!("ctrl+".parse::<HotkeySpec>().is_err());
        assert!("hyper+k".parse::<HotkeySpec>().is_err());
    }

    #[test]
    fn test_lookup_by_id() {
        let mut ws = Workspace::fresh(&NoteDefaults::default());
        ws.notes.push(Note::new("second", "i"));
        let id = ws.notes[1].id;
        assert_eq!(ws.index_of(id), Some(1));
        assert_eq!(ws.note(id).map(|n| n.name.as_str()), Some("second"));
        assert_eq!(ws.index_of(NoteId::new()), None);
    }
}
