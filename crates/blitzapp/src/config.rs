//! # Configuration
//!
//! Blitz configuration is managed by [`confique`], which layers values from
//! environment variables, a TOML file and compiled defaults.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Environment variables**: `BLITZ_LOG_LEVEL`, `BLITZ_NEW_NOTE_NAME`, etc.
//! 2. **Config file**: `blitz.toml` in the data directory.
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `log_level` | `warn` | Log filter when `BLITZ_LOG` is unset |
//! | `default_note_name` | `Notes` | Name of the note in a fresh workspace |
//! | `default_icon` | `res/edit.png` | Icon of every new note |
//! | `new_note_name` | `new file` | Name of a note made by the "new" action |
//! | `default_width` / `default_height` | `1000` / `700` | Fresh window size |
//! | `display_width` / `display_height` | `1920` / `1080` | Display the fresh window is centered on |
//!
//! Per-workspace settings (hotkey, hide on open, update checks) are not here: they
//! live in the workspace record and change through `blitz settings`.

use crate::error::{BlitzError, Result};
use crate::model::{DisplayArea, NoteDefaults};
use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "blitz.toml";

/// Configuration for blitz, stored in `blitz.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlitzConfig {
    /// Log filter (error, warn, info, debug, trace). `BLITZ_LOG` takes precedence.
    #[config(default = "warn", env = "BLITZ_LOG_LEVEL")]
    pub log_level: String,

    /// Name of the single note a fresh workspace starts with.
    #[config(default = "Notes", env = "BLITZ_DEFAULT_NOTE_NAME")]
    pub default_note_name: String,

    /// Icon reference given to new notes.
    #[config(default = "res/edit.png", env = "BLITZ_DEFAULT_ICON")]
    pub default_icon: String,

    /// Name of a note created with the "new" action.
    #[config(default = "new file", env = "BLITZ_NEW_NOTE_NAME")]
    pub new_note_name: String,

    #[config(default = 1000)]
    pub default_width: i32,

    #[config(default = 700)]
    pub default_height: i32,

    /// Size of the primary display, used to center a fresh window.
    #[config(default = 1920)]
    pub display_width: i32,

    #[config(default = 1080)]
    pub display_height: i32,
}

impl Default for BlitzConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            default_note_name: "Notes".to_string(),
            default_icon: "res/edit.png".to_string(),
            new_note_name: "new file".to_string(),
            default_width: 1000,
            default_height: 700,
            display_width: 1920,
            display_height: 1080,
        }
    }
}

impl BlitzConfig {
    /// Loads env vars, then `<dir>/blitz.toml`, then defaults.
    /// A missing file is fine; an unparsable one is an error.
    pub fn load_from(dir: &Path) -> Result<Self> {
        Self::builder()
            .env()
            .file(dir.join(CONFIG_FILE))
            .load()
            .map_err(|e| BlitzError::Config(e.to_string()))
    }

    pub fn note_defaults(&self) -> NoteDefaults {
        NoteDefaults {
            note_name: self.default_note_name.clone(),
            icon: self.default_icon.clone(),
            new_note_name: self.new_note_name.clone(),
            width: self.default_width,
            height: self.default_height,
            display: DisplayArea {
                width: self.display_width,
                height: self.display_height,
            },
        }
    }

    /// A commented sample `blitz.toml`.
    pub fn template() -> String {
        confique::toml::template::<Self>(confique::toml::FormatOptions::default())
    }
}
