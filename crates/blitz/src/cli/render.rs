//! # Rendering
//!
//! Turns command results into terminal text. Every function returns a `String`
//! and leaves printing to the caller, so the layout can be tested without a
//! terminal.
//!
//! ## List Layout
//!
//! ```text
//! ▸ 1. Notes
//!   2. Links                  (empty)
//! ```
//!
//! The marker column flags the selected note, the index column is right-aligned
//! to the widest position, and names are padded by display width (not byte
//! length) so the `(empty)` tags line up with wide characters in names.

use super::styles::STYLES;
use blitzapp::commands::{CmdMessage, DisplayNote, MessageLevel};
use blitzapp::config::BlitzConfig;
use blitzapp::document::{Block, Document, Inline};
use blitzapp::model::Workspace;
use unicode_width::UnicodeWidthStr;

pub const SELECTED_MARKER: &str = "▸";
pub const LINK_MARKER: &str = "↗";

pub fn render_list(notes: &[DisplayNote]) -> String {
    if notes.is_empty() {
        return format!("{}\n", STYLES.muted.apply_to("No notes."));
    }

    let index_width = notes.len().to_string().len();
    let name_width = notes
        .iter()
        .map(|note| note.name.width())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for note in notes {
        let position = format!("{:>width$}.", note.index + 1, width = index_width);
        let (marker, position) = if note.selected {
            (SELECTED_MARKER, STYLES.selected.apply_to(position))
        } else {
            (" ", STYLES.index.apply_to(position))
        };
        let padding = " ".repeat(name_width - note.name.width());

        let mut line = format!(
            "{} {} {}",
            marker,
            position,
            STYLES.name.apply_to(&note.name)
        );
        if note.is_empty {
            line.push_str(&padding);
            line.push_str(&format!("  {}", STYLES.muted.apply_to("(empty)")));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let styled = match message.level {
            MessageLevel::Info => STYLES.muted.apply_to(&message.content),
            MessageLevel::Success => STYLES.success.apply_to(&message.content),
            MessageLevel::Warning => STYLES.warning.apply_to(&message.content),
            MessageLevel::Error => STYLES.error.apply_to(&message.content),
        };
        out.push_str(&format!("{}\n", styled));
    }
    out
}

/// A note's document, one line per block.
pub fn render_document(name: &str, document: &Document) -> String {
    let mut out = format!("{}\n", STYLES.heading.apply_to(name));
    if document.is_empty() {
        out.push_str(&format!("{}\n", STYLES.muted.apply_to("(empty)")));
        return out;
    }

    for block in document.blocks() {
        match block {
            Block::Paragraph { inlines } => {
                for inline in inlines {
                    match inline {
                        Inline::Text { content, .. } => out.push_str(content),
                        Inline::Hyperlink { display_text, .. } => out.push_str(
                            &STYLES.hyperlink.apply_to(display_text).to_string(),
                        ),
                    }
                }
            }
            Block::EmbeddedLink { target_path } => out.push_str(&format!(
                "{} {}",
                LINK_MARKER,
                STYLES.shortcut.apply_to(target_path)
            )),
            Block::EmbeddedImage { pixel_data } => out.push_str(
                &STYLES
                    .muted
                    .apply_to(format!("[image: {} bytes]", pixel_data.len()))
                    .to_string(),
            ),
        }
        out.push('\n');
    }
    out
}

pub fn render_settings(workspace: &Workspace) -> String {
    let geometry = &workspace.geometry;
    let rows = [
        ("hotkey", workspace.hotkey_spec.to_string()),
        ("hide on open", workspace.hide_on_open.to_string()),
        ("check for updates", workspace.check_for_updates.to_string()),
        (
            "window",
            format!(
                "{}x{} at {},{}{}",
                geometry.width,
                geometry.height,
                geometry.left,
                geometry.top,
                if geometry.is_maximized {
                    " (maximized)"
                } else {
                    ""
                }
            ),
        ),
    ];
    render_rows(&rows)
}

pub fn render_config(config: &BlitzConfig) -> String {
    let rows = [
        ("log_level", config.log_level.clone()),
        ("default_note_name", config.default_note_name.clone()),
        ("default_icon", config.default_icon.clone()),
        ("new_note_name", config.new_note_name.clone()),
        ("default_width", config.default_width.to_string()),
        ("default_height", config.default_height.to_string()),
        ("display_width", config.display_width.to_string()),
        ("display_height", config.display_height.to_string()),
    ];
    render_rows(&rows)
}

fn render_rows(rows: &[(&str, String)]) -> String {
    let key_width = rows.iter().map(|(key, _)| key.width()).max().unwrap_or(0);
    rows.iter()
        .map(|(key, value)| {
            let padding = " ".repeat(key_width - key.width());
            format!("{}{}  {}\n", STYLES.muted.apply_to(key), padding, value)
        })
        .collect()
}
