//! # Document Model
//!
//! One note's content as an ordered list of [`Block`]s. A block is either a
//! paragraph of [`Inline`] runs or an opaque embedded element (a shortcut to a
//! file/folder/URL, or an image).
//!
//! ```text
//! Document
//! ├── Paragraph ─┬─ Text("see ")
//! │              ├─ Hyperlink("www.example.com")
//! │              └─ Text(" for details")
//! ├── EmbeddedLink("C:\Projects\foo.txt")
//! └── EmbeddedImage(<pixels>)
//! ```
//!
//! The model is pure data. Mutation happens one whole block at a time
//! ([`Document::insert`], [`Document::remove`], [`Document::replace`]); nothing
//! here edits bytes inside a run. The codec and the autolinker both work by
//! building replacement blocks.
//!
//! ## The `visited` flag
//!
//! A text run with `visited: true` is invisible to the autolinker. The editor sets
//! it on text the user explicitly un-linked, so it is not turned back into a link
//! on the next keystroke. It is part of the persisted form.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Extensions that a dropped file must carry to be embedded as an image.
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextStyle {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub underline: bool,
}

impl TextStyle {
    pub fn is_plain(&self) -> bool {
        *self == TextStyle::default()
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// A run of content inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Inline {
    Text {
        content: String,
        #[serde(default, skip_serializing_if = "is_false")]
        visited: bool,
        #[serde(default, skip_serializing_if = "TextStyle::is_plain")]
        style: TextStyle,
    },
    Hyperlink {
        display_text: String,
        uri: String,
    },
}

impl Inline {
    /// Plain, unvisited text.
    pub fn text(content: impl Into<String>) -> Self {
        Inline::Text {
            content: content.into(),
            visited: false,
            style: TextStyle::default(),
        }
    }

    /// Text the autolinker must leave alone.
    pub fn visited_text(content: impl Into<String>) -> Self {
        Inline::Text {
            content: content.into(),
            visited: true,
            style: TextStyle::default(),
        }
    }

    pub fn styled_text(content: impl Into<String>, style: TextStyle) -> Self {
        Inline::Text {
            content: content.into(),
            visited: false,
            style,
        }
    }

    /// A hyperlink whose display text is its target.
    pub fn link(uri: impl Into<String>) -> Self {
        let uri = uri.into();
        Inline::Hyperlink {
            display_text: uri.clone(),
            uri,
        }
    }

    /// The characters this run shows on screen.
    pub fn display_text(&self) -> &str {
        match self {
            Inline::Text { content, .. } => content,
            Inline::Hyperlink { display_text, .. } => display_text,
        }
    }
}

/// A structural unit of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph { inlines: Vec<Inline> },
    EmbeddedLink { target_path: String },
    EmbeddedImage { pixel_data: Vec<u8> },
}

impl Block {
    pub fn paragraph(inlines: Vec<Inline>) -> Self {
        Block::Paragraph { inlines }
    }

    /// A paragraph holding a single plain text run.
    pub fn text(content: impl Into<String>) -> Self {
        Block::Paragraph {
            inlines: vec![Inline::text(content)],
        }
    }

    pub fn link(target_path: impl Into<String>) -> Self {
        Block::EmbeddedLink {
            target_path: target_path.into(),
        }
    }

    pub fn image(pixel_data: Vec<u8>) -> Self {
        Block::EmbeddedImage { pixel_data }
    }

    pub fn inline_count(&self) -> usize {
        match self {
            Block::Paragraph { inlines } => inlines.len(),
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Total number of inline runs across all paragraphs.
    pub fn inline_count(&self) -> usize {
        self.blocks.iter().map(Block::inline_count).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Inserts `block` so that it ends up at `index`.
    ///
    /// # Panics
    /// If `index > block_count()`.
    pub fn insert(&mut self, index: usize, block: Block) {
        self.blocks.insert(index, block);
    }

    /// # Panics
    /// If `index >= block_count()`.
    pub fn remove(&mut self, index: usize) -> Block {
        self.blocks.remove(index)
    }

    /// Swaps the block at `index` for `block`, returning the old one.
    ///
    /// # Panics
    /// If `index >= block_count()`.
    pub fn replace(&mut self, index: usize, block: Block) -> Block {
        std::mem::replace(&mut self.blocks[index], block)
    }

    /// Inserts the block a file dropped onto the editor turns into.
    ///
    /// Image files are read through `load_image` and embedded; anything else
    /// becomes a shortcut. An image that cannot be read inserts nothing and
    /// returns `false`.
    pub fn insert_dropped_path<F>(&mut self, index: usize, path: &str, load_image: F) -> bool
    where
        F: FnOnce(&Path) -> std::io::Result<Vec<u8>>,
    {
        let block = if is_image_path(path) {
            match load_image(Path::new(path)) {
                Ok(pixel_data) => Block::image(pixel_data),
                Err(err) => {
                    log::debug!("dropped file {} was not a readable image: {}", path, err);
                    return false;
                }
            }
        } else {
            Block::link(path)
        };
        self.insert(index, block);
        true
    }

    /// Text content with one line per block. Embedded elements render as
    /// bracketed placeholders.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|block| match block {
                Block::Paragraph { inlines } => {
                    inlines.iter().map(Inline::display_text).collect::<String>()
                }
                Block::EmbeddedLink { target_path } => format!("[link: {}]", target_path),
                Block::EmbeddedImage { pixel_data } => {
                    format!("[image: {} bytes]", pixel_data.len())
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub fn is_image_path(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::from_blocks(vec![
            Block::paragraph(vec![Inline::text("see "), Inline::link("www.a.com")]),
            Block::link("/tmp/report.pdf"),
            Block::image(vec![1, 2, 3]),
        ])
    }

    #[test]
    fn test_structural_queries() {
        let doc = sample();
        assert_eq!(doc.block_count(), 3);
        assert_eq!(doc.inline_count(), 2);
        assert!(!doc.is_empty());
        assert!(Document::new().is_empty());
    }

    #[test]
    fn test_replace_returns_previous_block() {
        let mut doc = sample();
        let old = doc.replace(1, Block::text("gone"));
        assert_eq!(old, Block::link("/tmp/report.pdf"));
        assert_eq!(doc.block(1), Some(&Block::text("gone")));
    }

    #[test]
    fn test_insert_and_remove_shift_positions() {
        let mut doc = sample();
        doc.insert(0, Block::text("first"));
        assert_eq!(doc.block_count(), 4);
        assert_eq!(doc.remove(0), Block::text("first"));
        assert_eq!(doc, sample());
    }

    #[test]
    fn test_plain_text_renders_placeholders() {
        assert_eq!(
            sample().plain_text(),
            "see www.a.com\n[link: /tmp/report.pdf]\n[image: 3 bytes]"
        );
    }

    #[test]
    fn test_dropped_image_is_embedded() {
        let mut doc = Document::new();
        let inserted = doc.insert_dropped_path(0, "/pics/cat.PNG", |_| Ok(vec![9, 9]));
        assert!(inserted);
        assert_eq!(doc.blocks(), &[Block::image(vec![9, 9])]);
    }

    #[test]
    fn test_dropped_unreadable_image_inserts_nothing() {
        let mut doc = Document::new();
        let inserted = doc.insert_dropped_path(0, "/pics/cat.jpg", |_| {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "nope"))
        });
        assert!(!inserted);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_dropped_other_file_becomes_link() {
        let mut doc = Document::new();
        doc.insert_dropped_path(0, "/docs/notes.txt", |_| unreachable!());
        assert_eq!(doc.blocks(), &[Block::link("/docs/notes.txt")]);
    }

    #[test]
    fn test_inline_serialization_omits_defaults() {
        let json = serde_json::to_string(&Inline::text("hi")).unwrap();
        assert_eq!(json, r#"{"type":"text","content":"hi"}"#);

        let visited = serde_json::to_string(&Inline::visited_text("hi")).unwrap();
        assert!(visited.contains(r#""visited":true"#));
    }
}
