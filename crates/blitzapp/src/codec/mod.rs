//! # Persistence Codec
//!
//! Converts a live [`Document`] into the string stored in a note's
//! `persistedDocument` field, and back.
//!
//! ## Encoding
//!
//! 1. Every [`Block::EmbeddedLink`] is swapped, on a transient copy, for a
//!    paragraph holding the token `[LinkButton "<target_path>"]`. The path is
//!    inserted verbatim.
//! 2. The transient copy is packed by [`package::pack`].
//! 3. The package bytes are base64 encoded (standard alphabet, padded).
//!
//! ## Decoding
//!
//! 1. Empty input is an empty document.
//! 2. Base64 decode, then [`package::unpack`].
//! 3. Any paragraph with a text run containing a token is replaced, as a whole,
//!    by the link block the token names.
//!
//! ## Failure Policy
//!
//! Neither direction fails from the caller's point of view. [`decode`] turns any
//! error into an empty document; [`encode`] skips elements it cannot package and,
//! if the archive itself cannot be written, returns an empty string. Both log what
//! they swallowed. [`try_decode`] exposes the cause for callers that want it.
//!
//! ## Token Grammar
//!
//! `[LinkButton "` + path + `"]`, matched on a single line with a non-greedy
//! capture. Quotes inside the path are not escaped, so a path containing `"]`
//! does not survive the round trip, and neither does an empty path.

use crate::document::{Block, Document, Inline};
use crate::error::{BlitzError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;

pub mod package;

static LINK_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\[LinkButton "(.+?)"\]"#).expect("valid link token regex"));

/// The text token a shortcut block is persisted as.
pub fn link_token(target_path: &str) -> String {
    format!("[LinkButton \"{}\"]", target_path)
}

/// Extracts the target path of the first link token in `text`.
pub fn parse_link_token(text: &str) -> Option<&str> {
    LINK_TOKEN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

pub fn encode(document: &Document) -> String {
    let transient = tokenize_links(document);

    match package::pack(&transient) {
        Ok(packed) => {
            if packed.skipped > 0 {
                log::warn!(
                    "encoded document with {} element(s) left out",
                    packed.skipped
                );
            }
            STANDARD.encode(packed.bytes)
        }
        Err(err) => {
            log::error!("could not package document: {}", err);
            String::new()
        }
    }
}

pub fn decode(persisted: &str) -> Document {
    try_decode(persisted).unwrap_or_else(|err| {
        log::warn!("could not decode persisted document, starting empty: {}", err);
        Document::new()
    })
}

pub fn try_decode(persisted: &str) -> Result<Document> {
    if persisted.is_empty() {
        return Ok(Document::new());
    }

    let bytes = STANDARD.decode(persisted).map_err(BlitzError::Base64)?;
    let mut document = package::unpack(&bytes)?;
    restore_links(&mut document);
    Ok(document)
}

fn tokenize_links(document: &Document) -> Document {
    let blocks = document
        .blocks()
        .iter()
        .map(|block| match block {
            Block::EmbeddedLink { target_path } => Block::text(link_token(target_path)),
            other => other.clone(),
        })
        .collect();
    Document::from_blocks(blocks)
}

fn restore_links(document: &mut Document) {
    for index in 0..document.block_count() {
        let target = match document.block(index) {
            Some(Block::Paragraph { inlines }) => inlines.iter().find_map(|inline| match inline {
                Inline::Text { content, .. } => parse_link_token(content).map(str::to_string),
                Inline::Hyperlink { .. } => None,
            }),
            _ => None,
        };

        if let Some(target_path) = target {
            document.replace(index, Block::EmbeddedLink { target_path });
        }
    }
}
