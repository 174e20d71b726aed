//! # Rich-Text Package
//!
//! Byte-level container for a document's styled runs and raster images: a gzip
//! compressed tar archive.
//!
//! ```text
//! package.tar.gz
//! ├── content.json      # {"version":1,"blocks":[...]}
//! ├── images/0.bin      # raw pixel buffer of the first image block
//! └── images/1.bin
//! ```
//!
//! Every header field that could vary between runs (mtime, owner, mode) is pinned,
//! and the gzip header carries no timestamp, so packing the same document twice
//! yields the same bytes.
//!
//! Shortcut blocks have no packaged form: the codec swaps them for text tokens
//! before calling [`pack`]. Anything that still cannot be packaged is skipped and
//! counted in [`Packed::skipped`].
//!
//! ## Size Limits
//!
//! A single image part may hold at most [`MAX_IMAGE_BYTES`], and all parts
//! together at most [`MAX_UNPACKED_BYTES`]. [`pack`] skips images past either
//! limit; [`unpack`] refuses a package whose parts exceed them, before reading
//! more than the limit allows. A small persisted string therefore cannot expand
//! into an unbounded allocation.

use crate::document::{Block, Document, Inline};
use crate::error::{BlitzError, Result};
use flate2::read::GzDecoder;
use flate2::{Compression, GzBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{Read, Write};

pub const FORMAT_VERSION: u32 = 1;
pub const MAX_IMAGE_BYTES: usize = 32 * 1024 * 1024;
pub const MAX_UNPACKED_BYTES: usize = 128 * 1024 * 1024;

const CONTENT_ENTRY: &str = "content.json";
const IMAGE_DIR: &str = "images";

#[derive(Debug, Serialize, Deserialize)]
struct Manifest {
    version: u32,
    blocks: Vec<PackagedBlock>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum PackagedBlock {
    Paragraph { inlines: Vec<Inline> },
    Image { part: String },
}

/// Output of [`pack`].
#[derive(Debug)]
pub struct Packed {
    pub bytes: Vec<u8>,
    /// Blocks left out because they have no packaged form.
    pub skipped: usize,
}

/// Per-part and total byte limits of a package.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Limits {
    pub image_bytes: usize,
    pub total_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            image_bytes: MAX_IMAGE_BYTES,
            total_bytes: MAX_UNPACKED_BYTES,
        }
    }
}

pub fn pack(document: &Document) -> Result<Packed> {
    pack_with_limits(document, Limits::default())
}

pub(crate) fn pack_with_limits(document: &Document, limits: Limits) -> Result<Packed> {
    let mut manifest = Manifest {
        version: FORMAT_VERSION,
        blocks: Vec::with_capacity(document.block_count()),
    };
    let mut parts: Vec<(String, &[u8])> = Vec::new();
    let mut skipped = 0;
    let mut image_total = 0;

    for (position, block) in document.blocks().iter().enumerate() {
        match block {
            Block::Paragraph { inlines } => manifest.blocks.push(PackagedBlock::Paragraph {
                inlines: inlines.clone(),
            }),
            Block::EmbeddedImage { pixel_data } if pixel_data.len() > limits.image_bytes => {
                log::warn!(
                    "skipping image block {}: {} bytes exceeds the {} byte limit",
                    position,
                    pixel_data.len(),
                    limits.image_bytes
                );
                skipped += 1;
            }
            Block::EmbeddedImage { pixel_data }
                if image_total + pixel_data.len() > limits.total_bytes =>
            {
                log::warn!(
                    "skipping image block {}: document images exceed {} bytes",
                    position,
                    limits.total_bytes
                );
                skipped += 1;
            }
            Block::EmbeddedImage { pixel_data } => {
                image_total += pixel_data.len();
                let part = format!("{}/{}.bin", IMAGE_DIR, parts.len());
                manifest.blocks.push(PackagedBlock::Image { part: part.clone() });
                parts.push((part, pixel_data.as_slice()));
            }
            Block::EmbeddedLink { target_path } => {
                log::warn!(
                    "skipping link block {} ({}): links have no packaged form",
                    position,
                    target_path
                );
                skipped += 1;
            }
        }
    }

    let content = serde_json::to_vec(&manifest).map_err(BlitzError::Serialization)?;
    if content.len() + image_total > limits.total_bytes {
        return Err(BlitzError::Package(format!(
            "document text of {} bytes exceeds the {} byte package limit",
            content.len(),
            limits.total_bytes
        )));
    }

    let encoder = GzBuilder::new()
        .mtime(0)
        .write(Vec::new(), Compression::default());
    let mut archive = tar::Builder::new(encoder);
    append_part(&mut archive, CONTENT_ENTRY, &content)?;
    for (name, data) in &parts {
        append_part(&mut archive, name, data)?;
    }
    let encoder = archive.into_inner().map_err(BlitzError::Io)?;
    let bytes = encoder.finish().map_err(BlitzError::Io)?;

    Ok(Packed { bytes, skipped })
}

fn append_part<W: Write>(archive: &mut tar::Builder<W>, name: &str, data: &[u8]) -> Result<()> {
    let mut header = tar::Header::new_gnu();
    header.set_entry_type(tar::EntryType::Regular);
    header.set_size(data.len() as u64);
    header.set_mode(0o644);
    header.set_mtime(0);
    header.set_uid(0);
    header.set_gid(0);
    archive
        .append_data(&mut header, name, data)
        .map_err(BlitzError::Io)
}

pub fn unpack(bytes: &[u8]) -> Result<Document> {
    unpack_with_limits(bytes, Limits::default())
}

pub(crate) fn unpack_with_limits(bytes: &[u8], limits: Limits) -> Result<Document> {
    let mut archive = tar::Archive::new(GzDecoder::new(bytes));
    let mut parts: HashMap<String, Vec<u8>> = HashMap::new();
    let mut total = 0usize;

    for entry in archive.entries().map_err(BlitzError::Io)? {
        let mut entry = entry.map_err(BlitzError::Io)?;
        let name = entry
            .path()
            .map_err(BlitzError::Io)?
            .to_string_lossy()
            .into_owned();

        let limit = if name == CONTENT_ENTRY {
            limits.total_bytes
        } else if name.starts_with(IMAGE_DIR) {
            limits.image_bytes
        } else {
            log::debug!("ignoring unknown package part {}", name);
            continue;
        };
        let remaining = limits.total_bytes.saturating_sub(total);
        let allowed = limit.min(remaining);

        let declared = entry.header().size().map_err(BlitzError::Io)?;
        if declared > allowed as u64 {
            return Err(oversized(&name, declared, allowed));
        }

        let mut data = Vec::new();
        entry
            .by_ref()
            .take(allowed as u64 + 1)
            .read_to_end(&mut data)
            .map_err(BlitzError::Io)?;
        if data.len() > allowed {
            return Err(oversized(&name, data.len() as u64, allowed));
        }
        total += data.len();
        parts.insert(name, data);
    }

    let content = parts
        .remove(CONTENT_ENTRY)
        .ok_or_else(|| BlitzError::Package(format!("missing {}", CONTENT_ENTRY)))?;
    let manifest: Manifest = serde_json::from_slice(&content).map_err(BlitzError::Serialization)?;

    if manifest.version != FORMAT_VERSION {
        return Err(BlitzError::Package(format!(
            "unsupported package version {}",
            manifest.version
        )));
    }

    let mut document = Document::new();
    for block in manifest.blocks {
        match block {
            PackagedBlock::Paragraph { inlines } => document.push(Block::Paragraph { inlines }),
            PackagedBlock::Image { part } => {
                let pixel_data = parts
                    .remove(&part)
                    .ok_or_else(|| BlitzError::Package(format!("missing image part {}", part)))?;
                document.push(Block::EmbeddedImage { pixel_data });
            }
        }
    }

    Ok(document)
}

fn oversized(name: &str, size: u64, allowed: usize) -> BlitzError {
    BlitzError::Package(format!(
        "package part {} holds {} bytes, more than the {} allowed",
        name, size, allowed
    ))
}
