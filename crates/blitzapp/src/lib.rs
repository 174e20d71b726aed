//! # Blitz Architecture
//!
//! Blitz is a **UI-agnostic multi-note library**. A desktop window, a CLI or a test
//! harness are all just clients; none of them owns the rules about how notes are
//! persisted, linked or ordered. Those rules live here.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell (crates/blitz, or any other UI)                      │
//! │  - Owns the live Document while a note is being edited      │
//! │  - Triggers autolinking on word boundaries / paste          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Hand-off points: open, flush, select, shutdown           │
//! │  - Saves at every mutating boundary, publishes events       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure operations on an in-memory Workspace                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait: FsBackend, MemBackend              │
//! │  - Fallback-safe load, pretty JSON save                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Beside the layers sit the document pieces, which have no knowledge of notes
//! or storage at all:
//!
//! - [`document`]: the block/inline tree of one note.
//! - [`codec`]: turns a document into the base64 string stored in a note and back.
//! - [`autolink`]: rewrites URL-shaped text into hyperlinks.
//!
//! ## Key Principle: Total Functions at the Edges
//!
//! Decoding a corrupt note yields an empty document, loading a corrupt workspace
//! yields a fresh one, and encoding skips what it cannot package. Those recoveries
//! are logged through the `log` facade and never surface as errors. Everything that
//! touches the disk on save does return a [`error::Result`].
//!
//! ## Threading
//!
//! Nothing here locks. A workspace and the live document belong to one thread; the
//! only background work is [`update::UpdateCheck`], which reports back over a
//! channel that the owning thread polls.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade every client talks to
//! - [`commands`]: Workspace operations (add, remove, rename, select, move, settings)
//! - [`store`]: Storage abstraction and the persisted record
//! - [`model`]: `Workspace`, `Note`, `Geometry`, `HotkeySpec`
//! - [`config`]: Layered configuration via `confique`
//! - [`init`]: Resolves the data directory and wires a ready-to-use API
//! - [`logging`]: One-time `env_logger` setup
//! - [`update`]: Background release lookup with owning-thread hand-back
//! - [`error`]: Error types

pub mod api;
pub mod autolink;
pub mod codec;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod init;
pub mod logging;
pub mod model;
pub mod store;
pub mod update;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
