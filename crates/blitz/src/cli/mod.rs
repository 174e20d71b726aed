//! # CLI Behavior
//!
//! This is **one possible UI client** for blitz, not the application itself.
//! The CLI is the only place that knows about terminal I/O, exit codes, and output
//! formatting. For the overall architecture, see the crate-level documentation.
//!
//! ## One Invocation, One Session
//!
//! The desktop editor keeps a note open and hands its live document back to the
//! workspace when the user switches notes or closes the window. Here every
//! invocation is a complete session:
//!
//! ```text
//! open workspace ──► decode target note ──► edit ──► flush + save ──► exit
//! ```
//!
//! The target note is the one given on the command line, or the selected note
//! when none is given. Positions are 1-based, as printed by `blitz list`.
//!
//! ### Naked Execution (`blitz`)
//!
//! Running `blitz` with no arguments defaults to `blitz list`.
//!
//! ## Module Structure
//!
//! - `commands`: context setup and per-command handlers that call the API
//! - `render`: output formatting (note list, documents, messages)
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styles

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
