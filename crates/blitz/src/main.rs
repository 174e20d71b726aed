//! # Blitz CLI Architecture
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while this file
//! only invokes `cli::run()` and handles process termination.
//!
//! ## Workspace Structure
//!
//! Blitz is organized as a Cargo workspace with two crates:
//! - `crates/blitzapp/`: Core library with UI-agnostic note logic
//! - `crates/blitz/`: This CLI tool, depends on the `blitzapp` library
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/blitz/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - Terminal rendering with console styles (render.rs)       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/blitzapp/src/api.rs)                     │
//! │  - Validates positions, saves, publishes events             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (crates/blitzapp/src/commands/*)             │
//! │  - Pure workspace operations                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each invocation is one short editing session: it opens the workspace, performs
//! one action (which is a save boundary) and exits. The desktop notion of "the
//! note currently open" maps to the workspace's selected note.
//!
//! ## Testing Approach
//!
//! - **Library**: unit tests next to each module, property tests in
//!   `crates/blitzapp/tests/`.
//! - **CLI**: end-to-end tests in `tests/` run the built binary against a
//!   temporary data directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
