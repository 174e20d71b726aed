//! # Data Directory and Startup
//!
//! Everything blitz keeps on disk sits in one directory:
//!
//! ```text
//! <data dir>/
//! ├── data.json    # the workspace record
//! └── blitz.toml   # optional configuration
//! ```
//!
//! ## Resolution
//!
//! [`resolve_data_dir`] picks the directory, first match wins:
//! 1. An explicit override (the CLI's `--data` flag).
//! 2. The `BLITZ_DATA_DIR` environment variable. Tests use it to isolate state.
//! 3. The OS data directory for the application, via the `directories` crate.
//!
//! [`initialize`] then loads the configuration from that directory and opens the
//! workspace behind a ready [`BlitzApi`].

use crate::api::BlitzApi;
use crate::config::BlitzConfig;
use crate::error::{BlitzError, Result};
use crate::store::fs_backend::FsBackend;
use directories::ProjectDirs;
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "BLITZ_DATA_DIR";

pub struct BlitzContext {
    pub api: BlitzApi<FsBackend>,
    pub config: BlitzConfig,
    pub data_dir: PathBuf,
    /// Why `config` holds defaults instead of the contents of `blitz.toml`.
    pub config_error: Option<BlitzError>,
}

pub fn resolve_data_dir(data_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = data_override {
        return Ok(path);
    }
    if let Some(path) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(PathBuf::from(path));
    }
    ProjectDirs::from("com", "noteblitz", "blitz")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BlitzError::Store("Could not determine a data directory".to_string()))
}

/// Resolves the data directory, loads configuration and opens the workspace.
///
/// A broken `blitz.toml` is replaced by defaults and reported in
/// [`BlitzContext::config_error`]; a broken workspace record is recovered by the
/// store and reported through [`BlitzApi::load_error`]. Both are also logged, but
/// a client that installs its logger only after reading the configuration should
/// log them again from these fields.
pub fn initialize(data_override: Option<PathBuf>) -> Result<BlitzContext> {
    let data_dir = resolve_data_dir(data_override)?;

    let (config, config_error) = match BlitzConfig::load_from(&data_dir) {
        Ok(config) => (config, None),
        Err(err) => {
            log::warn!("ignoring configuration in {}: {}", data_dir.display(), err);
            (BlitzConfig::default(), Some(err))
        }
    };

    let backend = FsBackend::new(data_dir.clone());
    let api = BlitzApi::new(backend, config.note_defaults());

    Ok(BlitzContext {
        api,
        config,
        data_dir,
        config_error,
    })
}
