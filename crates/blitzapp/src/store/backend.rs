use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw record I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `store::load` / `store::save` handle the "what" (parsing, fallback).
pub trait StorageBackend {
    /// Read the workspace record.
    /// Returns Ok(None) if no record has been written yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_record(&self) -> Result<Option<String>>;

    /// Replace the workspace record.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_record(&self, content: &str) -> Result<()>;

    /// Where the record lives.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn record_path(&self) -> PathBuf;
}
