use super::backend::StorageBackend;
use crate::error::{BlitzError, Result};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since the workspace is owned by a
/// single thread. This keeps `StorageBackend` on `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    record: RefCell<Option<String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that already holds `content`, as if a previous run saved it.
    pub fn with_record(content: impl Into<String>) -> Self {
        let backend = Self::default();
        *backend.record.borrow_mut() = Some(content.into());
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }

    pub fn record(&self) -> Option<String> {
        self.record.borrow().clone()
    }
}

impl StorageBackend for MemBackend {
    fn read_record(&self) -> Result<Option<String>> {
        Ok(self.record.borrow().clone())
    }

    fn write_record(&self, content: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(BlitzError::Store("Simulated write error".to_string()));
        }
        *self.record.borrow_mut() = Some(content.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn record_path(&self) -> PathBuf {
        PathBuf::from("memory://data.json")
    }
}
