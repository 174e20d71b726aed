use super::backend::StorageBackend;
use crate::error::{BlitzError, Result};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

pub const RECORD_FILE: &str = "data.json";

pub struct FsBackend {
    root: PathBuf,
}

impl FsBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(BlitzError::Io)?;
        }
        Ok(())
    }
}

impl StorageBackend for FsBackend {
    fn read_record(&self) -> Result<Option<String>> {
        let path = self.record_path();
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(BlitzError::Io)?;
        Ok(Some(content))
    }

    fn write_record(&self, content: &str) -> Result<()> {
        self.ensure_dir()?;

        // Atomic write
        let tmp_file = self.root.join(format!(".data-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(BlitzError::Io)?;
        fs::rename(&tmp_file, self.record_path()).map_err(BlitzError::Io)?;

        Ok(())
    }

    fn record_path(&self) -> PathBuf {
        self.root.join(RECORD_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_record_reads_none() {
        let dir = tempdir().unwrap();
        let backend = FsBackend::new(dir.path().to_path_buf());
        assert_eq!(backend.read_record().unwrap(), None);
    }

    #[test]
    fn test_write_creates_dir_and_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("nested").join("blitz");
        let backend = FsBackend::new(root.clone());

        backend.write_record("{}").unwrap();
        backend.write_record("{\"a\":1}").unwrap();

        assert_eq!(backend.read_record().unwrap().as_deref(), Some("{\"a\":1}"));
        let entries: Vec<_> = fs::read_dir(&root).unwrap().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(backend.record_path(), root.join("data.json"));
    }
}
