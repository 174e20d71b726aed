use crate::api::BlitzApi;
use crate::model::NoteDefaults;
use crate::store::fs_backend::FsBackend;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub root: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn backend(&self) -> FsBackend {
        FsBackend::new(self.root.clone())
    }

    /// Opens the workspace in this directory, as a fresh process would.
    pub fn api(&self) -> BlitzApi<FsBackend> {
        BlitzApi::new(self.backend(), NoteDefaults::default())
    }

    pub fn record_path(&self) -> PathBuf {
        self.root.join(crate::store::fs_backend::RECORD_FILE)
    }
}
