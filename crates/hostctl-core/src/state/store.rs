use std::path::{Path, PathBuf};

use tracing::info;

use super::errors::StateError;
use super::persistence::{load_state, save_state, state_file_path};
use super::types::StateData;
use crate::delete::LocalState;

/// Local state backed by a JSON file on disk.
#[derive(Debug)]
pub struct FileState {
    path: PathBuf,
    data: StateData,
}

impl FileState {
    /// Load state from the default location (see [`state_file_path`]).
    pub fn load() -> Self {
        Self::open(state_file_path())
    }

    /// Load state from an explicit path.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = load_state(&path);
        Self { path, data }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &StateData {
        &self.data
    }

    /// Error message if the file existed but could not be loaded.
    pub fn load_error(&self) -> Option<&str> {
        self.data.load_error.as_deref()
    }
}

impl LocalState for FileState {
    fn remove_if_present(&mut self, ids: &[String]) {
        let removed = self.data.remove_projects(ids);
        info!(
            event = "core.state.targets_removed",
            removed = ?removed,
            remaining = self.data.targets.len()
        );
    }

    fn persist(&mut self) -> Result<(), StateError> {
        save_state(&self.path, &self.data)
    }
}
