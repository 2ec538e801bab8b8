use std::path::{Path, PathBuf};

use super::errors::StateError;
use super::types::StateData;

/// Load local state from `path`.
///
/// Returns default empty state if the file doesn't exist. A file that exists
/// but can't be read or parsed yields empty state with `load_error` set
/// (and the error logged).
pub fn load_state(path: &Path) -> StateData {
    if !path.exists() {
        return StateData::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match serde_json::from_str(&content) {
            Ok(data) => data,
            Err(e) => {
                tracing::error!(
                    event = "core.state.json_parse_failed",
                    path = %path.display(),
                    error = %e,
                    "State file exists but contains invalid JSON"
                );
                StateData {
                    load_error: Some(format!(
                        "State file corrupted ({}). Known targets could not be loaded. \
                         Delete {} to reset.",
                        e,
                        path.display()
                    )),
                    ..Default::default()
                }
            }
        },
        Err(e) => {
            tracing::error!(
                event = "core.state.load_failed",
                path = %path.display(),
                error = %e
            );
            StateData {
                load_error: Some(format!(
                    "Failed to read state file: {}. Check permissions on {}",
                    e,
                    path.display()
                )),
                ..Default::default()
            }
        }
    }
}

/// Save local state to `path`, creating the parent directory if needed.
///
/// Refuses to write state whose load failed, so a corrupted file is never
/// replaced by an empty one.
pub fn save_state(path: &Path, data: &StateData) -> Result<(), StateError> {
    if let Some(message) = &data.load_error {
        return Err(StateError::LoadCorrupted {
            message: message.clone(),
        });
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StateError::SaveFailed {
            message: format!("Failed to create directory ({}): {}", parent.display(), e),
        })?;
    }

    let json = serde_json::to_string_pretty(data).map_err(|e| StateError::SaveFailed {
        message: format!("Failed to serialize state: {}", e),
    })?;

    std::fs::write(path, json).map_err(|e| StateError::SaveFailed {
        message: format!("Failed to write state file ({}): {}", path.display(), e),
    })?;

    tracing::info!(
        event = "core.state.saved",
        path = %path.display(),
        targets = data.targets.len()
    );

    Ok(())
}

/// Location of the state file: `~/.hostctl/state.json`.
///
/// `HOSTCTL_STATE_FILE` overrides the location. Falls back to
/// `./.hostctl/state.json` if the home directory cannot be determined.
pub fn state_file_path() -> PathBuf {
    if let Ok(path_str) = std::env::var("HOSTCTL_STATE_FILE") {
        if !path_str.is_empty() {
            return PathBuf::from(path_str);
        }
    }

    match dirs::home_dir() {
        Some(home) => home.join(".hostctl").join("state.json"),
        None => {
            tracing::error!(
                event = "core.state.home_dir_not_found",
                fallback = ".",
                "Could not determine home directory - using current directory as fallback"
            );
            PathBuf::from(".").join(".hostctl").join("state.json")
        }
    }
}
