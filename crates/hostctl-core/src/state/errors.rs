use crate::errors::HostctlError;

/// Errors reading or writing the local state file.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("Failed to save local state: {message}")]
    SaveFailed { message: String },

    #[error("Local state file is corrupted: {message}")]
    LoadCorrupted { message: String },
}

impl HostctlError for StateError {
    fn error_code(&self) -> &'static str {
        match self {
            StateError::SaveFailed { .. } => "STATE_SAVE_FAILED",
            StateError::LoadCorrupted { .. } => "STATE_LOAD_CORRUPTED",
        }
    }
}

/// Errors resolving a target name against local state.
#[derive(Debug, thiserror::Error)]
pub enum TargetError {
    #[error("Target '{target}' refers to unknown cluster '{cluster}'")]
    UnknownCluster { target: String, cluster: String },

    #[error("Invalid target '{target}': expected <cluster>/<project-id>")]
    InvalidTarget { target: String },
}

impl HostctlError for TargetError {
    fn error_code(&self) -> &'static str {
        match self {
            TargetError::UnknownCluster { .. } => "TARGET_UNKNOWN_CLUSTER",
            TargetError::InvalidTarget { .. } => "TARGET_INVALID",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
