use crate::client::ClientError;
use crate::errors::HostctlError;
use crate::state::{StateError, TargetError};

/// Failure presenting a prompt to the user.
#[derive(Debug, thiserror::Error)]
pub enum InteractionError {
    #[error("Prompt failed: {message}")]
    PromptFailed { message: String },
}

impl HostctlError for InteractionError {
    fn error_code(&self) -> &'static str {
        match self {
            InteractionError::PromptFailed { .. } => "INTERACTION_PROMPT_FAILED",
        }
    }
}

/// Errors of the deletion workflow.
///
/// Collaborator failures are wrapped transparently so their message reaches
/// the user unchanged.
#[derive(Debug, thiserror::Error)]
pub enum DeletionError {
    #[error(transparent)]
    Target(#[from] TargetError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Interaction(#[from] InteractionError),

    #[error("A deletion request needs at least one project")]
    EmptyRequest,

    #[error("Can't delete project '{project_id}' in local cluster {cluster}")]
    LocalCluster { project_id: String, cluster: String },
}

impl HostctlError for DeletionError {
    fn error_code(&self) -> &'static str {
        match self {
            DeletionError::Target(e) => e.error_code(),
            DeletionError::Client(e) => e.error_code(),
            DeletionError::State(e) => e.error_code(),
            DeletionError::Interaction(e) => e.error_code(),
            DeletionError::EmptyRequest => "DELETE_EMPTY_REQUEST",
            DeletionError::LocalCluster { .. } => "DELETE_LOCAL_CLUSTER",
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DeletionError::Target(e) => e.is_user_error(),
            DeletionError::Client(e) => e.is_user_error(),
            DeletionError::State(e) => e.is_user_error(),
            DeletionError::Interaction(e) => e.is_user_error(),
            DeletionError::EmptyRequest | DeletionError::LocalCluster { .. } => false,
        }
    }
}
