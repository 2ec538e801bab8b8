//! Confirmed batch deletion of hosted projects.
//!
//! [`DeletionWorkflow`] drives the run against the collaborator traits in
//! [`traits`]; [`handler::delete_projects`] wires it to the HTTP client and
//! the state file.

pub mod errors;
pub mod handler;
pub mod traits;
pub mod types;
pub mod workflow;

pub use errors::{DeletionError, InteractionError};
pub use handler::delete_projects;
pub use traits::{Interaction, LocalState, ProjectClient, TargetResolver};
pub use types::{DeletionOutcome, DeletionRequest, ResolvedTarget, is_declined, page_size};
pub use workflow::{DeletionWorkflow, NO_PROJECTS_MESSAGE, NO_SELECTION_MESSAGE, SELECT_PROMPT};
