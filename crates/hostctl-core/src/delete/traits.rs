//! Collaborators consumed by the deletion workflow.

use super::errors::InteractionError;
use super::types::ResolvedTarget;
use crate::client::ClientError;
use crate::projects::Project;
use crate::state::{StateError, TargetError};

/// Maps a target name to a known project and its cluster.
pub trait TargetResolver {
    /// Resolve `name`. `Ok(None)` means "no such target" (or no name given).
    fn resolve(&self, name: Option<&str>) -> Result<Option<ResolvedTarget>, TargetError>;
}

/// Remote project operations.
pub trait ProjectClient {
    fn list_projects(&self) -> Result<Vec<Project>, ClientError>;

    /// Delete all `ids` in a single batch call.
    fn delete_projects(&self, ids: &[String]) -> Result<(), ClientError>;
}

/// Locally tracked project references.
pub trait LocalState {
    /// Forget every reference to one of `ids`. Unknown ids are ignored.
    fn remove_if_present(&mut self, ids: &[String]);

    fn persist(&mut self) -> Result<(), StateError>;
}

/// User-facing prompts and progress output.
pub trait Interaction {
    /// Ask a free-form question and return the raw answer. `default` is
    /// returned when the user just presses enter.
    fn confirm(&mut self, prompt: &str, default: &str) -> Result<String, InteractionError>;

    /// Let the user pick any number of `items`.
    ///
    /// Returns indices into `items`. Deletion follows the order returned.
    fn select_many(
        &mut self,
        prompt: &str,
        items: &[String],
        page_size: usize,
    ) -> Result<Vec<usize>, InteractionError>;

    /// Height of the attached terminal, if any.
    fn terminal_rows(&self) -> Option<usize>;

    fn report_start(&mut self, message: &str);

    fn report_done(&mut self);

    fn log(&mut self, message: &str);

    fn error(&mut self, message: &str);

    /// End the process with `code`.
    fn terminate(&mut self, code: i32);
}
