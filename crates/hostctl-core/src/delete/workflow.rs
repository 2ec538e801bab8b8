//! Target resolution and confirmed batch deletion.
//!
//! The workflow is a small state machine:
//!
//! ```text
//! ResolvingTarget ─┬─> Blocked
//!                  ├─> InteractiveSelecting ─┬─> NoSelection
//!                  │                         └─> ConfirmationPending
//!                  └─> ConfirmationPending ──┬─> Declined
//!                                            └─> Confirmed -> Deleting -> Reconciled
//! ```
//!
//! Collaborator errors end the run from `ResolvingTarget`,
//! `InteractiveSelecting` or `Deleting` and are returned unchanged.

use tracing::{error, info, warn};

use super::errors::DeletionError;
use super::traits::{Interaction, LocalState, ProjectClient, TargetResolver};
use super::types::{
    DEFAULT_CONFIRMATION, DeletionOutcome, DeletionRequest, is_declined, page_size,
};
use crate::projects::Project;

pub const SELECT_PROMPT: &str = "Select services to delete";

pub const NO_SELECTION_MESSAGE: &str =
    "You didn't select any services to delete, so none will be deleted";

pub const NO_PROJECTS_MESSAGE: &str = "There are no services to delete";

/// Projects waiting to be deleted, plus how to name them to the user.
#[derive(Debug)]
struct PendingDeletion {
    request: DeletionRequest,
    description: String,
}

#[derive(Debug)]
enum WorkflowState {
    ResolvingTarget,
    InteractiveSelecting,
    ConfirmationPending(PendingDeletion),
    Confirmed(PendingDeletion),
    Deleting(PendingDeletion),
    Blocked { cluster: String },
    NoSelection,
    Declined,
    Reconciled { deleted: Vec<String> },
}

/// Deletes one named project or an interactively selected batch.
pub struct DeletionWorkflow<'a> {
    resolver: &'a dyn TargetResolver,
    client: &'a dyn ProjectClient,
    state: &'a mut dyn LocalState,
    interaction: &'a mut dyn Interaction,
}

impl<'a> DeletionWorkflow<'a> {
    pub fn new(
        resolver: &'a dyn TargetResolver,
        client: &'a dyn ProjectClient,
        state: &'a mut dyn LocalState,
        interaction: &'a mut dyn Interaction,
    ) -> Self {
        Self {
            resolver,
            client,
            state,
            interaction,
        }
    }

    /// Run the workflow to a terminal state.
    ///
    /// # Arguments
    /// * `target` - Alias or `<cluster>/<project-id>`; `None` selects interactively
    /// * `force` - Skip the confirmation prompt
    pub fn run(
        &mut self,
        target: Option<&str>,
        force: bool,
    ) -> Result<DeletionOutcome, DeletionError> {
        info!(event = "core.delete.started", target = ?target, force = force);

        let result = self.drive(target, force);

        match &result {
            Ok(outcome) => info!(event = "core.delete.completed", outcome = ?outcome),
            Err(e) => error!(event = "core.delete.failed", error = %e),
        }

        result
    }

    fn drive(
        &mut self,
        target: Option<&str>,
        force: bool,
    ) -> Result<DeletionOutcome, DeletionError> {
        let mut state = WorkflowState::ResolvingTarget;
        loop {
            state = match state {
                WorkflowState::ResolvingTarget => self.resolve_target(target)?,
                WorkflowState::InteractiveSelecting => self.select_projects()?,
                WorkflowState::ConfirmationPending(pending) => self.confirm(pending, force)?,
                WorkflowState::Confirmed(pending) => self.start_deletion(pending),
                WorkflowState::Deleting(pending) => self.delete_and_reconcile(pending)?,
                WorkflowState::Blocked { cluster } => {
                    return Ok(DeletionOutcome::Blocked { cluster });
                }
                WorkflowState::NoSelection => return Ok(DeletionOutcome::NoSelection),
                WorkflowState::Declined => return Ok(DeletionOutcome::Declined),
                WorkflowState::Reconciled { deleted } => {
                    return Ok(DeletionOutcome::Reconciled { deleted });
                }
            };
        }
    }

    fn resolve_target(&mut self, target: Option<&str>) -> Result<WorkflowState, DeletionError> {
        let Some(resolved) = self.resolver.resolve(target)? else {
            info!(event = "core.delete.interactive_mode", target = ?target);
            return Ok(WorkflowState::InteractiveSelecting);
        };

        let cluster = resolved.cluster();
        if !cluster.is_hosted() {
            warn!(
                event = "core.delete.blocked",
                project_id = resolved.project().id(),
                cluster = cluster.name(),
                reason = "local_cluster"
            );
            self.interaction.error(&format!(
                "Can't delete service in local cluster {}.\n\
                 This command is only available in the hosted version of hostctl.",
                cluster.name()
            ));
            return Ok(WorkflowState::Blocked {
                cluster: cluster.name().to_string(),
            });
        }

        let request = DeletionRequest::from_projects([resolved.project()])?;
        Ok(WorkflowState::ConfirmationPending(PendingDeletion {
            request,
            description: resolved.project().id().to_string(),
        }))
    }

    fn select_projects(&mut self) -> Result<WorkflowState, DeletionError> {
        let projects = self.client.list_projects()?;

        if projects.is_empty() {
            info!(event = "core.delete.no_projects");
            return Ok(self.end_without_selection(NO_PROJECTS_MESSAGE));
        }

        let labels: Vec<String> = projects.iter().map(Project::label).collect();
        let page_size = page_size(self.interaction.terminal_rows(), labels.len());
        let selected = self
            .interaction
            .select_many(SELECT_PROMPT, &labels, page_size)?;

        let chosen: Vec<&Project> = selected.iter().filter_map(|&i| projects.get(i)).collect();

        if chosen.is_empty() {
            info!(event = "core.delete.nothing_selected", available = projects.len());
            return Ok(self.end_without_selection(NO_SELECTION_MESSAGE));
        }

        info!(
            event = "core.delete.projects_selected",
            selected = chosen.len(),
            available = projects.len()
        );

        let request = DeletionRequest::from_projects(chosen.iter().copied())?;
        let description = chosen
            .iter()
            .map(|p| p.label())
            .collect::<Vec<_>>()
            .join(", ");

        Ok(WorkflowState::ConfirmationPending(PendingDeletion {
            request,
            description,
        }))
    }

    fn end_without_selection(&mut self, message: &str) -> WorkflowState {
        self.interaction.log(message);
        self.interaction.terminate(0);
        WorkflowState::NoSelection
    }

    fn confirm(
        &mut self,
        pending: PendingDeletion,
        force: bool,
    ) -> Result<WorkflowState, DeletionError> {
        if force {
            info!(event = "core.delete.confirmation_skipped");
            return Ok(WorkflowState::Confirmed(pending));
        }

        let prompt = format!(
            "Are you sure that you want to delete {}? y/N",
            pending.description
        );
        let answer = self.interaction.confirm(&prompt, DEFAULT_CONFIRMATION)?;

        if is_declined(&answer) {
            info!(event = "core.delete.declined");
            self.interaction.terminate(0);
            return Ok(WorkflowState::Declined);
        }

        info!(event = "core.delete.confirmed");
        Ok(WorkflowState::Confirmed(pending))
    }

    fn start_deletion(&mut self, pending: PendingDeletion) -> WorkflowState {
        let noun = if pending.request.len() > 1 {
            "services"
        } else {
            "service"
        };
        self.interaction
            .report_start(&format!("Deleting {} {}", noun, pending.description));
        WorkflowState::Deleting(pending)
    }

    fn delete_and_reconcile(
        &mut self,
        pending: PendingDeletion,
    ) -> Result<WorkflowState, DeletionError> {
        let ids = pending.request.ids();

        self.client.delete_projects(ids)?;
        self.state.remove_if_present(ids);
        self.state.persist()?;
        self.interaction.report_done();

        Ok(WorkflowState::Reconciled {
            deleted: ids.to_vec(),
        })
    }
}
