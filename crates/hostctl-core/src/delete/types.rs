use super::errors::DeletionError;
use crate::projects::{Cluster, Project};

/// Rows kept free around the multi-select prompt.
pub const PAGE_MARGIN: usize = 2;

/// Answer used when the user accepts the confirmation default.
pub const DEFAULT_CONFIRMATION: &str = "n";

/// A target name resolved to a project on a cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTarget {
    alias: Option<String>,
    project: Project,
}

impl ResolvedTarget {
    pub fn new(alias: Option<String>, project: Project) -> Self {
        Self { alias, project }
    }

    /// The alias the target was resolved from, if it was an alias.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn cluster(&self) -> &Cluster {
        self.project.cluster()
    }
}

/// Ordered, non-empty list of hosted project ids to delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionRequest {
    ids: Vec<String>,
}

impl DeletionRequest {
    /// Build a request from projects, keeping their order.
    ///
    /// # Errors
    ///
    /// - `DeletionError::EmptyRequest` if `projects` is empty
    /// - `DeletionError::LocalCluster` if any project lives on a local cluster
    pub fn from_projects<'a, I>(projects: I) -> Result<Self, DeletionError>
    where
        I: IntoIterator<Item = &'a Project>,
    {
        let mut ids = Vec::new();
        for project in projects {
            if !project.cluster().is_hosted() {
                return Err(DeletionError::LocalCluster {
                    project_id: project.id().to_string(),
                    cluster: project.cluster().name().to_string(),
                });
            }
            ids.push(project.id().to_string());
        }

        if ids.is_empty() {
            return Err(DeletionError::EmptyRequest);
        }

        Ok(Self { ids })
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Never true for a constructed request.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// How a deletion run ended. Every outcome exits the process successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// The named target lives on a local cluster.
    Blocked { cluster: String },
    /// The user selected nothing in interactive mode.
    NoSelection,
    /// The user declined the confirmation prompt.
    Declined,
    /// Projects were deleted and local state reconciled.
    Reconciled { deleted: Vec<String> },
}

impl DeletionOutcome {
    pub fn exit_code(&self) -> i32 {
        0
    }

    pub fn deleted(&self) -> &[String] {
        match self {
            DeletionOutcome::Reconciled { deleted } => deleted,
            _ => &[],
        }
    }
}

/// Page size for the multi-select prompt: the smaller of terminal height and
/// number of choices, minus [`PAGE_MARGIN`], never below zero.
///
/// Without a terminal the number of choices stands in for its height.
pub fn page_size(terminal_rows: Option<usize>, choices: usize) -> usize {
    terminal_rows
        .unwrap_or(choices)
        .min(choices)
        .saturating_sub(PAGE_MARGIN)
}

/// Whether a confirmation answer declines. Only a leading `n`/`N` declines;
/// anything else, including an empty answer, confirms.
pub fn is_declined(answer: &str) -> bool {
    answer.to_lowercase().starts_with('n')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::ClusterClass;

    fn hosted(id: &str) -> Project {
        Project::new(id, id, Cluster::hosted("shared-eu-west-1"))
    }

    #[test]
    fn test_request_keeps_order() {
        let projects = [hosted("b"), hosted("a"), hosted("c")];
        let request = DeletionRequest::from_projects(&projects).unwrap();
        assert_eq!(request.ids(), ["b", "a", "c"]);
        assert_eq!(request.len(), 3);
        assert!(!request.is_empty());
    }

    #[test]
    fn test_empty_request_is_rejected() {
        let result = DeletionRequest::from_projects(&Vec::<Project>::new());
        assert!(matches!(result, Err(DeletionError::EmptyRequest)));
    }

    #[test]
    fn test_local_project_is_rejected() {
        let projects = [
            hosted("a"),
            Project::new("b", "b", Cluster::new("local", ClusterClass::Local)),
        ];
        let result = DeletionRequest::from_projects(&projects);
        assert!(matches!(
            result,
            Err(DeletionError::LocalCluster { ref project_id, .. }) if project_id == "b"
        ));
    }

    #[test]
    fn test_page_size() {
        assert_eq!(page_size(Some(40), 5), 3);
        assert_eq!(page_size(Some(10), 50), 8);
        assert_eq!(page_size(Some(1), 5), 0);
        assert_eq!(page_size(Some(40), 0), 0);
        assert_eq!(page_size(None, 7), 5);
    }

    #[test]
    fn test_is_declined() {
        for answer in ["n", "N", "no", "NO", "nope", "never"] {
            assert!(is_declined(answer), "{answer:?} should decline");
        }
        for answer in ["y", "Y", "yes", "", " n", "ok", "sure"] {
            assert!(!is_declined(answer), "{answer:?} should confirm");
        }
    }

    #[test]
    fn test_default_confirmation_declines() {
        assert!(is_declined(DEFAULT_CONFIRMATION));
    }

    #[test]
    fn test_outcome_exit_codes_are_zero() {
        let outcomes = [
            DeletionOutcome::Blocked {
                cluster: "local".to_string(),
            },
            DeletionOutcome::NoSelection,
            DeletionOutcome::Declined,
            DeletionOutcome::Reconciled {
                deleted: vec!["a".to_string()],
            },
        ];
        for outcome in outcomes {
            assert_eq!(outcome.exit_code(), 0);
        }
    }
}
