//! Wire types for the hosted API.

use serde::{Deserialize, Serialize};

use crate::projects::{Cluster, Project};

/// Response of `GET /projects`.
#[derive(Debug, Deserialize)]
pub struct ProjectsResponse {
    #[serde(default)]
    pub projects: Vec<RemoteProject>,
}

/// A project as listed by the hosted API.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RemoteProject {
    pub id: String,
    pub name: String,
    pub cluster: String,
}

impl From<RemoteProject> for Project {
    /// Everything the hosted API lists lives on a hosted cluster.
    fn from(remote: RemoteProject) -> Self {
        Project::new(remote.id, remote.name, Cluster::hosted(remote.cluster))
    }
}

/// Body of `POST /projects/delete`.
#[derive(Debug, Serialize)]
pub struct DeleteProjectsRequest<'a> {
    pub ids: &'a [String],
}
