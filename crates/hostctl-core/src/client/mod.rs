//! Hosted API client.

pub mod errors;
pub mod http;
pub mod types;

pub use errors::ClientError;
pub use http::HttpProjectClient;
pub use types::RemoteProject;

use crate::config::HostctlConfig;
use crate::delete::ProjectClient;
use crate::projects::Project;

/// List every project of the authenticated account.
pub fn list_remote_projects(config: &HostctlConfig) -> Result<Vec<Project>, ClientError> {
    let client = HttpProjectClient::from_config(&config.api)?;
    client.list_projects()
}
