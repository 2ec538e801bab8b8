use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a cluster.
///
/// Only hosted (shared) clusters are managed through the hosted API;
/// local clusters run on the user's machine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClusterClass {
    #[serde(alias = "hosted")]
    Shared,
    Local,
}

/// A cluster a project is deployed to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    name: String,
    class: ClusterClass,
}

impl Cluster {
    pub fn new(name: impl Into<String>, class: ClusterClass) -> Self {
        Self {
            name: name.into(),
            class,
        }
    }

    /// Shorthand for a cluster of the hosted service.
    pub fn hosted(name: impl Into<String>) -> Self {
        Self::new(name, ClusterClass::Shared)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> ClusterClass {
        self.class
    }

    pub fn is_hosted(&self) -> bool {
        self.class == ClusterClass::Shared
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A deployed project (service), as reported by the hosted API or by a
/// locally tracked target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: String,
    name: String,
    cluster: Cluster,
}

impl Project {
    pub fn new(id: impl Into<String>, name: impl Into<String>, cluster: Cluster) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            cluster,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cluster(&self) -> &Cluster {
        &self.cluster
    }

    /// Human-readable label used in prompts and progress messages.
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.id)
    }
}
