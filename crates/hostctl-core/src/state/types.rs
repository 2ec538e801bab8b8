use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::projects::{Cluster, ClusterClass};

/// A cluster known to this machine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClusterEntry {
    pub kind: ClusterClass,
    /// Address of a local cluster. Unused for shared clusters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

/// A named alias for a deployed project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TargetEntry {
    pub cluster: String,
    pub project_id: String,
    /// Display name of the project, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Stored local state (serialization DTO for `~/.hostctl/state.json`).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StateData {
    #[serde(default)]
    pub clusters: BTreeMap<String, ClusterEntry>,
    #[serde(default)]
    pub targets: BTreeMap<String, TargetEntry>,
    /// Alias other commands fall back to when no target is named.
    /// Deletion never reads it; it only clears it when the alias goes away.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_target: Option<String>,
    /// Error message if loading failed (file corrupted, unreadable, etc.).
    /// Transient, never serialized.
    #[serde(skip)]
    pub load_error: Option<String>,
}

impl StateData {
    /// Look up a cluster by name.
    pub fn cluster(&self, name: &str) -> Option<Cluster> {
        self.clusters
            .get(name)
            .map(|entry| Cluster::new(name, entry.kind))
    }

    /// Remove every target pointing at one of `ids`.
    ///
    /// Clears `default_target` when it named a removed alias. Returns the
    /// removed aliases in alphabetical order.
    pub fn remove_projects(&mut self, ids: &[String]) -> Vec<String> {
        let removed: Vec<String> = self
            .targets
            .iter()
            .filter(|(_, target)| ids.contains(&target.project_id))
            .map(|(alias, _)| alias.clone())
            .collect();

        for alias in &removed {
            self.targets.remove(alias);
        }

        if self
            .default_target
            .as_ref()
            .is_some_and(|alias| removed.contains(alias))
        {
            self.default_target = None;
        }

        removed
    }
}
