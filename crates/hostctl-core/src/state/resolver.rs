use tracing::{debug, info};

use super::errors::TargetError;
use super::types::StateData;
use crate::delete::{ResolvedTarget, TargetResolver};
use crate::projects::Project;

/// Resolves target names against a snapshot of local state.
///
/// Accepts either a known alias or a literal `<cluster>/<project-id>`.
/// Names that match neither resolve to nothing.
#[derive(Debug, Clone)]
pub struct StateTargetResolver {
    data: StateData,
}

impl StateTargetResolver {
    pub fn new(data: &StateData) -> Self {
        Self { data: data.clone() }
    }

    fn project_on_cluster(
        &self,
        target: &str,
        cluster_name: &str,
        project_id: &str,
        display_name: Option<&str>,
    ) -> Result<Project, TargetError> {
        let cluster =
            self.data
                .cluster(cluster_name)
                .ok_or_else(|| TargetError::UnknownCluster {
                    target: target.to_string(),
                    cluster: cluster_name.to_string(),
                })?;

        Ok(Project::new(
            project_id,
            display_name.unwrap_or(project_id),
            cluster,
        ))
    }
}

impl TargetResolver for StateTargetResolver {
    fn resolve(&self, name: Option<&str>) -> Result<Option<ResolvedTarget>, TargetError> {
        let Some(name) = name.map(str::trim).filter(|n| !n.is_empty()) else {
            return Ok(None);
        };

        if let Some(entry) = self.data.targets.get(name) {
            let project = self.project_on_cluster(
                name,
                &entry.cluster,
                &entry.project_id,
                entry.name.as_deref(),
            )?;
            info!(
                event = "core.target.resolved",
                target = name,
                project_id = project.id(),
                cluster = project.cluster().name()
            );
            return Ok(Some(ResolvedTarget::new(Some(name.to_string()), project)));
        }

        if let Some((cluster_name, project_id)) = name.split_once('/') {
            if cluster_name.is_empty() || project_id.is_empty() || project_id.contains('/') {
                return Err(TargetError::InvalidTarget {
                    target: name.to_string(),
                });
            }
            let project = self.project_on_cluster(name, cluster_name, project_id, None)?;
            info!(
                event = "core.target.resolved_literal",
                target = name,
                project_id = project.id(),
                cluster = project.cluster().name()
            );
            return Ok(Some(ResolvedTarget::new(None, project)));
        }

        debug!(event = "core.target.not_found", target = name);
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::ClusterClass;
    use crate::state::types::{ClusterEntry, TargetEntry};

    fn state() -> StateData {
        let mut data = StateData::default();
        data.clusters.insert(
            "shared-eu-west-1".to_string(),
            ClusterEntry {
                kind: ClusterClass::Shared,
                host: None,
            },
        );
        data.clusters.insert(
            "local".to_string(),
            ClusterEntry {
                kind: ClusterClass::Local,
                host: Some("http://localhost:60000".to_string()),
            },
        );
        data.targets.insert(
            "prod".to_string(),
            TargetEntry {
                cluster: "shared-eu-west-1".to_string(),
                project_id: "cj123".to_string(),
                name: Some("shop".to_string()),
            },
        );
        data.targets.insert(
            "dev".to_string(),
            TargetEntry {
                cluster: "local".to_string(),
                project_id: "cj456".to_string(),
                name: None,
            },
        );
        data.targets.insert(
            "orphan".to_string(),
            TargetEntry {
                cluster: "shared-us-west-2".to_string(),
                project_id: "cj789".to_string(),
                name: None,
            },
        );
        data
    }

    #[test]
    fn test_no_name_resolves_to_none() {
        let resolver = StateTargetResolver::new(&state());
        assert!(resolver.resolve(None).unwrap().is_none());
        assert!(resolver.resolve(Some("  ")).unwrap().is_none());
    }

    #[test]
    fn test_alias_resolves_to_project_and_cluster() {
        let resolver = StateTargetResolver::new(&state());

        let target = resolver.resolve(Some("prod")).unwrap().unwrap();

        assert_eq!(target.alias(), Some("prod"));
        assert_eq!(target.project().id(), "cj123");
        assert_eq!(target.project().name(), "shop");
        assert_eq!(target.cluster().name(), "shared-eu-west-1");
        assert!(target.cluster().is_hosted());
    }

    #[test]
    fn test_local_alias_keeps_local_class() {
        let resolver = StateTargetResolver::new(&state());

        let target = resolver.resolve(Some("dev")).unwrap().unwrap();

        assert!(!target.cluster().is_hosted());
        assert_eq!(target.project().name(), "cj456");
    }

    #[test]
    fn test_literal_target_resolves() {
        let resolver = StateTargetResolver::new(&state());

        let target = resolver
            .resolve(Some("shared-eu-west-1/cjabc"))
            .unwrap()
            .unwrap();

        assert!(target.alias().is_none());
        assert_eq!(target.project().id(), "cjabc");
        assert!(target.cluster().is_hosted());
    }

    #[test]
    fn test_default_target_is_ignored_without_name() {
        let mut data = state();
        data.default_target = Some("prod".to_string());
        let resolver = StateTargetResolver::new(&data);

        assert!(resolver.resolve(None).unwrap().is_none());
    }

    #[test]
    fn test_unknown_name_resolves_to_none() {
        let resolver = StateTargetResolver::new(&state());
        assert!(resolver.resolve(Some("nope")).unwrap().is_none());
    }

    #[test]
    fn test_alias_with_unknown_cluster_is_error() {
        let resolver = StateTargetResolver::new(&state());
        let result = resolver.resolve(Some("orphan"));
        assert!(matches!(
            result,
            Err(TargetError::UnknownCluster { ref cluster, .. }) if cluster == "shared-us-west-2"
        ));
    }

    #[test]
    fn test_malformed_literal_is_error() {
        let resolver = StateTargetResolver::new(&state());
        for target in ["/cj123", "shared-eu-west-1/", "a/b/c"] {
            assert!(
                matches!(
                    resolver.resolve(Some(target)),
                    Err(TargetError::InvalidTarget { .. })
                ),
                "expected InvalidTarget for {target}"
            );
        }
    }
}
