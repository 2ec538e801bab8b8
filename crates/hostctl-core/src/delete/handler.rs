use tracing::{info, warn};

use super::errors::DeletionError;
use super::traits::Interaction;
use super::types::DeletionOutcome;
use super::workflow::DeletionWorkflow;
use crate::client::HttpProjectClient;
use crate::config::HostctlConfig;
use crate::state::{FileState, StateTargetResolver};

/// Delete a named target, or an interactively selected batch, against the
/// hosted API and reconcile the local state file.
///
/// Building the API client is the authentication check: without a token
/// nothing is resolved, prompted or deleted.
pub fn delete_projects(
    config: &HostctlConfig,
    target: Option<&str>,
    force: bool,
    interaction: &mut dyn Interaction,
) -> Result<DeletionOutcome, DeletionError> {
    info!(event = "core.delete.handler_started", target = ?target, force = force);

    let client = HttpProjectClient::from_config(&config.api)?;
    let mut state = FileState::load();
    run_with_state(&client, &mut state, target, force, interaction)
}

fn run_with_state(
    client: &HttpProjectClient,
    state: &mut FileState,
    target: Option<&str>,
    force: bool,
    interaction: &mut dyn Interaction,
) -> Result<DeletionOutcome, DeletionError> {
    if let Some(message) = state.load_error() {
        warn!(
            event = "core.delete.state_load_failed",
            path = %state.path().display(),
            error = message
        );
        interaction.error(&format!(
            "Warning: could not read {}: {}",
            state.path().display(),
            message
        ));
    }

    let resolver = StateTargetResolver::new(state.data());
    DeletionWorkflow::new(&resolver, client, state, interaction).run(target, force)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientError;
    use crate::config::ApiConfig;
    use crate::delete::errors::InteractionError;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Default)]
    struct Recorder {
        errors: Vec<String>,
        prompts: usize,
    }

    impl Interaction for Recorder {
        fn confirm(&mut self, _prompt: &str, default: &str) -> Result<String, InteractionError> {
            self.prompts += 1;
            Ok(default.to_string())
        }

        fn select_many(
            &mut self,
            _prompt: &str,
            _items: &[String],
            _page_size: usize,
        ) -> Result<Vec<usize>, InteractionError> {
            self.prompts += 1;
            Ok(Vec::new())
        }

        fn terminal_rows(&self) -> Option<usize> {
            None
        }

        fn report_start(&mut self, _message: &str) {}

        fn report_done(&mut self) {}

        fn log(&mut self, _message: &str) {}

        fn error(&mut self, message: &str) {
            self.errors.push(message.to_string());
        }

        fn terminate(&mut self, _code: i32) {}
    }

    fn offline_client() -> HttpProjectClient {
        let api = ApiConfig {
            endpoint: Some("http://127.0.0.1:9".to_string()),
            token: Some("secret".to_string()),
            timeout_secs: Some(1),
        };
        HttpProjectClient::from_config(&api).unwrap()
    }

    #[test]
    fn test_missing_token_fails_before_prompting() {
        let mut recorder = Recorder::default();
        let config = HostctlConfig::default();

        let result = delete_projects(&config, Some("anything"), false, &mut recorder);

        assert!(matches!(
            result,
            Err(DeletionError::Client(ClientError::NotAuthenticated))
        ));
        assert_eq!(recorder.prompts, 0);
        assert!(recorder.errors.is_empty());
    }

    #[test]
    fn test_local_target_is_blocked_from_state_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        let contents = r#"{
            "clusters": { "local": { "kind": "local" } },
            "targets": { "dev": { "cluster": "local", "project_id": "cj1" } }
        }"#;
        fs::write(&path, contents).unwrap();

        let mut state = FileState::open(&path);
        let mut recorder = Recorder::default();

        let outcome =
            run_with_state(&offline_client(), &mut state, Some("dev"), true, &mut recorder)
                .unwrap();

        assert_eq!(
            outcome,
            DeletionOutcome::Blocked {
                cluster: "local".to_string()
            }
        );
        assert_eq!(recorder.errors.len(), 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), contents);
    }

    #[test]
    fn test_corrupted_state_is_reported() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("state.json");
        fs::write(&path, "{not json").unwrap();

        let mut state = FileState::open(&path);
        let mut recorder = Recorder::default();

        // No target resolves, so the run lists remote projects and fails offline.
        let result = run_with_state(&offline_client(), &mut state, None, false, &mut recorder);

        assert!(matches!(result, Err(DeletionError::Client(_))));
        assert!(recorder.errors[0].starts_with("Warning: could not read"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{not json");
    }
}
