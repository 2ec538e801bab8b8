//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.hostctl/config.toml` (global user preferences)
//! 3. **Project config** - `./.hostctl/config.toml` (project-specific overrides)
//! 4. **Environment** - `HOSTCTL_API_ENDPOINT`, `HOSTCTL_TOKEN`

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::defaults::{CONFIG_DIR, CONFIG_FILE, ENDPOINT_ENV, TOKEN_ENV};
use crate::config::types::{ApiConfig, HostctlConfig};
use crate::errors::ConfigError;

/// Load configuration from the hierarchy of config files and the environment.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed, or
/// if validation of the merged result fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<HostctlConfig, ConfigError> {
    let mut config = HostctlConfig::default();

    if let Some(home_dir) = dirs::home_dir() {
        let user_path = home_dir.join(CONFIG_DIR).join(CONFIG_FILE);
        if let Some(user_config) = load_config_file(&user_path)? {
            config = merge_configs(config, user_config);
        }
    }

    let project_path = std::env::current_dir()?.join(CONFIG_DIR).join(CONFIG_FILE);
    if let Some(project_config) = load_config_file(&project_path)? {
        config = merge_configs(config, project_config);
    }

    let config = apply_env_overrides(config, |key| std::env::var(key).ok());

    validate_config(&config)?;

    Ok(config)
}

/// Load a configuration file, returning `None` if it does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<HostctlConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!(event = "core.config.file_not_found", path = %path.display());
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    debug!(event = "core.config.file_loaded", path = %path.display());

    Ok(Some(config))
}

/// Merge two configurations, with override_config taking precedence.
///
/// Override values replace base values only if present.
pub fn merge_configs(base: HostctlConfig, override_config: HostctlConfig) -> HostctlConfig {
    HostctlConfig {
        api: ApiConfig {
            endpoint: override_config.api.endpoint.or(base.api.endpoint),
            token: override_config.api.token.or(base.api.token),
            timeout_secs: override_config.api.timeout_secs.or(base.api.timeout_secs),
        },
    }
}

/// Apply environment overrides. Empty values are ignored.
pub fn apply_env_overrides<F>(mut config: HostctlConfig, lookup: F) -> HostctlConfig
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

    if let Some(endpoint) = non_empty(ENDPOINT_ENV) {
        config.api.endpoint = Some(endpoint);
    }
    if let Some(token) = non_empty(TOKEN_ENV) {
        config.api.token = Some(token);
    }

    config
}

/// Validate the merged configuration.
pub fn validate_config(config: &HostctlConfig) -> Result<(), ConfigError> {
    let endpoint = config.api.endpoint();
    if endpoint.trim().is_empty() {
        return Err(ConfigError::InvalidConfiguration {
            message: "api.endpoint cannot be empty".to_string(),
        });
    }
    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        return Err(ConfigError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
        });
    }
    if config.api.timeout_secs() == 0 {
        return Err(ConfigError::InvalidConfiguration {
            message: "api.timeout_secs must be greater than 0".to_string(),
        });
    }
    Ok(())
}
