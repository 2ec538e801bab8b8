use tracing::warn;

use hostctl_core::HostctlConfig;

/// Load the config hierarchy, falling back to defaults with a warning.
pub fn load_config_with_warning() -> HostctlConfig {
    match HostctlConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.hostctl/config.toml and ./.hostctl/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            HostctlConfig::default()
        }
    }
}
