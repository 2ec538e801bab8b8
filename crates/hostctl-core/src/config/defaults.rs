//! Built-in fallback values for configuration.

/// Hosted API used when no endpoint is configured.
pub const DEFAULT_API_ENDPOINT: &str = "https://api.hostctl.dev";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Name of the per-user and per-project config directory.
pub const CONFIG_DIR: &str = ".hostctl";

/// Name of the config file inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the API endpoint.
pub const ENDPOINT_ENV: &str = "HOSTCTL_API_ENDPOINT";

/// Environment variable overriding the API token.
pub const TOKEN_ENV: &str = "HOSTCTL_TOKEN";
