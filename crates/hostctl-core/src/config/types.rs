//! Configuration type definitions for hostctl.
//!
//! These types are serialized/deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [api]
//! endpoint = "https://api.hostctl.dev"
//! token = "hc_0123456789"
//! timeout_secs = 30
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.hostctl/config.toml`
/// 2. Project config: `./.hostctl/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HostctlConfig {
    /// Hosted API settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// Hosted API configuration.
///
/// Every field is optional so that a project config can override a single
/// value without clobbering the rest of the user config.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    /// Base URL of the hosted API.
    /// Default: `https://api.hostctl.dev`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Access token sent as a bearer token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Request timeout in seconds.
    /// Default: 30 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ApiConfig {
    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .unwrap_or(super::defaults::DEFAULT_API_ENDPOINT)
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
            .unwrap_or(super::defaults::DEFAULT_TIMEOUT_SECS)
    }

    /// The configured token, ignoring blank values.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|t| !t.trim().is_empty())
    }
}
