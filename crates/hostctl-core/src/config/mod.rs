//! # Configuration System
//!
//! Hierarchical TOML configuration system for hostctl.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.hostctl/config.toml` (global user preferences)
//! 3. **Project config** - `./.hostctl/config.toml` (project-specific overrides)
//! 4. **Environment** - `HOSTCTL_API_ENDPOINT` and `HOSTCTL_TOKEN`
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.hostctl/config.toml
//! [api]
//! endpoint = "https://api.hostctl.dev"
//! token = "hc_0123456789"
//! ```
//!
//! ```rust,no_run
//! use hostctl_core::config::HostctlConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HostctlConfig::load_hierarchy()?;
//!     println!("{}", config.api.endpoint());
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;

pub use loading::validate_config;
pub use types::{ApiConfig, HostctlConfig};

impl HostctlConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, crate::errors::ConfigError> {
        loading::load_hierarchy()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), crate::errors::ConfigError> {
        validate_config(self)
    }
}
