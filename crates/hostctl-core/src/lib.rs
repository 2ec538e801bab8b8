//! hostctl-core: Core library for managing hosted service deployments
//!
//! This library provides the business logic behind the `hostctl` CLI: it
//! resolves deletion targets from local state, talks to the hosted API and
//! keeps the local state file in sync afterwards.
//!
//! # Main Entry Points
//!
//! - [`delete`] - Resolve targets and delete projects in a batch
//! - [`client`] - Hosted API client (list and delete projects)
//! - [`state`] - Locally tracked targets and clusters
//! - [`config`] - Configuration management

pub mod client;
pub mod config;
pub mod delete;
pub mod errors;
pub mod events;
pub mod logging;
pub mod projects;
pub mod state;

// Re-export commonly used types at crate root for convenience
pub use client::{ClientError, HttpProjectClient};
pub use config::HostctlConfig;
pub use delete::{
    DeletionError, DeletionOutcome, DeletionRequest, DeletionWorkflow, Interaction,
    InteractionError, LocalState, ProjectClient, ResolvedTarget, TargetResolver,
};
pub use errors::HostctlError;
pub use projects::{Cluster, ClusterClass, Project};
pub use state::{FileState, StateData, StateError, StateTargetResolver, TargetError};

// Re-export handler modules as the primary API
pub use delete::handler as delete_ops;

// Re-export logging initialization
pub use logging::init_logging;
