//! Locally tracked clusters and targets (`~/.hostctl/state.json`).

pub mod errors;
pub mod persistence;
pub mod resolver;
pub mod store;
pub mod types;

pub use errors::{StateError, TargetError};
pub use persistence::{load_state, save_state, state_file_path};
pub use resolver::StateTargetResolver;
pub use store::FileState;
pub use types::{ClusterEntry, StateData, TargetEntry};
