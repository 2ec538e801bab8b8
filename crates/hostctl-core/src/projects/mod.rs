pub mod types;

pub use types::{Cluster, ClusterClass, Project};
