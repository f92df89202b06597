//! Startup error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Every variant here is fatal: boot aborts and the error surfaces as a thrown
//! JS error. Navigation itself never fails; unknown paths are handled by the
//! guard's redirect policy instead of an error.

use crate::plugins::Capability;

/// Invalid static configuration detected while assembling the application.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("duplicate route path: {path}")]
    DuplicatePath { path: String },
    #[error("route path must start with '/': {path:?}")]
    InvalidPath { path: String },
    #[error("route table has no entry view bound at '/'")]
    MissingFallback,
    #[error("capability registered twice: {0}")]
    DuplicateCapability(Capability),
    #[error("{required_by} requires the {capability} capability, which was never registered")]
    MissingCapability { capability: Capability, required_by: &'static str },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Failure while creating or mounting the application root.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BootError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("an application instance already exists")]
    AlreadyCreated,
    #[error("mount target not found: {selector}")]
    MountTargetMissing { selector: String },
}
