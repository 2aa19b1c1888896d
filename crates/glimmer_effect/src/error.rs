//! Glimmer effect error types

use std::io;
use thiserror::Error;

/// Errors that can occur when applying a glimmer effect
#[derive(Error, Debug)]
pub enum GlimmerError {
    /// The target does not support style-property assignment
    #[error("A valid style target element is required, got {found}")]
    InvalidArgument { found: &'static str },

    /// The target element is already borrowed elsewhere
    #[error("The style target is in use and cannot be modified")]
    TargetBusy,

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors that can occur when loading a `GlimmerConfig`
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error when reading the file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for glimmer operations
pub type Result<T> = std::result::Result<T, GlimmerError>;
