//! Error types for configuration loading and lookup.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while locating, reading, or querying configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// None of the search-path candidates exist on disk.
    #[error("no configuration file found")]
    NotFound,

    /// A candidate file exists but could not be read.
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A candidate file was read but is not valid YAML.
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The lookup adapter was invoked without a key term.
    #[error("lookup requires at least one key term")]
    MissingTerm,
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
