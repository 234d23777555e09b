//! Configuration access layer for activist automation tooling.
//!
//! Locates a YAML settings file among fixed candidate paths, parses it
//! once per process, and resolves dot-separated key paths with default
//! fallback. Exposed both as a library and through the `activist-config`
//! inspection binary.

pub mod cli;
pub mod config;
pub mod error;
pub mod lookup;

pub use config::{Config, ConfigCell, SearchPaths, global};
pub use error::{ConfigError, ConfigResult};
