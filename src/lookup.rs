//! Host-integration adapter.
//!
//! Orchestration hosts hand this layer a list of positional terms and
//! expect a single-element result list back. The adapter resolves the
//! first term as a dotted key path; everything else is the host's
//! plugin plumbing and stays outside this crate.

use crate::config::{Config, global};
use crate::error::{ConfigError, ConfigResult};
use serde_yaml::Value;

/// Resolve the first term against the given configuration handle.
///
/// Returns a one-element list containing the resolved value, or the null
/// sentinel when the key misses. Missing keys are not errors; an empty
/// term list is.
pub fn run(config: &Config, terms: &[String]) -> ConfigResult<Vec<Value>> {
    let term = terms.first().ok_or(ConfigError::MissingTerm)?;
    Ok(vec![config.get(term).clone()])
}

/// [`run`] over the process-wide configuration.
pub fn run_global(terms: &[String]) -> ConfigResult<Vec<Value>> {
    run(global()?, terms)
}
