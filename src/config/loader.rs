//! Configuration document loading and the process-wide handle.

use super::paths::SearchPaths;
use super::resolve::resolve;
use crate::error::{ConfigError, ConfigResult};
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use tracing::info;

/// Sentinel returned by [`Config::get`] when resolution misses.
static NULL: Value = Value::Null;

/// A loaded configuration document and the file it came from.
///
/// The document is parsed once at construction and never mutated; handles
/// can be shared freely across threads after loading.
#[derive(Debug, Clone)]
pub struct Config {
    document: Value,
    source: PathBuf,
}

impl Config {
    /// Load from the first existing candidate in the default search paths.
    pub fn load() -> ConfigResult<Self> {
        Self::load_with_paths(&SearchPaths::discover())
    }

    /// Load from the first existing candidate in an explicit search list.
    ///
    /// Fails with [`ConfigError::NotFound`] when no candidate exists.
    pub fn load_with_paths(paths: &SearchPaths) -> ConfigResult<Self> {
        let path = paths.first_existing().ok_or(ConfigError::NotFound)?;
        Self::load_from(path)
    }

    /// Load one explicit file, bypassing the search.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document = serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!("loaded configuration from {}", path.display());
        Ok(Self {
            document,
            source: path.to_path_buf(),
        })
    }

    /// The parsed document root.
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// The file this configuration was loaded from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Resolve a dotted key path, `None` on any miss.
    pub fn resolve(&self, path: &str) -> Option<&Value> {
        resolve(&self.document, path)
    }

    /// Resolve a dotted key path, null sentinel on any miss.
    ///
    /// Missing keys, non-mapping values mid-path, and explicit nulls all
    /// yield `Value::Null`; none of them are errors.
    pub fn get(&self, path: &str) -> &Value {
        self.resolve(path).unwrap_or(&NULL)
    }

    /// Resolve a dotted key path, falling back to `default` on any miss.
    pub fn get_or<'a>(&'a self, path: &str, default: &'a Value) -> &'a Value {
        self.resolve(path).unwrap_or(default)
    }

    /// Resolve a path to a string value.
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.resolve(path).and_then(Value::as_str)
    }

    /// Resolve a path to a boolean value.
    pub fn get_bool(&self, path: &str) -> Option<bool> {
        self.resolve(path).and_then(Value::as_bool)
    }

    /// Resolve a path to an unsigned integer value.
    pub fn get_u64(&self, path: &str) -> Option<u64> {
        self.resolve(path).and_then(Value::as_u64)
    }

    /// Resolve a path to a signed integer value.
    pub fn get_i64(&self, path: &str) -> Option<i64> {
        self.resolve(path).and_then(Value::as_i64)
    }
}

/// Process-scoped configuration cell: loads at most once, retries while
/// unloaded.
///
/// First-time initialization is serialized behind a mutex so concurrent
/// callers cannot run duplicate loads. A failed load leaves the cell
/// empty; the next access re-runs the search. Once a load succeeds, every
/// access returns the same cached document without touching the
/// filesystem again.
#[derive(Debug, Default)]
pub struct ConfigCell {
    loaded: OnceLock<Config>,
    init: Mutex<()>,
}

impl ConfigCell {
    /// Create an empty cell. Usable in a `static`.
    pub const fn new() -> Self {
        Self {
            loaded: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// The cached configuration, if a load has succeeded.
    pub fn get(&self) -> Option<&Config> {
        self.loaded.get()
    }

    /// Return the cached configuration, loading it on first access.
    pub fn get_or_load(&self, paths: &SearchPaths) -> ConfigResult<&Config> {
        if let Some(config) = self.loaded.get() {
            return Ok(config);
        }

        // First-time initialization is serialized; re-check once the lock
        // is held. A poisoned lock carries no state worth rejecting.
        let _guard = self.init.lock().unwrap_or_else(|e| e.into_inner());
        if let Some(config) = self.loaded.get() {
            return Ok(config);
        }

        let config = Config::load_with_paths(paths)?;
        Ok(self.loaded.get_or_init(|| config))
    }
}

static GLOBAL: ConfigCell = ConfigCell::new();

/// The process-wide configuration, loaded from the default search paths
/// on first access.
pub fn global() -> ConfigResult<&'static Config> {
    GLOBAL.get_or_load(&SearchPaths::discover())
}
