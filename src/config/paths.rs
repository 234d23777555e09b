//! Search-path candidates for the configuration file.

use std::path::{Path, PathBuf};
use tracing::debug;

/// Relative name of the project-level configuration file.
pub const PROJECT_CONFIG_FILE: &str = "config.yml";

/// User-level configuration path, relative to the home directory.
pub const USER_CONFIG_FILE: &str = ".config/activist/config.yml";

/// System-wide configuration path.
pub const SYSTEM_CONFIG_FILE: &str = "/etc/activist/config.yml";

/// Ordered list of candidate configuration file locations.
///
/// Candidates are probed in order; the first one that exists on disk is
/// the file that gets loaded.
#[derive(Debug, Clone)]
pub struct SearchPaths {
    candidates: Vec<PathBuf>,
}

impl Default for SearchPaths {
    fn default() -> Self {
        Self::discover()
    }
}

impl SearchPaths {
    /// Build the fixed candidate list: project, then user, then system.
    ///
    /// The user candidate is skipped when the home directory cannot be
    /// determined.
    pub fn discover() -> Self {
        let mut candidates = vec![PathBuf::from(PROJECT_CONFIG_FILE)];

        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join(USER_CONFIG_FILE));
        }

        candidates.push(PathBuf::from(SYSTEM_CONFIG_FILE));

        Self { candidates }
    }

    /// Create a search list with explicit candidates.
    pub fn with_candidates(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// The candidates in precedence order.
    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }

    /// Find the first candidate that exists on disk.
    pub fn first_existing(&self) -> Option<&Path> {
        for candidate in &self.candidates {
            debug!("checking for config file at {}", candidate.display());
            if candidate.exists() {
                return Some(candidate);
            }
        }
        None
    }
}
