//! Configuration loading and lookup.
//!
//! Locates a `config.yml` among fixed candidate locations, parses it once,
//! and resolves dot-separated key paths against the document:
//! 1. **Project** - `$CWD/config.yml`
//! 2. **User** - `~/.config/activist/config.yml`
//! 3. **System** - `/etc/activist/config.yml`
//!
//! The first existing candidate wins; there is no merging across tiers and
//! no reload after the first successful load.

mod loader;
mod paths;
mod resolve;

pub use loader::{Config, ConfigCell, global};
pub use paths::SearchPaths;
pub use resolve::resolve;
