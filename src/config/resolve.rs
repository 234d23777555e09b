//! Dotted-path resolution over a YAML document.
//!
//! A key like `database.host` descends one mapping level per segment.
//! Resolution never fails: any miss degrades to `None` and callers
//! substitute their default.

use serde_yaml::Value;

/// Resolve a dot-separated key path against a YAML value tree.
///
/// Returns `None` when any segment hits a non-mapping value, is absent
/// from the current mapping, or resolves to an explicit YAML `null`.
/// An explicit `null` in the document is indistinguishable from a
/// missing key under this contract.
pub fn resolve<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = doc;
    for segment in path.split('.') {
        // `Value::get` with a string index only matches inside mappings,
        // so a non-mapping mid-path is the same miss as an absent key.
        match current.get(segment) {
            Some(next) if !next.is_null() => current = next,
            _ => return None,
        }
    }
    Some(current)
}
