//! Candidate resolution.
//!
//! Turns a source glob into the concrete list of existing paths the
//! rename batch will operate on.

use crate::error::Result;

/// Resolves a glob pattern into candidate path names.
///
/// The production implementation walks the filesystem; tests substitute
/// a canned resolver.
pub trait PathResolver {
    fn resolve(&self, pattern: &str) -> Result<Vec<String>>;
}

/// Filesystem-backed resolver built on the `glob` crate.
pub struct GlobResolver;

impl PathResolver for GlobResolver {
    fn resolve(&self, pattern: &str) -> Result<Vec<String>> {
        let mut matches = Vec::new();
        // Unreadable entries surface as per-path errors; skip them
        // rather than failing the whole batch.
        for path in glob::glob(pattern)?.flatten() {
            matches.push(path.to_string_lossy().into_owned());
        }
        matches.sort();
        Ok(matches)
    }
}
