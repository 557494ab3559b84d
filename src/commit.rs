//! Batch commit.
//!
//! Applies one rename attempt per (old, new) pair against the
//! filesystem. Attempts are independent: a failure is recorded and the
//! loop moves on, and earlier successes are never rolled back.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::Error;

/// Filesystem primitives the committer needs - local or a test double.
pub trait FileSystem {
    fn exists(&self, path: &Path) -> bool;
    fn rename(&self, from: &Path, to: &Path) -> std::io::Result<()>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> std::io::Result<()> {
        (**self).rename(from, to)
    }
}

/// Local filesystem implementation.
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFs {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn rename(&self, from: &Path, to: &Path) -> std::io::Result<()> {
        fs::rename(from, to)
    }
}

/// Result of one attempt in a batch.
#[derive(Debug, Clone, Serialize)]
pub struct RenameOutcome {
    pub index: usize,
    pub succeeded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<&'static str>,
}

/// Executes rename batches one attempt at a time, in input order.
pub struct BatchCommitter<F: FileSystem = LocalFs> {
    fs: F,
}

impl BatchCommitter<LocalFs> {
    pub fn new() -> Self {
        Self { fs: LocalFs::new() }
    }
}

impl Default for BatchCommitter<LocalFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FileSystem> BatchCommitter<F> {
    pub fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Apply the batch and return the indices that succeeded.
    pub fn commit(&self, old_names: &[String], new_names: &[String]) -> Vec<usize> {
        self.commit_with(old_names, new_names, |_, _, _, _| {})
            .iter()
            .filter(|outcome| outcome.succeeded)
            .map(|outcome| outcome.index)
            .collect()
    }

    /// Apply the batch, invoking `on_attempt` once per index with
    /// `(error, old_name, new_name, index)` regardless of outcome.
    ///
    /// A destination that already exists is skipped without touching
    /// the filesystem. A failed rename records the underlying cause.
    /// The loop never stops early and no attempt is retried; the
    /// returned list always has one outcome per input index.
    pub fn commit_with<H>(
        &self,
        old_names: &[String],
        new_names: &[String],
        mut on_attempt: H,
    ) -> Vec<RenameOutcome>
    where
        H: FnMut(Option<&Error>, &str, &str, usize),
    {
        let mut outcomes = Vec::with_capacity(old_names.len());

        for (index, (old_name, new_name)) in old_names.iter().zip(new_names).enumerate() {
            match self.attempt(old_name, new_name) {
                Ok(()) => {
                    log_status!("rename", "{} -> {}", old_name, new_name);
                    on_attempt(None, old_name, new_name, index);
                    outcomes.push(RenameOutcome {
                        index,
                        succeeded: true,
                        error_code: None,
                    });
                }
                Err(err) => {
                    log_status!("rename", "skipped {}: {}", old_name, err);
                    on_attempt(Some(&err), old_name, new_name, index);
                    outcomes.push(RenameOutcome {
                        index,
                        succeeded: false,
                        error_code: Some(err.code()),
                    });
                }
            }
        }

        outcomes
    }

    fn attempt(&self, old_name: &str, new_name: &str) -> Result<(), Error> {
        let to = Path::new(new_name);
        if self.fs.exists(to) {
            return Err(Error::AlreadyExists {
                path: new_name.to_string(),
            });
        }

        self.fs
            .rename(Path::new(old_name), to)
            .map_err(|source| Error::Rename {
                from: old_name.to_string(),
                to: new_name.to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn path_str(dir: &tempfile::TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().into_owned()
    }

    #[test]
    fn renames_every_pair_in_order() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a"), "1").unwrap();
        fs::write(dir.path().join("b"), "2").unwrap();

        let old = vec![path_str(&dir, "a"), path_str(&dir, "b")];
        let new = vec![path_str(&dir, "x"), path_str(&dir, "y")];

        let succeeded = BatchCommitter::new().commit(&old, &new);
        assert_eq!(succeeded, vec![0, 1]);
        assert!(dir.path().join("x").exists());
        assert!(dir.path().join("y").exists());
        assert!(!dir.path().join("a").exists());
    }

    #[test]
    fn existing_destination_is_skipped_untouched() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a"), "from").unwrap();
        fs::write(dir.path().join("b"), "kept").unwrap();

        let old = vec![path_str(&dir, "a")];
        let new = vec![path_str(&dir, "b")];

        let succeeded = BatchCommitter::new().commit(&old, &new);
        assert!(succeeded.is_empty());
        assert_eq!(fs::read_to_string(dir.path().join("a")).unwrap(), "from");
        assert_eq!(fs::read_to_string(dir.path().join("b")).unwrap(), "kept");
    }

    #[test]
    fn failure_does_not_stop_later_attempts() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("real"), "").unwrap();

        let old = vec![path_str(&dir, "missing"), path_str(&dir, "real")];
        let new = vec![path_str(&dir, "m2"), path_str(&dir, "r2")];

        let outcomes = BatchCommitter::new().commit_with(&old, &new, |_, _, _, _| {});
        assert_eq!(outcomes.len(), 2);
        assert!(!outcomes[0].succeeded);
        assert_eq!(outcomes[0].error_code, Some("RENAME_FAILED"));
        assert!(outcomes[1].succeeded);
        assert!(dir.path().join("r2").exists());
    }

    #[test]
    fn callback_fires_for_every_index() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a"), "").unwrap();
        fs::write(dir.path().join("taken"), "").unwrap();

        let old = vec![path_str(&dir, "a"), path_str(&dir, "nope")];
        let new = vec![path_str(&dir, "taken"), path_str(&dir, "n2")];

        let mut seen = Vec::new();
        BatchCommitter::new().commit_with(&old, &new, |err, old_name, _, index| {
            seen.push((index, err.map(Error::code), old_name.to_string()));
        });

        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0].0, 0);
        assert_eq!(seen[0].1, Some("ALREADY_EXISTS"));
        assert_eq!(seen[1].1, Some("RENAME_FAILED"));
    }

    #[test]
    fn outcomes_serialize_for_reporting() {
        let outcome = RenameOutcome {
            index: 3,
            succeeded: false,
            error_code: Some("ALREADY_EXISTS"),
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"error_code\":\"ALREADY_EXISTS\""));
    }
}
