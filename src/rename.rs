//! Rename orchestration.
//!
//! Validates the glob pair, plans new names for a batch of candidates,
//! and drives the committer over the plan. Candidate discovery and the
//! rename primitives are injected collaborators so tests can substitute
//! doubles.

use crate::commit::{BatchCommitter, FileSystem, LocalFs};
use crate::error::{AttemptFailure, Error, Result};
use crate::matcher::match_captures;
use crate::resolve::{GlobResolver, PathResolver};
use crate::synthesize::synthesize;
use crate::token::{tokenize, WildcardCounts, WildcardKind};

/// Compute the new name for every candidate in `names`.
///
/// Each entry of the returned list is the synthesized name, or the
/// empty string when the candidate does not match `src_glob`. Fails
/// before any matching when either glob is empty, when `names` is
/// empty, or when the destination template demands more wildcard slots
/// than the source can capture.
pub fn plan<S: AsRef<str>>(names: &[S], src_glob: &str, dst_glob: &str) -> Result<Vec<String>> {
    if src_glob.is_empty() {
        return Err(Error::invalid_argument("source glob must not be empty"));
    }
    if dst_glob.is_empty() {
        return Err(Error::invalid_argument("destination glob must not be empty"));
    }
    if names.is_empty() {
        return Err(Error::invalid_argument(
            "at least one candidate name is required",
        ));
    }

    let src_tokens = tokenize(src_glob, true);
    let dst_tokens = tokenize(dst_glob, false);

    let available = WildcardCounts::of(&src_tokens);
    let wanted = WildcardCounts::of(&dst_tokens);
    if wanted.stars > available.stars {
        return Err(Error::WildcardCountMismatch {
            kind: WildcardKind::Star,
            wanted: wanted.stars,
            available: available.stars,
        });
    }
    if wanted.questions > available.questions {
        return Err(Error::WildcardCountMismatch {
            kind: WildcardKind::Question,
            wanted: wanted.questions,
            available: available.questions,
        });
    }

    Ok(names
        .iter()
        .map(|name| match match_captures(&src_tokens, name.as_ref()) {
            Some(captures) => synthesize(&dst_tokens, &captures),
            None => String::new(),
        })
        .collect())
}

/// Single-candidate convenience over [`plan`].
pub fn plan_one(name: &str, src_glob: &str, dst_glob: &str) -> Result<String> {
    let mut names = plan(&[name], src_glob, dst_glob)?;
    Ok(names.remove(0))
}

/// Drives a whole rename batch from glob pair to committed renames.
pub struct Renamer<R: PathResolver = GlobResolver, F: FileSystem = LocalFs> {
    resolver: R,
    committer: BatchCommitter<F>,
}

impl Renamer<GlobResolver, LocalFs> {
    pub fn new() -> Self {
        Self {
            resolver: GlobResolver,
            committer: BatchCommitter::new(),
        }
    }
}

impl Default for Renamer<GlobResolver, LocalFs> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: PathResolver, F: FileSystem> Renamer<R, F> {
    pub fn with_parts(resolver: R, committer: BatchCommitter<F>) -> Self {
        Self {
            resolver,
            committer,
        }
    }

    /// Resolve, plan, and commit. Returns `None` when the source glob
    /// matched nothing (no filesystem mutation is attempted), otherwise
    /// the count of successful renames.
    pub fn execute(&self, src_glob: &str, dst_glob: &str) -> Result<Option<usize>> {
        self.execute_with(src_glob, dst_glob, |_, _, _, _| {})
    }

    /// Like [`execute`](Self::execute), invoking `on_attempt` once per
    /// committed attempt with `(error, old_name, new_name, index)`.
    ///
    /// Candidates that do not match the source glob synthesize to the
    /// empty string and are never submitted to the committer.
    pub fn execute_with<H>(
        &self,
        src_glob: &str,
        dst_glob: &str,
        on_attempt: H,
    ) -> Result<Option<usize>>
    where
        H: FnMut(Option<&Error>, &str, &str, usize),
    {
        let names = self.resolver.resolve(src_glob)?;
        if names.is_empty() {
            return Ok(None);
        }

        let new_names = plan(&names, src_glob, dst_glob)?;
        let (old, new): (Vec<String>, Vec<String>) = names
            .into_iter()
            .zip(new_names)
            .filter(|(_, new_name)| !new_name.is_empty())
            .unzip();

        let outcomes = self.committer.commit_with(&old, &new, on_attempt);
        Ok(Some(
            outcomes.iter().filter(|outcome| outcome.succeeded).count(),
        ))
    }

    /// Deferred-completion variant of [`execute`](Self::execute).
    ///
    /// Performs the identical sequential work; no concurrency is
    /// introduced. Resolves to the success count only when every
    /// submitted attempt succeeded; otherwise fails with
    /// [`Error::Batch`] carrying the failed attempts in order. A batch
    /// failure never implies the successful attempts were undone.
    pub async fn execute_async(&self, src_glob: &str, dst_glob: &str) -> Result<Option<usize>> {
        let mut failures = Vec::new();
        let succeeded = self.execute_with(src_glob, dst_glob, |err, old_name, new_name, index| {
            if let Some(err) = err {
                failures.push(AttemptFailure::new(index, old_name, new_name, err));
            }
        })?;

        match succeeded {
            None => Ok(None),
            Some(count) if failures.is_empty() => Ok(Some(count)),
            Some(count) => {
                let total = count + failures.len();
                Err(Error::Batch(failures, total))
            }
        }
    }
}
