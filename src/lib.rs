//! Batch file renaming driven by paired glob patterns.
//!
//! A source glob is matched against each candidate name, recording the
//! substring every `*` and `?` consumed; the captures are then replayed
//! into a destination glob to synthesize each new name. Renames are
//! committed one attempt at a time with per-attempt outcome reporting
//! and no rollback of earlier successes.
//!
//! ```ignore
//! let renamed = globmv::Renamer::new().execute("*.txt", "*.bak")?;
//! ```

/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod commit;
pub mod error;
pub mod matcher;
pub mod rename;
pub mod resolve;
pub mod synthesize;
pub mod token;

pub use commit::{BatchCommitter, FileSystem, LocalFs, RenameOutcome};
pub use error::{AttemptFailure, Error, Result};
pub use matcher::{match_captures, CaptureResult};
pub use rename::{plan, plan_one, Renamer};
pub use resolve::{GlobResolver, PathResolver};
pub use synthesize::synthesize;
pub use token::{tokenize, GlobToken, WildcardCounts, WildcardKind};
