use std::path::PathBuf;
use thiserror::Error;

/// Errors that can stop a batch before the per-file loop starts.
///
/// Per-file failures never show up here: the rewriter folds them into
/// [`crate::Outcome::Errored`] so one bad file cannot abort the rest of
/// the tree.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// The root path is missing or not a directory
    #[error("'{path}' does not exist or is not a directory.\n\nTip: pass the root of the sketch collection, e.g. `wayaku 01_P`")]
    InvalidRoot { path: PathBuf },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for batch translation operations
pub type Result<T> = std::result::Result<T, TranslateError>;
