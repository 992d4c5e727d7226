pub mod block;
pub mod error;
pub mod report;
pub mod rewrite;
pub mod rules;
pub mod scan;

use std::path::PathBuf;

// Re-export commonly used types
pub use block::{contains_japanese, extract, DocBlock};
pub use error::{Result, TranslateError};
pub use report::{BatchReport, FileOutcome, Outcome};
pub use rewrite::FileRewriter;
pub use rules::{rule_table, RuleEngine, TranslationRule};
pub use scan::{basename_is, walk};

/// Parameters for one batch translation pass
#[derive(Debug, Clone)]
pub struct BatchQuery {
    pub root: PathBuf,
    pub file_name: String,
    pub dry_run: bool,
}

impl BatchQuery {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file_name: "sketch.js".to_string(),
            dry_run: false,
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Main orchestrator function that runs the whole translation batch
///
/// This function:
/// 1. Validates the root directory (the only fatal precondition)
/// 2. Walks the tree for files matching the configured basename
/// 3. Runs each candidate through the rewriter, strictly one at a time,
///    in walker order
/// 4. Returns a BatchReport with every per-file outcome
///
/// A file that fails to read or write is recorded as errored and the
/// batch moves on; re-running over an unchanged tree is a no-op.
#[must_use = "this function returns a Result that should be handled"]
pub fn run_batch(query: &BatchQuery) -> Result<BatchReport> {
    if !query.root.is_dir() {
        return Err(TranslateError::InvalidRoot {
            path: query.root.clone(),
        });
    }

    let rewriter = FileRewriter::new().dry_run(query.dry_run);
    let mut report = BatchReport::new();

    for path in scan::walk(&query.root, scan::basename_is(&query.file_name)) {
        let outcome = rewriter.process(&path);
        report.record(path, outcome);
    }

    Ok(report)
}
