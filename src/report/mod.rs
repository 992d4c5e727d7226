use std::fmt;
use std::path::PathBuf;

/// Per-file result of one batch pass. A closed set: every file ends up
/// in exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The block was translated and the file rewritten
    Changed,
    /// The file has no documentation block
    SkippedNoBlock,
    /// The block already contains Japanese characters
    SkippedAlreadyTranslated,
    /// The rules ran but produced identical text
    SkippedNoChange,
    /// Read or write failed; the batch continued
    Errored(String),
}

impl Outcome {
    pub fn is_skip(&self) -> bool {
        matches!(
            self,
            Outcome::SkippedNoBlock | Outcome::SkippedAlreadyTranslated | Outcome::SkippedNoChange
        )
    }

    /// Short label for per-file output.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Changed => "updated",
            Outcome::SkippedNoBlock => "no doc block",
            Outcome::SkippedAlreadyTranslated => "already translated",
            Outcome::SkippedNoChange => "unchanged",
            Outcome::Errored(_) => "error",
        }
    }
}

/// An outcome tied to the file it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub outcome: Outcome,
}

/// Accumulated per-file outcomes of one batch run, in walker order.
#[derive(Debug, Default)]
pub struct BatchReport {
    outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, path: PathBuf, outcome: Outcome) {
        self.outcomes.push(FileOutcome { path, outcome });
    }

    pub fn outcomes(&self) -> &[FileOutcome] {
        &self.outcomes
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn changed(&self) -> usize {
        self.count(|outcome| *outcome == Outcome::Changed)
    }

    /// All skip reasons combined.
    pub fn skipped(&self) -> usize {
        self.count(Outcome::is_skip)
    }

    pub fn errored(&self) -> usize {
        self.count(|outcome| matches!(outcome, Outcome::Errored(_)))
    }

    fn count(&self, matches: impl Fn(&Outcome) -> bool) -> usize {
        self.outcomes
            .iter()
            .filter(|file| matches(&file.outcome))
            .count()
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Processed {} files. Updated {}, skipped {}.",
            self.total(),
            self.changed(),
            self.skipped()
        )?;
        if self.errored() > 0 {
            write!(f, " {} errored.", self.errored())?;
        }
        Ok(())
    }
}
