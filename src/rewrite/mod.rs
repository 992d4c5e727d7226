use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::block;
use crate::report::Outcome;
use crate::rules::RuleEngine;

/// Runs the full read-translate-write pipeline on one file.
pub struct FileRewriter {
    engine: RuleEngine,
    dry_run: bool,
}

impl FileRewriter {
    pub fn new() -> Self {
        Self {
            engine: RuleEngine::new(),
            dry_run: false,
        }
    }

    /// Run the pipeline without persisting anything. Files that would be
    /// rewritten still report [`Outcome::Changed`].
    pub fn dry_run(mut self, value: bool) -> Self {
        self.dry_run = value;
        self
    }

    /// Process a single file and report what happened.
    ///
    /// Never returns an error: any read, extraction, or write failure is
    /// caught here and folded into [`Outcome::Errored`], so one bad file
    /// cannot abort the batch.
    pub fn process(&self, path: &Path) -> Outcome {
        match self.try_process(path) {
            Ok(outcome) => outcome,
            Err(e) => Outcome::Errored(e.to_string()),
        }
    }

    fn try_process(&self, path: &Path) -> std::io::Result<Outcome> {
        let source = fs::read_to_string(path)?;

        let block = match block::extract(&source) {
            Some(block) => block,
            None => return Ok(Outcome::SkippedNoBlock),
        };

        if block::contains_japanese(&block.text) {
            return Ok(Outcome::SkippedAlreadyTranslated);
        }

        let translated = self.engine.translate_block(&block.text);
        if translated == block.text {
            return Ok(Outcome::SkippedNoChange);
        }

        if !self.dry_run {
            // Splice the translated block back into the exact extracted
            // span; everything outside it is preserved byte-for-byte.
            let mut updated = String::with_capacity(
                source.len() - (block.end - block.start) + translated.len(),
            );
            updated.push_str(&source[..block.start]);
            updated.push_str(&translated);
            updated.push_str(&source[block.end..]);

            self.persist(path, &updated)?;
        }

        Ok(Outcome::Changed)
    }

    /// Atomic in-place replace: the full new content goes to a temp file
    /// next to the target, which is then renamed over it. The write
    /// either succeeds entirely or leaves the file at its prior state.
    fn persist(&self, path: &Path, content: &str) -> std::io::Result<()> {
        let dir = path.parent().unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;

        let permissions = fs::metadata(path)?.permissions();
        tmp.as_file().set_permissions(permissions)?;

        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl Default for FileRewriter {
    fn default() -> Self {
        Self::new()
    }
}
