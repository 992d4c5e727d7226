use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colored::*;

use wayaku::{run_batch, BatchQuery, Outcome};

/// Wayaku - Batch-translate sketch documentation headers to Japanese
#[derive(Parser, Debug)]
#[command(name = "wayaku")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory of the sketch collection
    #[arg(value_name = "ROOT", default_value = ".")]
    root: PathBuf,

    /// Basename of the source files to translate
    #[arg(long, default_value = "sketch.js")]
    file_name: String,

    /// Run the full pipeline without writing any file
    #[arg(long)]
    dry_run: bool,

    /// Print a per-file outcome line for every candidate
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let query = BatchQuery::new(cli.root.clone())
        .with_file_name(cli.file_name.clone())
        .with_dry_run(cli.dry_run);

    let report = run_batch(&query)
        .with_context(|| format!("cannot translate under '{}'", cli.root.display()))?;

    if cli.verbose {
        for file in report.outcomes() {
            let label = match &file.outcome {
                Outcome::Changed => file.outcome.label().green(),
                Outcome::Errored(message) => format!("error: {}", message).red(),
                _ => file.outcome.label().dimmed(),
            };
            println!("{}: {}", file.path.display(), label);
        }
    }

    println!("{}", report);
    if cli.dry_run {
        println!("Dry run: no files were written.");
    }

    Ok(())
}
