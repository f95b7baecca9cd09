use std::env;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use lineprune::{prune, LineRange, PruneOutcome, PruneRequest, RangeSpec};

/// Remove a range of lines from a text file, in place.
///
/// The range is given either as 1-based line numbers or as a pair of
/// marker substrings located in the file's content. A guard substring is
/// checked against the first line of the range before anything is
/// touched; on mismatch the file stays as it was and the process exits
/// with status 2.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// File to edit in place
    path: PathBuf,

    /// First line to remove (1-based, inclusive)
    #[arg(long, requires = "end", conflicts_with = "start_marker")]
    start: Option<NonZeroUsize>,

    /// Last line to remove (1-based, inclusive)
    #[arg(long, requires = "start")]
    end: Option<NonZeroUsize>,

    /// Substring the first removed line must contain
    #[arg(long, required_unless_present = "start_marker")]
    guard: Option<String>,

    /// Locate the first removed line by content instead of by number
    #[arg(long, requires = "end_marker", required_unless_present = "start")]
    start_marker: Option<String>,

    /// Locate the last removed line by content, searching at or after the
    /// start marker's line
    #[arg(long, requires = "start_marker")]
    end_marker: Option<String>,

    /// File whose contents replace the removed lines
    #[arg(long, value_name = "FILE")]
    replace_with: Option<PathBuf>,
}

fn build_request(cli: Cli) -> Result<PruneRequest> {
    let range = match (cli.start, cli.end, cli.start_marker, cli.end_marker) {
        (Some(start), Some(end), None, None) => {
            RangeSpec::Offsets(LineRange::new(start.get() - 1, end.get() - 1))
        }
        (None, None, Some(start), Some(end)) => RangeSpec::Markers { start, end },
        _ => bail!("give either --start/--end or --start-marker/--end-marker"),
    };

    let replacement = match cli.replace_with {
        Some(path) => Some(std::fs::read_to_string(&path).with_context(|| {
            format!("Failed to read replacement file: {}", path.display())
        })?),
        None => None,
    };

    Ok(PruneRequest {
        path: cli.path,
        range,
        guard: cli.guard,
        replacement,
    })
}

fn run(cli: Cli) -> Result<PruneOutcome> {
    let request = build_request(cli)?;
    info!("Pruning {}", request.path.display());
    Ok(prune(&request)?)
}

fn main() -> ExitCode {
    // Default to info so the boundary-line reports show up without RUST_LOG
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }

    if let Err(e) = lineprune::init_with_logger(true) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();
    let path = cli.path.clone();

    match run(cli) {
        Ok(PruneOutcome::Pruned { removed, inserted }) => {
            if inserted > 0 {
                println!(
                    "replaced {} lines with {} in {}",
                    removed,
                    inserted,
                    path.display()
                );
            } else {
                println!("removed {} lines from {}", removed, path.display());
            }
            ExitCode::SUCCESS
        }
        Ok(PruneOutcome::GuardMismatch {
            line,
            guard,
            content,
        }) => {
            eprintln!(
                "guard mismatch: line {} does not contain {:?} (found: {}), file left untouched",
                line, guard, content
            );
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
