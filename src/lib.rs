// Lineprune - guarded removal of line ranges from text files
// Reads the file once, checks the guard, splices the range out, and puts
// the result back with an atomic replace.

pub mod config;
pub mod document;
pub mod error;
pub mod prune;
pub mod utils;

pub use config::{LineRange, PruneRequest, RangeSpec};
pub use document::Document;
pub use error::{PruneError, PruneResult};
pub use prune::{prune, PruneOutcome};

use anyhow::Result;
use tracing::debug;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging with custom ANSI configuration
///
/// Events go to stderr so the outcome summary on stdout stays clean.
pub fn init_with_logger(ansi_colors: bool) -> Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    fmt::Subscriber::builder()
        .with_ansi(ansi_colors)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .without_time()
        .init();

    debug!("lineprune v{}", version());

    Ok(())
}
