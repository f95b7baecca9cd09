//! The guarded line-range pruning operation.

use tracing::{debug, info};

use crate::config::PruneRequest;
use crate::document::Document;
use crate::error::PruneResult;

/// What a pruning run did.
///
/// A guard failure is an outcome, not an error: the file is untouched and
/// the caller decides how loudly to complain. Line numbers carried here
/// are 1-based, as an operator reads them in an editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PruneOutcome {
    /// The range was removed and the file rewritten
    Pruned { removed: usize, inserted: usize },
    /// The line at the range start did not contain the guard substring
    GuardMismatch {
        line: usize,
        guard: String,
        content: String,
    },
}

/// Remove the requested line range from the file, in place.
///
/// The boundary lines are reported to the log before anything else so the
/// operator can eyeball what is about to go. The guard is evaluated
/// strictly before mutation; on mismatch the file is left byte-for-byte
/// as it was. The rewrite itself is atomic.
pub fn prune(request: &PruneRequest) -> PruneResult<PruneOutcome> {
    let mut doc = Document::load(&request.path)?;
    let range = request.range.resolve(&doc)?;

    info!(
        "line {}: {}",
        range.start + 1,
        doc.line_display(range.start).unwrap_or_default()
    );
    info!(
        "line {}: {}",
        range.end + 1,
        doc.line_display(range.end).unwrap_or_default()
    );

    if let Some(guard) = &request.guard {
        let start_line = doc.line(range.start).unwrap_or_default();
        if !start_line.contains(guard.as_str()) {
            debug!("Guard {:?} not found on line {}", guard, range.start + 1);
            return Ok(PruneOutcome::GuardMismatch {
                line: range.start + 1,
                guard: guard.clone(),
                content: doc
                    .line_display(range.start)
                    .unwrap_or_default()
                    .to_string(),
            });
        }
    }

    let removed = range.len();
    let inserted = doc.splice(range, request.replacement.as_deref());
    doc.store(&request.path)?;

    info!("Removed {} lines from {}", removed, request.path.display());
    if inserted > 0 {
        info!("Inserted {} replacement lines", inserted);
    }

    Ok(PruneOutcome::Pruned { removed, inserted })
}
