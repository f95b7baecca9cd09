use std::path::PathBuf;

use crate::document::Document;
use crate::error::{PruneError, PruneResult};

/// Zero-based inclusive interval of lines slated for removal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of lines covered by the interval
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Check the interval is ordered and fits a document of `total` lines
    pub fn validate(&self, total: usize) -> PruneResult<()> {
        if self.start > self.end {
            return Err(PruneError::invalid_range(self.start, self.end));
        }
        if self.end >= total {
            return Err(PruneError::range_out_of_bounds(self.start, self.end, total));
        }
        Ok(())
    }
}

/// How the range to remove is located in the file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeSpec {
    /// Explicit zero-based inclusive offsets
    Offsets(LineRange),
    /// Boundary lines located by content: the first line containing
    /// `start`, then the first line at or after it containing `end`
    Markers { start: String, end: String },
}

impl RangeSpec {
    /// Resolve to concrete offsets against a loaded document
    pub fn resolve(&self, doc: &Document) -> PruneResult<LineRange> {
        match self {
            Self::Offsets(range) => {
                range.validate(doc.line_count())?;
                Ok(*range)
            }
            Self::Markers { start, end } => {
                let start_index = doc
                    .find_line(start, 0)
                    .ok_or_else(|| PruneError::marker_not_found(start))?;
                let end_index = doc
                    .find_line(end, start_index)
                    .ok_or_else(|| PruneError::marker_not_found(end))?;
                Ok(LineRange::new(start_index, end_index))
            }
        }
    }
}

/// Everything one pruning run needs, passed explicitly instead of living
/// in hard-coded constants
#[derive(Debug, Clone)]
pub struct PruneRequest {
    /// File edited in place
    pub path: PathBuf,
    /// Which lines to remove
    pub range: RangeSpec,
    /// Substring the line at the range start must contain before any
    /// mutation happens
    pub guard: Option<String>,
    /// Text whose lines take the removed range's place
    pub replacement: Option<String>,
}
