use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lineprune
#[derive(Error, Debug)]
pub enum PruneError {
    #[error("IO error: {source}")]
    Io {
        source: std::io::Error,
        path: Option<PathBuf>,
    },

    #[error("line range {start}..={end} is out of bounds for a file of {total} lines")]
    RangeOutOfBounds {
        start: usize,
        end: usize,
        total: usize,
    },

    #[error("invalid line range: start {start} is past end {end}")]
    InvalidRange { start: usize, end: usize },

    #[error("no line contains marker {marker:?}")]
    MarkerNotFound { marker: String },
}

impl PruneError {
    /// Create a new IO error with path context
    pub fn io_error(err: std::io::Error, path: Option<impl Into<PathBuf>>) -> Self {
        Self::Io {
            source: err,
            path: path.map(|p| p.into()),
        }
    }

    /// Create a new out-of-bounds range error
    pub fn range_out_of_bounds(start: usize, end: usize, total: usize) -> Self {
        Self::RangeOutOfBounds { start, end, total }
    }

    /// Create a new invalid range error
    pub fn invalid_range(start: usize, end: usize) -> Self {
        Self::InvalidRange { start, end }
    }

    /// Create a new missing-marker error
    pub fn marker_not_found(marker: impl Into<String>) -> Self {
        Self::MarkerNotFound {
            marker: marker.into(),
        }
    }
}

impl From<std::io::Error> for PruneError {
    fn from(error: std::io::Error) -> Self {
        PruneError::io_error(error, None::<PathBuf>)
    }
}

/// Result type alias using PruneError
pub type PruneResult<T> = Result<T, PruneError>;

/// Contextual error mapping function
pub fn map_io_err<P: Into<PathBuf>>(path: P) -> impl FnOnce(std::io::Error) -> PruneError {
    let path = path.into();
    move |err| PruneError::io_error(err, Some(path))
}
