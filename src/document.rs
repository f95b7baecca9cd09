use std::path::Path;

use tracing::debug;

use crate::config::LineRange;
use crate::error::PruneResult;
use crate::utils::fs;

/// A text file held as an ordered sequence of lines.
///
/// Each line keeps its original terminator (`\n` or `\r\n`), so
/// concatenating the lines reproduces the input byte for byte. A file
/// without a trailing newline keeps its last line unterminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Split `content` into terminator-preserving lines
    pub fn parse(content: &str) -> Self {
        let lines = content.split_inclusive('\n').map(str::to_string).collect();
        Self { lines }
    }

    /// Load a document by reading the whole file at `path`
    pub fn load(path: impl AsRef<Path>) -> PruneResult<Self> {
        let path = path.as_ref();
        let doc = Self::parse(&fs::read_file_to_string(path)?);
        debug!("Loaded {} lines from {}", doc.line_count(), path.display());
        Ok(doc)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line at `index` with its terminator, if in bounds
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Line at `index` with the trailing terminator trimmed, for display
    pub fn line_display(&self, index: usize) -> Option<&str> {
        self.line(index)
            .map(|line| line.trim_end_matches(|c| c == '\n' || c == '\r'))
    }

    /// Index of the first line at or after `from` that contains `needle`
    pub fn find_line(&self, needle: &str, from: usize) -> Option<usize> {
        self.lines
            .iter()
            .enumerate()
            .skip(from)
            .find(|(_, line)| line.contains(needle))
            .map(|(index, _)| index)
    }

    /// Replace the closed interval `range` with the lines of `replacement`
    /// (`None` removes the range outright). Returns the number of lines
    /// inserted.
    ///
    /// `range` must already be validated against `line_count`. The
    /// replacement text is spliced in verbatim; without a trailing newline
    /// its last line joins onto the first line after the range.
    pub fn splice(&mut self, range: LineRange, replacement: Option<&str>) -> usize {
        let new_lines = replacement.map(Self::parse).unwrap_or_default().lines;
        let inserted = new_lines.len();
        self.lines.splice(range.start..=range.end, new_lines);
        inserted
    }

    /// Reassemble the full file contents
    pub fn contents(&self) -> String {
        self.lines.concat()
    }

    /// Persist the document back to `path` with an atomic replace
    pub fn store(&self, path: impl AsRef<Path>) -> PruneResult<()> {
        let path = path.as_ref();
        fs::write_file_atomic(path, &self.contents())?;
        debug!("Stored {} lines to {}", self.line_count(), path.display());
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self { lines: Vec::new() }
    }
}
