//! Fetching the single physical line a frame points at.

use std::fs;

use crate::config::ResolverConfig;
use crate::error::ResolveError;
use crate::frame::StackFrame;

/// One trimmed physical line of source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLine {
    text: String,
}

impl SourceLine {
    /// Reads the file named by `frame` and returns its `line_number`th line.
    ///
    /// The file is read fresh on every call; nothing is cached.
    pub fn fetch(frame: &StackFrame, config: &ResolverConfig) -> Result<Self, ResolveError> {
        let path = config
            .locate(frame.source_path())
            .ok_or_else(|| ResolveError::SourceUnavailable {
                path: frame.source_path().to_path_buf(),
            })?;

        let content = fs::read_to_string(&path).map_err(|source| ResolveError::Io {
            path: path.clone(),
            source,
        })?;

        Self::from_content(&content, frame.line_number())
    }

    /// Picks line `line_number` (1-based) out of `content`.
    pub fn from_content(content: &str, line_number: usize) -> Result<Self, ResolveError> {
        let out_of_range = || ResolveError::LineOutOfRange {
            line: line_number,
            len: content.lines().count(),
        };

        let index = line_number.checked_sub(1).ok_or_else(out_of_range)?;
        let raw = content.lines().nth(index).ok_or_else(out_of_range)?;
        Ok(Self {
            text: raw.trim().to_string(),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}
