//! Reasons a call site could not be resolved to a variable name.
//!
//! None of these ever reach the caller of an assertion: they exist so the
//! fallback can be explained in traces and tests.

use std::path::PathBuf;

use thiserror::Error;

/// Why a frame resolved to no name.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The config turned resolution off.
    #[error("resolution is disabled")]
    Disabled,

    /// The frame's source file is not on disk (eval'd or generated code).
    #[error("source file not found: {}", path.display())]
    SourceUnavailable {
        /// Path as recorded in the frame.
        path: PathBuf,
    },

    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying failure.
        #[source]
        source: std::io::Error,
    },

    /// The frame points past the end of the file, or at line 0.
    #[error("line {line} is out of range (file has {len} lines)")]
    LineOutOfRange {
        /// Requested 1-based line.
        line: usize,
        /// Lines in the file.
        len: usize,
    },

    /// The line is not a complete statement, e.g. part of a multi-line call.
    #[error("line does not parse: {0}")]
    Parse(#[from] syn::Error),

    /// More than one statement shares the line.
    #[error("line holds {0} statements")]
    MultipleStatements(usize),

    /// No `<receiver>.<name>(..)` call on the line.
    #[error("no call to `{name}` on the line")]
    NoMatchingCall {
        /// Invoked method name.
        name: String,
    },

    /// The method is called more than once on the line.
    #[error("{count} calls to `{name}` on the line")]
    AmbiguousCall {
        /// Invoked method name.
        name: String,
        /// Matching calls found.
        count: usize,
    },

    /// The receiver is something other than a bare identifier.
    #[error("receiver is {0}, not a bare identifier")]
    UnsupportedReceiver(&'static str),
}
