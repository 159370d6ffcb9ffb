//! Call-site descriptors.

use std::borrow::Cow;
use std::fmt::Display;
use std::panic::Location;
use std::path::Path;

/// A single call-stack entry: where an assertion method was invoked, and
/// under which name.
///
/// Frames captured from [`Location`] borrow `'static` data and allocate
/// nothing; synthetic frames (for tests, or hosts with their own notion of
/// a call stack) may own their path and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackFrame {
    source_path: Cow<'static, Path>,
    line_number: usize,
    column: Option<u32>,
    invoked_name: Cow<'static, str>,
}

impl StackFrame {
    /// Builds a frame for `invoked_name` called at `line_number` (1-based)
    /// of `source_path`.
    pub fn new(
        source_path: impl Into<Cow<'static, Path>>,
        line_number: usize,
        invoked_name: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            line_number,
            column: None,
            invoked_name: invoked_name.into(),
        }
    }

    /// Captures the call site of the enclosing `#[track_caller]` function.
    ///
    /// Called from inside an assertion method that is itself
    /// `#[track_caller]`, this names the line that invoked the assertion
    /// rather than any line inside this crate.
    #[track_caller]
    pub fn caller(invoked_name: &'static str) -> Self {
        Self::from_location(Location::caller(), invoked_name)
    }

    /// Builds a frame from an already captured [`Location`].
    pub fn from_location(location: &'static Location<'static>, invoked_name: &'static str) -> Self {
        Self {
            source_path: Cow::Borrowed(Path::new(location.file())),
            line_number: location.line() as usize,
            column: Some(location.column()),
            invoked_name: Cow::Borrowed(invoked_name),
        }
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn column(&self) -> Option<u32> {
        self.column
    }

    pub fn invoked_name(&self) -> &str {
        &self.invoked_name
    }
}

impl Display for StackFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.source_path.display(), self.line_number)?;
        if let Some(column) = self.column {
            write!(f, ":{column}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn caller_names_this_file() {
        let frame = StackFrame::caller("ensure_type");
        assert!(frame.source_path().ends_with("frame.rs"));
        assert_eq!(frame.line_number(), line!() as usize - 2);
        assert_eq!(frame.invoked_name(), "ensure_type");
        assert!(frame.column().is_some());
    }

    #[test]
    fn display_without_column() {
        let frame = StackFrame::new(PathBuf::from("src/lib.rs"), 12, "ensure_type");
        assert_eq!(frame.to_string(), "src/lib.rs:12");
    }
}
