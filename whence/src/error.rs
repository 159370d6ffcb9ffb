//! Errors raised by the assertions.

use std::backtrace::Backtrace;
use std::fmt::Display;

use thiserror::Error;
use whence_resolver::StackFrame;

/// The caller's stack at the point an assertion was invoked.
#[derive(Debug)]
pub struct CallStack {
    origin: StackFrame,
    backtrace: Backtrace,
}

impl CallStack {
    /// Records `origin` as the failing line. The backtrace honours
    /// `RUST_BACKTRACE` and is empty when it is unset.
    pub fn capture(origin: &StackFrame) -> Self {
        Self {
            origin: origin.clone(),
            backtrace: Backtrace::capture(),
        }
    }

    /// The line that called the assertion.
    pub fn origin(&self) -> &StackFrame {
        &self.origin
    }

    pub fn backtrace(&self) -> &Backtrace {
        &self.backtrace
    }
}

impl Display for CallStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "at {}", self.origin)?;
        if let std::backtrace::BacktraceStatus::Captured = self.backtrace.status() {
            write!(f, "\n{}", self.backtrace)?;
        }
        Ok(())
    }
}

/// Which of the two error cases an [`AssertError`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The assertion itself was called wrongly, e.g. with no classes.
    Usage,
    /// The checked condition did not hold.
    Failure,
}

/// A failed or malformed assertion. `Display` is the message alone.
#[derive(Debug, Error)]
pub enum AssertError {
    /// The assertion was called with an empty class, method or element list.
    #[error("{message}")]
    Usage {
        /// Rendered message.
        message: String,
        /// Where the assertion was called.
        stack: CallStack,
    },

    /// The checked condition did not hold.
    #[error("{message}")]
    Failure {
        /// Rendered message.
        message: String,
        /// Where the assertion was called.
        stack: CallStack,
    },
}

impl AssertError {
    pub(crate) fn usage(frame: &StackFrame, message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
            stack: CallStack::capture(frame),
        }
    }

    pub(crate) fn failure(frame: &StackFrame, message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
            stack: CallStack::capture(frame),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Usage { .. } => ErrorKind::Usage,
            Self::Failure { .. } => ErrorKind::Failure,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Usage { message, .. } | Self::Failure { message, .. } => message,
        }
    }

    pub fn stack(&self) -> &CallStack {
        match self {
            Self::Usage { stack, .. } | Self::Failure { stack, .. } => stack,
        }
    }

    pub fn is_usage(&self) -> bool {
        self.kind() == ErrorKind::Usage
    }
}
