//! Call-site variable-name resolution.
//!
//! Given a [`StackFrame`] (file, line, and the name of the assertion method
//! invoked there), re-read that one line of source, parse it with `syn`, and
//! recover the identifier the method was called on. Resolution is strictly
//! best effort: a missing file, an unparsable line or any receiver other
//! than a bare identifier yields `None`.

mod config;
mod error;
mod frame;
mod receiver;
mod source;

use std::fmt::Display;

pub use crate::config::{RESOLVE_ENV, ResolverConfig, SOURCE_ROOTS_ENV};
pub use crate::error::ResolveError;
pub use crate::frame::StackFrame;
pub use crate::receiver::ReceiverExpression;
pub use crate::source::SourceLine;

/// The name of the variable an assertion was called on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    /// Wraps `name` as given.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The bare name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for Identifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Resolves frames against source files on disk.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// A resolver using `config`.
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// A resolver configured from the environment, see [`ResolverConfig::from_env`].
    pub fn from_env() -> Self {
        Self::new(ResolverConfig::from_env())
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Best-effort resolution. Never fails, never panics.
    pub fn resolve(&self, frame: &StackFrame) -> Option<Identifier> {
        match self.explain(frame) {
            Ok(ident) => Some(ident),
            Err(reason) => {
                tracing::trace!(
                    frame = %frame,
                    invoked = frame.invoked_name(),
                    %reason,
                    "call site not resolved"
                );
                None
            },
        }
    }

    /// Like [`Resolver::resolve`], but reports why resolution fell back.
    pub fn explain(&self, frame: &StackFrame) -> Result<Identifier, ResolveError> {
        if !self.config.enabled {
            return Err(ResolveError::Disabled);
        }
        let line = SourceLine::fetch(frame, &self.config)?;
        ReceiverExpression::parse(line.text(), frame.invoked_name())?.identifier()
    }
}

/// Resolves `frame` with a resolver configured from the environment.
pub fn resolve(frame: &StackFrame) -> Option<Identifier> {
    Resolver::from_env().resolve(frame)
}
