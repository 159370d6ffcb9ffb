//! Runtime assertions whose failures name the offending variable.
//!
//! ```ignore
//! use whence::prelude::*;
//!
//! fn set_age(age: String) -> Result<(), AssertError> {
//!     age.ensure_type(&[&INTEGER])?;
//!     Ok(())
//! }
//! // Err: `age` should be Integer, not String (x)
//! ```
//!
//! The variable name is recovered by re-reading the calling line from
//! source (see [`whence_resolver`]). When that is not possible the message
//! falls back to a generic form, e.g. `expected Integer, got String (x)`.

mod assertions;
pub mod check;
pub mod class;
mod error;
pub mod message;
mod subject;

pub use crate::assertions::Assertions;
pub use crate::error::{AssertError, CallStack, ErrorKind};
pub use crate::subject::{Subject, Symbol};
pub use whence_resolver::{Identifier, StackFrame};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod prelude {
    //! The assertion methods, the value model and the builtin classes.

    pub use crate::assertions::Assertions;
    pub use crate::class::*;
    pub use crate::error::{AssertError, ErrorKind};
    pub use crate::subject::{Subject, Symbol};
}
