//! Assertion methods on every [`Subject`].
//!
//! The methods exist only where [`Assertions`] is in scope, typically via
//! `use whence::prelude::*`. Each one records its own call site, so a
//! failing `age.ensure_type(&[&INTEGER])` can name `age` in its message.

use whence_resolver::StackFrame;

use crate::check;
use crate::class::Class;
use crate::error::AssertError;
use crate::subject::Subject;

/// Checks callable as methods, returning the receiver on success.
pub trait Assertions: Subject {
    /// Fails unless `self` is an instance of one of `classes`.
    ///
    /// # Errors
    ///
    /// A usage error if `classes` is empty, otherwise a failure naming the
    /// expected classes and the actual one.
    fn ensure_type(&self, classes: &[&Class]) -> Result<&Self, AssertError>;

    /// Fails if `self` is nil.
    fn ensure_not_nil(&self) -> Result<&Self, AssertError>;

    /// Fails unless `self` responds to every one of `methods`.
    fn ensure_responds_to(&self, methods: &[&str]) -> Result<&Self, AssertError>;

    /// Fails unless `self` equals one of `allowed`.
    fn ensure_one_of(&self, allowed: &[Self]) -> Result<&Self, AssertError>
    where
        Self: PartialEq + Sized;

    /// Fails unless every element of `self` appears in `reference`.
    fn ensure_subset_of<E>(&self, reference: &[E]) -> Result<&Self, AssertError>
    where
        Self: AsRef<[E]>,
        E: Subject + PartialEq;
}

impl<T: Subject + ?Sized> Assertions for T {
    #[track_caller]
    fn ensure_type(&self, classes: &[&Class]) -> Result<&Self, AssertError> {
        check::check_type(&StackFrame::caller("ensure_type"), self, classes)
    }

    #[track_caller]
    fn ensure_not_nil(&self) -> Result<&Self, AssertError> {
        check::check_not_nil(&StackFrame::caller("ensure_not_nil"), self)
    }

    #[track_caller]
    fn ensure_responds_to(&self, methods: &[&str]) -> Result<&Self, AssertError> {
        check::check_responds_to(&StackFrame::caller("ensure_responds_to"), self, methods)
    }

    #[track_caller]
    fn ensure_one_of(&self, allowed: &[Self]) -> Result<&Self, AssertError>
    where
        Self: PartialEq + Sized,
    {
        check::check_one_of(&StackFrame::caller("ensure_one_of"), self, allowed)
    }

    #[track_caller]
    fn ensure_subset_of<E>(&self, reference: &[E]) -> Result<&Self, AssertError>
    where
        Self: AsRef<[E]>,
        E: Subject + PartialEq,
    {
        check::check_subset_of(&StackFrame::caller("ensure_subset_of"), self, reference)
    }
}
