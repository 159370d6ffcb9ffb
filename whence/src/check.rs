//! The five checks, taking the call-site frame explicitly.
//!
//! Each check validates its own arguments first, then the value. On success
//! the value is handed back untouched; on failure the frame is resolved to
//! a variable name (best effort) and the message rendered from it.

use whence_resolver::{Identifier, StackFrame};

use crate::class::Class;
use crate::error::AssertError;
use crate::message;
use crate::subject::Subject;

/// Usage message when `check_type` gets no classes.
pub const NO_CLASSES: &str = "provide at least one class";
/// Usage message when `check_responds_to` gets no methods.
pub const NO_METHODS: &str = "provide at least one method";
/// Usage message when an allowed set or reference is empty.
pub const NO_ELEMENTS: &str = "provide at least one element";

fn fail(frame: &StackFrame, render: impl FnOnce(Option<&Identifier>) -> String) -> AssertError {
    let var = whence_resolver::resolve(frame);
    let message = render(var.as_ref());
    tracing::debug!(origin = %frame, %message, "assertion failed");
    AssertError::failure(frame, message)
}

/// Passes if `value` is an instance of any of `classes` or their subclasses.
pub fn check_type<'v, T: Subject + ?Sized>(
    frame: &StackFrame,
    value: &'v T,
    classes: &[&Class],
) -> Result<&'v T, AssertError> {
    if classes.is_empty() {
        return Err(AssertError::usage(frame, NO_CLASSES));
    }
    if classes.iter().any(|class| value.is_a(class)) {
        return Ok(value);
    }

    let expected = message::classes_text(classes);
    Err(fail(frame, |var| message::type_mismatch(var, &expected, value)))
}

/// Passes unless `value` is nil.
pub fn check_not_nil<'v, T: Subject + ?Sized>(
    frame: &StackFrame,
    value: &'v T,
) -> Result<&'v T, AssertError> {
    if !value.is_nil() {
        return Ok(value);
    }
    Err(fail(frame, message::unexpected_nil))
}

/// Passes if `value` responds to every one of `methods`.
pub fn check_responds_to<'v, T: Subject + ?Sized>(
    frame: &StackFrame,
    value: &'v T,
    methods: &[&str],
) -> Result<&'v T, AssertError> {
    if methods.is_empty() {
        return Err(AssertError::usage(frame, NO_METHODS));
    }
    if methods.iter().all(|method| value.responds_to(method)) {
        return Ok(value);
    }

    let methods = message::methods_text(methods);
    Err(fail(frame, |var| message::missing_methods(var, &methods, value)))
}

/// Passes if `value` equals one of `allowed`.
pub fn check_one_of<'v, T: Subject + PartialEq>(
    frame: &StackFrame,
    value: &'v T,
    allowed: &[T],
) -> Result<&'v T, AssertError> {
    if allowed.is_empty() {
        return Err(AssertError::usage(frame, NO_ELEMENTS));
    }
    if allowed.contains(value) {
        return Ok(value);
    }

    let elements = message::elements_text(allowed);
    Err(fail(frame, |var| message::not_one_of(var, &elements, value)))
}

/// Passes if every element of `value` appears in `reference`.
///
/// `reference` may hold elements `value` lacks; an empty `value` always
/// passes.
pub fn check_subset_of<'v, C, E>(
    frame: &StackFrame,
    value: &'v C,
    reference: &[E],
) -> Result<&'v C, AssertError>
where
    C: Subject + AsRef<[E]> + ?Sized,
    E: Subject + PartialEq,
{
    if reference.is_empty() {
        return Err(AssertError::usage(frame, NO_ELEMENTS));
    }
    if value.as_ref().iter().all(|element| reference.contains(element)) {
        return Ok(value);
    }

    let reference = reference.inspect();
    Err(fail(frame, |var| message::not_subset(var, &reference, value)))
}
