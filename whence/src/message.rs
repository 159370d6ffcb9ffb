//! Failure message templates.
//!
//! Every check has a specific rendering, used when the receiver's variable
//! name was resolved, and a generic one for when it was not.

use itertools::Itertools;
use whence_resolver::Identifier;

use crate::class::Class;
use crate::subject::Subject;

/// `Integer or String`
pub fn classes_text(classes: &[&Class]) -> String {
    classes.iter().map(|class| class.name()).join(" or ")
}

/// `strip, upcase`
pub fn methods_text(methods: &[&str]) -> String {
    methods.join(", ")
}

/// `[one, two]`, each element by its own rendering, in the given order.
pub fn elements_text<T: Subject>(elements: &[T]) -> String {
    format!("[{}]", elements.iter().map(Subject::to_s).join(", "))
}

/// Type check failure: `` `var` should be ... `` or `expected ..., got ...`.
pub fn type_mismatch(
    var: Option<&Identifier>,
    expected: &str,
    value: &(impl Subject + ?Sized),
) -> String {
    let kind = value.class().name();
    let repr = value.to_s();
    match var {
        Some(var) => format!("`{var}` should be {expected}, not {kind} ({repr})"),
        None => format!("expected {expected}, got {kind} ({repr})"),
    }
}

/// Nil check failure.
pub fn unexpected_nil(var: Option<&Identifier>) -> String {
    match var {
        Some(var) => format!("`{var}` should not be nil"),
        None => "expected not nil, got nil".to_string(),
    }
}

/// Capability check failure, naming every required method.
pub fn missing_methods(
    var: Option<&Identifier>,
    methods: &str,
    value: &(impl Subject + ?Sized),
) -> String {
    let kind = value.class().name();
    match var {
        Some(var) => format!("{kind} (`{var}`) should respond to all methods: {methods}"),
        None => format!("{kind} should respond to all methods: {methods}"),
    }
}

/// Enum check failure; `elements` is already rendered.
pub fn not_one_of(
    var: Option<&Identifier>,
    elements: &str,
    value: &(impl Subject + ?Sized),
) -> String {
    let kind = value.class().name();
    let actual = value.to_s();
    match var {
        Some(var) => format!("{kind} (`{var}`) should be one of: {elements}, not {actual}"),
        None => format!("{kind} expected one of: {elements}, got {actual}"),
    }
}

/// Subset check failure; the value is shown with `inspect`.
pub fn not_subset(
    var: Option<&Identifier>,
    reference: &str,
    value: &(impl Subject + ?Sized),
) -> String {
    let kind = value.class().name();
    let actual = value.inspect();
    match var {
        Some(var) => format!("{kind} (`{var}`) should be subset of: {reference}, not {actual}"),
        None => format!("{kind} expected subset of: {reference}, got {actual}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{INTEGER, NUMERIC, STRING};

    #[test]
    fn single_class_has_no_separator() {
        assert_eq!(classes_text(&[&INTEGER]), "Integer");
        assert_eq!(classes_text(&[&INTEGER, &STRING, &NUMERIC]), "Integer or String or Numeric");
    }

    #[test]
    fn empty_rendering_gives_empty_parens() {
        let none: Option<i64> = None;
        assert_eq!(
            type_mismatch(None, "Hash", &none),
            "expected Hash, got NilClass ()"
        );
    }

    #[test]
    fn elements_keep_order_and_duplicates() {
        assert_eq!(elements_text(&[3_i64, 1, 3]), "[3, 1, 3]");
    }
}
