//! Runtime class descriptors.
//!
//! Rust values carry no class hierarchy of their own, so type and
//! capability checks run against these descriptors instead. Each class
//! names its superclass and the methods it defines; user code can declare
//! its own `static` classes, including subclasses of the builtins.

use std::fmt::Display;

/// A named class with an optional superclass and a method table.
#[derive(Debug)]
pub struct Class {
    name: &'static str,
    superclass: Option<&'static Class>,
    methods: &'static [&'static str],
}

impl Class {
    pub const fn new(
        name: &'static str,
        superclass: Option<&'static Class>,
        methods: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            superclass,
            methods,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn superclass(&self) -> Option<&'static Class> {
        self.superclass
    }

    /// Methods defined directly on this class, not inherited ones.
    pub fn own_methods(&self) -> &'static [&'static str] {
        self.methods
    }

    /// This class followed by its superclass chain.
    pub fn ancestors(&self) -> impl Iterator<Item = &Class> {
        std::iter::successors(Some(self), |class| class.superclass)
    }

    /// True if `other` is this class or one of its ancestors.
    pub fn is_subclass_of(&self, other: &Class) -> bool {
        self.ancestors().any(|class| class == other)
    }

    /// True if this class or an ancestor defines `method`.
    pub fn responds_to(&self, method: &str) -> bool {
        self.ancestors()
            .any(|class| class.methods.iter().any(|m| *m == method))
    }
}

// classes are identified by name
impl PartialEq for Class {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Class {}

impl Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name)
    }
}

/// Root of every class.
pub static OBJECT: Class = Class::new(
    "Object",
    None,
    &[
        "to_s",
        "inspect",
        "class",
        "is_a",
        "respond_to",
        "hash",
        "eql",
        "equal",
        "dup",
        "clone",
        "freeze",
        "frozen",
        "nil",
    ],
);

/// Common superclass of `Integer` and `Float`.
pub static NUMERIC: Class = Class::new(
    "Numeric",
    Some(&OBJECT),
    &[
        "abs", "ceil", "floor", "round", "truncate", "zero", "positive", "negative", "step",
        "coerce", "to_int",
    ],
);

/// Rust integer primitives.
pub static INTEGER: Class = Class::new(
    "Integer",
    Some(&NUMERIC),
    &[
        "succ",
        "pred",
        "times",
        "upto",
        "downto",
        "to_i",
        "to_f",
        "chr",
        "even",
        "odd",
        "gcd",
        "lcm",
        "bit_length",
    ],
);

/// `f32` and `f64`.
pub static FLOAT: Class = Class::new(
    "Float",
    Some(&NUMERIC),
    &["to_i", "to_f", "nan", "infinite", "finite"],
);

/// `str` and `String`.
pub static STRING: Class = Class::new(
    "String",
    Some(&OBJECT),
    &[
        "strip",
        "lstrip",
        "rstrip",
        "upcase",
        "downcase",
        "capitalize",
        "chars",
        "bytes",
        "length",
        "size",
        "empty",
        "split",
        "start_with",
        "end_with",
        "include",
        "reverse",
        "to_i",
        "to_f",
        "to_sym",
    ],
);

/// [`Symbol`](crate::Symbol).
pub static SYMBOL: Class = Class::new(
    "Symbol",
    Some(&OBJECT),
    &["to_sym", "to_proc", "length", "size", "upcase", "downcase", "empty"],
);

/// Slices, arrays and `Vec`.
pub static ARRAY: Class = Class::new(
    "Array",
    Some(&OBJECT),
    &[
        "each", "map", "select", "reject", "first", "last", "length", "size", "empty", "include",
        "push", "pop", "join", "sort", "uniq", "to_a",
    ],
);

/// `HashMap` and `BTreeMap`.
pub static HASH: Class = Class::new(
    "Hash",
    Some(&OBJECT),
    &[
        "each", "keys", "values", "fetch", "key", "length", "size", "empty", "include", "merge",
        "dig", "to_h",
    ],
);

/// `None`.
pub static NIL_CLASS: Class =
    Class::new("NilClass", Some(&OBJECT), &["to_a", "to_i", "to_f", "to_h"]);

/// `true`.
pub static TRUE_CLASS: Class = Class::new("TrueClass", Some(&OBJECT), &["&", "|", "^"]);

/// `false`.
pub static FALSE_CLASS: Class = Class::new("FalseClass", Some(&OBJECT), &["&", "|", "^"]);

#[cfg(test)]
mod tests {
    use super::*;

    static WIDGET: Class = Class::new("Widget", Some(&OBJECT), &["spin"]);
    static GADGET: Class = Class::new("Gadget", Some(&WIDGET), &["beep"]);

    #[test]
    fn ancestors_walk_to_root() {
        let names: Vec<_> = INTEGER.ancestors().map(Class::name).collect();
        assert_eq!(names, ["Integer", "Numeric", "Object"]);
    }

    #[test]
    fn subclass_relation_is_reflexive_and_transitive() {
        assert!(INTEGER.is_subclass_of(&INTEGER));
        assert!(INTEGER.is_subclass_of(&NUMERIC));
        assert!(INTEGER.is_subclass_of(&OBJECT));
        assert!(!NUMERIC.is_subclass_of(&INTEGER));
        assert!(!STRING.is_subclass_of(&NUMERIC));
    }

    #[test]
    fn methods_are_inherited() {
        assert!(GADGET.responds_to("beep"));
        assert!(GADGET.responds_to("spin"));
        assert!(GADGET.responds_to("to_s"));
        assert!(!WIDGET.responds_to("beep"));
        assert!(!INTEGER.responds_to("strip"));
        assert!(STRING.responds_to("strip"));
    }
}
