//! Values that can be asserted on.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

use itertools::Itertools;

use crate::class::{
    ARRAY, Class, FALSE_CLASS, FLOAT, HASH, INTEGER, NIL_CLASS, STRING, SYMBOL, TRUE_CLASS,
};

/// A value with a runtime class and a string rendering.
///
/// `to_s` is the value's own rendering and appears in failure messages;
/// `inspect` is the debug-style rendering used inside collections.
pub trait Subject {
    fn class(&self) -> &'static Class;

    fn to_s(&self) -> String;

    fn inspect(&self) -> String {
        self.to_s()
    }

    /// True only for the nil sentinel (`None`).
    fn is_nil(&self) -> bool {
        false
    }

    /// True if this value's class is `class` or a subclass of it.
    fn is_a(&self, class: &Class) -> bool {
        self.class().is_subclass_of(class)
    }

    fn responds_to(&self, method: &str) -> bool {
        self.class().responds_to(method)
    }
}

macro_rules! integer_subjects {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Subject for $ty {
                fn class(&self) -> &'static Class {
                    &INTEGER
                }

                fn to_s(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_subjects!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Subject for f32 {
    fn class(&self) -> &'static Class {
        &FLOAT
    }

    fn to_s(&self) -> String {
        self.to_string()
    }
}

impl Subject for f64 {
    fn class(&self) -> &'static Class {
        &FLOAT
    }

    fn to_s(&self) -> String {
        self.to_string()
    }
}

impl Subject for bool {
    fn class(&self) -> &'static Class {
        if *self { &TRUE_CLASS } else { &FALSE_CLASS }
    }

    fn to_s(&self) -> String {
        self.to_string()
    }
}

impl Subject for str {
    fn class(&self) -> &'static Class {
        &STRING
    }

    fn to_s(&self) -> String {
        self.to_string()
    }

    fn inspect(&self) -> String {
        format!("{self:?}")
    }
}

impl Subject for String {
    fn class(&self) -> &'static Class {
        &STRING
    }

    fn to_s(&self) -> String {
        self.clone()
    }

    fn inspect(&self) -> String {
        self.as_str().inspect()
    }
}

/// An interned-style name, rendered bare by `to_s` and as `:name` by
/// `inspect`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(Cow<'static, str>);

impl Symbol {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Subject for Symbol {
    fn class(&self) -> &'static Class {
        &SYMBOL
    }

    fn to_s(&self) -> String {
        self.0.to_string()
    }

    fn inspect(&self) -> String {
        format!(":{}", self.0)
    }
}

/// `None` is nil: class `NilClass`, empty `to_s`. `Some` is transparent.
impl<T: Subject> Subject for Option<T> {
    fn class(&self) -> &'static Class {
        match self {
            Some(v) => v.class(),
            None => &NIL_CLASS,
        }
    }

    fn to_s(&self) -> String {
        self.as_ref().map(Subject::to_s).unwrap_or_default()
    }

    fn inspect(&self) -> String {
        match self {
            Some(v) => v.inspect(),
            None => "nil".to_string(),
        }
    }

    fn is_nil(&self) -> bool {
        match self {
            Some(v) => v.is_nil(),
            None => true,
        }
    }
}

impl<T: Subject> Subject for [T] {
    fn class(&self) -> &'static Class {
        &ARRAY
    }

    fn to_s(&self) -> String {
        format!("[{}]", self.iter().map(Subject::inspect).join(", "))
    }
}

impl<T: Subject> Subject for Vec<T> {
    fn class(&self) -> &'static Class {
        &ARRAY
    }

    fn to_s(&self) -> String {
        self.as_slice().to_s()
    }
}

impl<T: Subject, const N: usize> Subject for [T; N] {
    fn class(&self) -> &'static Class {
        &ARRAY
    }

    fn to_s(&self) -> String {
        self.as_slice().to_s()
    }
}

fn render_pairs<'a, K, V>(pairs: impl Iterator<Item = (&'a K, &'a V)>) -> String
where
    K: Subject + 'a,
    V: Subject + 'a,
{
    format!(
        "{{{}}}",
        pairs
            .map(|(k, v)| format!("{}=>{}", k.inspect(), v.inspect()))
            .join(", ")
    )
}

impl<K: Subject, V: Subject, S> Subject for HashMap<K, V, S> {
    fn class(&self) -> &'static Class {
        &HASH
    }

    fn to_s(&self) -> String {
        render_pairs(self.iter())
    }
}

impl<K: Subject, V: Subject> Subject for BTreeMap<K, V> {
    fn class(&self) -> &'static Class {
        &HASH
    }

    fn to_s(&self) -> String {
        render_pairs(self.iter())
    }
}

impl<T: Subject + ?Sized> Subject for &T {
    fn class(&self) -> &'static Class {
        (**self).class()
    }

    fn to_s(&self) -> String {
        (**self).to_s()
    }

    fn inspect(&self) -> String {
        (**self).inspect()
    }

    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }

    fn responds_to(&self, method: &str) -> bool {
        (**self).responds_to(method)
    }
}

impl<T: Subject + ?Sized> Subject for Box<T> {
    fn class(&self) -> &'static Class {
        (**self).class()
    }

    fn to_s(&self) -> String {
        (**self).to_s()
    }

    fn inspect(&self) -> String {
        (**self).inspect()
    }

    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }

    fn responds_to(&self, method: &str) -> bool {
        (**self).responds_to(method)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_like_the_messages_expect() {
        assert_eq!(123_i64.to_s(), "123");
        assert_eq!("hello".to_s(), "hello");
        assert_eq!("hello".inspect(), "\"hello\"");
        assert_eq!(Symbol::new("one").to_s(), "one");
        assert_eq!(Symbol::new("one").inspect(), ":one");
        assert_eq!(vec![Symbol::new("one"), Symbol::new("two")].to_s(), "[:one, :two]");
        assert_eq!(Vec::<i64>::new().to_s(), "[]");
    }

    #[test]
    fn none_is_nil_with_empty_rendering() {
        let none: Option<i64> = None;
        assert!(none.is_nil());
        assert_eq!(none.class().name(), "NilClass");
        assert_eq!(none.to_s(), "");
        assert_eq!(Subject::inspect(&none), "nil");

        let some = Some(5_i64);
        assert!(!some.is_nil());
        assert_eq!(some.class().name(), "Integer");
        assert_eq!(some.to_s(), "5");
    }

    #[test]
    fn hash_rendering() {
        let mut map = BTreeMap::new();
        map.insert(Symbol::new("hello"), 123_i64);
        assert_eq!(map.to_s(), "{:hello=>123}");
        assert_eq!(BTreeMap::<Symbol, i64>::new().to_s(), "{}");
    }

    #[test]
    fn booleans_have_separate_classes() {
        assert_eq!(true.class().name(), "TrueClass");
        assert_eq!(false.class().name(), "FalseClass");
    }
}
