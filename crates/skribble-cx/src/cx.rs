//! Conditional class name joining with specificity-aware deduplication.
//!
//! [`cx()`] flattens any mix of strings, numbers, flags, lists and
//! `name -> condition` maps into class names, following the `classnames`
//! conventions, then removes class names superseded by later ones.
//!
//! # Example
//!
//! ```rust
//! use skribble_cx::{cx, ClassPath, ClassValue};
//!
//! let p = ClassPath::new().at("p");
//! let px = ClassPath::new().at("px");
//! let is_active = true;
//!
//! let class_name = cx([
//!     ClassValue::from(px.arg("100px")),
//!     ClassValue::from(("active", is_active)),
//!     ClassValue::from(p.named("$0").ok()),
//! ]);
//!
//! assert_eq!(class_name, "active p::$0");
//! ```

use serde_json::Value;

use crate::dedupe::deduplicate_to_string;
use crate::specificity::{self, SpecificityRegistry};

/// A value accepted by [`cx()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ClassValue {
    /// Contributes nothing.
    Null,
    /// Contributes nothing, whether `true` or `false`.
    Bool(bool),
    /// Contributes its display form unless zero or NaN.
    Number(f64),
    /// Contributes itself unless empty. May hold several space-separated class names.
    Text(String),
    /// Contributes each item in order.
    List(Vec<ClassValue>),
    /// Contributes each key whose condition is true, in order.
    Map(Vec<(String, bool)>),
}

impl ClassValue {
    /// Appends the class names this value contributes to `out`.
    fn flatten_into(&self, out: &mut Vec<String>) {
        match self {
            ClassValue::Null | ClassValue::Bool(_) => {}
            ClassValue::Number(n) => {
                if *n != 0.0 && !n.is_nan() {
                    out.push(n.to_string());
                }
            }
            ClassValue::Text(text) => push_words(out, text),
            ClassValue::List(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
            ClassValue::Map(entries) => {
                for (name, enabled) in entries {
                    if *enabled {
                        push_words(out, name);
                    }
                }
            }
        }
    }
}

fn push_words(out: &mut Vec<String>, text: &str) {
    out.extend(text.split_ascii_whitespace().map(str::to_string));
}

impl From<&str> for ClassValue {
    fn from(value: &str) -> Self {
        ClassValue::Text(value.to_string())
    }
}

impl From<String> for ClassValue {
    fn from(value: String) -> Self {
        ClassValue::Text(value)
    }
}

impl From<&String> for ClassValue {
    fn from(value: &String) -> Self {
        ClassValue::Text(value.clone())
    }
}

impl From<bool> for ClassValue {
    fn from(value: bool) -> Self {
        ClassValue::Bool(value)
    }
}

macro_rules! impl_from_number {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ClassValue {
                fn from(value: $ty) -> Self {
                    ClassValue::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_number!(i32, i64, u32, u64, usize, f32, f64);

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ClassValue::Null, Into::into)
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(values: Vec<T>) -> Self {
        ClassValue::List(values.into_iter().map(Into::into).collect())
    }
}

/// A single `name -> condition` entry.
impl<S: Into<String>> From<(S, bool)> for ClassValue {
    fn from((name, enabled): (S, bool)) -> Self {
        ClassValue::Map(vec![(name.into(), enabled)])
    }
}

/// Converts JSON using JavaScript truthiness for object entries.
impl From<Value> for ClassValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => ClassValue::Null,
            Value::Bool(b) => ClassValue::Bool(b),
            Value::Number(n) => ClassValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => ClassValue::Text(s),
            Value::Array(items) => ClassValue::List(items.into_iter().map(Into::into).collect()),
            Value::Object(entries) => ClassValue::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| {
                        let enabled = is_truthy(&value);
                        (key, enabled)
                    })
                    .collect(),
            ),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0 && !n.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Joins class values and removes superseded class names, using the
/// process-wide specificity table (see [`specificity::global`]).
pub fn cx<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue>,
{
    let registry = specificity::global().snapshot();
    cx_with(&registry, values)
}

/// Like [`cx()`], with an explicit specificity table.
pub fn cx_with<I>(registry: &SpecificityRegistry, values: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue>,
{
    let mut tokens = Vec::new();
    for value in values {
        value.into().flatten_into(&mut tokens);
    }
    deduplicate_to_string(&tokens, registry)
}

/// Joins heterogeneous class values with [`cx()`].
///
/// ```rust
/// use skribble_cx::cx;
///
/// assert_eq!(cx!("a", ("b", false), 1, None::<&str>, "c"), "a 1 c");
/// ```
#[macro_export]
macro_rules! cx {
    ($($value:expr),* $(,)?) => {{
        let values: ::std::vec::Vec<$crate::ClassValue> =
            ::std::vec![$($crate::ClassValue::from($value)),*];
        $crate::cx(values)
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn join(value: Value) -> String {
        cx_with(&SpecificityRegistry::default(), [value])
    }

    // =========================================================================
    // Deduplication
    // =========================================================================

    #[test]
    fn test_cx_deduplicates() {
        let registry = SpecificityRegistry::default();
        assert_eq!(cx_with(&registry, ["p::$0", "p::$0_5"]), "p::$0_5");
        assert_eq!(
            cx_with(&registry, ["pt::[200px]", "py::[100px]", "p::$0"]),
            "p::$0"
        );
    }

    #[test]
    fn test_space_separated_text_is_split_before_deduplication() {
        let registry = SpecificityRegistry::default();
        assert_eq!(cx_with(&registry, ["p::$0 block", "p::$1"]), "block p::$1");
    }

    #[test]
    fn test_list_contents_are_deduplicated_together() {
        let registry = SpecificityRegistry::default();
        let value = ClassValue::from(vec!["md::$hidden", "md::$block"]);
        assert_eq!(cx_with(&registry, [value]), "md::$block");
    }

    // =========================================================================
    // classnames compatibility
    // =========================================================================

    #[test]
    fn test_keeps_object_keys_with_truthy_values() {
        assert_eq!(
            join(json!({ "a": true, "b": false, "c": 0, "d": null, "f": 1 })),
            "a f"
        );
    }

    #[test]
    fn test_ignores_falsy_values() {
        let out = cx_with(
            &SpecificityRegistry::default(),
            [
                ClassValue::from("a"),
                ClassValue::from(0),
                ClassValue::Null,
                ClassValue::from(true),
                ClassValue::from(1),
                ClassValue::from("b"),
            ],
        );
        assert_eq!(out, "a 1 b");
    }

    #[test]
    fn test_trims_empty_values() {
        assert_eq!(join(json!(["", "b", {}, ""])), "b");
    }

    #[test]
    fn test_empty_configuration() {
        assert_eq!(join(json!({})), "");
        assert_eq!(cx_with(&SpecificityRegistry::default(), Vec::<&str>::new()), "");
    }

    #[test]
    fn test_nested_arrays_and_objects() {
        assert_eq!(join(json!(["a", ["b", ["c", { "d": true }]]])), "a b c d");
        assert_eq!(join(json!(["a", { "b": true, "c": false }])), "a b");
        assert_eq!(join(json!(["a", [[]]])), "a");
    }

    #[test]
    fn test_truthiness_of_property_values() {
        let out = join(json!({
            "null": null,
            "emptyString": "",
            "zero": 0,
            "negativeZero": -0.0,
            "false": false,
            "nonEmptyString": "foobar",
            "whitespace": " ",
            "emptyObject": {},
            "nonEmptyObject": { "a": 1, "b": 2 },
            "emptyList": [],
            "nonEmptyList": [1, 2, 3],
            "greaterZero": 1
        }));

        let mut classes: Vec<&str> = out.split(' ').collect();
        classes.sort_unstable();
        assert_eq!(
            classes,
            vec![
                "emptyList",
                "emptyObject",
                "greaterZero",
                "nonEmptyList",
                "nonEmptyObject",
                "nonEmptyString",
                "whitespace",
            ]
        );
    }

    #[test]
    fn test_numbers_render_display_form() {
        let registry = SpecificityRegistry::default();
        assert_eq!(cx_with(&registry, [1.5, 0.0, f64::NAN, -2.0]), "1.5 -2");
    }

    #[test]
    fn test_option_and_tuple_conversions() {
        let registry = SpecificityRegistry::default();
        let values = vec![
            ClassValue::from(Some("a")),
            ClassValue::from(None::<&str>),
            ClassValue::from(("b", true)),
            ClassValue::from(("c".to_string(), false)),
        ];
        assert_eq!(cx_with(&registry, values), "a b");
    }

    #[test]
    fn test_cx_macro() {
        let registry = SpecificityRegistry::default();
        let expected = cx_with(&registry, ["a", "c"]);
        assert_eq!(crate::cx!("a", ("b", false), "c"), expected);
    }
}
