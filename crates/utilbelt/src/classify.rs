//! Type classification.
//!
//! [`classify`] is the single place that decides whether a value is traversed
//! as an array, as a keyed mapping, or not at all. Iteration, equality and
//! merge all dispatch on its [`Shape`], so they agree at every nesting level.

use crate::value::{Map, Value};

/// How a value participates in traversal.
#[derive(Debug, Clone, Copy)]
pub enum Shape<'a> {
    /// Index-addressable elements `0..len`.
    Array(&'a [Value]),
    /// Own keys in definition order.
    Mapping(&'a Map),
    /// A non-nullish value with nothing to iterate.
    Scalar,
    /// `null` or `undefined`.
    Nullish,
}

impl<'a> Shape<'a> {
    pub fn is_array(&self) -> bool {
        matches!(self, Shape::Array(_))
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self, Shape::Mapping(_))
    }

    /// Number of iterable entries; zero for scalars and nullish values.
    pub fn len(&self) -> usize {
        match self {
            Shape::Array(items) => items.len(),
            Shape::Mapping(map) => map.len(),
            Shape::Scalar | Shape::Nullish => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classifies a value for traversal.
///
/// Dates and functions are composite on the host side but carry no own keys,
/// so they classify as [`Shape::Scalar`].
pub fn classify(value: &Value) -> Shape<'_> {
    match value {
        Value::Array(items) => Shape::Array(items),
        Value::Object(map) => Shape::Mapping(map),
        Value::Undefined | Value::Null => Shape::Nullish,
        Value::Bool(_) | Value::Number(_) | Value::String(_) | Value::Date(_) | Value::Function(_) => {
            Shape::Scalar
        }
    }
}

/// Anything the traversal utilities accept.
///
/// Besides [`Value`] this covers bare argument lists (`[Value]`, `Vec<Value>`,
/// fixed arrays), bare mappings, and `Option` where `None` is nullish.
pub trait Collection {
    fn shape(&self) -> Shape<'_>;
}

impl Collection for Value {
    fn shape(&self) -> Shape<'_> {
        classify(self)
    }
}

impl Collection for [Value] {
    fn shape(&self) -> Shape<'_> {
        Shape::Array(self)
    }
}

impl<const N: usize> Collection for [Value; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Array(self.as_slice())
    }
}

impl Collection for Vec<Value> {
    fn shape(&self) -> Shape<'_> {
        Shape::Array(self.as_slice())
    }
}

impl Collection for Map {
    fn shape(&self) -> Shape<'_> {
        Shape::Mapping(self)
    }
}

impl<C: Collection> Collection for Option<C> {
    fn shape(&self) -> Shape<'_> {
        match self {
            Some(inner) => inner.shape(),
            None => Shape::Nullish,
        }
    }
}

impl<C: Collection + ?Sized> Collection for &C {
    fn shape(&self) -> Shape<'_> {
        (**self).shape()
    }
}

/// True for composite values: arrays, mappings and dates.
///
/// # Examples
///
/// ```
/// use utilbelt::{is_object, Value};
/// use serde_json::json;
///
/// assert!(is_object(&Value::from(json!({}))));
/// assert!(is_object(&Value::from(json!([]))));
/// assert!(is_object(&Value::Date(0)));
/// assert!(!is_object(&Value::Null));
/// assert!(!is_object(&Value::from("hello")));
/// ```
pub fn is_object(value: &Value) -> bool {
    matches!(value, Value::Array(_) | Value::Object(_) | Value::Date(_))
}

/// True only for true sequences.
pub fn is_array(value: &Value) -> bool {
    matches!(value, Value::Array(_))
}

pub fn is_function(value: &Value) -> bool {
    matches!(value, Value::Function(_))
}

pub fn is_string(value: &Value) -> bool {
    matches!(value, Value::String(_))
}

pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(_))
}

pub fn is_boolean(value: &Value) -> bool {
    matches!(value, Value::Bool(_))
}

pub fn is_date(value: &Value) -> bool {
    matches!(value, Value::Date(_))
}

pub fn is_nullish(value: &Value) -> bool {
    value.is_nullish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Function;
    use serde_json::json;

    fn samples() -> Vec<Value> {
        vec![
            Value::Undefined,
            Value::Null,
            Value::from(true),
            Value::from(1),
            Value::from("hello"),
            Value::from(json!([])),
            Value::from(json!({"hello": "world"})),
            Value::Date(0),
            Value::Function(Function::new(|_, _| Value::Null)),
        ]
    }

    #[test]
    fn test_is_object() {
        let got: Vec<bool> = samples().iter().map(is_object).collect();
        assert_eq!(got, vec![false, false, false, false, false, true, true, true, false]);
    }

    #[test]
    fn test_is_array() {
        let got: Vec<bool> = samples().iter().map(is_array).collect();
        assert_eq!(got, vec![false, false, false, false, false, true, false, false, false]);
    }

    #[test]
    fn test_arrays_are_objects() {
        let arr = Value::from(json!(["apple"]));
        assert!(is_array(&arr));
        assert!(is_object(&arr));
    }

    #[test]
    fn test_other_predicates() {
        assert!(is_function(&samples()[8]));
        assert!(is_string(&Value::from("")));
        assert!(is_number(&Value::Number(f64::NAN)));
        assert!(is_boolean(&Value::from(false)));
        assert!(is_date(&Value::Date(1)));
        assert!(is_nullish(&Value::Undefined));
        assert!(!is_nullish(&Value::from(0)));
    }

    #[test]
    fn test_classify() {
        assert!(classify(&Value::from(json!([1]))).is_array());
        assert!(classify(&Value::from(json!({"0": 1}))).is_mapping());
        assert!(matches!(classify(&Value::Null), Shape::Nullish));
        assert!(matches!(classify(&Value::Undefined), Shape::Nullish));
        assert!(matches!(classify(&Value::from("ab")), Shape::Scalar));
        assert!(matches!(classify(&Value::Date(0)), Shape::Scalar));
        assert_eq!(classify(&Value::from(json!({"a": 1, "b": 2}))).len(), 2);
        assert!(classify(&Value::from(7)).is_empty());
    }

    #[test]
    fn test_collection_impls() {
        let args = vec![Value::from("a"), Value::from("b")];
        assert_eq!(args.shape().len(), 2);
        assert_eq!(args.as_slice().shape().len(), 2);
        assert_eq!([Value::Null].shape().len(), 1);
        assert!(matches!(None::<&Value>.shape(), Shape::Nullish));
        assert!(Some(&args).shape().is_array());
        let map = Map::new();
        assert!(map.shape().is_mapping());
    }
}
