//! Dynamic value model.
//!
//! Every utility in this crate operates on [`Value`], a closed enum covering
//! the primitives, sequences, keyed mappings, dates and callables that a
//! dynamically typed caller may hand over.

mod convert;
mod function;

pub use function::Function;

use crate::key::Key;
use indexmap::IndexMap;
use std::fmt;

/// An insertion-ordered keyed mapping.
///
/// Keys iterate in the order they were first defined; overwriting an existing
/// key keeps its position.
pub type Map = IndexMap<String, Value>;

/// The runtime type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Date,
    Function,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Date => "date",
            Kind::Function => "function",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dynamically typed value.
///
/// `PartialEq` is deep structural equality (see [`crate::is_equal`]), so two
/// separately built values compare equal when their contents match.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
    /// Milliseconds since the Unix epoch.
    Date(i64),
    Function(Function),
}

impl Value {
    /// Creates an empty mapping.
    pub fn object() -> Self {
        Value::Object(Map::new())
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
            Value::Date(_) => Kind::Date,
            Value::Function(_) => Kind::Function,
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// True for `Null` and `Undefined`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, Value::Null | Value::Undefined)
    }

    /// Truthiness as a dynamically typed host would judge it.
    ///
    /// `undefined`, `null`, `false`, `0`, `-0`, `NaN` and the empty string are
    /// falsy; everything else, including empty arrays and mappings, is truthy.
    ///
    /// # Examples
    ///
    /// ```
    /// use utilbelt::Value;
    ///
    /// assert!(!Value::from(0).is_truthy());
    /// assert!(!Value::from("").is_truthy());
    /// assert!(Value::Array(vec![]).is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) | Value::Date(_) | Value::Function(_) => true,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Map> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Value::Function(f) => Some(f),
            _ => None,
        }
    }

    /// Looks up an element by index or key.
    ///
    /// Keys are coerced the way property names are: `"1"` addresses index 1
    /// of an array and index `1` addresses the key `"1"` of a mapping.
    ///
    /// # Examples
    ///
    /// ```
    /// use utilbelt::Value;
    /// use serde_json::json;
    ///
    /// let doc = Value::from(json!({"list": ["a", "b"]}));
    /// let list = doc.get("list").unwrap();
    /// assert_eq!(list.get(1usize), Some(&Value::from("b")));
    /// assert_eq!(list.get("1"), Some(&Value::from("b")));
    /// assert_eq!(doc.get("missing"), None);
    /// ```
    pub fn get<'k>(&self, key: impl Into<Key<'k>>) -> Option<&Value> {
        crate::has::lookup(crate::classify(self), key.into())
    }

    pub fn get_mut<'k>(&mut self, key: impl Into<Key<'k>>) -> Option<&mut Value> {
        let key = key.into();
        match self {
            Value::Array(items) => key.as_index().and_then(|i| items.get_mut(i)),
            Value::Object(map) => match key {
                Key::Name(name) => map.get_mut(name),
                Key::Index(i) => map.get_mut(i.to_string().as_str()),
            },
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        crate::equal::is_equal(self, other)
    }
}
