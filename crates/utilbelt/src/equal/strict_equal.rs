use crate::value::Value;

/// Strict (`===`-style) equality.
///
/// Primitives compare by kind and value: `1` is never `"1"`, `NaN` is never
/// equal to itself and `0` equals `-0`. Arrays, mappings, dates and functions
/// compare by identity, so only a reference to the very same storage matches.
///
/// # Examples
///
/// ```
/// use utilbelt::{strict_equal, Value};
/// use serde_json::json;
///
/// assert!(strict_equal(&Value::from("a"), &Value::from("a")));
/// assert!(!strict_equal(&Value::from(1), &Value::from("1")));
///
/// let list = Value::from(json!([1]));
/// assert!(strict_equal(&list, &list));
/// assert!(!strict_equal(&list, &list.clone()));
/// ```
pub fn strict_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) => true,
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
        (Value::Array(_), Value::Array(_))
        | (Value::Object(_), Value::Object(_))
        | (Value::Date(_), Value::Date(_)) => std::ptr::eq(a, b),
        _ => false,
    }
}
