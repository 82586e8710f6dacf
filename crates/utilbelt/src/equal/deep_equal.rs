use super::strict_equal;
use crate::classify::{classify, Shape};
use crate::value::Value;

/// Performs a deep equality check between two values.
///
/// Values are compared strictly first. Past that, both sides must classify
/// the same way:
/// - Arrays (same length, element-by-element comparison)
/// - Mappings (same key count, key-by-key comparison, order irrelevant)
/// - Dates (same timestamp)
///
/// An array never equals a mapping, even when their keys and values line up.
/// Cyclic structures are not supported.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use utilbelt::{is_equal, Value};
///
/// let a = Value::from(json!({"foo": "ffoo", "bar": {"barr": "barr"}}));
/// let b = Value::from(json!({"bar": {"barr": "barr"}, "foo": "ffoo"}));
/// assert!(is_equal(&a, &b));
///
/// assert!(!is_equal(&Value::from(json!({"0": 1})), &Value::from(json!([1]))));
/// assert!(!is_equal(&Value::from(1), &Value::from("1")));
/// assert!(!is_equal(&Value::Null, &Value::Undefined));
/// ```
pub fn is_equal(a: &Value, b: &Value) -> bool {
    if strict_equal(a, b) {
        return true;
    }
    if let (Value::Date(a), Value::Date(b)) = (a, b) {
        return a == b;
    }

    match (classify(a), classify(b)) {
        (Shape::Array(arr_a), Shape::Array(arr_b)) => {
            if arr_a.len() != arr_b.len() {
                return false;
            }
            for i in 0..arr_a.len() {
                if !is_equal(&arr_a[i], &arr_b[i]) {
                    return false;
                }
            }
            true
        }

        (Shape::Mapping(obj_a), Shape::Mapping(obj_b)) => {
            if obj_a.len() != obj_b.len() {
                return false;
            }
            for (key, val_a) in obj_a {
                match obj_b.get(key) {
                    Some(val_b) => {
                        if !is_equal(val_a, val_b) {
                            return false;
                        }
                    }
                    None => return false,
                }
            }
            true
        }

        // Primitives already failed the strict check; mixed shapes never match
        _ => false,
    }
}
