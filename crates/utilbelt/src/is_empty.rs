use crate::classify::{Collection, Shape};

/// Check if a collection has no elements.
///
/// Nullish values count as empty collections. Non-nullish scalars are not
/// collections at all and report `false`.
///
/// # Examples
///
/// ```
/// use utilbelt::{is_empty, Value};
/// use serde_json::json;
///
/// assert!(is_empty(&Value::from(json!([]))));
/// assert!(is_empty(&Value::from(json!({}))));
/// assert!(is_empty(&Value::Null));
/// assert!(!is_empty(&Value::from(json!([null]))));
/// assert!(!is_empty(&Value::from(0)));
/// ```
pub fn is_empty<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
{
    match collection.shape() {
        Shape::Nullish => true,
        Shape::Array(items) => items.is_empty(),
        Shape::Mapping(map) => map.is_empty(),
        Shape::Scalar => false,
    }
}
