use crate::classify::{Collection, Shape};
use crate::key::Key;
use crate::value::Value;

/// Check if a collection has an element at the given index or key.
///
/// This is the equivalent of an own-property check with property-name
/// coercion: `"3"` addresses index 3 of an array-like value, index `3`
/// addresses the key `"3"` of a mapping. Scalars and nullish values have no
/// keys.
///
/// # Examples
///
/// ```
/// use utilbelt::{has, Value};
/// use serde_json::json;
///
/// assert!(has(&Value::from(json!(["a", "b", "c", "d"])), 3usize));
/// assert!(has(&Value::from(json!({"foo": 1, "bar": 2})), "bar"));
/// assert!(!has(&Value::from(json!([1, 2, 3])), 5usize));
/// assert!(!has(&Value::Null, 5usize));
/// ```
pub fn has<'k, C>(collection: &C, key: impl Into<Key<'k>>) -> bool
where
    C: Collection + ?Sized,
{
    lookup(collection.shape(), key.into()).is_some()
}

pub(crate) fn lookup<'a>(shape: Shape<'a>, key: Key<'_>) -> Option<&'a Value> {
    match shape {
        Shape::Array(items) => key.as_index().and_then(|i| items.get(i)),
        Shape::Mapping(map) => match key {
            Key::Name(name) => map.get(name),
            Key::Index(i) => map.get(i.to_string().as_str()),
        },
        Shape::Scalar | Shape::Nullish => None,
    }
}
