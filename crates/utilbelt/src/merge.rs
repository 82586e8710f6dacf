//! Shallow and deep merging of mappings.
//!
//! [`extend`] and [`extend_deep`] are thin entry points over one routine,
//! [`extend_with`]. Only mapping sources contribute keys; everything else,
//! strings and arrays included, is skipped.

use crate::classify::{classify, Shape};
use crate::value::{Map, Value};
use tracing::{debug, trace};

/// How nested mappings are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MergeMode {
    /// Every source key overwrites the target key.
    #[default]
    Shallow,
    /// Mappings present on both sides are merged recursively; anything else,
    /// arrays included, is replaced wholesale.
    Deep,
}

/// Shallow-merges every mapping in `sources` into `target`, later sources
/// winning on conflicts.
///
/// Returns `target` itself.
///
/// # Examples
///
/// ```
/// use utilbelt::{extend, Value};
/// use serde_json::json;
///
/// let mut target = Value::from(json!({"happy": "happy"}));
/// let sources = [Value::Null, Value::from(5), Value::from("str"), Value::from(json!({"joy": "joy"}))];
/// let merged = extend(&mut target, &sources);
/// assert_eq!(*merged, Value::from(json!({"happy": "happy", "joy": "joy"})));
/// ```
pub fn extend<'t, 's, I>(target: &'t mut Value, sources: I) -> &'t mut Value
where
    I: IntoIterator<Item = &'s Value>,
{
    extend_with(MergeMode::Shallow, target, sources)
}

/// Deep-merges every mapping in `sources` into `target`.
///
/// # Examples
///
/// ```
/// use utilbelt::{extend_deep, Value};
/// use serde_json::json;
///
/// let mut target = Value::from(json!({"a": {"one": 1, "two": 2}, "b": 2}));
/// let source = Value::from(json!({"a": {"two": 22, "three": 33}, "b": 22}));
/// extend_deep(&mut target, [&source]);
/// assert_eq!(target, Value::from(json!({"a": {"one": 1, "two": 22, "three": 33}, "b": 22})));
/// ```
pub fn extend_deep<'t, 's, I>(target: &'t mut Value, sources: I) -> &'t mut Value
where
    I: IntoIterator<Item = &'s Value>,
{
    extend_with(MergeMode::Deep, target, sources)
}

/// Merges `sources` into `target` according to `mode`.
///
/// A nullish target becomes an empty mapping first. Any other non-mapping
/// target has no keyed storage and is returned unchanged.
pub fn extend_with<'t, 's, I>(mode: MergeMode, target: &'t mut Value, sources: I) -> &'t mut Value
where
    I: IntoIterator<Item = &'s Value>,
{
    if target.is_nullish() {
        *target = Value::object();
    }
    match &mut *target {
        Value::Object(map) => {
            for source in sources {
                merge_source(mode, map, source);
            }
        }
        other => {
            debug!(kind = %other.kind(), "merge target is not a mapping, left unchanged");
        }
    }
    target
}

fn merge_source(mode: MergeMode, target: &mut Map, source: &Value) {
    let Shape::Mapping(incoming) = classify(source) else {
        trace!(kind = %source.kind(), "skipping non-mapping merge source");
        return;
    };
    for (key, value) in incoming {
        if mode == MergeMode::Deep {
            if let (Some(Value::Object(existing)), Value::Object(_)) =
                (target.get_mut(key.as_str()), value)
            {
                merge_source(mode, existing, value);
                continue;
            }
        }
        target.insert(key.clone(), value.clone());
    }
}
