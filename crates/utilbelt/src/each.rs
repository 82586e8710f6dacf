//! Uniform iteration over array-like and mapping values.
//!
//! Every routine here is a thin layer over [`entries`]: arrays yield
//! `(value, Key::Index)` in ascending index order, mappings yield
//! `(value, Key::Name)` in definition order, and anything else yields nothing.

use crate::classify::{Collection, Shape};
use crate::equal::strict_equal;
use crate::key::Key;
use crate::value::Value;
use std::iter::Enumerate;
use std::slice;

/// Iterator over the `(value, key)` pairs of a collection.
#[derive(Debug, Clone)]
pub enum Entries<'a> {
    Array(Enumerate<slice::Iter<'a, Value>>),
    Mapping(indexmap::map::Iter<'a, String, Value>),
    Empty,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a Value, Key<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Entries::Array(it) => it.next().map(|(i, v)| (v, Key::Index(i))),
            Entries::Mapping(it) => it.next().map(|(k, v)| (v, Key::Name(k.as_str()))),
            Entries::Empty => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Entries::Array(it) => it.size_hint(),
            Entries::Mapping(it) => it.size_hint(),
            Entries::Empty => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for Entries<'_> {}

/// Produces the `(value, key)` pairs of any collection.
pub fn entries<'a, C>(collection: &'a C) -> Entries<'a>
where
    C: Collection + ?Sized,
{
    match collection.shape() {
        Shape::Array(items) => Entries::Array(items.iter().enumerate()),
        Shape::Mapping(map) => Entries::Mapping(map.iter()),
        Shape::Scalar | Shape::Nullish => Entries::Empty,
    }
}

/// Calls `f` with every `(value, key)` pair.
///
/// # Examples
///
/// ```
/// use utilbelt::{each, Value};
/// use serde_json::json;
///
/// let mut seen = Vec::new();
/// each(&Value::from(json!({"one": 1, "two": 2})), |v, k| {
///     seen.push(format!("{}={}", k, v.as_f64().unwrap()));
/// });
/// assert_eq!(seen, vec!["one=1", "two=2"]);
/// ```
pub fn each<'a, C, F>(collection: &'a C, mut f: F)
where
    C: Collection + ?Sized,
    F: FnMut(&'a Value, Key<'a>),
{
    for (value, key) in entries(collection) {
        f(value, key);
    }
}

/// Collects `f(value, key)` for every pair, in iteration order.
///
/// # Examples
///
/// ```
/// use utilbelt::{map, Value};
/// use serde_json::json;
///
/// let doubled = map(&Value::from(json!([1, 2, 3])), |v, _| v.as_f64().unwrap() * 2.0);
/// assert_eq!(doubled, vec![2.0, 4.0, 6.0]);
/// assert!(map(&Value::Null, |_, _| "oops").is_empty());
/// ```
pub fn map<'a, C, F, T>(collection: &'a C, mut f: F) -> Vec<T>
where
    C: Collection + ?Sized,
    F: FnMut(&'a Value, Key<'a>) -> T,
{
    entries(collection).map(|(value, key)| f(value, key)).collect()
}

/// Keys in iteration order.
pub fn keys<C>(collection: &C) -> Vec<Key<'_>>
where
    C: Collection + ?Sized,
{
    entries(collection).map(|(_, key)| key).collect()
}

/// Returns the first value whose predicate holds, stopping there.
pub fn find<'a, C, P>(collection: &'a C, mut predicate: P) -> Option<&'a Value>
where
    C: Collection + ?Sized,
    P: FnMut(&'a Value, Key<'a>) -> bool,
{
    entries(collection)
        .find(|&(value, key)| predicate(value, key))
        .map(|(value, _)| value)
}

/// Index of the first element strictly equal to `needle`.
///
/// Only array-like collections have indices; mappings and scalars yield
/// `None`.
///
/// # Examples
///
/// ```
/// use utilbelt::{index_of, Value};
/// use serde_json::json;
///
/// let letters = Value::from(json!(["a", "b", "c"]));
/// assert_eq!(index_of(&letters, &Value::from("c")), Some(2));
/// assert_eq!(index_of(&letters, &Value::from(2)), None);
/// ```
pub fn index_of<C>(collection: &C, needle: &Value) -> Option<usize>
where
    C: Collection + ?Sized,
{
    match collection.shape() {
        Shape::Array(items) => items.iter().position(|item| strict_equal(item, needle)),
        Shape::Mapping(_) | Shape::Scalar | Shape::Nullish => None,
    }
}

/// True when some `(value, key)` pair satisfies `predicate`.
pub fn contains_where<'a, C, P>(collection: &'a C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&'a Value, Key<'a>) -> bool,
{
    entries(collection).any(|(value, key)| predicate(value, key))
}

/// Membership test.
///
/// A [`Value::Function`] test is called as `test(value, key)` and its result
/// judged by truthiness; any other test matches elements strictly equal to
/// it.
///
/// # Examples
///
/// ```
/// use utilbelt::{contains, Function, Value};
/// use serde_json::json;
///
/// let hash = Value::from(json!({"foo": "bar", "hello": "world"}));
/// assert!(contains(&hash, &Value::from("bar")));
///
/// let key_is_hello = Function::new(|_, args| Value::Bool(args[1] == Value::from("hello")));
/// assert!(contains(&hash, &Value::Function(key_is_hello)));
/// assert!(!contains(&Value::Null, &Value::from(5)));
/// ```
pub fn contains<C>(collection: &C, test: &Value) -> bool
where
    C: Collection + ?Sized,
{
    match test {
        Value::Function(f) => {
            contains_where(collection, |value, key| {
                f.invoke(&[value.clone(), key.to_value()]).is_truthy()
            })
        }
        _ => contains_where(collection, |value, _| strict_equal(value, test)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entries_array() {
        let arr = Value::from(json!(["a", "b"]));
        let got: Vec<(Value, Key)> = entries(&arr).map(|(v, k)| (v.clone(), k)).collect();
        assert_eq!(
            got,
            vec![(Value::from("a"), Key::Index(0)), (Value::from("b"), Key::Index(1))]
        );
        assert_eq!(entries(&arr).len(), 2);
    }

    #[test]
    fn test_entries_scalar_is_empty() {
        assert_eq!(entries(&Value::from("abc")).count(), 0);
        assert_eq!(entries(&Value::from(12)).count(), 0);
        assert_eq!(entries(&Value::Date(3)).count(), 0);
        assert_eq!(entries(&Value::Undefined).len(), 0);
    }

    #[test]
    fn test_each_array_order() {
        let vals = Value::from(json!(["a", "b", "c"]));
        let mut ct = 0;
        each(&vals, |v, k| {
            assert_eq!(k, Key::Index(ct));
            assert_eq!(Some(v), vals.get(ct));
            ct += 1;
        });
        assert_eq!(ct, 3);
    }

    #[test]
    fn test_each_object_order() {
        let vals = Value::from(json!({"one": 0, "two": 1, "three": 2}));
        let mut ct = 0.0;
        let mut names = Vec::new();
        each(&vals, |v, k| {
            assert_eq!(v.as_f64(), Some(ct));
            names.push(k.as_name().unwrap());
            ct += 1.0;
        });
        assert_eq!(names, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_each_empty() {
        let mut ct = 0;
        each(&Value::from(json!([])), |_, _| ct += 1);
        each(&Value::from(json!({})), |_, _| ct += 1);
        each(&Value::Null, |_, _| ct += 1);
        assert_eq!(ct, 0);
    }

    #[test]
    fn test_each_argument_list() {
        let args = [Value::from("a"), Value::from("b"), Value::from("c")];
        let mut seen = Vec::new();
        each(&args, |v, k| seen.push((k.as_index().unwrap(), v.as_str().unwrap())));
        assert_eq!(seen, vec![(0, "a"), (1, "b"), (2, "c")]);
    }

    #[test]
    fn test_map_object_keys() {
        let res = map(&Value::from(json!({"foo": "bar"})), |_, k| k.to_string());
        assert_eq!(res, vec!["foo".to_string()]);
    }

    #[test]
    fn test_keys() {
        assert_eq!(
            keys(&Value::from(json!(["a", "b", "c"]))),
            vec![Key::Index(0), Key::Index(1), Key::Index(2)]
        );
        assert_eq!(
            keys(&Value::from(json!({"foo": "hello", "bar": "world"}))),
            vec![Key::Name("foo"), Key::Name("bar")]
        );
        assert!(keys(&Value::Null).is_empty());
    }

    #[test]
    fn test_find_short_circuits() {
        let arr = Value::from(json!(["foo", "bar", "bar"]));
        let mut calls = 0;
        let res = find(&arr, |v, _| {
            calls += 1;
            v.as_str() == Some("bar")
        });
        assert_eq!(res, Some(&Value::from("bar")));
        assert_eq!(calls, 2);
    }

    #[test]
    fn test_find_by_key() {
        let obj = Value::from(json!({"foo": "bar", "hello": "world"}));
        let res = find(&obj, |_, k| k == Key::Name("hello"));
        assert_eq!(res, Some(&Value::from("world")));
        assert_eq!(find(&obj, |_, _| false), None);
        assert_eq!(find(&Value::Undefined, |_, _| true), None);
    }

    #[test]
    fn test_index_of_strict() {
        let arr = Value::from(json!([1, "1", [1]]));
        assert_eq!(index_of(&arr, &Value::from("1")), Some(1));
        // Containers match by identity only.
        assert_eq!(index_of(&arr, &Value::from(json!([1]))), None);
        let inner = arr.get(2usize).unwrap();
        assert_eq!(index_of(&arr, inner), Some(2));
        assert_eq!(index_of(&Value::from(json!({"a": 1})), &Value::from(1)), None);
    }

    #[test]
    fn test_contains() {
        let arr = Value::from(json!(["a", "b", "c", "d"]));
        assert!(contains(&arr, &Value::from("c")));
        assert!(!contains(&Value::from(json!([1, 2, 3])), &Value::from(5)));
        assert!(!contains(&Value::from(json!({"foo": 1, "bar": 2})), &Value::from(0)));
        assert!(contains_where(&arr, |v, _| v.as_str() == Some("d")));
        assert!(!contains_where(&Value::Null, |_, _| true));
    }

    #[test]
    fn test_contains_with_function_test() {
        use crate::value::Function;
        let is_c = Function::new(|_, args| Value::Bool(args[0] == Value::from("c")));
        let arr = Value::from(json!(["a", "b", "c"]));
        assert!(contains(&arr, &Value::Function(is_c.clone())));
        assert!(!contains(&Value::from(json!(["x"])), &Value::Function(is_c)));
    }

    #[test]
    #[should_panic(expected = "stop at b")]
    fn test_each_propagates_callback_panic() {
        each(&Value::from(json!(["a", "b", "c"])), |v, _| {
            if v.as_str() == Some("b") {
                panic!("stop at b");
            }
        });
    }

    #[test]
    #[should_panic(expected = "no keys allowed")]
    fn test_find_propagates_callback_panic() {
        find(&Value::from(json!({"a": 1})), |_, _| -> bool { panic!("no keys allowed") });
    }

    #[test]
    fn test_contains_propagates_function_test_panic() {
        use crate::value::Function;
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let boom = Value::Function(Function::new(|_, _| panic!("test raised")));
        let arr = Value::from(json!([1, 2]));
        let result = catch_unwind(AssertUnwindSafe(|| contains(&arr, &boom)));
        let payload = result.unwrap_err();
        assert_eq!(payload.downcast_ref::<&str>(), Some(&"test raised"));
    }
}
