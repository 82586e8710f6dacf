//! Keys produced and accepted by the traversal utilities.

use crate::value::Value;
use std::fmt;

/// A position inside a collection: an index into an array-like value or a
/// key of a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    Index(usize),
    Name(&'a str),
}

impl<'a> Key<'a> {
    /// The key as an array index, parsing canonical decimal names.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(i) => Some(*i),
            Key::Name(name) => parse_index(name),
        }
    }

    pub fn as_name(&self) -> Option<&'a str> {
        match self {
            Key::Name(name) => Some(*name),
            Key::Index(_) => None,
        }
    }

    /// The key as a value handed to dynamic callbacks: a number for indices,
    /// a string for names.
    pub fn to_value(&self) -> Value {
        match self {
            Key::Index(i) => Value::from(*i),
            Key::Name(name) => Value::from(*name),
        }
    }
}

impl From<usize> for Key<'static> {
    fn from(i: usize) -> Self {
        Key::Index(i)
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(name: &'a str) -> Self {
        Key::Name(name)
    }
}

impl<'a> From<&'a String> for Key<'a> {
    fn from(name: &'a String) -> Self {
        Key::Name(name.as_str())
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{}", i),
            Key::Name(name) => f.write_str(name),
        }
    }
}

/// Parses a canonical array index: ASCII digits with no leading zero
/// (except `"0"` itself).
///
/// # Examples
///
/// ```
/// use utilbelt::key::parse_index;
///
/// assert_eq!(parse_index("0"), Some(0));
/// assert_eq!(parse_index("42"), Some(42));
/// assert_eq!(parse_index("042"), None);
/// assert_eq!(parse_index("-1"), None);
/// assert_eq!(parse_index("1.5"), None);
/// ```
pub fn parse_index(name: &str) -> Option<usize> {
    let bytes = name.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    name.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_index() {
        assert_eq!(Key::Index(3).as_index(), Some(3));
        assert_eq!(Key::Name("3").as_index(), Some(3));
        assert_eq!(Key::Name("foo").as_index(), None);
        assert_eq!(Key::Name("").as_index(), None);
    }

    #[test]
    fn test_to_value() {
        assert_eq!(Key::Index(2).to_value(), Value::from(2));
        assert_eq!(Key::Name("a").to_value(), Value::from("a"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::Index(7).to_string(), "7");
        assert_eq!(Key::Name("bar").to_string(), "bar");
    }

    #[test]
    fn test_parse_index_overflow() {
        assert_eq!(parse_index("99999999999999999999999999"), None);
    }
}
