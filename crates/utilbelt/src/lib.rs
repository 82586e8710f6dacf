//! utilbelt - collection utilities for dynamic values
//!
//! This crate classifies dynamically typed [`Value`]s as arrays, mappings or
//! scalars and builds uniform iteration, deep equality and merging on top of
//! that single classification. Scope binding and deferred invocation helpers
//! round it out.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use utilbelt::{extend_deep, is_equal, keys, Key, Value};
//!
//! let mut config = Value::from(json!({"server": {"port": 80}, "tags": ["a"]}));
//! let overrides = Value::from(json!({"server": {"host": "local"}, "tags": ["b"]}));
//! extend_deep(&mut config, [&overrides]);
//!
//! let expected = Value::from(json!({"server": {"port": 80, "host": "local"}, "tags": ["b"]}));
//! assert!(is_equal(&config, &expected));
//! assert_eq!(keys(&config), vec![Key::Name("server"), Key::Name("tags")]);
//! ```

pub mod bind;
pub mod classify;
pub mod defer;
pub mod each;
pub mod equal;
pub mod error;
pub mod has;
pub mod is_empty;
pub mod key;
pub mod merge;
pub mod value;

// Re-exports for convenience
pub use bind::bind;
pub use classify::{
    classify, is_array, is_boolean, is_date, is_function, is_nullish, is_number, is_object,
    is_string, Collection, Shape,
};
pub use defer::{defer, pending_deferred, run_deferred, Scheduler};
pub use each::{contains, contains_where, each, entries, find, index_of, keys, map, Entries};
pub use equal::{is_equal, strict_equal};
pub use error::ConversionError;
pub use has::has;
pub use is_empty::is_empty;
pub use key::Key;
pub use merge::{extend, extend_deep, extend_with, MergeMode};
pub use value::{Function, Kind, Map, Value};
