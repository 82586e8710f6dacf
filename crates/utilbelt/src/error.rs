use crate::value::Kind;
use thiserror::Error;

/// Failure converting a [`crate::Value`] into a `serde_json::Value`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConversionError {
    #[error("{0} has no JSON representation")]
    Unrepresentable(Kind),
    #[error("non-finite number has no JSON representation")]
    NonFiniteNumber,
}
