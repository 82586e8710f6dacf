//! Equality utilities.
//!
//! [`strict_equal`] is identity-style comparison used by membership tests;
//! [`is_equal`] is deep structural comparison.

mod deep_equal;
mod strict_equal;

pub use deep_equal::is_equal;
pub use strict_equal::strict_equal;
