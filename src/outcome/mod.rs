//! Outcome values and their combinators.
//!
//! This module contains the whole library:
//! - The `Outcome` / `Fault` value types
//! - Equality and ordering with supplied comparators
//! - Sequential composition (`and_then`, `flatten`)
//! - Payload transformers (`map`, `map_err`)
//! - Conversions to and from `Option` and `Result`
//! - Predicates and fail-fast shape assertions
//!
//! Everything here is pure: values in, values out, no side effects beyond
//! the closures callers pass in.

mod compare;
mod convert;
mod inspect;
mod sequence;
mod transform;
mod types;

pub use types::{Fault, Outcome};
