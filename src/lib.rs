//! Commitment: outcome values that track irrevocable state commitments
//!
//! Some operations commit state partway through: they await a remote call,
//! the call writes something durable, and only then does the operation
//! succeed or fail. Once control returns from the await, the caller has no
//! other way to learn whether such a commitment happened. `Outcome` carries
//! that fact in the return value, distinguishing four cases: success or
//! failure, each with or without a prior commitment.
//!
//! # Core Concepts
//!
//! - **Outcome**: a three-variant success/failure value; failures nest a
//!   `Fault` that keeps the commitment bit
//! - **Monotonicity**: composition can turn the commitment tag on but never
//!   off; a step that commits nothing cannot erase an earlier commitment
//! - **Pure values**: outcomes are already-resolved, single-owner values;
//!   nothing here suspends, blocks, or mutates
//!
//! # Example
//!
//! ```rust
//! use commitment::{Fault, Outcome};
//!
//! fn parse_natural(input: &str) -> Outcome<u32, String> {
//!     Outcome::from_option(input.parse().ok(), format!("not a natural: {input}"))
//! }
//!
//! fn require_above_10(n: u32) -> Outcome<u32, String> {
//!     if n > 10 {
//!         Outcome::Settled(n)
//!     } else {
//!         Outcome::Failed(Fault::Settled("not above 10".to_string()))
//!     }
//! }
//!
//! // A step that awaited a remote call reports Committed; chaining after it
//! // keeps the tag even though later steps commit nothing themselves.
//! let result = parse_natural("15")
//!     .and_then(require_above_10)
//!     .and_then(|n| Outcome::Committed(n * 2));
//!
//! assert_eq!(result, Outcome::Committed(30));
//!
//! let rejected = parse_natural("5").and_then(require_above_10);
//! assert_eq!(rejected, Outcome::Failed(Fault::Settled("not above 10".to_string())));
//! ```

pub mod outcome;

// Re-export commonly used types
pub use outcome::{Fault, Outcome};
