//! Payload transformers.
//!
//! `map` and `map_err` each touch exactly one axis of the outcome and leave
//! the commitment tag where they found it.

use super::types::Outcome;

impl<T, E> Outcome<T, E> {
    /// Map the success payload, preserving the commitment tag.
    ///
    /// Failures pass through untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use commitment::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Committed(10);
    /// assert_eq!(outcome.map(|n| n * 2), Outcome::Committed(20));
    /// ```
    pub fn map<F, U>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Settled(value) => Outcome::Settled(f(value)),
            Outcome::Committed(value) => Outcome::Committed(f(value)),
            Outcome::Failed(fault) => Outcome::Failed(fault),
        }
    }

    /// Map the error payload inside a failure, preserving its inner tag.
    ///
    /// Successes pass through untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use commitment::{Fault, Outcome};
    ///
    /// let outcome: Outcome<i32, i32> = Outcome::Failed(Fault::Committed(404));
    /// assert_eq!(
    ///     outcome.map_err(|code| format!("status {code}")),
    ///     Outcome::Failed(Fault::Committed("status 404".to_string())),
    /// );
    /// ```
    pub fn map_err<F, U>(self, f: F) -> Outcome<T, U>
    where
        F: FnOnce(E) -> U,
    {
        match self {
            Outcome::Settled(value) => Outcome::Settled(value),
            Outcome::Committed(value) => Outcome::Committed(value),
            Outcome::Failed(fault) => Outcome::Failed(fault.map(f)),
        }
    }
}
