//! Predicates, side-effecting visits, and fail-fast shape assertions.

use super::types::{Fault, Outcome};
use std::fmt::Debug;

impl<T, E> Outcome<T, E> {
    /// Check whether this outcome is a success, whatever its commitment tag.
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Settled(_) | Outcome::Committed(_))
    }

    /// Check whether this outcome is a failure, whatever its inner tag.
    pub fn is_err(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    /// Check whether a commitment occurred, on either the success or the
    /// failure side.
    pub fn is_committed(&self) -> bool {
        matches!(
            self,
            Outcome::Committed(_) | Outcome::Failed(Fault::Committed(_))
        )
    }

    /// Check whether no commitment occurred, on either side.
    pub fn is_settled(&self) -> bool {
        matches!(
            self,
            Outcome::Settled(_) | Outcome::Failed(Fault::Settled(_))
        )
    }

    /// Run `f` on the success payload; a failure is left alone.
    ///
    /// # Example
    ///
    /// ```rust
    /// use commitment::Outcome;
    ///
    /// let mut total = 0;
    /// let outcome: Outcome<i32, String> = Outcome::Committed(5);
    /// outcome.for_each(|n| total += n);
    /// assert_eq!(total, 5);
    /// ```
    pub fn for_each<F>(&self, f: F)
    where
        F: FnOnce(&T),
    {
        match self {
            Outcome::Settled(value) | Outcome::Committed(value) => f(value),
            Outcome::Failed(_) => {}
        }
    }
}

/// Shape assertions.
///
/// Each panics when the value is not of the expected shape. A failed
/// assertion here means a programming error, not a recoverable condition;
/// none of these belong in normal control flow.
impl<T: Debug, E: Debug> Outcome<T, E> {
    /// Panic unless this is a success (either tag).
    pub fn assert_ok(&self) {
        if !self.is_ok() {
            panic!("expected a success outcome, got {self:?}");
        }
    }

    /// Panic unless this is a failure (either inner tag).
    pub fn assert_err(&self) {
        if !self.is_err() {
            panic!("expected a failure outcome, got {self:?}");
        }
    }

    /// Panic unless no commitment occurred.
    pub fn assert_settled(&self) {
        if !self.is_settled() {
            panic!("expected a settled outcome, got {self:?}");
        }
    }

    /// Panic unless a commitment occurred.
    pub fn assert_committed(&self) {
        if !self.is_committed() {
            panic!("expected a committed outcome, got {self:?}");
        }
    }
}
