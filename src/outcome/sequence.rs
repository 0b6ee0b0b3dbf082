//! Sequential composition.
//!
//! Both combinators enforce the monotonicity rule for the success path: once
//! a step has committed, no later step can make the composed result look
//! uncommitted. A continuation that itself commits nothing still produces a
//! `Committed` success when an earlier step committed.
//!
//! The failure path differs between the two combinators. `and_then` passes a
//! continuation's failure through with whatever tag the continuation
//! produced, even when the first step had committed; `flatten` upgrades an
//! inner failure's tag whenever the outer wrapper was `Committed`. The
//! mismatch is intentional and kept as-is; callers needing full monotonicity
//! on the failure side must not rely on `and_then` for it.

use super::types::{Fault, Outcome};

impl<T, E> Outcome<T, E> {
    /// Sequence a dependent operation after this one.
    ///
    /// - A failure short-circuits: `op` is never invoked and the failure's
    ///   existing tag is preserved.
    /// - After `Settled(v)`, the result is `op(v)` unchanged; nothing was
    ///   committed before this point, so whatever tag `op` produces stands.
    /// - After `Committed(v)`, a success from `op` is upgraded to
    ///   `Committed` even if `op` returned `Settled`. A failure from `op` is
    ///   passed through without upgrading its tag (see the module docs).
    ///
    /// # Example
    ///
    /// ```rust
    /// use commitment::Outcome;
    ///
    /// let first: Outcome<i32, String> = Outcome::Committed(10);
    /// let result = first.and_then(|n| Outcome::Settled(n + 5));
    ///
    /// // The continuation committed nothing, but the earlier commitment
    /// // still marks the composed result.
    /// assert_eq!(result, Outcome::Committed(15));
    /// ```
    pub fn and_then<F, U>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Failed(fault) => Outcome::Failed(fault),
            Outcome::Settled(value) => op(value),
            Outcome::Committed(value) => match op(value) {
                Outcome::Settled(next) | Outcome::Committed(next) => Outcome::Committed(next),
                Outcome::Failed(fault) => Outcome::Failed(fault),
            },
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Collapse one level of nesting.
    ///
    /// A `Settled` wrapper contributes nothing and yields the inner outcome
    /// unchanged. A `Committed` wrapper marks everything inside it: an inner
    /// success becomes `Committed`, and an inner failure's tag is forced to
    /// `Fault::Committed` whatever it was. An outer failure is already flat.
    ///
    /// # Example
    ///
    /// ```rust
    /// use commitment::{Fault, Outcome};
    ///
    /// let nested: Outcome<Outcome<i32, String>, String> =
    ///     Outcome::Committed(Outcome::Failed(Fault::Settled("late".to_string())));
    ///
    /// assert_eq!(
    ///     nested.flatten(),
    ///     Outcome::Failed(Fault::Committed("late".to_string())),
    /// );
    /// ```
    pub fn flatten(self) -> Outcome<T, E> {
        match self {
            Outcome::Settled(inner) => inner,
            Outcome::Committed(inner) => match inner {
                Outcome::Settled(value) | Outcome::Committed(value) => Outcome::Committed(value),
                Outcome::Failed(fault) => Outcome::Failed(Fault::Committed(fault.into_inner())),
            },
            Outcome::Failed(fault) => Outcome::Failed(fault),
        }
    }
}
