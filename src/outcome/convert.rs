//! Bridges to and from `Option` and `Result`.
//!
//! `Option` and `Result` carry no commitment tag, so the conversions here are
//! lossy in one direction: `ok` and `into_result` discard the tag, and the
//! `from_*` constructors require the caller to supply it (or default it to
//! "nothing committed", the only safe assumption for a bare `Option`).

use super::types::{Fault, Outcome};

impl<T, E> Outcome<T, E> {
    /// Build an outcome from an optional value.
    ///
    /// A present value becomes `Settled`; an absent one becomes a settled
    /// failure carrying `err`. An `Option` records no commitments, so neither
    /// side is tagged `Committed`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use commitment::{Fault, Outcome};
    ///
    /// assert_eq!(Outcome::from_option(Some(42), "missing"), Outcome::Settled(42));
    /// assert_eq!(
    ///     Outcome::from_option(None::<i32>, "missing"),
    ///     Outcome::Failed(Fault::Settled("missing")),
    /// );
    /// ```
    pub fn from_option(opt: Option<T>, err: E) -> Self {
        match opt {
            Some(value) => Outcome::Settled(value),
            None => Outcome::Failed(Fault::Settled(err)),
        }
    }

    /// Extract the success payload, discarding the commitment tag.
    ///
    /// # Example
    ///
    /// ```rust
    /// use commitment::{Fault, Outcome};
    ///
    /// let committed: Outcome<i32, String> = Outcome::Committed(7);
    /// let failed: Outcome<i32, String> = Outcome::Failed(Fault::Committed("e".to_string()));
    ///
    /// assert_eq!(committed.ok(), Some(7));
    /// assert_eq!(failed.ok(), None);
    /// ```
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Settled(value) | Outcome::Committed(value) => Some(value),
            Outcome::Failed(_) => None,
        }
    }

    /// Collapse to a plain `Result`, discarding commitment tags on both
    /// sides.
    ///
    /// # Example
    ///
    /// ```rust
    /// use commitment::{Fault, Outcome};
    ///
    /// let outcome: Outcome<i32, String> = Outcome::Failed(Fault::Committed("e".to_string()));
    /// assert_eq!(outcome.into_result(), Err("e".to_string()));
    /// ```
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Settled(value) | Outcome::Committed(value) => Ok(value),
            Outcome::Failed(fault) => Err(fault.into_inner()),
        }
    }

    /// Build an outcome from a plain `Result` plus the commitment fact the
    /// `Result` could not carry.
    ///
    /// With `committed == true`, both sides come out tagged `Committed`; with
    /// `false`, both come out `Settled`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use commitment::{Fault, Outcome};
    ///
    /// assert_eq!(Outcome::<_, String>::from_result(Ok(7), true), Outcome::Committed(7));
    /// assert_eq!(
    ///     Outcome::<i32, _>::from_result(Err("e"), false),
    ///     Outcome::Failed(Fault::Settled("e")),
    /// );
    /// ```
    pub fn from_result(res: Result<T, E>, committed: bool) -> Self {
        match (res, committed) {
            (Ok(value), true) => Outcome::Committed(value),
            (Ok(value), false) => Outcome::Settled(value),
            (Err(err), true) => Outcome::Failed(Fault::Committed(err)),
            (Err(err), false) => Outcome::Failed(Fault::Settled(err)),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}
