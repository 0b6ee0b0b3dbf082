//! Equality and ordering with caller-supplied payload comparators.
//!
//! Derived `PartialEq` covers payload types that are themselves comparable;
//! the `*_by` forms here take the comparators as arguments so outcomes over
//! arbitrary payloads can still be compared, mirroring `Iterator::eq_by` and
//! `Iterator::cmp_by`.

use super::types::{Fault, Outcome};
use std::cmp::Ordering;

impl<T, E> Outcome<T, E> {
    /// Structural equality under supplied payload equalities.
    ///
    /// Two outcomes are equal only when they are the same top-level variant,
    /// the same inner tag for failures, and their payloads are equal under
    /// `eq_ok` / `eq_err`. Any variant or tag mismatch is unequal, including
    /// `Settled(v)` vs `Committed(v)`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use commitment::Outcome;
    ///
    /// let a: Outcome<i32, String> = Outcome::Settled(5);
    /// let b: Outcome<i32, String> = Outcome::Committed(5);
    ///
    /// assert!(a.eq_by(&Outcome::Settled(5), |x, y| x == y, |x, y| x == y));
    /// assert!(!a.eq_by(&b, |x, y| x == y, |x, y| x == y));
    /// ```
    pub fn eq_by<F, G>(&self, other: &Self, eq_ok: F, eq_err: G) -> bool
    where
        F: FnOnce(&T, &T) -> bool,
        G: FnOnce(&E, &E) -> bool,
    {
        match (self, other) {
            (Outcome::Settled(a), Outcome::Settled(b)) => eq_ok(a, b),
            (Outcome::Committed(a), Outcome::Committed(b)) => eq_ok(a, b),
            (Outcome::Failed(Fault::Settled(a)), Outcome::Failed(Fault::Settled(b))) => {
                eq_err(a, b)
            }
            (Outcome::Failed(Fault::Committed(a)), Outcome::Failed(Fault::Committed(b))) => {
                eq_err(a, b)
            }
            _ => false,
        }
    }

    /// Total order under supplied payload orderings.
    ///
    /// The order is deliberately coarser than [`eq_by`](Outcome::eq_by): it
    /// ignores the commitment dimension entirely, so outcomes can key ordered
    /// containers purely on success/failure and payload value.
    ///
    /// - Any success orders greater than any failure, whatever either side's
    ///   commitment tag.
    /// - Two successes order by `cmp_ok` on their payloads alone, so
    ///   `Settled(5)` and `Committed(5)` compare equal.
    /// - Two failures order by `cmp_err` on their payloads alone, inner tag
    ///   likewise ignored.
    ///
    /// Because this collapses values that derived `Eq` distinguishes, no
    /// `Ord` impl is provided; use `cmp_by` explicitly.
    ///
    /// # Example
    ///
    /// ```rust
    /// use commitment::{Fault, Outcome};
    /// use std::cmp::Ordering;
    ///
    /// let success: Outcome<i32, String> = Outcome::Settled(5);
    /// let failure: Outcome<i32, String> = Outcome::Failed(Fault::Committed("e".to_string()));
    ///
    /// assert_eq!(
    ///     success.cmp_by(&failure, |x, y| x.cmp(y), |x, y| x.cmp(y)),
    ///     Ordering::Greater,
    /// );
    /// assert_eq!(
    ///     success.cmp_by(&Outcome::Committed(5), |x, y| x.cmp(y), |x, y| x.cmp(y)),
    ///     Ordering::Equal,
    /// );
    /// ```
    pub fn cmp_by<F, G>(&self, other: &Self, cmp_ok: F, cmp_err: G) -> Ordering
    where
        F: FnOnce(&T, &T) -> Ordering,
        G: FnOnce(&E, &E) -> Ordering,
    {
        match (self, other) {
            (Outcome::Settled(a) | Outcome::Committed(a), Outcome::Settled(b) | Outcome::Committed(b)) => {
                cmp_ok(a, b)
            }
            (Outcome::Settled(_) | Outcome::Committed(_), Outcome::Failed(_)) => Ordering::Greater,
            (Outcome::Failed(_), Outcome::Settled(_) | Outcome::Committed(_)) => Ordering::Less,
            (Outcome::Failed(a), Outcome::Failed(b)) => cmp_err(a.as_inner(), b.as_inner()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq(a: &Outcome<i32, &str>, b: &Outcome<i32, &str>) -> bool {
        a.eq_by(b, |x, y| x == y, |x, y| x == y)
    }

    fn cmp(a: &Outcome<i32, &str>, b: &Outcome<i32, &str>) -> Ordering {
        a.cmp_by(b, |x, y| x.cmp(y), |x, y| x.cmp(y))
    }

    #[test]
    fn eq_by_matches_same_variant_and_payload() {
        assert!(eq(&Outcome::Settled(5), &Outcome::Settled(5)));
        assert!(eq(&Outcome::Committed(5), &Outcome::Committed(5)));
        assert!(eq(
            &Outcome::Failed(Fault::Settled("e")),
            &Outcome::Failed(Fault::Settled("e")),
        ));
        assert!(eq(
            &Outcome::Failed(Fault::Committed("e")),
            &Outcome::Failed(Fault::Committed("e")),
        ));
    }

    #[test]
    fn eq_by_rejects_mismatched_variants() {
        assert!(!eq(&Outcome::Settled(5), &Outcome::Committed(5)));
        assert!(!eq(
            &Outcome::Failed(Fault::Settled("e")),
            &Outcome::Failed(Fault::Committed("e")),
        ));
        assert!(!eq(&Outcome::Settled(5), &Outcome::Failed(Fault::Settled("e"))));
    }

    #[test]
    fn eq_by_rejects_mismatched_payloads() {
        assert!(!eq(&Outcome::Settled(5), &Outcome::Settled(6)));
        assert!(!eq(
            &Outcome::Failed(Fault::Committed("e")),
            &Outcome::Failed(Fault::Committed("f")),
        ));
    }

    #[test]
    fn cmp_by_ignores_commitment_tag_on_success() {
        assert_eq!(cmp(&Outcome::Settled(5), &Outcome::Committed(5)), Ordering::Equal);
        assert_eq!(cmp(&Outcome::Committed(5), &Outcome::Settled(5)), Ordering::Equal);
        assert_eq!(cmp(&Outcome::Settled(4), &Outcome::Committed(5)), Ordering::Less);
        assert_eq!(cmp(&Outcome::Committed(6), &Outcome::Settled(5)), Ordering::Greater);
    }

    #[test]
    fn cmp_by_ignores_commitment_tag_on_failure() {
        assert_eq!(
            cmp(
                &Outcome::Failed(Fault::Settled("e")),
                &Outcome::Failed(Fault::Committed("e")),
            ),
            Ordering::Equal,
        );
        assert_eq!(
            cmp(
                &Outcome::Failed(Fault::Committed("a")),
                &Outcome::Failed(Fault::Settled("b")),
            ),
            Ordering::Less,
        );
    }

    #[test]
    fn cmp_by_orders_any_success_above_any_failure() {
        let successes = [Outcome::Settled(0), Outcome::Committed(0)];
        let failures = [
            Outcome::Failed(Fault::Settled("z")),
            Outcome::Failed(Fault::Committed("z")),
        ];

        for s in &successes {
            for f in &failures {
                assert_eq!(cmp(s, f), Ordering::Greater);
                assert_eq!(cmp(f, s), Ordering::Less);
            }
        }
    }

    #[test]
    fn cmp_by_is_reflexive() {
        let all = [
            Outcome::Settled(1),
            Outcome::Committed(1),
            Outcome::Failed(Fault::Settled("e")),
            Outcome::Failed(Fault::Committed("e")),
        ];
        for outcome in &all {
            assert_eq!(cmp(outcome, outcome), Ordering::Equal);
        }
    }
}
