//! The `Outcome` and `Fault` value types.
//!
//! An `Outcome` is produced at the return point of an operation and consumed
//! immediately by its caller. It is a plain value: no interior mutability,
//! no shared state, nothing pending. The commitment tag it carries is
//! supplied by the operation that produced it; this library only propagates
//! the tag, it never detects commitments itself.

use serde::{Deserialize, Serialize};

/// The result of an operation that may have committed irrevocable state
/// before it succeeded or failed.
///
/// A "commitment" is any side effect the operation cannot take back, made at
/// an await point before the operation returned. After an async call returns,
/// the caller has no other way to learn whether such a commitment happened,
/// so the operation reports it in its return value.
///
/// Four outcomes are distinguishable:
///
/// - `Settled(v)`: succeeded, and nothing was committed along the way.
/// - `Committed(v)`: succeeded after at least one commitment.
/// - `Failed(Fault::Settled(e))`: failed before committing anything.
/// - `Failed(Fault::Committed(e))`: failed, but something was committed
///   first and is now irrevocable.
///
/// A `Settled` failure means the operation can simply be retried or abandoned;
/// a `Committed` failure means the caller must reconcile whatever state the
/// operation left behind.
///
/// # Example
///
/// ```rust
/// use commitment::{Fault, Outcome};
///
/// fn reserve(seats: u32) -> Outcome<u32, String> {
///     if seats == 0 {
///         // Rejected up front, nothing written anywhere.
///         Outcome::Failed(Fault::Settled("zero seats".to_string()))
///     } else {
///         // The reservation was durably recorded before we returned.
///         Outcome::Committed(seats)
///     }
/// }
///
/// assert!(reserve(2).is_committed());
/// assert!(reserve(0).is_settled());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome<T, E> {
    /// Success with no commitment having occurred.
    Settled(T),
    /// Success after at least one commitment.
    Committed(T),
    /// Failure; the `Fault` records whether a commitment preceded it.
    Failed(Fault<E>),
}

/// The error side of an [`Outcome`], carrying its own commitment tag.
///
/// Failure and commitment are orthogonal: an operation can fail cleanly
/// (`Settled`) or fail after already having changed persistent state
/// (`Committed`). Keeping the tag nested here, rather than flattening
/// `Outcome` into four variants, lets success and failure each be mapped on
/// their own axis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fault<E> {
    /// The failure happened before any commitment.
    Settled(E),
    /// At least one commitment happened before the failure.
    Committed(E),
}

impl<E> Fault<E> {
    /// Consume the fault and return the error payload.
    pub fn into_inner(self) -> E {
        match self {
            Fault::Settled(err) | Fault::Committed(err) => err,
        }
    }

    /// Borrow the error payload.
    pub fn as_inner(&self) -> &E {
        match self {
            Fault::Settled(err) | Fault::Committed(err) => err,
        }
    }

    /// Map the error payload, preserving the commitment tag.
    pub fn map<F, U>(self, f: F) -> Fault<U>
    where
        F: FnOnce(E) -> U,
    {
        match self {
            Fault::Settled(err) => Fault::Settled(f(err)),
            Fault::Committed(err) => Fault::Committed(f(err)),
        }
    }

    /// Check whether a commitment preceded this failure.
    pub fn is_committed(&self) -> bool {
        matches!(self, Fault::Committed(_))
    }

    /// Check whether this failure happened with no prior commitment.
    pub fn is_settled(&self) -> bool {
        matches!(self, Fault::Settled(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fault_into_inner_returns_payload_for_both_tags() {
        assert_eq!(Fault::Settled("e").into_inner(), "e");
        assert_eq!(Fault::Committed("e").into_inner(), "e");
    }

    #[test]
    fn fault_map_preserves_tag() {
        assert_eq!(
            Fault::Settled(2).map(|n| n * 10),
            Fault::Settled(20)
        );
        assert_eq!(
            Fault::Committed(2).map(|n| n * 10),
            Fault::Committed(20)
        );
    }

    #[test]
    fn fault_predicates_are_duals() {
        let settled: Fault<i32> = Fault::Settled(1);
        let committed: Fault<i32> = Fault::Committed(1);

        assert!(settled.is_settled());
        assert!(!settled.is_committed());
        assert!(committed.is_committed());
        assert!(!committed.is_settled());
    }

    #[test]
    fn outcome_equality_is_structural() {
        let a: Outcome<i32, String> = Outcome::Settled(5);
        let b: Outcome<i32, String> = Outcome::Committed(5);

        assert_eq!(a, Outcome::Settled(5));
        assert_ne!(a, b);
        assert_ne!(
            Outcome::<i32, String>::Failed(Fault::Settled("e".to_string())),
            Outcome::<i32, String>::Failed(Fault::Committed("e".to_string())),
        );
    }

    #[test]
    fn outcome_is_cloneable() {
        let outcome: Outcome<i32, String> = Outcome::Committed(7);
        assert_eq!(outcome.clone(), outcome);
    }

    #[test]
    fn outcome_serializes_correctly() {
        let outcomes: Vec<Outcome<i32, String>> = vec![
            Outcome::Settled(1),
            Outcome::Committed(2),
            Outcome::Failed(Fault::Settled("a".to_string())),
            Outcome::Failed(Fault::Committed("b".to_string())),
        ];

        for outcome in outcomes {
            let json = serde_json::to_string(&outcome).unwrap();
            let deserialized: Outcome<i32, String> = serde_json::from_str(&json).unwrap();
            assert_eq!(outcome, deserialized);
        }
    }
}
