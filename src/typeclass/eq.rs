//! Equivalence type class - an equality predicate supplied as a value.
//!
//! Unlike [`PartialEq`], an [`Equivalence`] is a value that can be passed
//! around, so the same type can be compared in different ways depending on
//! the call site (case-insensitively, by a key, by float tolerance, ...).
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `A`:
//!
//! ```text
//! equals(a, a)                               // reflexivity
//! equals(a, b) == equals(b, a)               // symmetry
//! equals(a, b) && equals(b, c) => equals(a, c) // transitivity
//! ```

/// A type class for equality predicates over `A`.
///
/// Any `Fn(&A, &A) -> bool` is an `Equivalence<A>`.
///
/// # Examples
///
/// ```rust
/// use optica::typeclass::Equivalence;
///
/// let by_length = |left: &String, right: &String| left.len() == right.len();
/// assert!(by_length.equals(&"abc".to_string(), &"xyz".to_string()));
/// assert!(!by_length.equals(&"abc".to_string(), &"xy".to_string()));
/// ```
pub trait Equivalence<A: ?Sized> {
    /// Returns `true` when `left` and `right` are considered equal.
    fn equals(&self, left: &A, right: &A) -> bool;
}

impl<A: ?Sized, F> Equivalence<A> for F
where
    F: Fn(&A, &A) -> bool,
{
    fn equals(&self, left: &A, right: &A) -> bool {
        self(left, right)
    }
}

/// The [`Equivalence`] given by [`PartialEq`].
///
/// # Examples
///
/// ```rust
/// use optica::typeclass::{Equivalence, StrictEquality};
///
/// assert!(StrictEquality.equals("same", "same"));
/// assert!(!StrictEquality.equals(&1.0, &2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StrictEquality;

impl<A: PartialEq + ?Sized> Equivalence<A> for StrictEquality {
    fn equals(&self, left: &A, right: &A) -> bool {
        left == right
    }
}
