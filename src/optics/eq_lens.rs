//! Equality-optimised lenses.
//!
//! An [`EqLens`] compares the value being written with the current focus and,
//! when they are equal, hands the source back as-is. For reference lenses this
//! means the very same handle comes back and no copy is allocated; for
//! by-value lenses the setter is simply never called.
//!
//! The optimisation is only sound when the supplied [`Equivalence`] implies
//! observational equality of the focus, otherwise `get` after `set` could
//! observe the old value.
//!
//! # Examples
//!
//! ```
//! use optica::optics::ReferenceCounter;
//! use optica::optics::Lens;
//! use optica::lens_ref;
//!
//! #[derive(Clone, Default, PartialEq, Debug)]
//! struct Endpoint { host: String, port: u16 }
//!
//! let host = lens_ref!(Endpoint, host).strict();
//! let endpoint = Some(ReferenceCounter::new(Endpoint { host: "example.com".to_string(), port: 443 }));
//!
//! let same = host.set(endpoint.clone(), "example.com".to_string());
//! assert!(ReferenceCounter::ptr_eq(same.as_ref().unwrap(), endpoint.as_ref().unwrap()));
//!
//! let moved = host.set(endpoint.clone(), "example.org".to_string());
//! assert!(!ReferenceCounter::ptr_eq(moved.as_ref().unwrap(), endpoint.as_ref().unwrap()));
//! ```

use super::Lens;
use crate::typeclass::Equivalence;

/// A lens whose `set` short-circuits when the value is unchanged.
///
/// Created by [`Lens::with_eq`] or [`Lens::strict`].
pub struct EqLens<L, E> {
    lens: L,
    equivalence: E,
}

impl<L, E> EqLens<L, E> {
    /// Wraps `lens` with the given equivalence.
    #[must_use]
    pub const fn new(lens: L, equivalence: E) -> Self {
        Self { lens, equivalence }
    }

    /// Returns the wrapped lens, dropping the equivalence.
    pub fn into_inner(self) -> L {
        self.lens
    }
}

impl<S, A, L, E> Lens<S, A> for EqLens<L, E>
where
    L: Lens<S, A>,
    E: Equivalence<A>,
{
    fn get(&self, source: &S) -> A {
        self.lens.get(source)
    }

    fn set(&self, source: S, value: A) -> S {
        if self.equivalence.equals(&self.lens.get(&source), &value) {
            source
        } else {
            self.lens.set(source, value)
        }
    }
}

impl<L: Clone, E: Clone> Clone for EqLens<L, E> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            equivalence: self.equivalence.clone(),
        }
    }
}

impl<L: std::fmt::Debug, E> std::fmt::Debug for EqLens<L, E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("EqLens")
            .field("lens", &self.lens)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::optics::FunctionLens;
    use crate::typeclass::StrictEquality;
    use rstest::rstest;

    #[derive(Clone, PartialEq, Debug)]
    struct Counter {
        value: i32,
    }

    #[rstest]
    fn test_setter_not_called_when_equal() {
        let calls = Cell::new(0);
        let lens = FunctionLens::new(
            |counter: &Counter| counter.value,
            |_counter: Counter, value: i32| {
                calls.set(calls.get() + 1);
                Counter { value }
            },
        )
        .with_eq(StrictEquality);

        let counter = lens.set(Counter { value: 1 }, 1);
        assert_eq!(counter, Counter { value: 1 });
        assert_eq!(calls.get(), 0);

        let counter = lens.set(counter, 2);
        assert_eq!(counter, Counter { value: 2 });
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_custom_equivalence() {
        let lens = FunctionLens::new(
            |counter: &Counter| counter.value,
            |_counter: Counter, value: i32| Counter { value },
        )
        .with_eq(|left: &i32, right: &i32| left.abs() == right.abs());

        assert_eq!(lens.set(Counter { value: 3 }, -3), Counter { value: 3 });
        assert_eq!(lens.set(Counter { value: 3 }, 4), Counter { value: 4 });
    }

    #[rstest]
    fn test_get_is_unaffected() {
        let lens = crate::lens!(Counter, value).strict();
        assert_eq!(lens.get(&Counter { value: 8 }), 8);
        assert_eq!(lens.into_inner().get(&Counter { value: 9 }), 9);
    }
}
