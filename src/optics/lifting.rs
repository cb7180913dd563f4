//! Lifting lenses between definite and optional focuses.
//!
//! - [`from_predicate`](LensLiftExtension::from_predicate): `Lens<S, A>` → `LensO<S, A>`,
//!   the focus is present when a predicate holds
//! - [`from_nillable`](LensLiftExtension::from_nillable): the same with "pointer is
//!   not null" as the predicate
//! - [`from_zero`](LensLiftExtension::from_zero): the same with "not the default
//!   value" as the predicate
//! - [`from_nullable_prop`](LensLiftExtension::from_nullable_prop): `Lens<S, A>` →
//!   `Lens<S, A>`, substituting a default on read when the value is meaningless
//!
//! Every method accepts any lens, so applying them to a
//! [`FunctionRefLens`](super::FunctionRefLens) gives the reference variants.
//!
//! # Examples
//!
//! ```
//! use optica::optics::{Lens, LensLiftExtension};
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Limits { max_connections: Option<Box<u32>> }
//!
//! let max_connections = lens!(Limits, max_connections).from_nillable();
//!
//! let unlimited = Limits { max_connections: None };
//! assert_eq!(max_connections.get(&unlimited), None);
//!
//! let limited = max_connections.set(unlimited, Some(Some(Box::new(64))));
//! assert_eq!(limited.max_connections.as_deref(), Some(&64));
//!
//! let cleared = max_connections.set(limited, None);
//! assert_eq!(cleared.max_connections, None);
//! ```

use std::rc::Rc;
use std::sync::Arc;

use super::Lens;

/// Types with a distinguished null value, such as nullable pointers.
pub trait Nillable {
    /// Returns the null value.
    fn nil() -> Self;

    /// Returns `true` if `self` is the null value.
    fn is_nil(&self) -> bool;
}

macro_rules! impl_nillable_for_pointer {
    ($($pointer:ident),+) => {
        $(
            impl<T: ?Sized> Nillable for Option<$pointer<T>> {
                fn nil() -> Self {
                    None
                }

                fn is_nil(&self) -> bool {
                    self.is_none()
                }
            }
        )+
    };
}

impl_nillable_for_pointer!(Box, Rc, Arc);

fn is_not_nil<A: Nillable>(value: &A) -> bool {
    !value.is_nil()
}

fn is_not_zero<A: Default + PartialEq>(value: &A) -> bool {
    *value != A::default()
}

// Extend every Lens with the lifting constructors
impl<S, A, L> LensLiftExtension<S, A> for L where L: Lens<S, A> {}

/// Extension trait turning definite lenses into optional ones and back.
pub trait LensLiftExtension<S, A>: Lens<S, A> {
    /// Lifts this lens into a `LensO` whose focus is present when `predicate`
    /// holds for the current value.
    ///
    /// Writing `None` stores `nil_value`; writing `Some(a)` stores `a` without
    /// checking it against `predicate`.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Lens, LensLiftExtension};
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Process { exit_code: i32 }
    ///
    /// let failure = lens!(Process, exit_code).from_predicate(|code: &i32| *code != 0, 0);
    ///
    /// assert_eq!(failure.get(&Process { exit_code: 0 }), None);
    /// assert_eq!(failure.get(&Process { exit_code: 2 }), Some(2));
    /// assert_eq!(failure.set(Process { exit_code: 2 }, None), Process { exit_code: 0 });
    /// ```
    fn from_predicate<P>(self, predicate: P, nil_value: A) -> PredicateLens<Self, P, A>
    where
        Self: Sized,
        P: Fn(&A) -> bool,
        A: Clone,
    {
        PredicateLens::new(self, predicate, nil_value)
    }

    /// Lifts a lens onto a nullable pointer into a `LensO` that is absent
    /// exactly when the pointer is null.
    ///
    /// The focus is `Option<Option<P>>`. Writing `Some(None)` stores a null
    /// pointer, which reads back as `None` rather than `Some(None)`, so
    /// SetGet does not hold for that one input.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Lens, LensLiftExtension};
    /// use optica::lens;
    ///
    /// #[derive(Clone, Default, PartialEq, Debug)]
    /// struct Slot { value: Option<Box<i32>> }
    ///
    /// let value = lens!(Slot, value).from_nillable();
    ///
    /// let filled = value.set(Slot::default(), Some(Some(Box::new(7))));
    /// assert_eq!(value.get(&filled), Some(Some(Box::new(7))));
    ///
    /// let nulled = value.set(filled, Some(None));
    /// assert_eq!(nulled, Slot { value: None });
    /// assert_eq!(value.get(&nulled), None);
    /// ```
    fn from_nillable(self) -> PredicateLens<Self, fn(&A) -> bool, A>
    where
        Self: Sized,
        A: Nillable + Clone,
    {
        PredicateLens::new(self, is_not_nil::<A> as fn(&A) -> bool, A::nil())
    }

    /// Lifts this lens into a `LensO` that is absent exactly when the value
    /// equals `A::default()`.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Lens, LensLiftExtension};
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct User { nickname: String }
    ///
    /// let nickname = lens!(User, nickname).from_zero();
    /// assert_eq!(nickname.get(&User { nickname: String::new() }), None);
    /// assert_eq!(nickname.set(User { nickname: "neo".to_string() }, None).nickname, "");
    /// ```
    fn from_zero(self) -> PredicateLens<Self, fn(&A) -> bool, A>
    where
        Self: Sized,
        A: Default + PartialEq + Clone,
    {
        PredicateLens::new(self, is_not_zero::<A> as fn(&A) -> bool, A::default())
    }

    /// Wraps this lens so that reads substitute `default` whenever
    /// `is_nullable` rejects the current value. Writes pass through unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Lens, LensLiftExtension};
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Page { title: String }
    ///
    /// let title = lens!(Page, title).from_nullable_prop(
    ///     |title: String| if title.trim().is_empty() { None } else { Some(title) },
    ///     "Untitled".to_string(),
    /// );
    ///
    /// assert_eq!(title.get(&Page { title: "  ".to_string() }), "Untitled");
    /// assert_eq!(title.get(&Page { title: "Home".to_string() }), "Home");
    /// assert_eq!(title.set(Page { title: "Home".to_string() }, String::new()).title, "");
    /// ```
    fn from_nullable_prop<N>(self, is_nullable: N, default: A) -> NullablePropLens<Self, N, A>
    where
        Self: Sized,
        N: Fn(A) -> Option<A>,
        A: Clone,
    {
        NullablePropLens::new(self, is_nullable, default)
    }
}

/// A `LensO` whose presence is decided by a predicate on a definite focus.
///
/// Created by [`LensLiftExtension::from_predicate`],
/// [`LensLiftExtension::from_nillable`] and [`LensLiftExtension::from_zero`].
pub struct PredicateLens<L, P, A> {
    lens: L,
    predicate: P,
    nil_value: A,
}

impl<L, P, A> PredicateLens<L, P, A> {
    /// Creates a new `PredicateLens`.
    ///
    /// # Arguments
    ///
    /// * `lens` - The lens onto the definite focus
    /// * `predicate` - Decides whether the current value counts as present
    /// * `nil_value` - The value stored when `None` is written
    #[must_use]
    pub const fn new(lens: L, predicate: P, nil_value: A) -> Self {
        Self {
            lens,
            predicate,
            nil_value,
        }
    }
}

impl<S, A, L, P> Lens<S, Option<A>> for PredicateLens<L, P, A>
where
    L: Lens<S, A>,
    P: Fn(&A) -> bool,
    A: Clone,
{
    fn get(&self, source: &S) -> Option<A> {
        Some(self.lens.get(source)).filter(|value| (self.predicate)(value))
    }

    fn set(&self, source: S, value: Option<A>) -> S {
        let stored = value.unwrap_or_else(|| self.nil_value.clone());
        self.lens.set(source, stored)
    }
}

impl<L: Clone, P: Clone, A: Clone> Clone for PredicateLens<L, P, A> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            predicate: self.predicate.clone(),
            nil_value: self.nil_value.clone(),
        }
    }
}

impl<L: std::fmt::Debug, P, A: std::fmt::Debug> std::fmt::Debug for PredicateLens<L, P, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("PredicateLens")
            .field("lens", &self.lens)
            .field("nil_value", &self.nil_value)
            .finish_non_exhaustive()
    }
}

/// A lens that reads a default in place of meaningless values.
///
/// Created by [`LensLiftExtension::from_nullable_prop`].
pub struct NullablePropLens<L, N, A> {
    lens: L,
    is_nullable: N,
    default: A,
}

impl<L, N, A> NullablePropLens<L, N, A> {
    /// Creates a new `NullablePropLens`.
    ///
    /// # Arguments
    ///
    /// * `lens` - The underlying lens
    /// * `is_nullable` - Returns `None` for values that should read as `default`
    /// * `default` - The value read in their place
    #[must_use]
    pub const fn new(lens: L, is_nullable: N, default: A) -> Self {
        Self {
            lens,
            is_nullable,
            default,
        }
    }
}

impl<S, A, L, N> Lens<S, A> for NullablePropLens<L, N, A>
where
    L: Lens<S, A>,
    N: Fn(A) -> Option<A>,
    A: Clone,
{
    fn get(&self, source: &S) -> A {
        (self.is_nullable)(self.lens.get(source)).unwrap_or_else(|| self.default.clone())
    }

    fn set(&self, source: S, value: A) -> S {
        self.lens.set(source, value)
    }
}

impl<L: Clone, N: Clone, A: Clone> Clone for NullablePropLens<L, N, A> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            is_nullable: self.is_nullable.clone(),
            default: self.default.clone(),
        }
    }
}

impl<L: std::fmt::Debug, N, A: std::fmt::Debug> std::fmt::Debug for NullablePropLens<L, N, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("NullablePropLens")
            .field("lens", &self.lens)
            .field("default", &self.default)
            .finish_non_exhaustive()
    }
}
