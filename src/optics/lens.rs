//! Lens optics for focusing on struct fields.
//!
//! A Lens is an optic that provides get/set access to a field within a larger structure.
//! Lenses are composable, allowing access to deeply nested fields.
//!
//! `get` returns an owned value. This is what lets a lens focus on something
//! that is not stored verbatim in the source, such as the `Option<B>` produced
//! by [`compose_option`](super::OptionLens::compose_option).
//!
//! # Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **GetSet Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(source.clone(), lens.get(&source)) == source
//!    ```
//!
//! 2. **SetGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.get(&lens.set(source, value.clone())) == value
//!    ```
//!
//! 3. **SetSet Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(lens.set(source.clone(), v1), v2.clone()) == lens.set(source, v2)
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::{Lens, FunctionLens};
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! // Using lens! macro
//! let x_lens = lens!(Point, x);
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(x_lens.get(&point), 10);
//!
//! let updated = x_lens.set(point, 100);
//! assert_eq!(updated.x, 100);
//! ```

use std::marker::PhantomData;

use super::eq_lens::EqLens;
use crate::typeclass::{Equivalence, StrictEquality};

/// A Lens focuses on a single field within a larger structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused field)
///
/// # Laws
///
/// 1. **GetSet Law**: `lens.set(source.clone(), lens.get(&source)) == source`
/// 2. **SetGet Law**: `lens.get(&lens.set(source, value.clone())) == value`
/// 3. **SetSet Law**: `lens.set(lens.set(source.clone(), v1), v2.clone()) == lens.set(source, v2)`
pub trait Lens<S, A> {
    /// Reads the focused field.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure
    ///
    /// # Returns
    ///
    /// The focused value
    fn get(&self, source: &S) -> A;

    /// Sets the focused field to a new value, returning a new source.
    ///
    /// # Arguments
    ///
    /// * `source` - The source structure (consumed)
    /// * `value` - The new value for the focused field
    ///
    /// # Returns
    ///
    /// A new source with the focused field updated
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focused field by applying a function.
    ///
    /// This is equivalent to getting the current value, applying the function,
    /// and setting the result.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Lens;
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let point = Point { x: 10, y: 20 };
    /// let doubled = x_lens.modify(point, |x| x * 2);
    /// assert_eq!(doubled.x, 20);
    /// ```
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        let current = self.get(&source);
        self.set(source, function(current))
    }

    /// Composes this lens with another lens to focus on a nested field.
    ///
    /// # Type Parameters
    ///
    /// - `B`: The target type of the other lens
    /// - `L`: The type of the other lens
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Lens;
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { street: String, city: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, address: Address }
    ///
    /// let person_street = lens!(Person, address).compose(lens!(Address, street));
    ///
    /// let person = Person {
    ///     name: "Alice".to_string(),
    ///     address: Address {
    ///         street: "Main St".to_string(),
    ///         city: "Tokyo".to_string(),
    ///     },
    /// };
    ///
    /// assert_eq!(person_street.get(&person), "Main St");
    /// ```
    fn compose<B, L>(self, other: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, other)
    }

    /// Changes the focus type through a pair of inverse functions.
    ///
    /// `forward` and `backward` must be inverses of each other for the
    /// resulting lens to satisfy the lens laws.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Lens;
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Timeout { millis: u64 }
    ///
    /// let seconds = lens!(Timeout, millis).imap(|millis| millis / 1000, |seconds: u64| seconds * 1000);
    ///
    /// let timeout = Timeout { millis: 3000 };
    /// assert_eq!(seconds.get(&timeout), 3);
    /// assert_eq!(seconds.set(timeout, 5), Timeout { millis: 5000 });
    /// ```
    fn imap<B, F, G>(self, forward: F, backward: G) -> ImappedLens<Self, F, G, A>
    where
        Self: Sized,
        F: Fn(A) -> B,
        G: Fn(B) -> A,
    {
        ImappedLens::new(self, forward, backward)
    }

    /// Wraps this lens so that `set` returns the source untouched when the new
    /// value is equal to the current one under `equivalence`.
    fn with_eq<E>(self, equivalence: E) -> EqLens<Self, E>
    where
        Self: Sized,
        E: Equivalence<A>,
    {
        EqLens::new(self, equivalence)
    }

    /// [`with_eq`](Lens::with_eq) using [`PartialEq`].
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::ReferenceCounter;
    /// use optica::optics::Lens;
    /// use optica::lens_ref;
    ///
    /// #[derive(Clone, Default, PartialEq, Debug)]
    /// struct Server { port: u16 }
    ///
    /// let port = lens_ref!(Server, port).strict();
    ///
    /// let server = Some(ReferenceCounter::new(Server { port: 80 }));
    /// let unchanged = port.set(server.clone(), 80);
    /// assert!(ReferenceCounter::ptr_eq(unchanged.as_ref().unwrap(), server.as_ref().unwrap()));
    /// ```
    fn strict(self) -> EqLens<Self, StrictEquality>
    where
        Self: Sized,
        A: PartialEq,
    {
        EqLens::new(self, StrictEquality)
    }
}

/// A lens implemented using getter and setter functions.
///
/// This is the by-value flavour: the setter receives the source by value and
/// returns the updated source. The `lens!` macro generates a `FunctionLens`
/// internally.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `G`: The getter function type
/// - `St`: The setter function type
///
/// # Example
///
/// ```
/// use optica::optics::{Lens, FunctionLens};
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionLens::new(
///     |point: &Point| point.x,
///     |point: Point, x: i32| Point { x, ..point },
/// );
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(x_lens.get(&point), 10);
/// ```
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S, A) -> (S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    ///
    /// # Arguments
    ///
    /// * `getter` - A function that extracts the focused field from the source
    /// * `setter` - A function that creates a new source with the field updated
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn get(&self, source: &S) -> A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .finish_non_exhaustive()
    }
}

/// A lens composed of two lenses.
///
/// `get` reads through the outer lens and then the inner one; `set` reads the
/// intermediate value, writes into it with the inner lens and writes the
/// result back with the outer lens.
///
/// # Type Parameters
///
/// - `L1`: The type of the outer lens
/// - `L2`: The type of the inner lens
/// - `A`: The intermediate type (target of L1, source of L2)
pub struct ComposedLens<L1, L2, A> {
    first: L1,
    second: L2,
    _marker: PhantomData<fn() -> A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new composed lens.
    ///
    /// # Arguments
    ///
    /// * `first` - The outer lens (focuses on the intermediate structure)
    /// * `second` - The inner lens (focuses on the final field)
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
{
    fn get(&self, source: &S) -> B {
        self.second.get(&self.first.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        let intermediate = self.first.get(&source);
        let new_intermediate = self.second.set(intermediate, value);
        self.first.set(source, new_intermediate)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// The identity lens: focuses on the whole source.
pub struct IdentityLens<S> {
    _marker: PhantomData<fn(S) -> S>,
}

impl<S> IdentityLens<S> {
    /// Creates a new identity lens.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<S> Default for IdentityLens<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone> Lens<S, S> for IdentityLens<S> {
    fn get(&self, source: &S) -> S {
        source.clone()
    }

    fn set(&self, _source: S, value: S) -> S {
        value
    }
}

impl<S> Clone for IdentityLens<S> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<S> Copy for IdentityLens<S> {}

impl<S> std::fmt::Debug for IdentityLens<S> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("IdentityLens")
    }
}

/// Creates the identity lens for `S`.
///
/// # Example
///
/// ```
/// use optica::optics::{Lens, identity};
///
/// let id = identity::<i32>();
/// assert_eq!(id.get(&42), 42);
/// assert_eq!(id.set(42, 7), 7);
/// ```
#[must_use]
pub const fn identity<S: Clone>() -> IdentityLens<S> {
    IdentityLens::new()
}

/// A lens whose focus type has been mapped through an isomorphism.
///
/// Created by [`Lens::imap`].
pub struct ImappedLens<L, F, G, A> {
    lens: L,
    forward: F,
    backward: G,
    _marker: PhantomData<fn() -> A>,
}

impl<L, F, G, A> ImappedLens<L, F, G, A> {
    /// Creates a new `ImappedLens`.
    ///
    /// # Arguments
    ///
    /// * `lens` - The underlying lens
    /// * `forward` - Converts the underlying focus to the new focus type
    /// * `backward` - Converts the new focus type back
    #[must_use]
    pub const fn new(lens: L, forward: F, backward: G) -> Self {
        Self {
            lens,
            forward,
            backward,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L, F, G> Lens<S, B> for ImappedLens<L, F, G, A>
where
    L: Lens<S, A>,
    F: Fn(A) -> B,
    G: Fn(B) -> A,
{
    fn get(&self, source: &S) -> B {
        (self.forward)(self.lens.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        self.lens.set(source, (self.backward)(value))
    }
}

impl<L: Clone, F: Clone, G: Clone, A> Clone for ImappedLens<L, F, G, A> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            forward: self.forward.clone(),
            backward: self.backward.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L: std::fmt::Debug, F, G, A> std::fmt::Debug for ImappedLens<L, F, G, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ImappedLens")
            .field("lens", &self.lens)
            .finish_non_exhaustive()
    }
}

/// Creates a by-value lens for a struct field.
///
/// This macro generates a `FunctionLens` that focuses on the specified field
/// of the given struct type. The getter clones the field.
///
/// # Syntax
///
/// ```text
/// lens!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use optica::optics::Lens;
/// use optica::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(x_lens.get(&point), 10);
///
/// let updated = x_lens.set(point, 100);
/// assert_eq!(updated, Point { x: 100, y: 20 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type<$($generic),+>| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type<$($generic),+>, value| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$struct_type| ::std::clone::Clone::clone(&source.$field),
            |mut source: $struct_type, value| {
                source.$field = value;
                source
            },
        )
    };
}
