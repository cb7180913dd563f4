//! Optional optics for focusing on elements that may or may not exist.
//!
//! An Optional is an optic that provides get/set access to a value that
//! may or may not be present. It is the result of composing a Lens with a Prism.
//!
//! `set` on an Optional whose focus is absent is a no-op: the source is
//! returned unchanged. This is what makes the GetOptionSet law hold for
//! sources where the prism does not match.
//!
//! # Laws
//!
//! 1. **`GetOptionSet` Law**: Getting and setting back yields the original.
//!    ```text
//!    if let Some(value) = optional.get_option(&source) then
//!        optional.set(source.clone(), value) == source
//!    if optional.get_option(&source).is_none() then
//!        optional.set(source.clone(), anything) == source
//!    ```
//!
//! 2. **`SetGetOption` Law**: Setting then getting yields the set value.
//!    ```text
//!    if optional.get_option(&source).is_some() then
//!        optional.get_option(&optional.set(source, value.clone())) == Some(value)
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::{LensComposeExtension, Optional};
//! use optica::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Credentials { Password(String), Token(String) }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Account { credentials: Credentials }
//!
//! let password = lens!(Account, credentials).compose_prism(prism!(Credentials, Password));
//!
//! let account = Account { credentials: Credentials::Password("hunter2".to_string()) };
//! assert_eq!(password.get_option(&account), Some("hunter2".to_string()));
//!
//! // Not a password: set leaves the account alone
//! let token = Account { credentials: Credentials::Token("abc".to_string()) };
//! assert_eq!(password.set(token.clone(), "secret".to_string()), token);
//! ```

use std::marker::PhantomData;

use super::lens::Lens;
use super::lens_ref::Handle;
use super::prism::Prism;

/// An Optional focuses on a value that may or may not exist.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused element, if present)
pub trait Optional<S, A> {
    /// Attempts to read the focused element.
    ///
    /// Returns `Some` if the element is present, `None` otherwise.
    fn get_option(&self, source: &S) -> Option<A>;

    /// Sets the focused element to a new value.
    ///
    /// If the element is not present, the source is returned unchanged.
    fn set(&self, source: S, value: A) -> S;

    /// Modifies the focused element if present.
    ///
    /// Returns `Some` with the modified source if the element is present,
    /// `None` otherwise.
    fn modify_option<F>(&self, source: S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        let maybe_value = self.get_option(&source);
        maybe_value.map(|value| self.set(source, function(value)))
    }

    /// Modifies the focused element if present, otherwise returns the original source.
    fn modify<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.get_option(&source) {
            Some(value) => self.set(source, function(value)),
            None => source,
        }
    }

    /// Checks if the focused element is present.
    fn is_present(&self, source: &S) -> bool {
        self.get_option(source).is_some()
    }

    /// Composes this optional with a prism to focus on a nested optional element.
    fn compose<B, P>(self, other: P) -> ComposedOptional<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedOptional::new(self, other)
    }
}

/// An optional implemented using `get_option` and `set` functions.
///
/// The setter is only invoked when `get_option` finds a value; for absent
/// focuses `set` returns the source unchanged.
///
/// # Example
///
/// ```
/// use optica::optics::{FunctionOptional, Optional};
///
/// let head = FunctionOptional::new(
///     |items: &Vec<i32>| items.first().copied(),
///     |mut items: Vec<i32>, value: i32| {
///         items[0] = value;
///         items
///     },
/// );
///
/// assert_eq!(head.set(vec![1, 2], 9), vec![9, 2]);
/// assert_eq!(head.set(Vec::new(), 9), Vec::<i32>::new());
/// ```
pub struct FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(S, A) -> (S, A)>,
}

impl<S, A, G, St> FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionOptional`.
    ///
    /// # Arguments
    ///
    /// * `getter` - Reads the focus if it is present
    /// * `setter` - Writes the focus; only called when the focus is present
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Optional<S, A> for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    fn get_option(&self, source: &S) -> Option<A> {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        if self.is_present(&source) {
            (self.setter)(source, value)
        } else {
            source
        }
    }
}

impl<S, A, G, St> Clone for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A> + Clone,
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

impl<S, A, G, St> std::fmt::Debug for FunctionOptional<S, A, G, St>
where
    G: Fn(&S) -> Option<A>,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionOptional")
            .finish_non_exhaustive()
    }
}

/// The result of composing a Lens with a Prism.
///
/// `set` first checks whether the prism matches the value under the lens. On a
/// match it writes `prism.review(value)` through the lens; otherwise it
/// returns the source unchanged.
///
/// # Type Parameters
///
/// - `L`: The type of the lens
/// - `P`: The type of the prism
/// - `A`: The intermediate type (target of L, source of P)
pub struct LensPrismComposition<L, P, A> {
    lens: L,
    prism: P,
    _marker: PhantomData<fn() -> A>,
}

impl<L, P, A> LensPrismComposition<L, P, A> {
    /// Creates a new `LensPrismComposition`.
    ///
    /// # Arguments
    ///
    /// * `lens` - The lens that focuses on the intermediate structure
    /// * `prism` - The prism that focuses on the final value
    #[must_use]
    pub const fn new(lens: L, prism: P) -> Self {
        Self {
            lens,
            prism,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L, P> Optional<S, B> for LensPrismComposition<L, P, A>
where
    L: Lens<S, A>,
    P: Prism<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.prism.preview(&self.lens.get(source))
    }

    fn set(&self, source: S, value: B) -> S {
        if self.is_present(&source) {
            self.lens.set(source, self.prism.review(value))
        } else {
            source
        }
    }
}

impl<L: Clone, P: Clone, A> Clone for LensPrismComposition<L, P, A> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            prism: self.prism.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L: std::fmt::Debug, P: std::fmt::Debug, A> std::fmt::Debug for LensPrismComposition<L, P, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("LensPrismComposition")
            .field("lens", &self.lens)
            .field("prism", &self.prism)
            .finish()
    }
}

/// The nil-safe composition of a reference lens with a Prism.
///
/// A `None` handle never matches: `get_option` returns `None` and `set` hands
/// the `None` back. A reference lens reads `T::default()` through a null
/// handle, so the plain [`LensPrismComposition`] could otherwise match on a
/// value that does not exist. On a match the write goes through the reference
/// lens, which copies before mutating.
///
/// # Type Parameters
///
/// - `L`: The type of the reference lens
/// - `P`: The type of the prism
/// - `T`: The pointee type of the handle
/// - `A`: The intermediate type (target of L, source of P)
pub struct RefLensPrismComposition<L, P, T, A> {
    inner: LensPrismComposition<L, P, A>,
    _marker: PhantomData<fn() -> T>,
}

impl<L, P, T, A> RefLensPrismComposition<L, P, T, A> {
    /// Creates a new `RefLensPrismComposition`.
    #[must_use]
    pub const fn new(lens: L, prism: P) -> Self {
        Self {
            inner: LensPrismComposition::new(lens, prism),
            _marker: PhantomData,
        }
    }
}

impl<T, A, B, L, P> Optional<Handle<T>, B> for RefLensPrismComposition<L, P, T, A>
where
    L: Lens<Handle<T>, A>,
    P: Prism<A, B>,
{
    fn get_option(&self, source: &Handle<T>) -> Option<B> {
        source
            .as_ref()
            .and_then(|_| self.inner.get_option(source))
    }

    fn set(&self, source: Handle<T>, value: B) -> Handle<T> {
        if source.is_none() {
            return source;
        }
        self.inner.set(source, value)
    }
}

impl<L: Clone, P: Clone, T, A> Clone for RefLensPrismComposition<L, P, T, A> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L: std::fmt::Debug, P: std::fmt::Debug, T, A> std::fmt::Debug
    for RefLensPrismComposition<L, P, T, A>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("RefLensPrismComposition")
            .field("inner", &self.inner)
            .finish()
    }
}

/// The result of composing an Optional with a Prism.
///
/// # Type Parameters
///
/// - `O`: The type of the optional
/// - `P`: The type of the prism
/// - `A`: The intermediate type
pub struct ComposedOptional<O, P, A> {
    first: O,
    second: P,
    _marker: PhantomData<fn() -> A>,
}

impl<O, P, A> ComposedOptional<O, P, A> {
    /// Creates a new `ComposedOptional`.
    ///
    /// # Arguments
    ///
    /// * `first` - The outer optional
    /// * `second` - The prism applied to the optional's focus
    #[must_use]
    pub const fn new(first: O, second: P) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, O, P> Optional<S, B> for ComposedOptional<O, P, A>
where
    O: Optional<S, A>,
    P: Prism<A, B>,
{
    fn get_option(&self, source: &S) -> Option<B> {
        self.first
            .get_option(source)
            .and_then(|intermediate| self.second.preview(&intermediate))
    }

    fn set(&self, source: S, value: B) -> S {
        if self.is_present(&source) {
            self.first.set(source, self.second.review(value))
        } else {
            source
        }
    }
}

impl<O: Clone, P: Clone, A> Clone for ComposedOptional<O, P, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<O: std::fmt::Debug, P: std::fmt::Debug, A> std::fmt::Debug for ComposedOptional<O, P, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedOptional")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

// Extend Lens trait to support compose_prism
impl<S, A, L> LensComposeExtension<S, A> for L where L: Lens<S, A> {}

/// Extension trait for Lens to compose with Prism.
pub trait LensComposeExtension<S, A>: Lens<S, A> {
    /// Composes this lens with a prism to create an Optional.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{LensComposeExtension, Optional};
    /// use optica::{lens, prism};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape { Circle(f64), Square(f64) }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Sprite { shape: Shape }
    ///
    /// let radius = lens!(Sprite, shape).compose_prism(prism!(Shape, Circle));
    ///
    /// let sprite = Sprite { shape: Shape::Circle(1.0) };
    /// assert_eq!(radius.get_option(&sprite), Some(1.0));
    /// assert_eq!(radius.set(sprite, 2.0).shape, Shape::Circle(2.0));
    /// ```
    fn compose_prism<B, P>(self, prism: P) -> LensPrismComposition<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        LensPrismComposition::new(self, prism)
    }

    /// Composes a reference lens with a prism, treating a null handle as a
    /// non-match.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Handle, LensComposeExtension, Optional, ReferenceCounter};
    /// use optica::{lens_ref, prism};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape { Circle(f64), Square(f64) }
    ///
    /// impl Default for Shape {
    ///     fn default() -> Self { Shape::Circle(0.0) }
    /// }
    ///
    /// #[derive(Clone, Default, PartialEq, Debug)]
    /// struct Sprite { shape: Shape }
    ///
    /// let radius = lens_ref!(Sprite, shape).compose_prism_ref(prism!(Shape, Circle));
    ///
    /// let nothing: Handle<Sprite> = None;
    /// assert_eq!(radius.get_option(&nothing), None);
    /// assert_eq!(radius.set(None, 2.0), None);
    ///
    /// let sprite = Some(ReferenceCounter::new(Sprite { shape: Shape::Circle(1.0) }));
    /// assert_eq!(radius.get_option(&radius.set(sprite, 2.0)), Some(2.0));
    /// ```
    fn compose_prism_ref<T, B, P>(self, prism: P) -> RefLensPrismComposition<Self, P, T, A>
    where
        Self: Sized + Lens<Handle<T>, A>,
        P: Prism<A, B>,
    {
        RefLensPrismComposition::new(self, prism)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::ReferenceCounter;
    use crate::{lens, lens_ref, prism};
    use rstest::rstest;

    #[derive(Clone, PartialEq, Debug)]
    enum Slot {
        Filled(i32),
        Empty,
    }

    impl Default for Slot {
        fn default() -> Self {
            Self::Filled(0)
        }
    }

    #[derive(Clone, Default, PartialEq, Debug)]
    struct Container {
        slot: Slot,
    }

    #[rstest]
    fn test_lens_prism_composition_get_option_some() {
        let optional = lens!(Container, slot).compose_prism(prism!(Slot, Filled));
        let container = Container {
            slot: Slot::Filled(42),
        };
        assert_eq!(optional.get_option(&container), Some(42));
    }

    #[rstest]
    fn test_lens_prism_composition_set_on_match() {
        let optional = lens!(Container, slot).compose_prism(prism!(Slot, Filled));
        let container = Container {
            slot: Slot::Filled(42),
        };
        assert_eq!(optional.set(container, 100).slot, Slot::Filled(100));
    }

    #[rstest]
    fn test_lens_prism_composition_set_is_noop_on_mismatch() {
        let optional = lens!(Container, slot).compose_prism(prism!(Slot, Filled));
        let container = Container { slot: Slot::Empty };
        assert_eq!(optional.set(container.clone(), 100), container);
    }

    #[rstest]
    fn test_ref_composition_treats_null_handle_as_mismatch() {
        let optional = lens_ref!(Container, slot).compose_prism_ref(prism!(Slot, Filled));

        // The plain composition sees the default `Filled(0)` behind a null handle
        let plain = lens_ref!(Container, slot).compose_prism(prism!(Slot, Filled));
        assert_eq!(plain.get_option(&None), Some(0));

        assert_eq!(optional.get_option(&None), None);
        assert_eq!(optional.set(None, 5), None);
    }

    #[rstest]
    fn test_ref_composition_copies_on_match() {
        let optional = lens_ref!(Container, slot).compose_prism_ref(prism!(Slot, Filled));
        let handle = Some(ReferenceCounter::new(Container {
            slot: Slot::Filled(1),
        }));

        let updated = optional.set(handle.clone(), 2);

        assert_eq!(handle.as_ref().map(|c| c.slot.clone()), Some(Slot::Filled(1)));
        assert_eq!(updated.as_ref().map(|c| c.slot.clone()), Some(Slot::Filled(2)));
    }

    #[rstest]
    fn test_function_optional_modify() {
        let head = FunctionOptional::new(
            |items: &Vec<i32>| items.first().copied(),
            |mut items: Vec<i32>, value: i32| {
                items[0] = value;
                items
            },
        );
        assert_eq!(head.modify(vec![1, 2], |x| x + 10), vec![11, 2]);
        assert_eq!(head.modify_option(Vec::new(), |x| x + 10), None);
    }
}
