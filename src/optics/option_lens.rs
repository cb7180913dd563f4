//! Lenses whose focus is an `Option` (`LensO`), and their composition.
//!
//! A `LensO<S, A>` is nothing more than a `Lens<S, Option<A>>`. Every such lens
//! gets the [`OptionLens`] extension methods, which glue a second optic onto
//! the possibly-absent focus:
//!
//! - [`compose_option`](OptionLens::compose_option): `LensO<S, A>` ∘ `Lens<A, B>` → `LensO<S, B>`
//! - [`compose_options`](OptionLens::compose_options): `LensO<S, A>` ∘ `LensO<A, B>` → `LensO<S, B>`
//! - [`with_default`](OptionLens::with_default): `LensO<S, A>` → `Lens<S, A>`
//!
//! # Presence policy for `compose_option`
//!
//! | written     | outer focus | result                                      |
//! |-------------|-------------|---------------------------------------------|
//! | `None`      | any         | outer set to `None` (the whole `A` is gone) |
//! | `Some(b)`   | `Some(a)`   | `b` written into `a`                        |
//! | `Some(b)`   | `None`      | `b` written into a clone of the default `A` |
//!
//! `B` is a required field of `A`, so an `A` without its `B` has no meaning
//! and clearing `B` removes `A`. A consequence is that
//! `set(set(s, None), Some(b))` rebuilds `A` from the default and loses the
//! sibling fields that `set(s, Some(b))` would have kept. Both laws and tests
//! rely on this.
//!
//! # Presence policy for `compose_options`
//!
//! | written     | outer focus | result                                           |
//! |-------------|-------------|--------------------------------------------------|
//! | `None`      | `None`      | source unchanged                                 |
//! | `None`      | `Some(a)`   | `B` cleared inside `a`, `a` stays                |
//! | `Some(b)`   | `Some(a)`   | `Some(b)` written into `a`                       |
//! | `Some(b)`   | `None`      | `Some(b)` written into a clone of the default `A`|
//!
//! # Examples
//!
//! ```
//! use optica::optics::{Lens, OptionLens};
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Database { host: String, port: u16 }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Config { database: Option<Database> }
//!
//! let default_database = Database { host: "localhost".to_string(), port: 5432 };
//! let port = lens!(Config, database).compose_option(default_database, lens!(Database, port));
//!
//! let empty = Config { database: None };
//! assert_eq!(port.get(&empty), None);
//!
//! let created = port.set(empty, Some(3306));
//! assert_eq!(created.database.as_ref().map(|database| database.host.as_str()), Some("localhost"));
//! assert_eq!(port.get(&created), Some(3306));
//!
//! let removed = port.set(created, None);
//! assert_eq!(removed.database, None);
//! ```

use super::Lens;

/// Extension methods for lenses whose focus is an `Option`.
///
/// Blanket-implemented for every `Lens<S, Option<A>>`.
pub trait OptionLens<S, A>: Lens<S, Option<A>> {
    /// Composes this lens with a total lens into the optional focus.
    ///
    /// `default` is cloned whenever a `Some` is written while the outer focus
    /// is absent. See the [module documentation](self) for the full policy.
    fn compose_option<B, L>(self, default: A, inner: L) -> ComposedOptionLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
        A: Clone,
    {
        ComposedOptionLens::new(self, inner, default)
    }

    /// Composes this lens with an optional lens into the optional focus.
    ///
    /// Only the innermost `Option` is toggled: writing `None` never removes the
    /// outer `A`. See the [module documentation](self) for the full policy.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Lens, OptionLens};
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Tls { certificate: Option<String>, verify: bool }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Listener { tls: Option<Tls> }
    ///
    /// let certificate = lens!(Listener, tls).compose_options(
    ///     Tls { certificate: None, verify: true },
    ///     lens!(Tls, certificate),
    /// );
    ///
    /// let listener = certificate.set(Listener { tls: None }, Some("cert.pem".to_string()));
    /// assert_eq!(
    ///     listener.tls,
    ///     Some(Tls { certificate: Some("cert.pem".to_string()), verify: true })
    /// );
    ///
    /// let cleared = certificate.set(listener, None);
    /// assert_eq!(cleared.tls, Some(Tls { certificate: None, verify: true }));
    /// ```
    fn compose_options<B, L>(self, default: A, inner: L) -> ComposedOptionsLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, Option<B>>,
        A: Clone,
    {
        ComposedOptionsLens::new(self, inner, default)
    }

    /// Turns this lens into a total lens that reads `default` when the focus is
    /// absent. `set` always writes `Some`.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Lens, OptionLens};
    /// use optica::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Pool { size: Option<usize> }
    ///
    /// let size = lens!(Pool, size).with_default(8);
    /// assert_eq!(size.get(&Pool { size: None }), 8);
    /// assert_eq!(size.set(Pool { size: None }, 8), Pool { size: Some(8) });
    /// ```
    fn with_default(self, default: A) -> DefaultedLens<Self, A>
    where
        Self: Sized,
        A: Clone,
    {
        DefaultedLens::new(self, default)
    }
}

impl<S, A, L> OptionLens<S, A> for L where L: Lens<S, Option<A>> {}

/// `LensO<S, A>` ∘ `Lens<A, B>`, created by [`OptionLens::compose_option`].
pub struct ComposedOptionLens<L1, L2, A> {
    outer: L1,
    inner: L2,
    default: A,
}

impl<L1, L2, A> ComposedOptionLens<L1, L2, A> {
    /// Creates a new `ComposedOptionLens`.
    ///
    /// # Arguments
    ///
    /// * `outer` - The lens onto the optional intermediate structure
    /// * `inner` - The lens from the intermediate structure onto the leaf
    /// * `default` - The intermediate value used when one has to be created
    #[must_use]
    pub const fn new(outer: L1, inner: L2, default: A) -> Self {
        Self {
            outer,
            inner,
            default,
        }
    }

    /// Returns the value cloned when an intermediate structure is created.
    pub const fn default_value(&self) -> &A {
        &self.default
    }
}

impl<S, A, B, L1, L2> Lens<S, Option<B>> for ComposedOptionLens<L1, L2, A>
where
    L1: Lens<S, Option<A>>,
    L2: Lens<A, B>,
    A: Clone,
{
    fn get(&self, source: &S) -> Option<B> {
        self.outer
            .get(source)
            .map(|intermediate| self.inner.get(&intermediate))
    }

    fn set(&self, source: S, value: Option<B>) -> S {
        let Some(leaf) = value else {
            optics_trace!("compose_option: leaf cleared, removing intermediate");
            return self.outer.set(source, None);
        };
        let intermediate = self.outer.get(&source).unwrap_or_else(|| {
            optics_trace!("compose_option: intermediate absent, synthesising from default");
            self.default.clone()
        });
        self.outer
            .set(source, Some(self.inner.set(intermediate, leaf)))
    }
}

impl<L1: Clone, L2: Clone, A: Clone> Clone for ComposedOptionLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            default: self.default.clone(),
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A: std::fmt::Debug> std::fmt::Debug
    for ComposedOptionLens<L1, L2, A>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedOptionLens")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .field("default", &self.default)
            .finish()
    }
}

/// `LensO<S, A>` ∘ `LensO<A, B>`, created by [`OptionLens::compose_options`].
pub struct ComposedOptionsLens<L1, L2, A> {
    outer: L1,
    inner: L2,
    default: A,
}

impl<L1, L2, A> ComposedOptionsLens<L1, L2, A> {
    /// Creates a new `ComposedOptionsLens`.
    ///
    /// # Arguments
    ///
    /// * `outer` - The lens onto the optional intermediate structure
    /// * `inner` - The lens from the intermediate structure onto the optional leaf
    /// * `default` - The intermediate value used when one has to be created
    #[must_use]
    pub const fn new(outer: L1, inner: L2, default: A) -> Self {
        Self {
            outer,
            inner,
            default,
        }
    }

    /// Returns the value cloned when an intermediate structure is created.
    pub const fn default_value(&self) -> &A {
        &self.default
    }
}

impl<S, A, B, L1, L2> Lens<S, Option<B>> for ComposedOptionsLens<L1, L2, A>
where
    L1: Lens<S, Option<A>>,
    L2: Lens<A, Option<B>>,
    A: Clone,
{
    fn get(&self, source: &S) -> Option<B> {
        self.outer
            .get(source)
            .and_then(|intermediate| self.inner.get(&intermediate))
    }

    fn set(&self, source: S, value: Option<B>) -> S {
        let intermediate = match (self.outer.get(&source), value.is_some()) {
            (Some(intermediate), _) => intermediate,
            // No intermediate is created just to hold an absent leaf
            (None, false) => return source,
            (None, true) => {
                optics_trace!("compose_options: intermediate absent, synthesising from default");
                self.default.clone()
            }
        };
        self.outer
            .set(source, Some(self.inner.set(intermediate, value)))
    }
}

impl<L1: Clone, L2: Clone, A: Clone> Clone for ComposedOptionsLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            default: self.default.clone(),
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A: std::fmt::Debug> std::fmt::Debug
    for ComposedOptionsLens<L1, L2, A>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedOptionsLens")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .field("default", &self.default)
            .finish()
    }
}

/// A total lens over an optional focus, created by [`OptionLens::with_default`].
pub struct DefaultedLens<L, A> {
    lens: L,
    default: A,
}

impl<L, A> DefaultedLens<L, A> {
    /// Creates a new `DefaultedLens`.
    #[must_use]
    pub const fn new(lens: L, default: A) -> Self {
        Self { lens, default }
    }
}

impl<S, A, L> Lens<S, A> for DefaultedLens<L, A>
where
    L: Lens<S, Option<A>>,
    A: Clone,
{
    fn get(&self, source: &S) -> A {
        self.lens
            .get(source)
            .unwrap_or_else(|| self.default.clone())
    }

    fn set(&self, source: S, value: A) -> S {
        self.lens.set(source, Some(value))
    }
}

impl<L: Clone, A: Clone> Clone for DefaultedLens<L, A> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            default: self.default.clone(),
        }
    }
}

impl<L: std::fmt::Debug, A: std::fmt::Debug> std::fmt::Debug for DefaultedLens<L, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("DefaultedLens")
            .field("lens", &self.lens)
            .field("default", &self.default)
            .finish()
    }
}
