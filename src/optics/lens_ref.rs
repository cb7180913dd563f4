//! Reference lenses over shared, nullable handles.
//!
//! A reference lens focuses on a field of a `T` held behind a
//! [`Handle<T>`], an `Option` of a reference-counted pointer. `set` never
//! touches the pointee of the handle it receives: it clones the pointee into
//! a fresh allocation, mutates that copy and returns a new handle. Fields of
//! `T` that are themselves handles are shared between the old and the new
//! value, so the copy is shallow.
//!
//! A `None` handle plays the role of a null pointer. Reading through it reads
//! from `T::default()`, and writing through it synthesises a fresh
//! `T::default()` to write into.
//!
//! The caller must not share one handle across threads while a `set` is
//! copying it; with the default `Rc` handles the compiler enforces this.
//!
//! # Examples
//!
//! ```
//! use optica::optics::ReferenceCounter;
//! use optica::optics::{Handle, Lens};
//! use optica::lens_ref;
//!
//! #[derive(Clone, Default, PartialEq, Debug)]
//! struct Server { host: String, port: u16 }
//!
//! let port = lens_ref!(Server, port);
//!
//! let server: Handle<Server> = Some(ReferenceCounter::new(Server { host: "db".to_string(), port: 5432 }));
//! let moved = port.set(server.clone(), 6543);
//!
//! assert_eq!(server.as_ref().map(|server| server.port), Some(5432));
//! assert_eq!(port.get(&moved), 6543);
//!
//! // A null handle is filled in with a default `Server`
//! let created = port.set(None, 80);
//! assert_eq!(created.as_deref(), Some(&Server { host: String::new(), port: 80 }));
//! ```

use std::marker::PhantomData;

use super::Lens;
use super::lens::IdentityLens;

/// Reference-counted smart pointer type used by reference lenses.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub type ReferenceCounter<T> = std::sync::Arc<T>;

/// Reference-counted smart pointer type used by reference lenses.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(not(feature = "arc"))]
pub type ReferenceCounter<T> = std::rc::Rc<T>;

/// A nullable shared handle: the source type of reference lenses.
pub type Handle<T> = Option<ReferenceCounter<T>>;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Handle<i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Handle<i32>: Send, Sync);

/// Copies the value behind `handle` into a fresh allocation after letting
/// `update` mutate it. A `None` handle starts from `T::default()`.
pub(crate) fn copy_on_write<T, F>(handle: Handle<T>, update: F) -> Handle<T>
where
    T: Clone + Default,
    F: FnOnce(&mut T),
{
    let mut copy = handle.map_or_else(T::default, |target| T::clone(&target));
    update(&mut copy);
    Some(ReferenceCounter::new(copy))
}

/// A lens over a [`Handle<T>`] implemented using a getter and an in-place
/// setter.
///
/// The setter only ever sees the freshly allocated copy, never the pointee
/// of the handle passed to [`set`](Lens::set). The `lens_ref!` macro
/// generates a `FunctionRefLens` internally.
///
/// # Type Parameters
///
/// - `T`: The pointee type
/// - `A`: The target type
/// - `G`: The getter function type
/// - `St`: The setter function type
///
/// # Example
///
/// ```
/// use optica::optics::{FunctionRefLens, Lens};
///
/// #[derive(Clone, Default, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = FunctionRefLens::new(|point: &Point| point.x, |point: &mut Point, x| point.x = x);
///
/// assert_eq!(x_lens.get(&None), 0);
/// assert_eq!(x_lens.set(None, 5).as_deref(), Some(&Point { x: 5, y: 0 }));
/// ```
pub struct FunctionRefLens<T, A, G, St>
where
    G: Fn(&T) -> A,
    St: Fn(&mut T, A),
{
    getter: G,
    setter: St,
    _marker: PhantomData<fn(T, A) -> (T, A)>,
}

impl<T, A, G, St> FunctionRefLens<T, A, G, St>
where
    G: Fn(&T) -> A,
    St: Fn(&mut T, A),
{
    /// Creates a new `FunctionRefLens` from a getter and an in-place setter.
    ///
    /// # Arguments
    ///
    /// * `getter` - A function that reads the focused field from the pointee
    /// * `setter` - A function that writes the focused field into a copy of the pointee
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<T, A, G, St> Lens<Handle<T>, A> for FunctionRefLens<T, A, G, St>
where
    T: Clone + Default,
    G: Fn(&T) -> A,
    St: Fn(&mut T, A),
{
    fn get(&self, source: &Handle<T>) -> A {
        match source {
            Some(target) => (self.getter)(target),
            None => (self.getter)(&T::default()),
        }
    }

    fn set(&self, source: Handle<T>, value: A) -> Handle<T> {
        copy_on_write(source, |copy| (self.setter)(copy, value))
    }
}

impl<T, A, G, St> Clone for FunctionRefLens<T, A, G, St>
where
    G: Fn(&T) -> A + Clone,
    St: Fn(&mut T, A) + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T, A, G, St> std::fmt::Debug for FunctionRefLens<T, A, G, St>
where
    G: Fn(&T) -> A,
    St: Fn(&mut T, A),
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionRefLens")
            .finish_non_exhaustive()
    }
}

/// Creates the identity lens over a [`Handle<T>`].
///
/// # Example
///
/// ```
/// use optica::optics::ReferenceCounter;
/// use optica::optics::{Lens, identity_ref};
///
/// let id = identity_ref::<i32>();
/// let handle = Some(ReferenceCounter::new(1));
/// assert!(ReferenceCounter::ptr_eq(id.get(&handle).as_ref().unwrap(), handle.as_ref().unwrap()));
/// assert_eq!(id.set(handle, None), None);
/// ```
#[must_use]
pub const fn identity_ref<T>() -> IdentityLens<Handle<T>> {
    IdentityLens::new()
}

/// Creates a reference lens for a struct field.
///
/// This macro generates a `FunctionRefLens` over `Handle<StructType>`.
/// The struct must implement `Clone` and `Default`, and the field must
/// implement `Clone`.
///
/// # Syntax
///
/// ```text
/// lens_ref!(StructType, field_name)
/// ```
///
/// # Example
///
/// ```
/// use optica::optics::ReferenceCounter;
/// use optica::optics::Lens;
/// use optica::lens_ref;
///
/// #[derive(Clone, Default, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let y_lens = lens_ref!(Point, y);
/// let point = Some(ReferenceCounter::new(Point { x: 1, y: 2 }));
/// assert_eq!(y_lens.get(&point), 2);
/// assert_eq!(y_lens.set(point, 3).as_deref(), Some(&Point { x: 1, y: 3 }));
/// ```
#[macro_export]
macro_rules! lens_ref {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionRefLens::new(
            |source: &$struct_type| ::std::clone::Clone::clone(&source.$field),
            |source: &mut $struct_type, value| source.$field = value,
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionRefLens::new(
            |source: &$struct_type<$($generic),+>| ::std::clone::Clone::clone(&source.$field),
            |source: &mut $struct_type<$($generic),+>, value| source.$field = value,
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionRefLens::new(
            |source: &$struct_type| ::std::clone::Clone::clone(&source.$field),
            |source: &mut $struct_type, value| source.$field = value,
        )
    };
}
