//! Prism optics for focusing on enum variants.
//!
//! A Prism is an optic that provides preview/review access to a variant of an enum.
//! Unlike a Lens which always succeeds, a Prism may fail to extract a value
//! if the enum is not the expected variant.
//!
//! # Laws
//!
//! Every Prism must satisfy two laws:
//!
//! 1. **PreviewReview Law**: Reviewing then previewing yields the original value.
//!    ```text
//!    prism.preview(&prism.review(value.clone())) == Some(value)
//!    ```
//!
//! 2. **ReviewPreview Law**: If preview succeeds, reviewing the result yields the original.
//!    ```text
//!    if let Some(value) = prism.preview(&source) then
//!        prism.review(value) == source
//!    ```
//!
//! # Examples
//!
//! ```
//! use optica::optics::{Prism, FunctionPrism};
//! use optica::prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! // Using prism! macro
//! let circle_prism = prism!(Shape, Circle);
//!
//! let circle = Shape::Circle(5.0);
//! assert_eq!(circle_prism.preview(&circle), Some(5.0));
//!
//! let rect = Shape::Rectangle(3.0, 4.0);
//! assert_eq!(circle_prism.preview(&rect), None);
//!
//! let constructed = circle_prism.review(10.0);
//! assert!(matches!(constructed, Shape::Circle(r) if (r - 10.0).abs() < 1e-10));
//! ```

use std::marker::PhantomData;

/// A Prism focuses on a single variant of an enum.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole enum)
/// - `A`: The target type (the value inside the variant)
///
/// # Laws
///
/// 1. **PreviewReview Law**: `prism.preview(&prism.review(value.clone())) == Some(value)`
/// 2. **ReviewPreview Law**: If `prism.preview(&source) == Some(value)`, `prism.review(value) == source`
pub trait Prism<S, A> {
    /// Attempts to extract the value from the source.
    ///
    /// Returns `Some` if the source is the expected variant, `None` otherwise.
    fn preview(&self, source: &S) -> Option<A>;

    /// Constructs the source from a value.
    ///
    /// This always succeeds, creating the expected variant from the given value.
    fn review(&self, value: A) -> S;

    /// Modifies the value if the source is the expected variant.
    ///
    /// Returns `Some` with the modified source if the variant matches,
    /// `None` if the variant doesn't match.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Prism;
    /// use optica::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape {
    ///     Circle(f64),
    ///     Rectangle(f64, f64),
    /// }
    ///
    /// let circle_prism = prism!(Shape, Circle);
    ///
    /// let doubled = circle_prism.modify_option(&Shape::Circle(5.0), |r| r * 2.0);
    /// assert!(matches!(doubled, Some(Shape::Circle(r)) if (r - 10.0).abs() < 1e-10));
    ///
    /// let result = circle_prism.modify_option(&Shape::Rectangle(3.0, 4.0), |r| r * 2.0);
    /// assert!(result.is_none());
    /// ```
    fn modify_option<F>(&self, source: &S, function: F) -> Option<S>
    where
        F: FnOnce(A) -> A,
    {
        self.preview(source)
            .map(|value| self.review(function(value)))
    }

    /// Modifies the value if the source is the expected variant, or returns the original.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Prism;
    /// use optica::prism;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Shape {
    ///     Circle(f64),
    ///     Rectangle(f64, f64),
    /// }
    ///
    /// let circle_prism = prism!(Shape, Circle);
    ///
    /// let rect = Shape::Rectangle(3.0, 4.0);
    /// let unchanged = circle_prism.modify_or_identity(rect.clone(), |r| r * 2.0);
    /// assert_eq!(unchanged, rect);
    /// ```
    fn modify_or_identity<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        match self.preview(&source) {
            Some(value) => self.review(function(value)),
            None => source,
        }
    }

    /// Composes this prism with another prism to focus on a nested variant.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Prism, FunctionPrism};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Outer { Inner(Inner), Empty }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// enum Inner { Value(i32), Nothing }
    ///
    /// let outer_inner = FunctionPrism::new(
    ///     |outer: &Outer| match outer {
    ///         Outer::Inner(inner) => Some(inner.clone()),
    ///         _ => None,
    ///     },
    ///     Outer::Inner,
    /// );
    ///
    /// let inner_value = FunctionPrism::new(
    ///     |inner: &Inner| match inner {
    ///         Inner::Value(v) => Some(*v),
    ///         _ => None,
    ///     },
    ///     Inner::Value,
    /// );
    ///
    /// let outer_value = outer_inner.compose(inner_value);
    ///
    /// assert_eq!(outer_value.preview(&Outer::Inner(Inner::Value(42))), Some(42));
    /// assert_eq!(outer_value.preview(&Outer::Inner(Inner::Nothing)), None);
    /// assert_eq!(outer_value.review(7), Outer::Inner(Inner::Value(7)));
    /// ```
    fn compose<B, P>(self, other: P) -> ComposedPrism<Self, P, A>
    where
        Self: Sized,
        P: Prism<A, B>,
    {
        ComposedPrism::new(self, other)
    }
}

/// A prism implemented using preview and review functions.
///
/// This is the most common way to create a prism. The `prism!` macro
/// generates a `FunctionPrism` internally.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `Pr`: The preview function type
/// - `Re`: The review function type
///
/// # Example
///
/// ```
/// use optica::optics::{Prism, FunctionPrism};
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Shape {
///     Circle(f64),
///     Rectangle(f64, f64),
/// }
///
/// let circle_prism = FunctionPrism::new(
///     |shape: &Shape| match shape {
///         Shape::Circle(radius) => Some(*radius),
///         _ => None,
///     },
///     Shape::Circle,
/// );
///
/// assert_eq!(circle_prism.preview(&Shape::Circle(5.0)), Some(5.0));
/// ```
pub struct FunctionPrism<S, A, Pr, Re>
where
    Pr: Fn(&S) -> Option<A>,
    Re: Fn(A) -> S,
{
    preview_function: Pr,
    review_function: Re,
    _marker: PhantomData<fn(S, A) -> (S, A)>,
}

impl<S, A, Pr, Re> FunctionPrism<S, A, Pr, Re>
where
    Pr: Fn(&S) -> Option<A>,
    Re: Fn(A) -> S,
{
    /// Creates a new `FunctionPrism` from preview and review functions.
    ///
    /// # Arguments
    ///
    /// * `preview_function` - A function that attempts to extract the value from the source
    /// * `review_function` - A function that constructs the source from a value
    #[must_use]
    pub const fn new(preview_function: Pr, review_function: Re) -> Self {
        Self {
            preview_function,
            review_function,
            _marker: PhantomData,
        }
    }
}

impl<S, A, Pr, Re> Prism<S, A> for FunctionPrism<S, A, Pr, Re>
where
    Pr: Fn(&S) -> Option<A>,
    Re: Fn(A) -> S,
{
    fn preview(&self, source: &S) -> Option<A> {
        (self.preview_function)(source)
    }

    fn review(&self, value: A) -> S {
        (self.review_function)(value)
    }
}

impl<S, A, Pr, Re> Clone for FunctionPrism<S, A, Pr, Re>
where
    Pr: Fn(&S) -> Option<A> + Clone,
    Re: Fn(A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            preview_function: self.preview_function.clone(),
            review_function: self.review_function.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, Pr, Re> std::fmt::Debug for FunctionPrism<S, A, Pr, Re>
where
    Pr: Fn(&S) -> Option<A>,
    Re: Fn(A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionPrism")
            .finish_non_exhaustive()
    }
}

/// A prism composed of two prisms.
///
/// This allows focusing on nested variants by composing a prism that focuses on
/// an intermediate enum with a prism that focuses on a variant within that enum.
///
/// # Type Parameters
///
/// - `P1`: The type of the outer prism
/// - `P2`: The type of the inner prism
/// - `A`: The intermediate type (target of P1, source of P2)
pub struct ComposedPrism<P1, P2, A> {
    first: P1,
    second: P2,
    _marker: PhantomData<fn() -> A>,
}

impl<P1, P2, A> ComposedPrism<P1, P2, A> {
    /// Creates a new composed prism.
    ///
    /// # Arguments
    ///
    /// * `first` - The outer prism (focuses on the intermediate enum)
    /// * `second` - The inner prism (focuses on the final value)
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, P1, P2> Prism<S, B> for ComposedPrism<P1, P2, A>
where
    P1: Prism<S, A>,
    P2: Prism<A, B>,
{
    fn preview(&self, source: &S) -> Option<B> {
        self.first
            .preview(source)
            .and_then(|intermediate| self.second.preview(&intermediate))
    }

    fn review(&self, value: B) -> S {
        let intermediate = self.second.review(value);
        self.first.review(intermediate)
    }
}

impl<P1: Clone, P2: Clone, A> Clone for ComposedPrism<P1, P2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<P1: std::fmt::Debug, P2: std::fmt::Debug, A> std::fmt::Debug for ComposedPrism<P1, P2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedPrism")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

/// The prism focusing on the `Some` variant of [`Option`].
pub struct SomePrism<A> {
    _marker: PhantomData<fn(A) -> A>,
}

impl<A: Clone> Prism<Option<A>, A> for SomePrism<A> {
    fn preview(&self, source: &Option<A>) -> Option<A> {
        source.clone()
    }

    fn review(&self, value: A) -> Option<A> {
        Some(value)
    }
}

impl<A> Clone for SomePrism<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for SomePrism<A> {}

impl<A> std::fmt::Debug for SomePrism<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("SomePrism")
    }
}

/// Creates the prism focusing on the `Some` variant of [`Option`].
///
/// Composing a `LensO` with this prism yields an [`Optional`](super::Optional)
/// whose `set` only writes when a value is already present.
///
/// # Example
///
/// ```
/// use optica::optics::{Prism, some_prism};
///
/// let some = some_prism::<i32>();
/// assert_eq!(some.preview(&Some(1)), Some(1));
/// assert_eq!(some.preview(&None), None);
/// assert_eq!(some.review(2), Some(2));
/// ```
#[must_use]
pub const fn some_prism<A: Clone>() -> SomePrism<A> {
    SomePrism {
        _marker: PhantomData,
    }
}

/// Creates a prism for a single-value tuple variant of an enum.
///
/// This macro generates a `FunctionPrism` that focuses on the specified variant
/// of the given enum type. `preview` clones the value held by the variant.
///
/// # Syntax
///
/// ```text
/// prism!(EnumType, VariantName)
/// prism!(EnumType<T, ...>, VariantName)
/// ```
///
/// # Limitations
///
/// This macro only works with tuple variants that have a single value.
/// For variants with multiple fields or named fields, use `FunctionPrism::new`
/// directly or `#[derive(Prisms)]`.
///
/// # Example
///
/// ```
/// use optica::optics::Prism;
/// use optica::prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum MyOption<T> {
///     Some(T),
///     None,
/// }
///
/// let some_prism = prism!(MyOption<i32>, Some);
///
/// assert_eq!(some_prism.preview(&MyOption::Some(42)), Some(42));
/// assert_eq!(some_prism.preview(&MyOption::None), None);
/// assert_eq!(some_prism.review(100), MyOption::Some(100));
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match *source {
                $enum_type::$variant(ref value) => Some(::std::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type<$($generic),+>| match *source {
                $enum_type::$variant(ref value) => Some(::std::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:path, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: &$enum_type| match *source {
                <$enum_type>::$variant(ref value) => Some(::std::clone::Clone::clone(value)),
                #[allow(unreachable_patterns)]
                _ => None,
            },
            |value| <$enum_type>::$variant(value),
        )
    };
}
