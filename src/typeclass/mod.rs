//! Type class traits consumed by the optics.
//!
//! - [`Equivalence`]: An equality predicate over a type, used by
//!   equality-optimised lenses to detect unchanged values
//! - [`StrictEquality`]: The [`Equivalence`] given by [`PartialEq`]
//!
//! # Examples
//!
//! ```rust
//! use optica::typeclass::{Equivalence, StrictEquality};
//!
//! assert!(StrictEquality.equals(&1, &1));
//!
//! let case_insensitive = |left: &String, right: &String| left.eq_ignore_ascii_case(right);
//! assert!(case_insensitive.equals(&"Host".to_string(), &"HOST".to_string()));
//! ```

mod eq;

pub use eq::{Equivalence, StrictEquality};
