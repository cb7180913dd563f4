//! Optics for immutable data manipulation.
//!
//! This module provides optics - composable accessors for immutable
//! data structures. Optics allow you to focus on specific parts of a data
//! structure, enabling type-safe reading and updating of deeply nested fields.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Lens + Prism    = Optional
//! Lens<S, Option<A>> = LensO<S, A>
//! LensO ∘ Lens    = LensO     (compose_option)
//! LensO ∘ LensO   = LensO     (compose_options)
//! LensO + default = Lens      (with_default)
//! ```
//!
//! # Available Optics
//!
//! - [`Lens`]: Focus on a single field (get/set access)
//! - [`FunctionRefLens`]: A lens over a shared, possibly null [`Handle`] that
//!   copies on write
//! - [`Prism`]: Focus on a variant of an enum (preview/review access)
//! - [`Optional`]: Focus on a value that may or may not exist (Lens + Prism composition)
//! - [`OptionLens`]: Composition operators for lenses whose focus is an `Option`
//! - [`LensLiftExtension`]: Lifting a definite lens into a `LensO`
//! - [`EqLens`]: A lens whose `set` skips writes of equal values
//! - [`at::At`]: Key-based `LensO` access to maps
//!
//! # Example with Lens
//!
//! ```
//! use optica::optics::Lens;
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! let person_street = lens!(Person, address).compose(lens!(Address, street));
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! assert_eq!(person_street.get(&person), "Main St");
//!
//! let updated = person_street.set(person, "Oak Ave".to_string());
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo");
//! ```
//!
//! # Example with a reference lens
//!
//! ```
//! use optica::optics::{Lens, ReferenceCounter};
//! use optica::lens_ref;
//!
//! #[derive(Clone, Default, PartialEq, Debug)]
//! struct Counter { hits: u64 }
//!
//! let hits = lens_ref!(Counter, hits);
//!
//! let original = Some(ReferenceCounter::new(Counter { hits: 1 }));
//! let updated = hits.set(original.clone(), 2);
//!
//! assert_eq!(hits.get(&original), 1);
//! assert_eq!(hits.get(&updated), 2);
//!
//! // A null handle reads as the default and is synthesised on write
//! assert_eq!(hits.get(&None), 0);
//! assert_eq!(hits.set(None, 5).map(|counter| counter.hits), Some(5));
//! ```
//!
//! # Example with Optional (Lens + Prism)
//!
//! ```
//! use optica::optics::{LensComposeExtension, Optional};
//! use optica::{lens, prism};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum MyOption<T> { Some(T), None }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Container { maybe_value: MyOption<i32> }
//!
//! let optional = lens!(Container, maybe_value).compose_prism(prism!(MyOption<i32>, Some));
//!
//! let some_container = Container { maybe_value: MyOption::Some(42) };
//! assert_eq!(optional.get_option(&some_container), Some(42));
//!
//! let none_container = Container { maybe_value: MyOption::None };
//! assert_eq!(optional.get_option(&none_container), None);
//! assert_eq!(optional.set(none_container.clone(), 7), none_container);
//! ```
//!
//! # Lens Laws
//!
//! 1. **GetSet Law**: `lens.set(source.clone(), lens.get(&source)) == source`
//! 2. **SetGet Law**: `lens.get(&lens.set(source, value.clone())) == value`
//! 3. **SetSet Law**: `lens.set(lens.set(source.clone(), v1), v2.clone()) == lens.set(source, v2)`
//!
//! Lenses built by [`compose_option`](OptionLens::compose_option) and
//! [`compose_options`](OptionLens::compose_options) deliberately break
//! GetSet/SetSet in the cases listed in [`option_lens`].
//!
//! # Prism Laws
//!
//! 1. **PreviewReview Law**: `prism.preview(&prism.review(value.clone())) == Some(value)`
//! 2. **ReviewPreview Law**: if `prism.preview(&source) == Some(value)` then
//!    `prism.review(value) == source`
//!
//! # Optional Laws
//!
//! 1. **GetOptionSet Law**: writing back what was read yields the original,
//!    and writing into an absent focus changes nothing
//! 2. **SetGetOption Law**: when the focus is present, reading after a write
//!    yields the written value

pub mod at;
mod eq_lens;
mod lens;
mod lens_ref;
mod lifting;
pub mod option_lens;
mod optional;
mod prism;

// Re-export all lens-related types and traits
pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::IdentityLens;
pub use lens::ImappedLens;
pub use lens::Lens;
pub use lens::identity;

// Re-export the reference flavour
pub use lens_ref::FunctionRefLens;
pub use lens_ref::Handle;
pub use lens_ref::ReferenceCounter;
pub use lens_ref::identity_ref;

// Re-export all prism-related types and traits
pub use prism::ComposedPrism;
pub use prism::FunctionPrism;
pub use prism::Prism;
pub use prism::SomePrism;
pub use prism::some_prism;

// Re-export all optional-related types and traits
pub use optional::ComposedOptional;
pub use optional::FunctionOptional;
pub use optional::LensComposeExtension;
pub use optional::LensPrismComposition;
pub use optional::Optional;
pub use optional::RefLensPrismComposition;

// Re-export the LensO composition operators
pub use option_lens::ComposedOptionLens;
pub use option_lens::ComposedOptionsLens;
pub use option_lens::DefaultedLens;
pub use option_lens::OptionLens;

// Re-export the lifting constructors
pub use lifting::LensLiftExtension;
pub use lifting::Nillable;
pub use lifting::NullablePropLens;
pub use lifting::PredicateLens;

pub use eq_lens::EqLens;
