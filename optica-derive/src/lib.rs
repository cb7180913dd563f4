//! Derive macros for optica optics.
//!
//! This crate provides procedural macros that generate Lens and Prism
//! constructors for Rust types. It is re-exported by `optica` behind the
//! `derive` feature, so most users never depend on it directly.
//!
//! # Available Derive Macros
//!
//! - [`Lenses`]: Generates lens methods for struct fields
//! - [`Prisms`]: Generates prism methods for enum variants
//!
//! # Example: Lenses
//!
//! ```rust,ignore
//! use optica::Lenses;
//! use optica::optics::Lens;
//!
//! #[derive(Clone, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_lens() -> impl Lens<Point, i32>
//! // - Point::y_lens() -> impl Lens<Point, i32>
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(Point::x_lens().get(&point), 10);
//! ```
//!
//! # Example: Prisms
//!
//! ```rust,ignore
//! use optica::Prisms;
//! use optica::optics::Prism;
//!
//! #[derive(Clone, Prisms)]
//! enum Shape {
//!     Circle(f64),
//!     Rectangle(f64, f64),
//! }
//!
//! // Generated methods:
//! // - Shape::circle_prism() -> impl Prism<Shape, f64>
//! // - Shape::rectangle_prism() -> impl Prism<Shape, (f64, f64)>
//!
//! let circle = Shape::Circle(5.0);
//! assert_eq!(Shape::circle_prism().preview(&circle), Some(5.0));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;
mod prisms;

use proc_macro::TokenStream;

/// Derive macro for generating Lens constructors for struct fields.
///
/// This macro generates a method for each field in the struct that returns
/// a lens focusing on that field. The method name follows the pattern
/// `{field_name}_lens()`. The generated getter clones the field, so every
/// field type must implement `Clone`.
///
/// # Requirements
///
/// - The struct must be a named struct (not a tuple struct)
///
/// # Generated Code
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> impl Lens<StructName, T> + Clone { ... }
/// }
/// ```
///
/// # Example
///
/// ```rust,ignore
/// use optica::Lenses;
/// use optica::optics::{Lens, OptionLens};
///
/// #[derive(Clone, Debug, PartialEq, Lenses)]
/// struct Database { host: String, port: u16 }
///
/// #[derive(Clone, Debug, PartialEq, Lenses)]
/// struct Config { database: Option<Database> }
///
/// let port = Config::database_lens().compose_option(
///     Database { host: "localhost".to_string(), port: 5432 },
///     Database::port_lens(),
/// );
///
/// let config = port.set(Config { database: None }, Some(3306));
/// assert_eq!(config.database.map(|database| database.port), Some(3306));
/// ```
///
/// # Generics
///
/// Generic structs are supported. Call the lens method on the concrete type:
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Container<T> {
///     value: T,
/// }
///
/// let container = Container { value: 42 };
/// assert_eq!(Container::<i32>::value_lens().get(&container), 42);
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}

/// Derive macro for generating Prism constructors for enum variants.
///
/// This macro generates a method for each variant in the enum that returns
/// a prism focusing on that variant. The method name follows the pattern
/// `{variant_name_snake_case}_prism()`.
///
/// # Variant Types
///
/// - **Unit variants** (e.g., `None`): `impl Prism<Enum, ()>`
/// - **Single-field tuple variants** (e.g., `Some(T)`): `impl Prism<Enum, T>`
/// - **Multi-field tuple variants** (e.g., `Point(i32, i32)`): `impl Prism<Enum, (T1, T2, ...)>`
/// - **Struct variants** (e.g., `Click { x: i32, y: i32 }`): `impl Prism<Enum, (T1, T2, ...)>`,
///   with the fields in definition order
///
/// `preview` clones the fields out of the variant, so every field type must
/// implement `Clone`.
///
/// # Example
///
/// ```rust,ignore
/// use optica::Prisms;
/// use optica::optics::Prism;
///
/// #[derive(Clone, Debug, PartialEq, Prisms)]
/// enum Event {
///     KeyPress(char),
///     Click { x: i32, y: i32 },
///     Close,
/// }
///
/// assert_eq!(Event::key_press_prism().preview(&Event::KeyPress('q')), Some('q'));
/// assert_eq!(Event::click_prism().preview(&Event::Click { x: 1, y: 2 }), Some((1, 2)));
/// assert_eq!(Event::close_prism().review(()), Event::Close);
/// ```
#[proc_macro_derive(Prisms)]
pub fn derive_prisms(input: TokenStream) -> TokenStream {
    prisms::derive_prisms_impl(input)
}
