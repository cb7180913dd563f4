//! # optica
//!
//! Composable, law-governed optics for reading and immutably updating parts
//! of nested data structures.
//!
//! ## Overview
//!
//! - **Lens**: total get/set access to a field, by value or through a shared handle
//! - **Prism**: access to one variant of an enum
//! - **Optional**: access to a focus that may be absent
//! - **`LensO`**: a lens whose focus is an `Option`, with composition operators that
//!   synthesise or remove intermediate structures
//! - **Equality-optimised lenses**: `set` returns its input untouched when the
//!   value does not change
//!
//! ## Feature Flags
//!
//! - `typeclass`: The [`Equivalence`](typeclass::Equivalence) type class
//! - `optics`: Lens, Prism, Optional and the composition operators
//! - `derive`: `#[derive(Lenses)]` and `#[derive(Prisms)]`
//! - `arc`: Use `Arc` instead of `Rc` for reference lens handles
//! - `tracing`: Emit `trace!` events when compositions synthesise or drop structure
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optica::prelude::*;
//! use optica::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Database { host: String, port: u16 }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Config { database: Option<Database> }
//!
//! let port = lens!(Config, database).compose_option(
//!     Database { host: "localhost".to_string(), port: 5432 },
//!     lens!(Database, port),
//! );
//!
//! let config = port.set(Config { database: None }, Some(3306));
//! assert_eq!(
//!     config.database,
//!     Some(Database { host: "localhost".to_string(), port: 3306 })
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use optica::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;
}

/// Emits a `tracing::trace!` event under the optics target when the
/// `tracing` feature is enabled, and nothing otherwise.
#[cfg(feature = "tracing")]
macro_rules! optics_trace {
    ($($argument:tt)*) => {
        ::tracing::trace!(target: "optica::optics", $($argument)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! optics_trace {
    ($($argument:tt)*) => {};
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "optics")]
pub mod optics;

#[cfg(feature = "derive")]
pub use optica_derive::{Lenses, Prisms};
