//! # curie
//!
//! Algebraic data types for optionality, disjoint alternatives, predicate
//! outcomes and paired values, sharing one combinator vocabulary: map,
//! flat-map, collapse, side-effect hooks and assumptions.
//!
//! ## Overview
//!
//! - **Control** ([`control`]): [`Maybe`](control::Maybe),
//!   [`Either`](control::Either), [`Satisfaction`](control::Satisfaction)
//! - **Product** ([`product`]): [`Pair`](product::Pair) and the focused views
//!   [`FirstFocus`](product::FirstFocus) / [`SecondFocus`](product::SecondFocus)
//! - **Predicates** ([`predicate`]): boolean algebra over `Fn(&T) -> bool`
//! - **Conversion** ([`conversion`]): glue between the core types
//! - **Errors** ([`error`]): failures of `assume*`
//! - **Type Classes** ([`typeclass`]): `Functor` and `Bifunctor` instances
//!
//! ## Feature Flags
//!
//! - `typeclass` (default): type class traits and instances
//! - `serde`: `Serialize` / `Deserialize` for every core type
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use curie::prelude::*;
//!
//! let name: Maybe<&str> = Maybe::just("String");
//! let pair = Pair::of(name.assume()?).and(5).map_first(str::len);
//! assert_eq!(pair, Pair::new(6, 5));
//!
//! let parsed: Either<String, usize> = Either::left("x".to_string());
//! assert_eq!(parsed.flat_map_left(|text| Either::right(text.len())), Either::<String, usize>::right(1));
//! # Ok::<(), curie::error::ValueNotPresent>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use curie::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::*;
    pub use crate::error::*;
    pub use crate::predicate::Predicate;
    pub use crate::product::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;
}

pub mod control;
pub mod conversion;
pub mod error;
pub mod predicate;
pub mod product;

#[cfg(feature = "typeclass")]
pub mod typeclass;

static_assertions::assert_impl_all!(control::Maybe<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(control::Either<String, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(control::Satisfaction<String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(product::Pair<String, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(product::FirstFocus<String, i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(product::SecondFocus<String, i32>: Send, Sync, Clone);
