//! Type class traits implemented by the core types.
//!
//! - [`TypeConstructor`]: higher-kinded type emulation through GATs
//! - [`Functor`]: `Maybe`, `Satisfaction`, `FirstFocus`, `SecondFocus`
//! - [`Bifunctor`]: `Either`, `Pair`
//!
//! These traits restate the inherent combinators generically; the inherent
//! methods remain the primary API.
//!
//! # Examples
//!
//! ```rust
//! use curie::control::{Either, Maybe};
//! use curie::typeclass::{Bifunctor, Functor};
//!
//! fn lengths<T: Functor<Inner = String>>(container: T) -> T::WithType<usize> {
//!     container.fmap(|text| text.len())
//! }
//!
//! assert_eq!(lengths(Maybe::just("four".to_string())), Maybe::just(4));
//!
//! let either: Either<i32, String> = Either::right("ab".to_string());
//! assert_eq!(either.second(|text| text.len()), Either::right(2));
//! ```

mod bifunctor;
mod functor;
mod higher;

pub use bifunctor::Bifunctor;
pub use functor::Functor;
pub use higher::TypeConstructor;
