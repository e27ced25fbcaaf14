//! Sum types for optionality, alternatives and predicate outcomes.
//!
//! - [`Maybe`]: a value or nothing
//! - [`Either`]: exactly one of two shapes
//! - [`Satisfaction`]: a value tagged with the result of a test
//!
//! All three are closed enums. Combinators consume the value and return a new
//! one; the `when_*_do` hooks run their effect at most once and hand `self`
//! back for further chaining.
//!
//! # Examples
//!
//! ```rust
//! use curie::control::{Either, Maybe, Satisfaction};
//!
//! let maybe = Maybe::just(3).map(|x| x + 1);
//! assert_eq!(maybe.collapse(0), 4);
//!
//! let either: Either<i32, String> = Either::right("right".to_string());
//! assert_eq!(either.isolate_right(), Maybe::just("right".to_string()));
//!
//! let outcome = Satisfaction::test("", |text: &&str| text.is_empty());
//! assert_eq!(outcome.reject(), Maybe::<&str>::none());
//! ```

mod either;
mod maybe;
mod satisfaction;

pub use either::{Either, left, right};
pub use maybe::{Maybe, just, none};
pub use satisfaction::Satisfaction;
