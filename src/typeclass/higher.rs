//! Higher-kinded type emulation through generic associated types.
//!
//! Rust cannot abstract over a type constructor such as `Maybe<_>` directly.
//! [`TypeConstructor`] names the element type of a container and the same
//! container with a different element, which is enough to state
//! [`Functor`](super::Functor) generically.
//!
//! # Example
//!
//! ```rust
//! use curie::control::Maybe;
//! use curie::typeclass::TypeConstructor;
//!
//! fn emptied<T: TypeConstructor>(_value: T) -> T::WithType<String>
//! where
//!     T::WithType<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let emptied: Maybe<String> = emptied(Maybe::just(42));
//! assert_eq!(emptied, Maybe::<String>::none());
//! ```

use crate::control::{Maybe, Satisfaction};
use crate::product::{FirstFocus, SecondFocus};

/// A type of the shape `F<A>` that can be rebuilt as `F<B>`.
pub trait TypeConstructor {
    /// The element type `A` of `F<A>`.
    type Inner;

    /// The same constructor applied to `B`.
    type WithType<B>: TypeConstructor<Inner = B>;
}

impl<A> TypeConstructor for Maybe<A> {
    type Inner = A;
    type WithType<B> = Maybe<B>;
}

impl<A> TypeConstructor for Satisfaction<A> {
    type Inner = A;
    type WithType<B> = Satisfaction<B>;
}

/// The focused slot is the element; the other slot rides along.
impl<F, S> TypeConstructor for FirstFocus<F, S> {
    type Inner = F;
    type WithType<B> = FirstFocus<B, S>;
}

impl<F, S> TypeConstructor for SecondFocus<F, S> {
    type Inner = S;
    type WithType<B> = SecondFocus<F, B>;
}
