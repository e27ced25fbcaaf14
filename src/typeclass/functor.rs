//! Functor type class - mapping over a container's element.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use curie::control::Maybe;
//! use curie::product::Pair;
//! use curie::typeclass::Functor;
//!
//! assert_eq!(Maybe::just(5_i32).fmap(|n| n.to_string()), Maybe::just("5".to_string()));
//!
//! let focused = Pair::new(2, 'x').focus_first().fmap(|n| n * 10);
//! assert_eq!(focused, Pair::new(20, 'x'));
//! ```

use super::higher::TypeConstructor;
use crate::control::{Maybe, Satisfaction};
use crate::product::{FirstFocus, Pair, SecondFocus};

/// A type whose element can be transformed without changing its shape.
pub trait Functor: TypeConstructor {
    /// Applies `function` to the element, consuming `self`.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(Self::Inner) -> B;

    /// Applies `function` to a borrowed element.
    fn fmap_ref<B, F>(&self, function: F) -> Self::WithType<B>
    where
        F: FnOnce(&Self::Inner) -> B;

    /// Replaces the element with `value`.
    #[inline]
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
    {
        self.fmap(|_| value)
    }

    /// Discards the element.
    #[inline]
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.replace(())
    }
}

// =============================================================================
// Maybe<A> Implementation
// =============================================================================

impl<A> Functor for Maybe<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Maybe<B>
    where
        F: FnOnce(&A) -> B,
    {
        self.as_ref().map(function)
    }
}

// =============================================================================
// Satisfaction<A> Implementation
// =============================================================================

impl<A> Functor for Satisfaction<A> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Satisfaction<B>
    where
        F: FnOnce(A) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, F>(&self, function: F) -> Satisfaction<B>
    where
        F: FnOnce(&A) -> B,
    {
        match self {
            Self::Satisfied(value) => Satisfaction::Satisfied(function(value)),
            Self::Dissatisfied(value) => Satisfaction::Dissatisfied(function(value)),
        }
    }
}

// =============================================================================
// Focus Implementations
// =============================================================================

impl<F, S: Clone> Functor for FirstFocus<F, S> {
    #[inline]
    fn fmap<B, G>(self, function: G) -> FirstFocus<B, S>
    where
        G: FnOnce(F) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, G>(&self, function: G) -> FirstFocus<B, S>
    where
        G: FnOnce(&F) -> B,
    {
        let pair = self.as_pair();
        FirstFocus::on(Pair::new(
            function(pair.isolate_first()),
            pair.isolate_second().clone(),
        ))
    }
}

impl<F: Clone, S> Functor for SecondFocus<F, S> {
    #[inline]
    fn fmap<B, G>(self, function: G) -> SecondFocus<F, B>
    where
        G: FnOnce(S) -> B,
    {
        self.map(function)
    }

    #[inline]
    fn fmap_ref<B, G>(&self, function: G) -> SecondFocus<F, B>
    where
        G: FnOnce(&S) -> B,
    {
        let pair = self.as_pair();
        SecondFocus::on(Pair::new(
            pair.isolate_first().clone(),
            function(pair.isolate_second()),
        ))
    }
}
