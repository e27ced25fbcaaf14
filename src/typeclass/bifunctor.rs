//! Bifunctor type class - mapping over two type parameters.
//!
//! A `Bifunctor` generalises `Functor` to types with two parameters,
//! transforming `F<A, B>` into `F<C, D>`.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! bf.bimap(|x| x, |y| y) == bf
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! bf.bimap(|x| f2(f1(x)), |y| g2(g1(y))) == bf.bimap(f1, g1).bimap(f2, g2)
//! ```
//!
//! ## first/second Consistency Law
//!
//! ```text
//! bf.bimap(f, g) == bf.first(f).second(g) == bf.second(g).first(f)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use curie::control::Either;
//! use curie::product::Pair;
//! use curie::typeclass::Bifunctor;
//!
//! let left: Either<i32, String> = Either::left(42);
//! assert_eq!(left.bimap(|x| x * 2, |s: String| s.len()), Either::left(84));
//!
//! let pair = Pair::new(42, "hello");
//! assert_eq!(pair.bimap(|x| x + 1, str::len), Pair::new(43, 5));
//! ```
//!
//! For `Either`, `first` and `second` coincide with `map_left` and
//! `map_right`; for `Pair` they coincide with `map_first` and `map_second`.

use crate::control::Either;
use crate::product::Pair;

/// A type with two parameters that can have functions mapped over both.
///
/// See module-level documentation for laws.
pub trait Bifunctor<A, B> {
    /// The same constructor applied to `C` and `D`.
    type Target<C, D>;

    /// Applies one function per type parameter.
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D;

    /// Applies a function to the first type parameter only.
    #[inline]
    fn first<C, F>(self, function: F) -> Self::Target<C, B>
    where
        F: FnOnce(A) -> C,
        Self: Sized,
    {
        self.bimap(function, |b| b)
    }

    /// Applies a function to the second type parameter only.
    #[inline]
    fn second<D, G>(self, function: G) -> Self::Target<A, D>
    where
        G: FnOnce(B) -> D,
        Self: Sized,
    {
        self.bimap(|a| a, function)
    }

    /// Applies one function per type parameter to borrowed values.
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Self::Target<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D;
}

impl<L, R> Bifunctor<L, R> for Either<L, R> {
    type Target<C, D> = Either<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(L) -> C,
        G: FnOnce(R) -> D,
    {
        match self {
            Self::Left(left) => Either::Left(first_function(left)),
            Self::Right(right) => Either::Right(second_function(right)),
        }
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Either<C, R>
    where
        F: FnOnce(L) -> C,
    {
        self.map_left(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Either<L, D>
    where
        G: FnOnce(R) -> D,
    {
        self.map_right(function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Either<C, D>
    where
        F: FnOnce(&L) -> C,
        G: FnOnce(&R) -> D,
    {
        match self {
            Self::Left(left) => Either::Left(first_function(left)),
            Self::Right(right) => Either::Right(second_function(right)),
        }
    }
}

impl<A, B> Bifunctor<A, B> for Pair<A, B> {
    type Target<C, D> = Pair<C, D>;

    #[inline]
    fn bimap<C, D, F, G>(self, first_function: F, second_function: G) -> Pair<C, D>
    where
        F: FnOnce(A) -> C,
        G: FnOnce(B) -> D,
    {
        self.collapse(|first, second| Pair::new(first_function(first), second_function(second)))
    }

    #[inline]
    fn first<C, F>(self, function: F) -> Pair<C, B>
    where
        F: FnOnce(A) -> C,
    {
        self.map_first(function)
    }

    #[inline]
    fn second<D, G>(self, function: G) -> Pair<A, D>
    where
        G: FnOnce(B) -> D,
    {
        self.map_second(function)
    }

    #[inline]
    fn bimap_ref<C, D, F, G>(&self, first_function: F, second_function: G) -> Pair<C, D>
    where
        F: FnOnce(&A) -> C,
        G: FnOnce(&B) -> D,
    {
        Pair::new(
            first_function(self.isolate_first()),
            second_function(self.isolate_second()),
        )
    }
}
