//! Either type - a value that is one of two shapes.
//!
//! `Either<L, R>` is exactly one of `Left(L)` or `Right(R)`. Every operation
//! comes as a mirrored pair: the `*_left` form acts only when the left side is
//! active and passes a right value through untouched, and `*_right` does the
//! reverse.
//!
//! # Examples
//!
//! ```rust
//! use curie::control::Either;
//!
//! let parsed: Either<String, i32> = Either::left("42".to_string());
//! let number = parsed
//!     .flat_map_left(|text| match text.parse::<i32>() {
//!         Ok(number) => Either::right(number),
//!         Err(_) => Either::left(text),
//!     })
//!     .collapse_into_right(|text| text.len() as i32);
//! assert_eq!(number, 42);
//! ```

use std::fmt;

use super::maybe::Maybe;
use crate::error::{Alternative, InvalidAlternative};

/// A value that is either `Left(L)` or `Right(R)`, never both.
///
/// Equality and hashing take the active side into account: a `Left` is never
/// equal to a `Right`, even when both hold equal payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Either<L, R> {
    /// The left alternative.
    Left(L),
    /// The right alternative.
    Right(R),
}

/// Creates a `Left` [`Either`].
#[inline]
pub const fn left<L, R>(value: L) -> Either<L, R> {
    Either::Left(value)
}

/// Creates a `Right` [`Either`].
#[inline]
pub const fn right<L, R>(value: R) -> Either<L, R> {
    Either::Right(value)
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Construction and Type Checking
    // =========================================================================

    /// Creates a `Left` value.
    #[inline]
    pub const fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// Creates a `Right` value.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Returns `true` if the left side is active.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if the right side is active.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Returns the active side.
    #[inline]
    pub const fn side(&self) -> Alternative {
        match self {
            Self::Left(_) => Alternative::Left,
            Self::Right(_) => Alternative::Right,
        }
    }

    // =========================================================================
    // Swap
    // =========================================================================

    /// Flips the active side without touching the payload.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use curie::control::Either;
    ///
    /// let value: Either<i32, String> = Either::left(1);
    /// assert_eq!(value.swap(), Either::<String, i32>::right(1));
    /// ```
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Transforms the left payload; a right value passes through.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transforms the right payload; a left value passes through.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Replaces a left value with the `Either` produced by `function`, which
    /// may switch sides.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use curie::control::Either;
    ///
    /// let value: Either<String, usize> = Either::left("x".to_string());
    /// assert_eq!(value.flat_map_left(|text| Either::<String, usize>::right(text.len())), Either::right(1));
    /// ```
    #[inline]
    pub fn flat_map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> Either<T, R>,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Replaces a right value with the `Either` produced by `function`, which
    /// may switch sides.
    #[inline]
    pub fn flat_map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => function(value),
        }
    }

    // =========================================================================
    // Collapse
    // =========================================================================

    /// Returns the left payload, converting a right payload with `function`.
    #[inline]
    pub fn collapse_into_left<F>(self, function: F) -> L
    where
        F: FnOnce(R) -> L,
    {
        match self {
            Self::Left(value) => value,
            Self::Right(value) => function(value),
        }
    }

    /// Returns the right payload, converting a left payload with `function`.
    #[inline]
    pub fn collapse_into_right<F>(self, function: F) -> R
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(value) => function(value),
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Isolation
    // =========================================================================

    /// Returns `Just` the left payload, or `Nothing` if the right side is active.
    #[inline]
    pub fn isolate_left(self) -> Maybe<L> {
        match self {
            Self::Left(value) => Maybe::Just(value),
            Self::Right(_) => Maybe::Nothing,
        }
    }

    /// Returns `Just` the right payload, or `Nothing` if the left side is active.
    #[inline]
    pub fn isolate_right(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::Nothing,
            Self::Right(value) => Maybe::Just(value),
        }
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Tests the left payload; `false` if the right side is active.
    #[inline]
    pub fn satisfies_left<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&L) -> bool,
    {
        match self {
            Self::Left(value) => predicate(value),
            Self::Right(_) => false,
        }
    }

    /// Tests the right payload; `false` if the left side is active.
    #[inline]
    pub fn satisfies_right<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&R) -> bool,
    {
        match self {
            Self::Left(_) => false,
            Self::Right(value) => predicate(value),
        }
    }

    /// Tests the payload with whichever predicate matches the active side.
    #[inline]
    pub fn satisfies<P, Q>(&self, left_predicate: P, right_predicate: Q) -> bool
    where
        P: FnOnce(&L) -> bool,
        Q: FnOnce(&R) -> bool,
    {
        match self {
            Self::Left(value) => left_predicate(value),
            Self::Right(value) => right_predicate(value),
        }
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs `effect` on a left payload and returns `self`.
    #[inline]
    pub fn when_left_do<F>(self, effect: F) -> Self
    where
        F: FnOnce(&L),
    {
        if let Self::Left(value) = &self {
            effect(value);
        }
        self
    }

    /// Runs `effect` on a right payload and returns `self`.
    #[inline]
    pub fn when_right_do<F>(self, effect: F) -> Self
    where
        F: FnOnce(&R),
    {
        if let Self::Right(value) = &self {
            effect(value);
        }
        self
    }

    // =========================================================================
    // Assumption
    // =========================================================================

    /// Returns the left payload.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAlternative`] naming `Left` if the right side is active.
    #[inline]
    pub fn assume_left(self) -> Result<L, InvalidAlternative> {
        let active = self.side();
        self.assume_left_or_else(|| InvalidAlternative::against(active))
    }

    /// Returns the left payload, or the error built by `error_factory`.
    ///
    /// # Errors
    ///
    /// Returns `error_factory()` if the right side is active. The factory is
    /// not called otherwise.
    #[inline]
    pub fn assume_left_or_else<E, F>(self, error_factory: F) -> Result<L, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(error_factory()),
        }
    }

    /// Returns the right payload.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAlternative`] naming `Right` if the left side is active.
    #[inline]
    pub fn assume_right(self) -> Result<R, InvalidAlternative> {
        let active = self.side();
        self.assume_right_or_else(|| InvalidAlternative::against(active))
    }

    /// Returns the right payload, or the error built by `error_factory`.
    ///
    /// # Errors
    ///
    /// Returns `error_factory()` if the left side is active. The factory is
    /// not called otherwise.
    #[inline]
    pub fn assume_right_or_else<E, F>(self, error_factory: F) -> Result<R, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Left(_) => Err(error_factory()),
            Self::Right(value) => Ok(value),
        }
    }
}

// =============================================================================
// Conversions and Formatting
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    /// `Ok(r)` becomes `Right(r)`, `Err(l)` becomes `Left(l)`.
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Err(value),
            Either::Right(value) => Ok(value),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "Left{{{value}}}"),
            Self::Right(value) => write!(formatter, "Right{{{value}}}"),
        }
    }
}
