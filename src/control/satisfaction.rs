//! Satisfaction type - the outcome of testing a value against a predicate.
//!
//! A `Satisfaction<T>` carries the tested value in both variants and records
//! whether it passed. It is meant to be short-lived: build one from a test and
//! collapse it straight away.
//!
//! # Examples
//!
//! ```rust
//! use curie::control::Satisfaction;
//!
//! let label = Satisfaction::test(17, |n: &i32| n % 2 == 0)
//!     .pipe_collapse(|n| format!("{n} is even"), |n| format!("{n} is odd"));
//! assert_eq!(label, "17 is odd");
//! ```

use super::maybe::Maybe;

/// A value tagged as having satisfied or dissatisfied some test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Satisfaction<T> {
    /// The value passed the test.
    Satisfied(T),
    /// The value failed the test.
    Dissatisfied(T),
}

impl<T> Satisfaction<T> {
    /// Tags `value` as satisfying.
    #[inline]
    pub const fn satisfied(value: T) -> Self {
        Self::Satisfied(value)
    }

    /// Tags `value` as dissatisfying.
    #[inline]
    pub const fn dissatisfied(value: T) -> Self {
        Self::Dissatisfied(value)
    }

    /// Applies `predicate` to `value` and tags it with the result.
    #[inline]
    pub fn test<P>(value: T, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        if predicate(&value) {
            Self::Satisfied(value)
        } else {
            Self::Dissatisfied(value)
        }
    }

    /// Returns `true` for `Satisfied`.
    #[inline]
    pub const fn is_satisfied(&self) -> bool {
        matches!(self, Self::Satisfied(_))
    }

    /// Discards the tag and returns the tested value.
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Satisfied(value) | Self::Dissatisfied(value) => value,
        }
    }

    /// `Just` the value if satisfied, `Nothing` otherwise.
    #[inline]
    pub fn preserve(self) -> Maybe<T> {
        match self {
            Self::Satisfied(value) => Maybe::Just(value),
            Self::Dissatisfied(_) => Maybe::Nothing,
        }
    }

    /// `Just` the value if dissatisfied, `Nothing` otherwise.
    #[inline]
    pub fn reject(self) -> Maybe<T> {
        match self {
            Self::Satisfied(_) => Maybe::Nothing,
            Self::Dissatisfied(value) => Maybe::Just(value),
        }
    }

    /// Selects one of two ready-made results by tag, ignoring the value.
    #[inline]
    pub fn collapse<S>(self, if_satisfied: S, if_dissatisfied: S) -> S {
        if self.is_satisfied() {
            if_satisfied
        } else {
            if_dissatisfied
        }
    }

    /// Like [`collapse`](Self::collapse), but only the selected producer runs.
    #[inline]
    pub fn lazy_collapse<S, F, G>(self, if_satisfied: F, if_dissatisfied: G) -> S
    where
        F: FnOnce() -> S,
        G: FnOnce() -> S,
    {
        if self.is_satisfied() {
            if_satisfied()
        } else {
            if_dissatisfied()
        }
    }

    /// Passes the tested value to the function selected by tag.
    #[inline]
    pub fn pipe_collapse<S, F, G>(self, if_satisfied: F, if_dissatisfied: G) -> S
    where
        F: FnOnce(T) -> S,
        G: FnOnce(T) -> S,
    {
        match self {
            Self::Satisfied(value) => if_satisfied(value),
            Self::Dissatisfied(value) => if_dissatisfied(value),
        }
    }

    /// Runs `effect` on a satisfying value and returns `self`.
    #[inline]
    pub fn when_satisfied_do<F>(self, effect: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Satisfied(value) = &self {
            effect(value);
        }
        self
    }

    /// Runs `effect` on a dissatisfying value and returns `self`.
    #[inline]
    pub fn when_dissatisfied_do<F>(self, effect: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Dissatisfied(value) = &self {
            effect(value);
        }
        self
    }

    /// Transforms the tested value, keeping the tag.
    #[inline]
    pub fn map<S, F>(self, function: F) -> Satisfaction<S>
    where
        F: FnOnce(T) -> S,
    {
        match self {
            Self::Satisfied(value) => Satisfaction::Satisfied(function(value)),
            Self::Dissatisfied(value) => Satisfaction::Dissatisfied(function(value)),
        }
    }
}
