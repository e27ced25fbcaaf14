//! Focused views over one slot of a [`Pair`].
//!
//! A focus narrows the combinators of a pair down to a single slot while
//! remaining the same value: a focus compares equal to the pair it was built
//! from, to the opposite focus over that pair, and hashes identically.
//!
//! # Examples
//!
//! ```rust
//! use curie::product::Pair;
//!
//! let focused = Pair::new("String", 5).focus_first().map(str::len);
//! assert_eq!(focused, Pair::new(6, 5).focus_first());
//! assert_eq!(focused, Pair::new(6, 5));
//! assert_eq!(focused.unfocus().focus_second().map(|n| n * 2).isolate(), &10);
//! ```

use std::fmt;

use super::pair::Pair;

/// A view of a [`Pair`] restricted to its first slot.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct FirstFocus<F, S> {
    pair: Pair<F, S>,
}

impl<F, S> FirstFocus<F, S> {
    /// Focuses the first slot of `pair`.
    #[inline]
    pub const fn on(pair: Pair<F, S>) -> Self {
        Self { pair }
    }

    /// Recovers the underlying pair.
    #[inline]
    pub fn unfocus(self) -> Pair<F, S> {
        self.pair
    }

    /// Borrows the underlying pair.
    #[inline]
    pub const fn as_pair(&self) -> &Pair<F, S> {
        &self.pair
    }

    /// Borrows the focused value.
    #[inline]
    pub const fn isolate(&self) -> &F {
        self.pair.isolate_first()
    }

    /// Substitutes the focused value, staying focused on the first slot.
    #[inline]
    pub fn replace<T>(self, first: T) -> FirstFocus<T, S> {
        FirstFocus::on(self.pair.replace_first(first))
    }

    /// Transforms the focused value, staying focused on the first slot.
    #[inline]
    pub fn map<T, G>(self, function: G) -> FirstFocus<T, S>
    where
        G: FnOnce(F) -> T,
    {
        FirstFocus::on(self.pair.map_first(function))
    }

    /// Runs `effect` on the focused value and returns `self`.
    #[inline]
    pub fn with_do<G>(self, effect: G) -> Self
    where
        G: FnOnce(&F),
    {
        effect(self.isolate());
        self
    }
}

/// A view of a [`Pair`] restricted to its second slot.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct SecondFocus<F, S> {
    pair: Pair<F, S>,
}

impl<F, S> SecondFocus<F, S> {
    /// Focuses the second slot of `pair`.
    #[inline]
    pub const fn on(pair: Pair<F, S>) -> Self {
        Self { pair }
    }

    /// Recovers the underlying pair.
    #[inline]
    pub fn unfocus(self) -> Pair<F, S> {
        self.pair
    }

    /// Borrows the underlying pair.
    #[inline]
    pub const fn as_pair(&self) -> &Pair<F, S> {
        &self.pair
    }

    /// Borrows the focused value.
    #[inline]
    pub const fn isolate(&self) -> &S {
        self.pair.isolate_second()
    }

    /// Substitutes the focused value, staying focused on the second slot.
    #[inline]
    pub fn replace<T>(self, second: T) -> SecondFocus<F, T> {
        SecondFocus::on(self.pair.replace_second(second))
    }

    /// Transforms the focused value, staying focused on the second slot.
    #[inline]
    pub fn map<T, G>(self, function: G) -> SecondFocus<F, T>
    where
        G: FnOnce(S) -> T,
    {
        SecondFocus::on(self.pair.map_second(function))
    }

    /// Runs `effect` on the focused value and returns `self`.
    #[inline]
    pub fn with_do<G>(self, effect: G) -> Self
    where
        G: FnOnce(&S),
    {
        effect(self.isolate());
        self
    }
}

impl<F, S> From<Pair<F, S>> for FirstFocus<F, S> {
    fn from(pair: Pair<F, S>) -> Self {
        Self::on(pair)
    }
}

impl<F, S> From<Pair<F, S>> for SecondFocus<F, S> {
    fn from(pair: Pair<F, S>) -> Self {
        Self::on(pair)
    }
}

impl<F: fmt::Display, S: fmt::Display> fmt::Display for FirstFocus<F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "FirstFocus{{{}}}", self.pair)
    }
}

impl<F: fmt::Display, S: fmt::Display> fmt::Display for SecondFocus<F, S> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "SecondFocus{{{}}}", self.pair)
    }
}
