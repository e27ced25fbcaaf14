//! Maybe type - a value that may or may not be present.
//!
//! `Maybe<T>` is either `Just(T)` or `Nothing`. Every combinator consumes the
//! value and returns a new one, so a chain reads left to right and the absent
//! path never runs the functions it is handed.
//!
//! # Examples
//!
//! ```rust
//! use curie::control::Maybe;
//!
//! let length = Maybe::just("String")
//!     .map(str::len)
//!     .preserve_if(|length| *length > 3)
//!     .collapse(0);
//! assert_eq!(length, 6);
//!
//! let missing: Maybe<&str> = Maybe::none();
//! assert_eq!(missing.map(str::len).collapse_with(|| 7), 7);
//! ```
//!
//! # Equality
//!
//! `==` compares any two `Maybe`s whose payloads are comparable, including
//! across payload types (`Maybe<String> == Maybe<&str>`). Absence carries no
//! information, so [`Maybe::erased_eq`] compares a `Maybe` with one of any
//! element type, and `Nothing` is equal to `Nothing` whatever the types:
//!
//! ```rust
//! use curie::control::Maybe;
//!
//! let integers: Maybe<i32> = Maybe::none();
//! let strings: Maybe<String> = Maybe::none();
//! assert!(integers.erased_eq(&strings));
//! assert!(!Maybe::just(1).erased_eq(&strings));
//! assert!(Maybe::just("a".to_string()) == Maybe::just("a"));
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::ValueNotPresent;

/// A value of type `T`, or nothing.
///
/// See the module-level documentation for an overview.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// No value.
    Nothing,
}

/// Creates a present [`Maybe`].
#[inline]
pub const fn just<T>(value: T) -> Maybe<T> {
    Maybe::Just(value)
}

/// Creates an absent [`Maybe`].
#[inline]
pub const fn none<T>() -> Maybe<T> {
    Maybe::Nothing
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a present value.
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// Creates an absent value.
    #[inline]
    pub const fn none() -> Self {
        Self::Nothing
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if a value is present.
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value is present.
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    /// Borrows the held value.
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms the held value.
    ///
    /// `Just(v)` becomes `Just(function(v))`. `Nothing` stays `Nothing` and
    /// `function` is never called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use curie::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(2).map(|x| x * 10), Maybe::just(20));
    /// assert_eq!(Maybe::<i32>::none().map(|x| x * 10), Maybe::<i32>::none());
    /// ```
    #[inline]
    pub fn map<S, F>(self, function: F) -> Maybe<S>
    where
        F: FnOnce(T) -> S,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Replaces the held value with the `Maybe` produced by `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use curie::control::Maybe;
    ///
    /// let halve = |x: i32| if x % 2 == 0 { Maybe::just(x / 2) } else { Maybe::none() };
    /// assert_eq!(Maybe::just(8).flat_map(halve), Maybe::just(4));
    /// assert_eq!(Maybe::just(3).flat_map(halve), Maybe::<i32>::none());
    /// ```
    #[inline]
    pub fn flat_map<S, F>(self, function: F) -> Maybe<S>
    where
        F: FnOnce(T) -> Maybe<S>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    // =========================================================================
    // Assumption
    // =========================================================================

    /// Returns the held value, or [`ValueNotPresent`] if absent.
    ///
    /// # Errors
    ///
    /// Returns [`ValueNotPresent`] when called on `Nothing`.
    #[inline]
    pub fn assume(self) -> Result<T, ValueNotPresent> {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(ValueNotPresent),
        }
    }

    /// Returns the held value, or the error built by `error_factory` if absent.
    ///
    /// The factory only runs on the absent path.
    ///
    /// # Errors
    ///
    /// Returns `error_factory()` when called on `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use curie::control::Maybe;
    ///
    /// let absent: Maybe<i32> = Maybe::none();
    /// assert_eq!(absent.assume_or_else(|| "missing"), Err("missing"));
    /// ```
    #[inline]
    pub fn assume_or_else<E, F>(self, error_factory: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(error_factory()),
        }
    }

    // =========================================================================
    // Collapse
    // =========================================================================

    /// Returns the held value, or `default` if absent.
    #[inline]
    pub fn collapse(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the held value, or the result of `default` if absent.
    ///
    /// `default` is not evaluated when a value is present.
    #[inline]
    pub fn collapse_with<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default(),
        }
    }

    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` iff a value is present and satisfies `predicate`.
    #[inline]
    pub fn satisfies<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Just(value) => predicate(value),
            Self::Nothing => false,
        }
    }

    /// Keeps the held value only if it satisfies `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use curie::control::Maybe;
    ///
    /// assert_eq!(Maybe::just(4_i32).preserve_if(|x| *x % 2 == 0), Maybe::just(4));
    /// assert_eq!(Maybe::just(5_i32).preserve_if(|x| *x % 2 == 0), Maybe::<i32>::none());
    /// ```
    #[inline]
    pub fn preserve_if<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Just(value) => {
                if predicate(&value) {
                    Self::Just(value)
                } else {
                    Self::Nothing
                }
            }
            Self::Nothing => Self::Nothing,
        }
    }

    /// Drops the held value if it satisfies `predicate`.
    #[inline]
    pub fn reject_if<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.preserve_if(|value| !predicate(value))
    }

    /// Compares with a `Maybe` of any element type.
    ///
    /// Every `Nothing` equals every other `Nothing`. A present value never
    /// equals a `Maybe` of an unrelated type; use `==` to compare payloads.
    #[inline]
    pub const fn erased_eq<S>(&self, other: &Maybe<S>) -> bool {
        self.is_nothing() && other.is_nothing()
    }

    // =========================================================================
    // Side Effects
    // =========================================================================

    /// Runs `effect` on the held value, if any, and returns `self`.
    #[inline]
    pub fn when_present_do<F>(self, effect: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Just(value) = &self {
            effect(value);
        }
        self
    }

    /// Runs `effect` if no value is present, and returns `self`.
    #[inline]
    pub fn when_missing_do<F>(self, effect: F) -> Self
    where
        F: FnOnce(),
    {
        if self.is_nothing() {
            effect();
        }
        self
    }
}

// =============================================================================
// Equality and Hashing
// =============================================================================

impl<T, S> PartialEq<Maybe<S>> for Maybe<T>
where
    T: PartialEq<S>,
{
    fn eq(&self, other: &Maybe<S>) -> bool {
        match (self, other) {
            (Self::Just(left), Maybe::Just(right)) => left == right,
            (Self::Nothing, Maybe::Nothing) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for Maybe<T> {}

impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Just(value) => {
                state.write_u8(1);
                value.hash(state);
            }
            Self::Nothing => state.write_u8(0),
        }
    }
}

// =============================================================================
// Conversions and Formatting
// =============================================================================

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Nothing, Self::Just)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => write!(formatter, "Just{{{value}}}"),
            Self::Nothing => formatter.write_str("Nothing{}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn construction_reports_variant() {
        assert!(Maybe::just(1).is_just());
        assert!(Maybe::<i32>::none().is_nothing());
        assert_eq!(just(1), Maybe::Just(1));
        assert_eq!(none::<i32>(), Maybe::<i32>::Nothing);
    }

    #[rstest]
    fn map_skips_function_when_absent() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::none().map(|value| {
            calls.set(calls.get() + 1);
            value + 1
        });
        assert_eq!(result, Maybe::<i32>::none());
        assert_eq!(calls.get(), 0);
    }

    #[rstest]
    fn reject_if_on_nothing_does_not_test() {
        let tested = Cell::new(false);
        let result = Maybe::<i32>::none().reject_if(|_| {
            tested.set(true);
            true
        });
        assert!(result.is_nothing());
        assert!(!tested.get());
    }

    #[rstest]
    fn absent_values_of_different_types_hash_alike() {
        use std::collections::hash_map::DefaultHasher;

        fn hash_of<T: Hash>(value: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            value.hash(&mut hasher);
            hasher.finish()
        }

        assert_eq!(
            hash_of(&Maybe::<i32>::none()),
            hash_of(&Maybe::<String>::none())
        );
    }

    #[rstest]
    fn erased_eq_ignores_element_type_of_absences() {
        assert!(Maybe::<i32>::none().erased_eq(&Maybe::<String>::none()));
        assert!(Maybe::<Vec<u8>>::none().erased_eq(&Maybe::<()>::none()));
        assert!(!Maybe::just(1).erased_eq(&Maybe::<String>::none()));
        assert!(!Maybe::<i32>::none().erased_eq(&Maybe::just('c')));
    }

    #[rstest]
    fn option_round_trip() {
        let maybe: Maybe<i32> = Some(3).into();
        assert_eq!(maybe, Maybe::just(3));
        let option: Option<i32> = Maybe::<i32>::none().into();
        assert_eq!(option, None);
    }

    #[rstest]
    #[case(Maybe::just(5), "Just{5}")]
    #[case(Maybe::none(), "Nothing{}")]
    fn display(#[case] value: Maybe<i32>, #[case] expected: &str) {
        assert_eq!(value.to_string(), expected);
    }
}
