//! Error types for failed assumptions.
//!
//! `Maybe::assume` and `Either::assume_left` / `Either::assume_right` are the
//! only partial operations in the crate. When the assumed shape is wrong they
//! return one of the errors defined here instead of a value.

use std::fmt;

/// Returned by [`Maybe::assume`](crate::control::Maybe::assume) when the value is absent.
///
/// # Examples
///
/// ```rust
/// use curie::control::Maybe;
/// use curie::error::ValueNotPresent;
///
/// let absent: Maybe<i32> = Maybe::none();
/// assert_eq!(absent.assume(), Err(ValueNotPresent));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ValueNotPresent;

impl fmt::Display for ValueNotPresent {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Cannot provide value from a None-type Maybe")
    }
}

impl std::error::Error for ValueNotPresent {}

/// One of the two sides of an [`Either`](crate::control::Either).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Alternative {
    /// The left side.
    Left,
    /// The right side.
    Right,
}

impl Alternative {
    /// Returns the opposite side.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Alternative {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => formatter.write_str("Left"),
            Self::Right => formatter.write_str("Right"),
        }
    }
}

/// Returned when a side of an [`Either`](crate::control::Either) is assumed but
/// the other side is active.
///
/// `attempted` names the side the caller asked for.
///
/// # Examples
///
/// ```rust
/// use curie::control::Either;
/// use curie::error::{Alternative, InvalidAlternative};
///
/// let value: Either<i32, String> = Either::left(3);
/// let error = value.assume_right().unwrap_err();
/// assert_eq!(error, InvalidAlternative { attempted: Alternative::Right });
/// assert_eq!(
///     error.to_string(),
///     "Attempted to get value of alternative Right when it was not present."
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InvalidAlternative {
    /// The side that was wrongly assumed to be active.
    pub attempted: Alternative,
}

impl InvalidAlternative {
    /// Builds the error raised while `active` holds the payload.
    pub(crate) const fn against(active: Alternative) -> Self {
        Self {
            attempted: active.opposite(),
        }
    }

    /// The side that actually held the payload.
    #[inline]
    pub const fn active(&self) -> Alternative {
        self.attempted.opposite()
    }
}

impl fmt::Display for InvalidAlternative {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "Attempted to get value of alternative {} when it was not present.",
            self.attempted
        )
    }
}

impl std::error::Error for InvalidAlternative {}

/// Unifies every assumption failure so both can be propagated with `?`.
///
/// # Examples
///
/// ```rust
/// use curie::control::{Either, Maybe};
/// use curie::error::AssumptionError;
///
/// fn total(a: Maybe<i32>, b: Either<i32, String>) -> Result<i32, AssumptionError> {
///     Ok(a.assume()? + b.assume_left()?)
/// }
///
/// assert_eq!(total(Maybe::just(1), Either::left(2)), Ok(3));
/// assert!(total(Maybe::none(), Either::left(2)).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssumptionError {
    /// A `Maybe` was assumed present but was absent.
    ValueNotPresent(ValueNotPresent),
    /// An `Either` side was assumed but the other side was active.
    InvalidAlternative(InvalidAlternative),
}

impl fmt::Display for AssumptionError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueNotPresent(error) => write!(formatter, "{error}"),
            Self::InvalidAlternative(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for AssumptionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ValueNotPresent(error) => Some(error),
            Self::InvalidAlternative(error) => Some(error),
        }
    }
}

impl From<ValueNotPresent> for AssumptionError {
    fn from(error: ValueNotPresent) -> Self {
        Self::ValueNotPresent(error)
    }
}

impl From<InvalidAlternative> for AssumptionError {
    fn from(error: InvalidAlternative) -> Self {
        Self::InvalidAlternative(error)
    }
}
