//! Conversions between the core types.

use crate::control::{Either, Maybe};
use crate::product::Pair;

/// `Just(v)` becomes `Left(v)`; `Nothing` becomes `Right(())`.
///
/// # Examples
///
/// ```rust
/// use curie::control::{Either, Maybe};
/// use curie::conversion::maybe_to_either;
///
/// assert_eq!(maybe_to_either(Maybe::just(1)), Either::left(1));
/// assert_eq!(maybe_to_either(Maybe::<i32>::none()), Either::right(()));
/// ```
#[inline]
pub fn maybe_to_either<T>(maybe: Maybe<T>) -> Either<T, ()> {
    maybe.map(Either::left).collapse_with(|| Either::right(()))
}

/// Splits an `Either` into a pair holding the active side as `Just` and the
/// other side as `Nothing`.
///
/// # Examples
///
/// ```rust
/// use curie::control::{Either, Maybe};
/// use curie::conversion::either_to_pair;
/// use curie::product::Pair;
///
/// let split = either_to_pair(Either::<i32, char>::right('r'));
/// assert_eq!(split, Pair::new(Maybe::<i32>::none(), Maybe::just('r')));
/// ```
#[inline]
pub fn either_to_pair<L, R>(either: Either<L, R>) -> Pair<Maybe<L>, Maybe<R>> {
    match either {
        Either::Left(value) => Pair::new(Maybe::Just(value), Maybe::Nothing),
        Either::Right(value) => Pair::new(Maybe::Nothing, Maybe::Just(value)),
    }
}
