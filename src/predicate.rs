//! Predicate combinators.
//!
//! Any `Fn(&T) -> bool` is a [`Predicate<T>`] and gains `and`, `or`, `xor`,
//! `negate` and `satisfy`. The free functions build common predicates and
//! fold a collection of predicates into one.
//!
//! # Examples
//!
//! ```rust
//! use curie::control::Maybe;
//! use curie::predicate::{Predicate, all_of, is_not};
//!
//! let small = |n: &i32| *n < 10;
//! let even = |n: &i32| n % 2 == 0;
//! let small_odd = small.and(is_not(even));
//!
//! assert!(small_odd(&7));
//! assert!(!small_odd(&8));
//! assert_eq!(small_odd.satisfy(3).preserve(), Maybe::just(3));
//!
//! let bounds: [fn(&i32) -> bool; 2] = [|n| *n > 0, |n| *n < 100];
//! let bounded = all_of(bounds);
//! assert!(bounded(&50));
//! ```

use crate::control::Satisfaction;

/// A boxed predicate, for mixing differently typed predicates in one collection.
pub type BoxedPredicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// Combinators available on every `Fn(&T) -> bool`.
pub trait Predicate<T: ?Sized>: Fn(&T) -> bool {
    /// Evaluates the predicate.
    #[inline]
    fn test(&self, value: &T) -> bool {
        self(value)
    }

    /// Evaluates the predicate and tags `value` with the result.
    #[inline]
    fn satisfy(&self, value: T) -> Satisfaction<T>
    where
        T: Sized,
    {
        Satisfaction::test(value, |candidate| self(candidate))
    }

    /// Both predicates hold. `other` is not evaluated if `self` fails.
    #[inline]
    fn and<P>(self, other: P) -> impl Fn(&T) -> bool
    where
        Self: Sized,
        P: Fn(&T) -> bool,
    {
        move |value| self(value) && other(value)
    }

    /// Either predicate holds. `other` is not evaluated if `self` holds.
    #[inline]
    fn or<P>(self, other: P) -> impl Fn(&T) -> bool
    where
        Self: Sized,
        P: Fn(&T) -> bool,
    {
        move |value| self(value) || other(value)
    }

    /// Exactly one of the predicates holds.
    #[inline]
    fn xor<P>(self, other: P) -> impl Fn(&T) -> bool
    where
        Self: Sized,
        P: Fn(&T) -> bool,
    {
        move |value| self(value) ^ other(value)
    }

    /// The predicate does not hold.
    #[inline]
    fn negate(self) -> impl Fn(&T) -> bool
    where
        Self: Sized,
    {
        move |value| !self(value)
    }
}

impl<T: ?Sized, P> Predicate<T> for P where P: Fn(&T) -> bool {}

/// Holds for every value.
#[inline]
pub fn ever_true<T: ?Sized>() -> impl Fn(&T) -> bool {
    |_| true
}

/// Holds for no value.
#[inline]
pub fn ever_false<T: ?Sized>() -> impl Fn(&T) -> bool {
    |_| false
}

/// Holds for values equal to `target`.
#[inline]
pub fn is_equal<T: PartialEq>(target: T) -> impl Fn(&T) -> bool {
    move |value| *value == target
}

/// Returns `predicate` unchanged; reads well at call sites.
#[inline]
pub fn is<T: ?Sized, P>(predicate: P) -> P
where
    P: Fn(&T) -> bool,
{
    predicate
}

/// Holds where `predicate` does not.
#[inline]
pub fn is_not<T: ?Sized, P>(predicate: P) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
{
    move |value| !predicate(value)
}

/// Holds when every predicate holds; an empty collection always holds.
pub fn all_of<T: ?Sized, P, I>(predicates: I) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    I: IntoIterator<Item = P>,
{
    let predicates: Vec<P> = predicates.into_iter().collect();
    move |value| predicates.iter().all(|predicate| predicate(value))
}

/// Holds when at least one predicate holds; an empty collection never holds.
pub fn any_of<T: ?Sized, P, I>(predicates: I) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    I: IntoIterator<Item = P>,
{
    let predicates: Vec<P> = predicates.into_iter().collect();
    move |value| predicates.iter().any(|predicate| predicate(value))
}

/// Holds when no predicate holds; an empty collection always holds.
pub fn none_of<T: ?Sized, P, I>(predicates: I) -> impl Fn(&T) -> bool
where
    P: Fn(&T) -> bool,
    I: IntoIterator<Item = P>,
{
    is_not(any_of(predicates))
}
