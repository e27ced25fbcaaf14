//! Structural equality and hashing shared by `Pair` and its focused views.
//!
//! Every representation is normalised to its underlying `Pair` before it is
//! compared or hashed, so the wrapper kind never takes part in either.

use std::hash::{Hash, Hasher};

use super::focus::{FirstFocus, SecondFocus};
use super::pair::Pair;

/// Anything that is, or wraps, a `Pair`.
pub(crate) trait PairView {
    type First;
    type Second;

    fn view(&self) -> &Pair<Self::First, Self::Second>;
}

impl<F, S> PairView for Pair<F, S> {
    type First = F;
    type Second = S;

    #[inline]
    fn view(&self) -> &Pair<F, S> {
        self
    }
}

impl<F, S> PairView for FirstFocus<F, S> {
    type First = F;
    type Second = S;

    #[inline]
    fn view(&self) -> &Pair<F, S> {
        self.as_pair()
    }
}

impl<F, S> PairView for SecondFocus<F, S> {
    type First = F;
    type Second = S;

    #[inline]
    fn view(&self) -> &Pair<F, S> {
        self.as_pair()
    }
}

#[inline]
fn views_equal<A, B>(left: &A, right: &B) -> bool
where
    A: PairView,
    B: PairView,
    A::First: PartialEq<B::First>,
    A::Second: PartialEq<B::Second>,
{
    let (left, right) = (left.view(), right.view());
    left.isolate_first() == right.isolate_first() && left.isolate_second() == right.isolate_second()
}

#[inline]
fn hash_view<V, H>(view: &V, state: &mut H)
where
    V: PairView,
    V::First: Hash,
    V::Second: Hash,
    H: Hasher,
{
    let pair = view.view();
    pair.isolate_first().hash(state);
    pair.isolate_second().hash(state);
}

macro_rules! impl_view_equality {
    ($left:ident => $($right:ident),+) => {
        $(
            impl<F, S, FOther, SOther> PartialEq<$right<FOther, SOther>> for $left<F, S>
            where
                F: PartialEq<FOther>,
                S: PartialEq<SOther>,
            {
                #[inline]
                fn eq(&self, other: &$right<FOther, SOther>) -> bool {
                    views_equal(self, other)
                }
            }
        )+

        impl<F: Eq, S: Eq> Eq for $left<F, S> {}

        impl<F: Hash, S: Hash> Hash for $left<F, S> {
            #[inline]
            fn hash<H: Hasher>(&self, state: &mut H) {
                hash_view(self, state);
            }
        }
    };
}

impl_view_equality!(Pair => Pair, FirstFocus, SecondFocus);
impl_view_equality!(FirstFocus => Pair, FirstFocus, SecondFocus);
impl_view_equality!(SecondFocus => Pair, FirstFocus, SecondFocus);
