#![cfg(feature = "typeclass")]
//! Property-based tests for Functor laws.
//!
//! - **Identity Law**: `fa.fmap(|x| x) == fa`
//! - **Composition Law**: `fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))`
//!
//! Checked for `Maybe`, `Satisfaction` and both focused views of `Pair`.

use curie::control::{Maybe, Satisfaction};
use curie::product::Pair;
use curie::typeclass::Functor;
use proptest::prelude::*;

fn maybe_strategy() -> impl Strategy<Value = Maybe<i32>> {
    prop_oneof![any::<i32>().prop_map(Maybe::Just), Just(Maybe::Nothing)]
}

fn satisfaction_strategy() -> impl Strategy<Value = Satisfaction<String>> {
    prop_oneof![
        any::<String>().prop_map(Satisfaction::Satisfied),
        any::<String>().prop_map(Satisfaction::Dissatisfied),
    ]
}

fn pair_strategy() -> impl Strategy<Value = Pair<i32, String>> {
    (any::<i32>(), any::<String>()).prop_map(Pair::from)
}

// =============================================================================
// Maybe<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_maybe_identity_law(value in maybe_strategy()) {
        prop_assert_eq!(value.fmap(|x| x), value);
    }

    #[test]
    fn prop_maybe_composition_law(value in maybe_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = value.fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_maybe_fmap_agrees_with_map(value in maybe_strategy()) {
        let function = |n: i32| i64::from(n) * 3;
        prop_assert_eq!(value.fmap(function), value.map(function));
    }
}

// =============================================================================
// Satisfaction<A> Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_satisfaction_identity_law(value in satisfaction_strategy()) {
        prop_assert_eq!(value.clone().fmap(|x| x), value);
    }

    #[test]
    fn prop_satisfaction_composition_law(value in satisfaction_strategy()) {
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_mul(2);

        let left = value.clone().fmap(function1).fmap(function2);
        let right = value.fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_satisfaction_fmap_keeps_tag(value in satisfaction_strategy()) {
        prop_assert_eq!(value.clone().fmap(|s| s.len()).is_satisfied(), value.is_satisfied());
    }
}

// =============================================================================
// Focus Property Tests
// =============================================================================

proptest! {
    #[test]
    fn prop_first_focus_identity_law(pair in pair_strategy()) {
        let focus = pair.focus_first();
        prop_assert_eq!(focus.clone().fmap(|x| x), focus);
    }

    #[test]
    fn prop_first_focus_composition_law(pair in pair_strategy()) {
        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = pair.clone().focus_first().fmap(function1).fmap(function2);
        let right = pair.focus_first().fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_second_focus_identity_law(pair in pair_strategy()) {
        let focus = pair.focus_second();
        prop_assert_eq!(focus.clone().fmap(|x| x), focus);
    }

    #[test]
    fn prop_second_focus_composition_law(pair in pair_strategy()) {
        let function1 = |s: String| s.len();
        let function2 = |n: usize| n.wrapping_add(10);

        let left = pair.clone().focus_second().fmap(function1).fmap(function2);
        let right = pair.focus_second().fmap(|x| function2(function1(x)));

        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_fmap_ref_matches_fmap(pair in pair_strategy()) {
        let focus = pair.focus_second();
        let by_ref = focus.fmap_ref(String::len);
        let by_value = focus.clone().fmap(|s| s.len());
        prop_assert_eq!(by_ref, by_value);
    }
}
