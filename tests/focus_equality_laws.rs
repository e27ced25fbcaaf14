//! Property-based tests for equality and hashing across `Pair`, `FirstFocus`
//! and `SecondFocus`.
//!
//! For every pair `p`: `p`, `p.focus_first()` and `p.focus_second()` are
//! mutually equal and hash identically; two representations compare equal
//! exactly when their underlying pairs do.

use curie::product::{FirstFocus, Pair, SecondFocus};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

fn pair_strategy() -> impl Strategy<Value = Pair<u8, String>> {
    (any::<u8>(), "[a-c]{0,2}").prop_map(|(first, second)| Pair::new(first, second))
}

proptest! {
    #[test]
    fn prop_representations_are_mutually_equal(pair in pair_strategy()) {
        let first: FirstFocus<u8, String> = pair.clone().focus_first();
        let second: SecondFocus<u8, String> = pair.clone().focus_second();

        prop_assert!(pair == first && first == pair);
        prop_assert!(pair == second && second == pair);
        prop_assert!(first == second && second == first);
    }

    #[test]
    fn prop_representations_hash_identically(pair in pair_strategy()) {
        let expected = hash_of(&pair);
        prop_assert_eq!(hash_of(&pair.clone().focus_first()), expected);
        prop_assert_eq!(hash_of(&pair.focus_second()), expected);
    }

    #[test]
    fn prop_equality_follows_underlying_pair(left in pair_strategy(), right in pair_strategy()) {
        let expected = left.isolate_first() == right.isolate_first()
            && left.isolate_second() == right.isolate_second();

        prop_assert_eq!(left == right, expected);
        prop_assert_eq!(left.clone().focus_first() == right.clone().focus_second(), expected);
        prop_assert_eq!(left.focus_second() == right.focus_first(), expected);
    }

    #[test]
    fn prop_equality_is_transitive_through_views(pair in pair_strategy()) {
        let via_first = pair.clone().focus_first().unfocus();
        let via_second = pair.clone().focus_second().unfocus();
        prop_assert_eq!(&via_first, &pair);
        prop_assert_eq!(&via_second, &pair);
        prop_assert_eq!(via_first, via_second);
    }
}
