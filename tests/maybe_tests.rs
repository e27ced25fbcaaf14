//! Unit tests for the Maybe<T> type.
//!
//! Maybe represents a value that may be absent:
//! - `Just(T)`: a present value
//! - `Nothing`: no value

use curie::control::{Maybe, just, none};
use curie::error::ValueNotPresent;
use rstest::rstest;
use std::cell::{Cell, RefCell};

#[derive(Debug, PartialEq)]
struct CustomError(&'static str);

// =============================================================================
// Construction and Equality
// =============================================================================

#[rstest]
fn just_holds_value() {
    let value = Maybe::just(5);
    assert!(value.is_just());
    assert!(!value.is_nothing());
    assert_eq!(value, just(5));
}

#[rstest]
fn nothing_holds_no_value() {
    let value: Maybe<i32> = Maybe::none();
    assert!(value.is_nothing());
    assert_eq!(value, none::<i32>());
}

#[rstest]
fn just_values_compare_by_payload() {
    assert_eq!(Maybe::just("a".to_string()), Maybe::just("a".to_string()));
    assert_ne!(Maybe::just(1), Maybe::just(2));
    assert_ne!(Maybe::just(1), Maybe::<i32>::none());
}

#[rstest]
fn nothing_equals_nothing_of_any_type() {
    assert!(Maybe::<i32>::none().erased_eq(&Maybe::<String>::none()));
    assert!(Maybe::<Vec<u8>>::none().erased_eq(&Maybe::<()>::none()));
    assert!(none::<String>().erased_eq(&none::<i32>()));
}

#[rstest]
#[case(Maybe::just(1), false)]
#[case(Maybe::none(), true)]
fn erased_eq_holds_only_between_absences(#[case] value: Maybe<i32>, #[case] expected: bool) {
    assert_eq!(value.erased_eq(&Maybe::<String>::none()), expected);
    assert!(!value.erased_eq(&Maybe::just("present")));
}

#[rstest]
fn nothing_hashes_alike_across_types() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    assert_eq!(
        hash_of(&Maybe::<u64>::none()),
        hash_of(&Maybe::<String>::none())
    );
}

#[rstest]
fn just_compares_across_compatible_payload_types() {
    assert!(Maybe::just("text".to_string()) == Maybe::just("text"));
}

// =============================================================================
// map / flat_map
// =============================================================================

#[rstest]
fn map_transforms_present_value() {
    assert_eq!(Maybe::just("String").map(str::len), Maybe::just(6));
}

#[rstest]
fn map_on_nothing_never_calls_function() {
    let calls = Cell::new(0);
    let result = Maybe::<&str>::none().map(|text| {
        calls.set(calls.get() + 1);
        text.len()
    });
    assert_eq!(result, Maybe::<usize>::none());
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn flat_map_replaces_with_result() {
    assert_eq!(Maybe::just(5).flat_map(|n| Maybe::just(n + 1)), Maybe::just(6));
    assert_eq!(
        Maybe::just(5).flat_map(|_| Maybe::<i32>::none()),
        Maybe::<i32>::none()
    );
}

#[rstest]
fn flat_map_on_nothing_never_calls_function() {
    let called = Cell::new(false);
    let result = Maybe::<i32>::none().flat_map(|n| {
        called.set(true);
        Maybe::just(n)
    });
    assert!(result.is_nothing());
    assert!(!called.get());
}

// =============================================================================
// assume
// =============================================================================

#[rstest]
fn assume_returns_present_value() {
    assert_eq!(Maybe::just(5).assume(), Ok(5));
}

#[rstest]
fn assume_on_nothing_fails_with_value_not_present() {
    assert_eq!(Maybe::<i32>::none().assume(), Err(ValueNotPresent));
}

#[rstest]
fn assume_or_else_uses_custom_error() {
    let result = Maybe::<i32>::none().assume_or_else(|| CustomError("absent"));
    assert_eq!(result, Err(CustomError("absent")));
}

#[rstest]
fn assume_or_else_does_not_build_error_when_present() {
    let built = Cell::new(false);
    let result = Maybe::just(5).assume_or_else(|| {
        built.set(true);
        CustomError("unused")
    });
    assert_eq!(result, Ok(5));
    assert!(!built.get());
}

// =============================================================================
// collapse
// =============================================================================

#[rstest]
#[case(Maybe::just(5), 5)]
#[case(Maybe::none(), 7)]
fn collapse_with_eager_default(#[case] value: Maybe<i32>, #[case] expected: i32) {
    assert_eq!(value.collapse(7), expected);
}

#[rstest]
fn collapse_with_evaluates_default_when_absent() {
    assert_eq!(Maybe::<i32>::none().collapse_with(|| 7), 7);
}

#[rstest]
fn collapse_with_skips_default_when_present() {
    let calls = Cell::new(0);
    let result = Maybe::just(5).collapse_with(|| {
        calls.set(calls.get() + 1);
        7
    });
    assert_eq!(result, 5);
    assert_eq!(calls.get(), 0);
}

// =============================================================================
// Predicates
// =============================================================================

#[rstest]
#[case(Maybe::just(4), true)]
#[case(Maybe::just(3), false)]
#[case(Maybe::none(), false)]
fn satisfies_tests_present_value(#[case] value: Maybe<i32>, #[case] expected: bool) {
    assert_eq!(value.satisfies(|n| n % 2 == 0), expected);
}

#[rstest]
fn preserve_if_keeps_matching_value() {
    assert_eq!(Maybe::just(4_i32).preserve_if(|n| n % 2 == 0), Maybe::just(4));
    assert_eq!(
        Maybe::just(3_i32).preserve_if(|n| n % 2 == 0),
        Maybe::<i32>::none()
    );
    assert_eq!(
        Maybe::<i32>::none().preserve_if(|_| true),
        Maybe::<i32>::none()
    );
}

#[rstest]
fn reject_if_drops_matching_value() {
    assert_eq!(
        Maybe::just(4_i32).reject_if(|n| n % 2 == 0),
        Maybe::<i32>::none()
    );
    assert_eq!(Maybe::just(3_i32).reject_if(|n| n % 2 == 0), Maybe::just(3));
    assert_eq!(
        Maybe::<i32>::none().reject_if(|_| false),
        Maybe::<i32>::none()
    );
}

// =============================================================================
// Side Effects
// =============================================================================

#[rstest]
fn when_present_do_runs_only_for_just() {
    let seen = RefCell::new(Vec::new());

    let present = Maybe::just(1).when_present_do(|n| seen.borrow_mut().push(*n));
    let absent = Maybe::<i32>::none().when_present_do(|n| seen.borrow_mut().push(*n));

    assert_eq!(present, Maybe::just(1));
    assert_eq!(absent, Maybe::<i32>::none());
    assert_eq!(*seen.borrow(), vec![1]);
}

#[rstest]
fn when_missing_do_runs_only_for_nothing() {
    let missing = Cell::new(0);

    let present = Maybe::just(1).when_missing_do(|| missing.set(missing.get() + 1));
    let absent = Maybe::<i32>::none().when_missing_do(|| missing.set(missing.get() + 1));

    assert_eq!(present, Maybe::just(1));
    assert_eq!(absent, Maybe::<i32>::none());
    assert_eq!(missing.get(), 1);
}

#[rstest]
fn side_effects_chain() {
    let log = RefCell::new(Vec::new());
    let result = Maybe::just("a")
        .when_present_do(|value| log.borrow_mut().push(format!("present {value}")))
        .when_missing_do(|| log.borrow_mut().push("missing".to_string()))
        .map(str::to_uppercase)
        .preserve_if(|value| value == "B")
        .when_missing_do(|| log.borrow_mut().push("missing".to_string()));

    assert_eq!(result, Maybe::<String>::none());
    assert_eq!(*log.borrow(), vec!["present a".to_string(), "missing".to_string()]);
}

// =============================================================================
// Call Conventions
// =============================================================================

fn double(value: i32) -> i32 {
    value * 2
}

#[rstest]
fn function_items_and_closures_agree() {
    let as_pointer: fn(i32) -> i32 = double;
    assert_eq!(Maybe::just(4).map(double), Maybe::just(4).map(|n| n * 2));
    assert_eq!(Maybe::just(4).map(as_pointer), Maybe::just(8));
}

// =============================================================================
// Conversions and Display
// =============================================================================

#[rstest]
fn option_round_trip() {
    let present: Maybe<i32> = Some(1).into();
    let absent: Maybe<i32> = None.into();
    assert_eq!(present, Maybe::just(1));
    assert_eq!(Option::<i32>::from(absent), None);
    assert_eq!(Maybe::<u8>::default(), Maybe::<u8>::none());
}

#[rstest]
fn display_names_variant() {
    assert_eq!(Maybe::just(3).to_string(), "Just{3}");
    assert_eq!(Maybe::<i32>::none().to_string(), "Nothing{}");
}
