//! Scenario tests for MagicalContainer and its traversal views.
//!
//! Each test builds a container through `add_element`/`remove_element` and
//! checks size or the values emitted between `begin()` and `end()`.

use magical_container::prelude::*;
use rstest::rstest;

fn build(values: &[i32]) -> MagicalContainer {
    let mut container = MagicalContainer::new();
    for &value in values {
        container.add_element(value);
    }
    container
}

/// Walks a view with the cursor protocol instead of `Iterator`.
fn walk<S: Traversal>(view: &View<'_, S>) -> Vec<i32> {
    let mut emitted = Vec::new();
    let mut cursor = view.begin();
    while cursor != view.end() {
        emitted.push(cursor.get().unwrap());
        cursor.advance().unwrap();
    }
    emitted
}

// =============================================================================
// Size
// =============================================================================

#[rstest]
fn test_new_container_is_empty() {
    assert_eq!(MagicalContainer::new().size(), 0);
}

#[rstest]
#[case(&[1], 1)]
#[case(&[1, 2, 3], 3)]
#[case(&[-1], 1)]
#[case(&[0], 1)]
#[case(&[1, 1], 2)]
fn test_size_after_adding(#[case] values: &[i32], #[case] expected: usize) {
    assert_eq!(build(values).size(), expected);
}

#[rstest]
fn test_size_tracks_each_mutation() {
    let mut container = MagicalContainer::new();
    container.add_element(1);
    assert_eq!(container.size(), 1);
    container.add_element(2);
    assert_eq!(container.size(), 2);
    container.remove_element(1);
    assert_eq!(container.size(), 1);
    container.remove_element(2);
    assert_eq!(container.size(), 0);
}

#[rstest]
#[case(3)]
#[case(0)]
#[case(-1)]
fn test_removing_absent_value_keeps_size(#[case] absent: i32) {
    let mut container = build(&[1, 2]);
    assert!(!container.remove_element(absent));
    assert_eq!(container.size(), 2);
}

#[rstest]
fn test_duplicate_survives_single_removal() {
    let mut container = build(&[1, 1]);
    container.remove_element(1);
    assert_eq!(container.size(), 1);
    assert!(container.contains(1));
}

#[rstest]
fn test_add_then_remove_does_not_fail() {
    let mut container = MagicalContainer::new();
    container.add_element(1);
    assert!(container.remove_element(1));
    assert!(container.is_empty());
}

// =============================================================================
// Traversals
// =============================================================================

#[rstest]
fn test_reference_scenario_all_views() {
    let container = build(&[17, 2, 25, 9, 3]);

    assert_eq!(walk(&AscendingIterator::new(&container)), vec![2, 3, 9, 17, 25]);
    assert_eq!(walk(&SideCrossIterator::new(&container)), vec![2, 25, 3, 17, 9]);
    assert_eq!(walk(&PrimeIterator::new(&container)), vec![2, 3, 17]);
}

#[rstest]
#[case(&[3, 1, 2], &[1, 2, 3])]
#[case(&[1, -1, 0], &[-1, 0, 1])]
#[case(&[1, 2, 1], &[1, 1, 2])]
fn test_ascending_scenarios(#[case] values: &[i32], #[case] expected: &[i32]) {
    let container = build(values);
    assert_eq!(walk(&AscendingIterator::new(&container)), expected);
}

#[rstest]
#[case(&[-1, -2, -3, 2, 3], &[2, 3])]
#[case(&[4, 2, 3], &[2, 3])]
#[case(&[2, 3, 2], &[2, 2, 3])]
fn test_prime_scenarios(#[case] values: &[i32], #[case] expected: &[i32]) {
    let container = build(values);
    assert_eq!(walk(&PrimeIterator::new(&container)), expected);
}

#[rstest]
fn test_empty_container_views_begin_at_end() {
    let container = MagicalContainer::new();
    assert_eq!(container.size(), 0);

    let ascending = AscendingIterator::new(&container);
    let side_cross = SideCrossIterator::new(&container);
    let prime = PrimeIterator::new(&container);
    assert!(ascending.begin() == ascending.end());
    assert!(side_cross.begin() == side_cross.end());
    assert!(prime.begin() == prime.end());
}

#[rstest]
fn test_cleared_container_views_begin_at_end() {
    let mut container = build(&[2, 3]);
    for value in 0..4 {
        container.remove_element(value);
    }

    let ascending = AscendingIterator::new(&container);
    let prime = PrimeIterator::new(&container);
    assert_eq!(ascending.begin(), ascending.end());
    assert_eq!(prime.begin(), prime.end());
}

#[rstest]
#[case(&[1, 2], &[3, 4], &[3, 4], &[3])]
#[case(&[2, 1], &[4, 3], &[3, 4], &[3])]
#[case(&[2, 3], &[4, 5], &[4, 5], &[5])]
fn test_refill_after_clearing(
    #[case] initial: &[i32],
    #[case] refill: &[i32],
    #[case] ascending: &[i32],
    #[case] primes: &[i32],
) {
    let mut container = build(initial);
    for value in 0..4 {
        container.remove_element(value);
    }
    container.extend(refill.iter().copied());

    assert_eq!(container.size(), refill.len());
    assert_eq!(walk(&container.ascending()), ascending);
    assert_eq!(walk(&container.primes()), primes);
}

#[rstest]
fn test_exhausted_cursor_reports_invalid_state() {
    let container = build(&[5]);
    let view = PrimeIterator::new(&container);
    let mut cursor = view.begin();
    cursor.advance().unwrap();

    assert_eq!(cursor.state(), CursorState::Exhausted);
    assert!(matches!(
        cursor.get(),
        Err(ContainerError::InvalidState {
            operation: CursorOperation::Dereference,
            ..
        })
    ));
    assert!(matches!(
        cursor.advance(),
        Err(ContainerError::InvalidState {
            operation: CursorOperation::Advance,
            ..
        })
    ));
}
