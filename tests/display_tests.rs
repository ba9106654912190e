//! Integration tests for the Display and Debug implementations.

use adaptive_int_set::set::AdaptiveIntSet;
use rstest::rstest;

#[rstest]
fn test_empty_display() {
    assert_eq!(format!("{}", AdaptiveIntSet::new()), "{}");
}

#[rstest]
fn test_single_element_display() {
    let set: AdaptiveIntSet = [7].into_iter().collect();
    assert_eq!(format!("{set}"), "{7}");
}

#[rstest]
fn test_linear_display_keeps_insertion_order() {
    let set: AdaptiveIntSet = [10, -1, 4].into_iter().collect();
    assert_eq!(format!("{set}"), "{10, -1, 4}");
}

#[rstest]
fn test_display_after_removal_from_linear() {
    let mut set: AdaptiveIntSet = (1..=4).collect();
    set.remove(2);
    assert_eq!(format!("{set}"), "{1, 3, 4}");
}

#[rstest]
fn test_hashed_display_follows_elements_order() {
    let set: AdaptiveIntSet = (1..=11).collect();
    let expected = format!(
        "{{{}}}",
        set.elements()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    assert_eq!(format!("{set}"), expected);
    assert!(!format!("{set}").contains(", }"));
}

#[rstest]
fn test_debug_matches_display_for_integers() {
    let set: AdaptiveIntSet = [3, 1, 2].into_iter().collect();
    assert_eq!(format!("{set:?}"), format!("{set}"));
}
