use guard_clauses::prelude::*;

use crate::common::assert_guard_error;

#[test]
fn greater_than_passes_and_fails_with_descriptive_message() {
    assert_eq!(42_i32.must_be_greater_than(10, Check::new()), Ok(42));

    assert_guard_error(5_i32.must_be_greater_than(10, Check::new()).unwrap_err())
        .is_out_of_bounds()
        .has_parameter_name(None)
        .mentions("10")
        .mentions("5")
        .has_message("The value must be greater than 10, but it actually is 5.");
}

#[test]
fn must_not_be_in_half_open_range() {
    let range = Range::from_inclusive(30).to_exclusive(35).unwrap();

    assert_guard_error(30_i32.must_not_be_in(&range, Check::named("age")).unwrap_err())
        .is_out_of_bounds()
        .has_parameter_name(Some("age"))
        .has_message("age must not be between 30 (inclusive) and 35 (exclusive), but it actually is 30.");
    assert_eq!(29_i32.must_not_be_in(&range, Check::named("age")), Ok(29));
}

#[test]
fn must_be_in_open_closed_range() {
    let range = Range::from_exclusive(1).to_inclusive(5).unwrap();
    assert_eq!(5_i32.must_be_in(&range, Check::new()), Ok(5));

    assert_guard_error(1_i32.must_be_in(&range, Check::named("n")).unwrap_err())
        .has_message("n must be between 1 (exclusive) and 5 (inclusive), but it actually is 1.");
}

#[test]
fn inverted_range_is_invalid() {
    assert_guard_error(Range::new(10, 5, true, true).unwrap_err()).is_invalid_range();
}

#[test]
fn repeated_passing_assertion_returns_same_value() {
    let range = Range::from_inclusive(0.0).to_exclusive(1.0).unwrap();
    let mut value = 0.25_f64;
    for _ in 0..5 {
        value = value.must_be_in(&range, Check::new()).unwrap();
    }
    assert_eq!(value, 0.25);
}
