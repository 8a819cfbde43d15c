use guard_clauses::prelude::*;

use crate::common::assert_guard_error;

#[test]
fn builder_reads_like_interval_notation() {
    let closed_open = Range::from_inclusive(1).to_exclusive(5).unwrap();
    assert_eq!(closed_open.to_string(), "[1, 5)");
    assert!(closed_open.is_value_within_range(&1));
    assert!(closed_open.is_value_within_range(&4));
    assert!(!closed_open.is_value_within_range(&5));
    assert!(!closed_open.is_value_within_range(&0));

    let open_closed = Range::from_exclusive(1).to_inclusive(5).unwrap();
    assert_eq!(open_closed.to_string(), "(1, 5]");
    assert!(!open_closed.is_value_within_range(&1));
    assert!(open_closed.is_value_within_range(&5));
}

#[test]
fn inverted_range_reports_invalid_range() {
    for (li, ui) in [(true, true), (true, false), (false, true), (false, false)] {
        assert_guard_error(Range::new(10, 5, li, ui).unwrap_err())
            .is_invalid_range()
            .has_parameter_name(None)
            .mentions("10")
            .mentions("5");
    }
}

#[test]
fn ranges_are_plain_values() {
    fn assert_send_sync<T: Send + Sync>(_: &T) {}

    let original = Range::from_inclusive(1).to_inclusive(3).unwrap();
    let copy = original;
    assert_eq!(original, copy);
    assert_send_sync(&original);

    let handle = std::thread::spawn(move || copy.is_value_within_range(&2));
    assert!(handle.join().unwrap());
}

#[test]
fn index_guard_on_empty_collection_reports_out_of_bounds() {
    let items: Vec<u8> = Vec::new();
    let indices = Range::for_indices(items.len());
    assert_eq!(indices.to_string(), "[0, 0)");

    let err = 0_usize.must_be_in(&indices, Check::named("index")).unwrap_err();
    assert_guard_error(err)
        .is_out_of_bounds()
        .has_parameter_name(Some("index"))
        .mentions("0 (inclusive) and 0 (exclusive)");
}

#[test]
fn half_open_zero_width_ranges_reject_everything() {
    for range in [
        Range::from_inclusive(7).to_exclusive(7).unwrap(),
        Range::from_exclusive(7).to_inclusive(7).unwrap(),
    ] {
        assert!(7_i32.must_not_be_in(&range, Check::new()).is_ok());
        assert!(7_i32.must_be_in(&range, Check::new()).unwrap_err().is_out_of_bounds());
    }
    assert!(Range::from_exclusive(7).to_exclusive(7).unwrap_err().is_invalid_range());
}
