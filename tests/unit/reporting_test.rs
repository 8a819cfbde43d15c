use std::cell::Cell;

use guard_clauses::prelude::*;

use crate::common::AppError;

#[test]
fn parameterless_factory_wins_over_everything() {
    let err = 3_i64
        .must_be_greater_than(
            10,
            Check::raising(|| AppError::Rejected)
                .or_raising_with_value(|v: &i64| AppError::InvalidQuantity(*v))
                .with_parameter_name("quantity")
                .with_message("ignored"),
        )
        .unwrap_err();
    assert_eq!(err, AppError::Rejected);
}

#[test]
fn value_factory_receives_checked_value() {
    let err = 3_i64
        .must_be_greater_than(10, Check::raising_with_value(|v: &i64| AppError::InvalidQuantity(*v)))
        .unwrap_err();
    assert_eq!(err, AppError::InvalidQuantity(3));
}

#[test]
fn boundary_factory_receives_range() {
    let allowed = Range::from_inclusive(1).to_inclusive(99).unwrap();
    let err = 120_i64
        .must_be_in(
            &allowed,
            Check::raising_with_boundary(|v: &i64, r: &Range<i64>| AppError::OutsideAllowed {
                value: *v,
                allowed: r.to_string(),
            }),
        )
        .unwrap_err();
    assert_eq!(err, AppError::OutsideAllowed { value: 120, allowed: "[1, 99]".to_string() });
}

#[test]
fn default_error_converts_into_caller_error() {
    fn reserve(quantity: i64) -> Result<i64, AppError> {
        let quantity = quantity.must_be_greater_than(0, Check::named("quantity"))?;
        Ok(quantity)
    }

    assert_eq!(reserve(4), Ok(4));
    match reserve(0) {
        Err(AppError::Guard(inner)) => assert_eq!(inner.parameter_name(), Some("quantity")),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn factory_is_not_invoked_on_success() {
    let calls = Cell::new(0);
    let result = 42_i64.must_be_greater_than(
        10,
        Check::raising(|| {
            calls.set(calls.get() + 1);
            AppError::Rejected
        }),
    );
    assert_eq!(result, Ok(42));
    assert_eq!(calls.get(), 0);
}

#[test]
fn factory_is_invoked_once_on_failure() {
    let calls = Cell::new(0);
    let result = 5_i64.must_be_greater_than(
        10,
        Check::raising(|| {
            calls.set(calls.get() + 1);
            AppError::Rejected
        }),
    );
    assert_eq!(result, Err(AppError::Rejected));
    assert_eq!(calls.get(), 1);
}

#[test]
fn owned_name_and_message_are_accepted() {
    let field = format!("items[{}]", 3);
    let err = 0_u32
        .must_be_greater_than(0, Check::named(field).with_message(String::from("must be positive")))
        .unwrap_err();
    assert_eq!(err.parameter_name(), Some("items[3]"));
    assert_eq!(err.to_string(), "must be positive");
}

#[test]
fn missing_option_reports_null_argument() {
    let err = None::<&str>.must_not_be_none(Check::named("endpoint")).unwrap_err();
    assert!(err.is_null_argument());
    assert_eq!(Some("localhost").must_not_be_none(Check::named("endpoint")), Ok("localhost"));
}

#[test]
fn named_default_error_joins_a_caller_error_chain() {
    let validate = |quantity: i64| -> Result<i64, AppError> {
        quantity
            .must_be_greater_than(0, Check::named_as("quantity"))
            .and_then(|q| q.must_be_less_than_or_equal_to(100, Check::raising(|| AppError::Rejected)))
    };

    assert_eq!(validate(5), Ok(5));
    assert_eq!(validate(500), Err(AppError::Rejected));
    match validate(0) {
        Err(AppError::Guard(inner)) => {
            assert!(inner.is_out_of_bounds());
            assert_eq!(inner.parameter_name(), Some("quantity"));
            assert_eq!(inner.to_string(), "quantity must be greater than 0, but it actually is 0.");
        }
        other => panic!("expected a wrapped guard error, got {other:?}"),
    }
}
