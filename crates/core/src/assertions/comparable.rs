// crates/core/src/assertions/comparable.rs
use std::{borrow::Cow, fmt};

use guard_clauses_shared_kernel::{GuardError, Range};

use crate::{check::Check, comparison::Comparison, messages};

/// Comparison and range-membership guard clauses for every ordered,
/// displayable type.
///
/// Each raising assertion returns the checked value unchanged on success and
/// the error selected by its [`Check`] on failure.
///
/// # Examples
///
/// ```rust
/// # use guard_clauses_core::{Check, ComparableAssertions};
/// # use guard_clauses_shared_kernel::{GuardError, Range};
/// fn set_volume(level: u8) -> Result<u8, GuardError> {
///     let audible = Range::from_exclusive(0).to_inclusive(100)?;
///     level.must_be_in(&audible, Check::named("level"))
/// }
///
/// assert_eq!(set_volume(42).unwrap(), 42);
/// assert!(set_volume(0).is_err());
/// ```
pub trait ComparableAssertions: PartialOrd + fmt::Display + Sized {
    /// Passes when `self >= boundary`.
    #[inline]
    fn must_not_be_less_than<E>(self, boundary: Self, check: Check<'_, Self, Self, E>) -> Result<Self, E>
    where
        E: From<GuardError>,
    {
        compare(self, Comparison::NotLessThan, boundary, check)
    }

    /// Passes when `self < boundary`.
    #[inline]
    fn must_be_less_than<E>(self, boundary: Self, check: Check<'_, Self, Self, E>) -> Result<Self, E>
    where
        E: From<GuardError>,
    {
        compare(self, Comparison::LessThan, boundary, check)
    }

    /// Passes when `self > boundary`.
    #[inline]
    fn must_not_be_less_than_or_equal_to<E>(self, boundary: Self, check: Check<'_, Self, Self, E>) -> Result<Self, E>
    where
        E: From<GuardError>,
    {
        compare(self, Comparison::NotLessThanOrEqualTo, boundary, check)
    }

    /// Passes when `self <= boundary`.
    #[inline]
    fn must_be_less_than_or_equal_to<E>(self, boundary: Self, check: Check<'_, Self, Self, E>) -> Result<Self, E>
    where
        E: From<GuardError>,
    {
        compare(self, Comparison::LessThanOrEqualTo, boundary, check)
    }

    /// Passes when `self <= boundary`.
    #[inline]
    fn must_not_be_greater_than<E>(self, boundary: Self, check: Check<'_, Self, Self, E>) -> Result<Self, E>
    where
        E: From<GuardError>,
    {
        compare(self, Comparison::NotGreaterThan, boundary, check)
    }

    /// Passes when `self > boundary`.
    #[inline]
    fn must_be_greater_than<E>(self, boundary: Self, check: Check<'_, Self, Self, E>) -> Result<Self, E>
    where
        E: From<GuardError>,
    {
        compare(self, Comparison::GreaterThan, boundary, check)
    }

    /// Passes when `self < boundary`.
    #[inline]
    fn must_not_be_greater_than_or_equal_to<E>(
        self,
        boundary: Self,
        check: Check<'_, Self, Self, E>,
    ) -> Result<Self, E>
    where
        E: From<GuardError>,
    {
        compare(self, Comparison::NotGreaterThanOrEqualTo, boundary, check)
    }

    /// Passes when `self >= boundary`.
    #[inline]
    fn must_be_greater_than_or_equal_to<E>(self, boundary: Self, check: Check<'_, Self, Self, E>) -> Result<Self, E>
    where
        E: From<GuardError>,
    {
        compare(self, Comparison::GreaterThanOrEqualTo, boundary, check)
    }

    /// Passes when `range` contains `self`.
    #[inline]
    fn must_be_in<E>(self, range: &Range<Self>, check: Check<'_, Self, Range<Self>, E>) -> Result<Self, E>
    where
        E: From<GuardError>,
    {
        membership(self, true, range, check)
    }

    /// Passes when `range` does not contain `self`.
    #[inline]
    fn must_not_be_in<E>(self, range: &Range<Self>, check: Check<'_, Self, Range<Self>, E>) -> Result<Self, E>
    where
        E: From<GuardError>,
    {
        membership(self, false, range, check)
    }

    #[inline]
    fn is_in(&self, range: &Range<Self>) -> bool {
        range.is_value_within_range(self)
    }

    #[inline]
    fn is_not_in(&self, range: &Range<Self>) -> bool {
        !range.is_value_within_range(self)
    }
}

impl<T> ComparableAssertions for T where T: PartialOrd + fmt::Display {}

fn compare<T, E>(value: T, comparison: Comparison, boundary: T, check: Check<'_, T, T, E>) -> Result<T, E>
where
    T: PartialOrd + fmt::Display,
    E: From<GuardError>,
{
    if comparison.holds(&value, &boundary) {
        return Ok(value);
    }

    Err(check.into_error(&value, &boundary, |parameter_name, message| {
        let message = message.map_or_else(
            || messages::comparison_violation(parameter_name.as_deref(), comparison, &boundary, &value),
            Cow::into_owned,
        );
        GuardError::OutOfBounds {
            parameter_name: parameter_name.map(Cow::into_owned),
            value: value.to_string(),
            boundary: boundary.to_string(),
            message,
        }
    }))
}

fn membership<T, E>(value: T, inside: bool, range: &Range<T>, check: Check<'_, T, Range<T>, E>) -> Result<T, E>
where
    T: PartialOrd + fmt::Display,
    E: From<GuardError>,
{
    if range.is_value_within_range(&value) == inside {
        return Ok(value);
    }

    Err(check.into_error(&value, range, |parameter_name, message| {
        let message = message.map_or_else(
            || messages::range_violation(parameter_name.as_deref(), inside, range, &value),
            Cow::into_owned,
        );
        GuardError::OutOfBounds {
            parameter_name: parameter_name.map(Cow::into_owned),
            value: value.to_string(),
            boundary: range.to_string(),
            message,
        }
    }))
}
