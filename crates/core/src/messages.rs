// crates/core/src/messages.rs
//! Generated descriptions for the default `GuardError`.
use std::fmt;

use guard_clauses_shared_kernel::Range;

use crate::comparison::Comparison;

/// Stands in for the parameter name when the caller gave none.
pub const DEFAULT_SUBJECT: &str = "The value";

#[inline]
pub fn subject(parameter_name: Option<&str>) -> &str {
    parameter_name.unwrap_or(DEFAULT_SUBJECT)
}

pub fn comparison_violation<T>(parameter_name: Option<&str>, comparison: Comparison, boundary: &T, value: &T) -> String
where
    T: fmt::Display + ?Sized,
{
    format!(
        "{} {} {boundary}, but it actually is {value}.",
        subject(parameter_name),
        comparison.phrase()
    )
}

/// `inside` selects between the `must be between` and `must not be between` wording.
pub fn range_violation<T>(parameter_name: Option<&str>, inside: bool, range: &Range<T>, value: &T) -> String
where
    T: fmt::Display,
{
    let constraint = if inside { "must be between" } else { "must not be between" };
    format!(
        "{} {constraint} {}, but it actually is {value}.",
        subject(parameter_name),
        range.describe("and")
    )
}

pub fn none_violation(parameter_name: Option<&str>) -> String {
    format!("{} must not be None.", subject(parameter_name))
}
