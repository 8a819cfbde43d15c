// crates/core/src/lib.rs
//! Comparison and range-membership guard clauses.
//!
//! The assertion traits evaluate a predicate and either hand the value back
//! or report the violation through a [`Check`], which selects between the
//! default [`GuardError`] and caller-supplied error factories.

pub mod assertions;
pub mod check;
pub mod comparison;
pub mod messages;

pub use assertions::{ComparableAssertions, OptionAssertions};
pub use check::Check;
pub use comparison::Comparison;
pub use guard_clauses_shared_kernel::{GuardError, GuardResult, Range, RangeFromInfo};

/// `log` target of the records emitted when a default error is produced.
pub const LOG_TARGET: &str = "guard_clauses";
