// src/lib.rs
//! Guard clauses for ordered values.
//!
//! ```rust
//! use guard_clauses::prelude::*;
//!
//! fn percentage(value: f64) -> GuardResult<f64> {
//!     let valid = Range::from_inclusive(0.0).to_inclusive(100.0)?;
//!     value.must_be_in(&valid, Check::named("value"))
//! }
//!
//! assert_eq!(percentage(12.5), Ok(12.5));
//! assert!(percentage(120.0).is_err());
//! ```

pub use guard_clauses_core::{
    Check, ComparableAssertions, Comparison, LOG_TARGET, OptionAssertions, assertions, check, messages,
};
pub use guard_clauses_shared_kernel::{GuardError, GuardResult, Range, RangeFromInfo, error, value_objects};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Everything needed at a call site: `use guard_clauses::prelude::*;`.
pub mod prelude {
    pub use guard_clauses_core::{Check, ComparableAssertions, OptionAssertions};
    pub use guard_clauses_shared_kernel::{GuardError, GuardResult, Range};
}
