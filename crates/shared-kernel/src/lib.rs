// crates/shared-kernel/src/lib.rs
//! Types shared by every guard clause crate: the error taxonomy and the
//! `Range` value object. Nothing here depends on the assertion machinery.

pub use error::{GuardError, GuardResult};

pub mod error;
pub mod value_objects;

pub use value_objects::{Range, RangeFromInfo};
