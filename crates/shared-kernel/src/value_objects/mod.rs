// crates/shared-kernel/src/value_objects/mod.rs
pub mod range;

pub use range::{Range, RangeFromInfo};
