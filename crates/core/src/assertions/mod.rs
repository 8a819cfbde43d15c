// crates/core/src/assertions/mod.rs
pub mod comparable;
pub mod option;

pub use comparable::ComparableAssertions;
pub use option::OptionAssertions;
