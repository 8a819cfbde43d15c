// tests/common/mod.rs
//! 共通テストユーティリティ
#![allow(dead_code)]


#[allow(unused_imports)]
pub use errors::*;
#[allow(unused_imports)]
pub use matchers::*;
