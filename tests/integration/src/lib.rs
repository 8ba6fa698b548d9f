//! Integration test utilities for msgly
//!
//! In-memory implementations of the repository traits, plus fixtures that
//! wire them into a `ServiceContext` for end-to-end service tests.

pub mod fixtures;
pub mod memory;

pub use fixtures::*;
pub use memory::*;
