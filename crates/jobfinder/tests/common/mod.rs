//! Shared test utilities for jobfinder integration tests.
//!
//! This module provides:
//! - Builders for job records and application forms
//! - `FakeSource`, a scripted `JobSource` that can hold a fetch open

pub mod builders;
pub mod source;

pub use builders::*;
pub use source::FakeSource;
