//! The remote job source and its HTTP implementation.

pub mod client;
pub mod error;
pub mod source;

pub use client::HttpJobSource;
pub use error::FetchError;
pub use source::{JobSource, JobsEnvelope};
