//! Data types shared by the repository, the view manager and the UI layer.

pub mod application;
pub mod job;

pub use application::ApplicationForm;
pub use job::{Job, JobRecord};
