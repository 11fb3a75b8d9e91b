use serde::{Deserialize, Serialize};

/// A submitted application bound to one job id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub contact_number: String,
    pub why_hire_you: String,
    pub job_id: String,
}

impl ApplicationForm {
    /// Creates an empty form for the given job, as the form screen does on open.
    pub fn for_job(job_id: impl Into<String>) -> Self {
        Self {
            job_id: job_id.into(),
            ..Self::default()
        }
    }
}
