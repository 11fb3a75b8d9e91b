use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::error::FetchError;
use crate::model::JobRecord;

/// A read-only provider of the job collection.
///
/// Implementations either return the full collection or fail; the repository
/// never sees a partial result.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch_jobs(&self) -> Result<Vec<JobRecord>, FetchError>;
}

/// Response body of the jobs endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsEnvelope {
    pub jobs: Vec<JobRecord>,
}

impl JobsEnvelope {
    /// Decodes a response body into job records.
    pub fn decode(body: &str) -> Result<Vec<JobRecord>, FetchError> {
        serde_json::from_str::<JobsEnvelope>(body)
            .map(|envelope| envelope.jobs)
            .map_err(|e| FetchError::MalformedBody(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_envelope() {
        let body = r#"{"jobs": [
            {"title": "Backend Engineer", "companyName": "Acme", "locations": ["Remote"]}
        ]}"#;
        let jobs = JobsEnvelope::decode(body).unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].company_name, "Acme");
    }

    #[test]
    fn test_decode_empty_collection() {
        let jobs = JobsEnvelope::decode(r#"{"jobs": []}"#).unwrap();
        assert!(jobs.is_empty());
    }

    #[test]
    fn test_decode_missing_envelope_is_malformed() {
        let result = JobsEnvelope::decode(r#"[{"title": "Engineer", "companyName": "Acme"}]"#);
        assert!(matches!(result, Err(FetchError::MalformedBody(_))));
    }

    #[test]
    fn test_decode_garbage_is_malformed() {
        let result = JobsEnvelope::decode("<html>502 Bad Gateway</html>");
        assert!(matches!(result, Err(FetchError::MalformedBody(_))));
    }
}
