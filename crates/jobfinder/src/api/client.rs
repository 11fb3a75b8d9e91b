//! HTTP implementation of the job source.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::Client;
use std::time::Duration;

use super::error::{truncate_body, FetchError};
use super::source::{JobSource, JobsEnvelope};
use crate::config::ClientConfig;
use crate::model::JobRecord;

/// Fetches the job collection from a single JSON endpoint.
pub struct HttpJobSource {
    client: Client,
    url: String,
}

impl HttpJobSource {
    /// Creates a source for `url` with the given timeouts and user agent.
    pub fn new(
        url: impl Into<String>,
        connect_timeout: Duration,
        request_timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Creates a source from the client configuration.
    pub fn from_config(config: &ClientConfig) -> Result<Self, FetchError> {
        Self::new(
            config.api_url.clone(),
            Duration::from_secs(config.connect_timeout_secs),
            Duration::from_secs(config.request_timeout_secs),
            &config.user_agent,
        )
    }

    /// The endpoint this source reads from.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl JobSource for HttpJobSource {
    async fn fetch_jobs(&self) -> Result<Vec<JobRecord>, FetchError> {
        info!("Fetching jobs from {}", self.url);

        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        debug!("Jobs endpoint responded with {}", status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let body = truncate_body(&body);
            warn!("Jobs endpoint returned {}: {}", status, body);
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let jobs = JobsEnvelope::decode(&body)?;

        info!("Fetched {} jobs", jobs.len());
        Ok(jobs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::error::MAX_ERROR_BODY_LENGTH;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned HTTP response and returns the URL to request.
    async fn serve_once(status_line: &'static str, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request).await;

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\n\
                 Content-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            stream.shutdown().await.unwrap();
        });

        format!("http://{}/jobs", addr)
    }

    fn source_for(url: String) -> HttpJobSource {
        HttpJobSource::new(
            url,
            Duration::from_secs(5),
            Duration::from_secs(5),
            "jobfinder-test",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_decodes_envelope() {
        let body = r#"{"jobs": [
            {"title": "Backend Engineer", "companyName": "Acme", "locations": "Remote"}
        ]}"#;
        let url = serve_once("200 OK", body.to_string()).await;

        let jobs = source_for(url).fetch_jobs().await.unwrap();
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].company_name, "Acme");
        assert_eq!(jobs[0].locations, vec!["Remote"]);
    }

    #[tokio::test]
    async fn test_non_success_status_keeps_truncated_body() {
        let url = serve_once("503 Service Unavailable", "x".repeat(500)).await;

        match source_for(url).fetch_jobs().await.unwrap_err() {
            FetchError::Status { status, body } => {
                assert_eq!(status, 503);
                assert!(body.starts_with(&"x".repeat(MAX_ERROR_BODY_LENGTH)));
                assert!(body.ends_with("... (truncated)"));
                assert_eq!(
                    body.chars().filter(|c| *c == 'x').count(),
                    MAX_ERROR_BODY_LENGTH
                );
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_bad_body_is_malformed() {
        let url = serve_once("200 OK", "<html>maintenance</html>".to_string()).await;

        let err = source_for(url).fetch_jobs().await.unwrap_err();
        assert!(matches!(err, FetchError::MalformedBody(_)));
    }
}
