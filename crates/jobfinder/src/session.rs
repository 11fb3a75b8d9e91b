//! Session state handed to UI components.
//!
//! A `JobSession` is created once and shared by handle (`Arc<JobSession>`)
//! with whichever screens need job state. All methods take `&self`, so user
//! mutations can proceed while a refresh is awaiting the network.

use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use log::{info, warn};
use serde::Serialize;

use crate::api::HttpJobSource;
use crate::config::ClientConfig;
use crate::error::{ConfigError, JobFinderError, Result};
use crate::model::{ApplicationForm, Job};
use crate::repository::{read_lock, write_lock, JobRepository, RefreshError, RefreshOutcome};
use crate::validation::validate_application;
use crate::views::{ApplyOutcome, JobViewManager, SaveOutcome};

/// Everything the UI reads, captured at one point in time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub jobs: Vec<Job>,
    pub filtered_jobs: Vec<Job>,
    pub saved_jobs: Vec<Job>,
    pub applications: Vec<ApplicationForm>,
    pub search_query: String,
    pub loading: bool,
    pub error: Option<RefreshError>,
    pub refreshed_at: Option<DateTime<Utc>>,
}

pub struct JobSession {
    repository: Arc<JobRepository>,
    views: RwLock<JobViewManager>,
}

impl JobSession {
    pub fn new(repository: Arc<JobRepository>) -> Self {
        Self {
            repository,
            views: RwLock::new(JobViewManager::new()),
        }
    }

    /// Builds a session backed by the HTTP job source described by `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let source = HttpJobSource::from_config(config).map_err(|e| ConfigError::Validation {
            message: e.to_string(),
        })?;
        let repository = JobRepository::with_id_strategy(Arc::new(source), config.id_strategy);
        Ok(Self::new(Arc::new(repository)))
    }

    pub fn repository(&self) -> &Arc<JobRepository> {
        &self.repository
    }

    /// Initial load. A failure is recorded as the last error rather than
    /// returned, so the UI can show its retry prompt. Returns whether a
    /// collection is available afterwards.
    pub async fn start(&self) -> bool {
        match self.repository.refresh().await {
            Ok(RefreshOutcome::Discarded) => false,
            Ok(_) => true,
            Err(e) => {
                warn!("Initial job load failed: {}", e);
                false
            }
        }
    }

    pub async fn refresh(&self) -> Result<RefreshOutcome> {
        self.repository.refresh().await
    }

    /// Drops interest in any in-flight refresh.
    pub fn close(&self) {
        info!("Closing job session");
        self.repository.close();
    }

    // ─── Reads ──────────────────────────────────────────────────────────────

    pub fn jobs(&self) -> Arc<Vec<Job>> {
        self.repository.jobs()
    }

    pub fn filtered_jobs(&self) -> Arc<Vec<Job>> {
        let snapshot = self.repository.snapshot();
        write_lock(&self.views).filtered_jobs(&snapshot)
    }

    pub fn search_query(&self) -> String {
        read_lock(&self.views).search_query().to_string()
    }

    pub fn saved_jobs(&self) -> Vec<Job> {
        read_lock(&self.views).saved_jobs().to_vec()
    }

    pub fn applications(&self) -> Vec<ApplicationForm> {
        read_lock(&self.views).applications().to_vec()
    }

    /// Jobs in the current collection that have an application.
    pub fn applied_jobs(&self) -> Vec<Job> {
        let snapshot = self.repository.snapshot();
        read_lock(&self.views).applied_jobs(&snapshot)
    }

    pub fn is_job_saved(&self, id: &str) -> bool {
        read_lock(&self.views).is_job_saved(id)
    }

    pub fn has_applied(&self, id: &str) -> bool {
        read_lock(&self.views).has_applied(id)
    }

    pub fn is_loading(&self) -> bool {
        self.repository.is_loading()
    }

    pub fn last_error(&self) -> Option<RefreshError> {
        self.repository.last_error()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let jobs = self.repository.snapshot();
        let mut views = write_lock(&self.views);
        let filtered = views.filtered_jobs(&jobs);

        SessionSnapshot {
            jobs: jobs.jobs.to_vec(),
            filtered_jobs: filtered.to_vec(),
            saved_jobs: views.saved_jobs().to_vec(),
            applications: views.applications().to_vec(),
            search_query: views.search_query().to_string(),
            loading: self.repository.is_loading(),
            error: self.repository.last_error(),
            refreshed_at: jobs.refreshed_at,
        }
    }

    // ─── Mutations ──────────────────────────────────────────────────────────

    pub fn set_search_query(&self, text: impl Into<String>) {
        write_lock(&self.views).set_search_query(text);
    }

    pub fn clear_search(&self) {
        write_lock(&self.views).clear_search();
    }

    pub fn save_job(&self, job: Job) -> Result<SaveOutcome> {
        write_lock(&self.views).save_job(job)
    }

    /// Saves the job with `id` from the current collection.
    pub fn save_job_by_id(&self, id: &str) -> Result<SaveOutcome> {
        let job = self.repository.find(id).ok_or_else(|| {
            JobFinderError::InvalidArgument(format!(
                "No job with id '{}' in the current collection",
                id
            ))
        })?;
        self.save_job(job)
    }

    pub fn remove_job(&self, id: &str) -> Result<bool> {
        write_lock(&self.views).remove_job(id)
    }

    /// Records an already validated application.
    pub fn apply_for_job(&self, form: ApplicationForm) -> Result<ApplyOutcome> {
        write_lock(&self.views).apply_for_job(form)
    }

    /// Validates `form` and records it; nothing changes if any rule fails.
    pub fn submit_application(&self, form: ApplicationForm) -> Result<ApplyOutcome> {
        let errors = validate_application(&form);
        if !errors.is_empty() {
            return Err(JobFinderError::InvalidForm(errors));
        }
        self.apply_for_job(form)
    }

    pub fn cancel_application(&self, job_id: &str) -> Result<usize> {
        write_lock(&self.views).cancel_application(job_id)
    }
}
