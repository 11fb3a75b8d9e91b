//! Job view manager: the search-filtered view, the saved set and the
//! applications set, all derived from or keyed against the master collection.
//!
//! The manager never mutates the master collection and performs no I/O.
//! Saving twice, removing something absent and cancelling a missing
//! application are no-ops rather than errors.

pub mod search;

use std::sync::Arc;

use log::{debug, info};

use crate::error::{JobFinderError, Result};
use crate::model::{ApplicationForm, Job};
use crate::repository::JobSnapshot;

pub use search::{filter_jobs, FilterCache};

/// Result of [`JobViewManager::save_job`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
}

/// Result of [`JobViewManager::apply_for_job`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Submitted,
    /// An application for the same job existed and was replaced in place.
    Replaced,
}

#[derive(Debug, Default)]
pub struct JobViewManager {
    query: String,
    saved: Vec<Job>,
    applications: Vec<ApplicationForm>,
    filter_cache: FilterCache,
}

fn require_id<'a>(id: &'a str, what: &str) -> Result<&'a str> {
    if id.trim().is_empty() {
        return Err(JobFinderError::InvalidArgument(format!("{} must not be empty", what)));
    }
    Ok(id)
}

impl JobViewManager {
    pub fn new() -> Self {
        Self::default()
    }

    // ─── Search ─────────────────────────────────────────────────────────────

    /// Stores the raw query. The filtered view follows on the next read.
    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub fn clear_search(&mut self) {
        self.query.clear();
    }

    pub fn search_query(&self) -> &str {
        &self.query
    }

    /// Jobs of `snapshot` matching the current query.
    pub fn filtered_jobs(&mut self, snapshot: &JobSnapshot) -> Arc<Vec<Job>> {
        self.filter_cache
            .get(snapshot.generation, &snapshot.jobs, &self.query)
    }

    // ─── Saved jobs ─────────────────────────────────────────────────────────

    pub fn save_job(&mut self, job: Job) -> Result<SaveOutcome> {
        require_id(&job.id, "job id")?;

        if self.is_job_saved(&job.id) {
            debug!("Job {} already saved", job.id);
            return Ok(SaveOutcome::AlreadySaved);
        }

        info!("Saved job {} ({} at {})", job.id, job.title, job.company_name);
        self.saved.push(job);
        Ok(SaveOutcome::Saved)
    }

    /// Returns whether a saved job was removed.
    pub fn remove_job(&mut self, id: &str) -> Result<bool> {
        let id = require_id(id, "job id")?;

        let before = self.saved.len();
        self.saved.retain(|job| job.id != id);
        let removed = self.saved.len() != before;
        if removed {
            info!("Removed saved job {}", id);
        }
        Ok(removed)
    }

    pub fn is_job_saved(&self, id: &str) -> bool {
        self.saved.iter().any(|job| job.id == id)
    }

    /// Saved jobs in the order they were saved.
    pub fn saved_jobs(&self) -> &[Job] {
        &self.saved
    }

    // ─── Applications ───────────────────────────────────────────────────────

    /// Records an application, keeping at most one per job id.
    ///
    /// The form is expected to have passed
    /// [`validate_application`](crate::validation::validate_application).
    pub fn apply_for_job(&mut self, form: ApplicationForm) -> Result<ApplyOutcome> {
        require_id(&form.job_id, "application job id")?;

        if let Some(existing) = self
            .applications
            .iter_mut()
            .find(|app| app.job_id == form.job_id)
        {
            info!("Replacing application for job {}", form.job_id);
            *existing = form;
            return Ok(ApplyOutcome::Replaced);
        }

        info!("Submitted application for job {}", form.job_id);
        self.applications.push(form);
        Ok(ApplyOutcome::Submitted)
    }

    /// Returns the number of applications removed.
    pub fn cancel_application(&mut self, job_id: &str) -> Result<usize> {
        let job_id = require_id(job_id, "application job id")?;

        let before = self.applications.len();
        self.applications.retain(|app| app.job_id != job_id);
        let removed = before - self.applications.len();
        if removed > 0 {
            info!("Cancelled application for job {}", job_id);
        }
        Ok(removed)
    }

    pub fn has_applied(&self, id: &str) -> bool {
        self.applications.iter().any(|app| app.job_id == id)
    }

    pub fn application_for(&self, job_id: &str) -> Option<&ApplicationForm> {
        self.applications.iter().find(|app| app.job_id == job_id)
    }

    /// Applications in submission order.
    pub fn applications(&self) -> &[ApplicationForm] {
        &self.applications
    }

    /// Jobs of `snapshot` that have an application.
    pub fn applied_jobs(&self, snapshot: &JobSnapshot) -> Vec<Job> {
        snapshot
            .jobs
            .iter()
            .filter(|job| self.has_applied(&job.id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::JobRecord;

    fn job(id: &str, title: &str, company: &str) -> Job {
        JobRecord {
            title: title.to_string(),
            company_name: company.to_string(),
            company_logo: None,
            job_type: "Full-time".to_string(),
            work_model: "Remote".to_string(),
            seniority_level: "Mid".to_string(),
            min_salary: None,
            max_salary: None,
            locations: vec!["Remote".to_string()],
            main_category: None,
            tags: Vec::new(),
            pub_date: None,
            application_link: None,
            description: None,
        }
        .into_job(id.to_string())
    }

    fn form(job_id: &str, name: &str) -> ApplicationForm {
        ApplicationForm {
            name: name.to_string(),
            email: "jane@example.com".to_string(),
            contact_number: "09171234567".to_string(),
            why_hire_you: "I ship reliable software.".to_string(),
            job_id: job_id.to_string(),
        }
    }

    fn snapshot(jobs: Vec<Job>, generation: u64) -> JobSnapshot {
        JobSnapshot {
            generation,
            jobs: Arc::new(jobs),
            refreshed_at: None,
        }
    }

    #[test]
    fn test_save_is_idempotent() {
        let mut views = JobViewManager::new();
        let a = job("a", "Engineer", "Acme");

        assert_eq!(views.save_job(a.clone()).unwrap(), SaveOutcome::Saved);
        assert_eq!(views.save_job(a).unwrap(), SaveOutcome::AlreadySaved);
        assert_eq!(views.saved_jobs().len(), 1);
    }

    #[test]
    fn test_save_rejects_empty_id() {
        let mut views = JobViewManager::new();
        let err = views.save_job(job("", "Engineer", "Acme")).unwrap_err();
        assert!(matches!(err, JobFinderError::InvalidArgument(_)));
        assert!(views.saved_jobs().is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut views = JobViewManager::new();
        views.save_job(job("a", "Engineer", "Acme")).unwrap();

        assert!(!views.remove_job("missing").unwrap());
        assert_eq!(views.saved_jobs().len(), 1);

        assert!(views.remove_job("a").unwrap());
        assert!(!views.is_job_saved("a"));
    }

    #[test]
    fn test_saved_order_is_preserved() {
        let mut views = JobViewManager::new();
        views.save_job(job("b", "Designer", "Globex")).unwrap();
        views.save_job(job("a", "Engineer", "Acme")).unwrap();

        let ids: Vec<_> = views.saved_jobs().iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_reapply_replaces_in_place() {
        let mut views = JobViewManager::new();
        views.apply_for_job(form("y", "Other")).unwrap();

        assert_eq!(
            views.apply_for_job(form("x", "Jane")).unwrap(),
            ApplyOutcome::Submitted
        );
        assert_eq!(
            views.apply_for_job(form("x", "Janet")).unwrap(),
            ApplyOutcome::Replaced
        );

        assert_eq!(views.applications().len(), 2);
        assert_eq!(views.applications()[1].name, "Janet");
        assert_eq!(views.application_for("x").unwrap().name, "Janet");
    }

    #[test]
    fn test_apply_cancel_round_trip() {
        let mut views = JobViewManager::new();
        views.apply_for_job(form("x", "Jane")).unwrap();
        assert!(views.has_applied("x"));

        assert_eq!(views.cancel_application("x").unwrap(), 1);
        assert!(!views.has_applied("x"));
        assert_eq!(views.cancel_application("x").unwrap(), 0);
    }

    #[test]
    fn test_apply_rejects_missing_job_id() {
        let mut views = JobViewManager::new();
        let err = views.apply_for_job(form("  ", "Jane")).unwrap_err();
        assert!(matches!(err, JobFinderError::InvalidArgument(_)));
        assert!(views.applications().is_empty());
    }

    #[test]
    fn test_removing_saved_job_keeps_application() {
        let mut views = JobViewManager::new();
        views.save_job(job("a", "Engineer", "Acme")).unwrap();
        views.apply_for_job(form("a", "Jane")).unwrap();

        views.remove_job("a").unwrap();
        assert!(views.has_applied("a"));
    }

    #[test]
    fn test_filtered_view_follows_query_and_collection() {
        let mut views = JobViewManager::new();
        let first = snapshot(
            vec![
                job("1", "Backend Engineer", "Acme"),
                job("2", "Frontend Developer", "Globex"),
            ],
            1,
        );

        assert_eq!(views.filtered_jobs(&first).len(), 2);

        views.set_search_query("ACME");
        let filtered = views.filtered_jobs(&first);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");

        let second = snapshot(vec![job("3", "Acme Recruiter", "Hooli")], 2);
        let filtered = views.filtered_jobs(&second);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "3");

        views.clear_search();
        assert_eq!(views.search_query(), "");
        assert_eq!(views.filtered_jobs(&first).len(), 2);
    }

    #[test]
    fn test_applied_jobs_joins_current_collection() {
        let mut views = JobViewManager::new();
        let snap = snapshot(
            vec![job("1", "Engineer", "Acme"), job("2", "Designer", "Globex")],
            1,
        );
        views.apply_for_job(form("2", "Jane")).unwrap();
        views.apply_for_job(form("stale", "Jane")).unwrap();

        let applied = views.applied_jobs(&snap);
        assert_eq!(applied.len(), 1);
        assert_eq!(applied[0].id, "2");
    }
}
