//! Search filtering over the master collection.

use std::sync::Arc;

use crate::model::Job;

/// Returns true if `job` matches the already lower-cased `needle`.
///
/// Title, company name and every location are checked independently with a
/// case-insensitive substring match.
fn matches(job: &Job, needle: &str) -> bool {
    job.title.to_lowercase().contains(needle)
        || job.company_name.to_lowercase().contains(needle)
        || job
            .locations
            .iter()
            .any(|location| location.to_lowercase().contains(needle))
}

/// Filters `jobs` by `query`. An empty query keeps every job.
///
/// Pure: the result depends only on the arguments, and the relative order of
/// `jobs` is preserved.
pub fn filter_jobs(jobs: &[Job], query: &str) -> Vec<Job> {
    if query.is_empty() {
        return jobs.to_vec();
    }

    let needle = query.to_lowercase();
    jobs.iter()
        .filter(|job| matches(job, &needle))
        .cloned()
        .collect()
}

/// Memo of the last filtered view, keyed by collection generation and query.
#[derive(Debug, Default)]
pub struct FilterCache {
    key: Option<(u64, String)>,
    view: Arc<Vec<Job>>,
}

impl FilterCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the filtered view for `(generation, query)`, recomputing only
    /// when either differs from the cached key.
    pub fn get(&mut self, generation: u64, jobs: &[Job], query: &str) -> Arc<Vec<Job>> {
        let hit = matches!(&self.key, Some((g, q)) if *g == generation && q == query);
        if !hit {
            log::trace!("Recomputing filtered view (generation {})", generation);
            self.view = Arc::new(filter_jobs(jobs, query));
            self.key = Some((generation, query.to_string()));
        }
        Arc::clone(&self.view)
    }

    pub fn invalidate(&mut self) {
        self.key = None;
    }
}
