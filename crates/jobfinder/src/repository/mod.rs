//! Job repository: the authoritative master collection.
//!
//! The repository owns the fetched collection and the assignment of local
//! ids. A refresh either replaces the whole collection or leaves it untouched;
//! it never merges and never partially overwrites.

pub mod identity;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};
use serde::Serialize;
use tracing::{info_span, Instrument};

use crate::api::{FetchError, JobSource};
use crate::error::{JobFinderError, Result, FETCH_FAILED_MESSAGE};
use crate::model::Job;

pub use identity::{assign_ids, IdStrategy};

/// A consistent view of the master collection at one point in time.
#[derive(Debug, Clone)]
pub struct JobSnapshot {
    /// Incremented on every successful replacement; 0 before the first one.
    pub generation: u64,
    pub jobs: Arc<Vec<Job>>,
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl JobSnapshot {
    fn empty() -> Self {
        Self {
            generation: 0,
            jobs: Arc::new(Vec::new()),
            refreshed_at: None,
        }
    }
}

/// What a call to [`JobRepository::refresh`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The collection was replaced.
    Refreshed { count: usize, generation: u64 },
    /// Another refresh was in flight and replaced the collection; this call
    /// waited for it instead of fetching again. If the joined refresh failed,
    /// the waiter gets the same error; if it was dropped, the waiter fetches.
    Coalesced,
    /// The repository was closed while the fetch was pending; the result
    /// was dropped.
    Discarded,
}

/// The last failed refresh, kept for the UI's retry prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshError {
    /// User-facing message.
    pub message: String,
    /// Technical cause.
    pub detail: String,
    pub occurred_at: DateTime<Utc>,
}

pub struct JobRepository {
    source: Arc<dyn JobSource>,
    id_strategy: IdStrategy,
    snapshot: RwLock<JobSnapshot>,
    generation: AtomicU64,
    loading: Arc<AtomicBool>,
    last_error: RwLock<Option<RefreshError>>,
    closed: AtomicBool,
    /// Held for the duration of a refresh so two assignment passes never interleave.
    refresh_lock: tokio::sync::Mutex<()>,
}

/// Clears the loading flag when the refresh ends, including when the
/// refresh future is dropped mid-fetch.
struct LoadingGuard {
    flag: Arc<AtomicBool>,
}

impl LoadingGuard {
    fn start(flag: &Arc<AtomicBool>) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self {
            flag: Arc::clone(flag),
        }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}

impl JobRepository {
    pub fn new(source: Arc<dyn JobSource>) -> Self {
        Self::with_id_strategy(source, IdStrategy::default())
    }

    pub fn with_id_strategy(source: Arc<dyn JobSource>, id_strategy: IdStrategy) -> Self {
        Self {
            source,
            id_strategy,
            snapshot: RwLock::new(JobSnapshot::empty()),
            generation: AtomicU64::new(0),
            loading: Arc::new(AtomicBool::new(false)),
            last_error: RwLock::new(None),
            closed: AtomicBool::new(false),
            refresh_lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }

    /// Fetches the collection and replaces the master collection with
    /// freshly id-tagged jobs.
    ///
    /// On failure the previous collection is kept and the error is recorded
    /// as [`last_error`](Self::last_error).
    pub async fn refresh(&self) -> Result<RefreshOutcome> {
        let _refresh = match self.refresh_lock.try_lock() {
            Ok(guard) => guard,
            Err(_) => {
                debug!("Refresh already in flight, waiting for it to settle");
                let seen = self.generation();
                let guard = self.refresh_lock.lock().await;
                if let Some(joined) = self.joined_result(seen) {
                    return joined;
                }
                // The in-flight refresh was dropped before it settled.
                debug!("Joined refresh was abandoned, fetching again");
                guard
            }
        };

        if self.is_closed() {
            debug!("Repository closed, skipping refresh");
            return Ok(RefreshOutcome::Discarded);
        }

        let span = info_span!("refresh", strategy = ?self.id_strategy);
        self.fetch_and_replace().instrument(span).await
    }

    /// Result of the refresh a waiting caller joined, or `None` if that
    /// refresh never settled. The holder clears `last_error` before its first
    /// await, so an error seen here was recorded by the joined refresh.
    fn joined_result(&self, seen_generation: u64) -> Option<Result<RefreshOutcome>> {
        if self.is_closed() {
            return Some(Ok(RefreshOutcome::Discarded));
        }
        if self.generation() != seen_generation {
            return Some(Ok(RefreshOutcome::Coalesced));
        }
        self.last_error().map(|last| {
            Err(JobFinderError::fetch_failed(FetchError::Joined(last.detail)))
        })
    }

    async fn fetch_and_replace(&self) -> Result<RefreshOutcome> {
        let _loading = LoadingGuard::start(&self.loading);
        *write_lock(&self.last_error) = None;

        let fetched = self.source.fetch_jobs().await;

        if self.is_closed() {
            info!("Repository closed while fetching, discarding result");
            return Ok(RefreshOutcome::Discarded);
        }

        match fetched {
            Ok(records) => {
                let jobs = assign_ids(records, self.id_strategy);
                let count = jobs.len();
                let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

                *write_lock(&self.snapshot) = JobSnapshot {
                    generation,
                    jobs: Arc::new(jobs),
                    refreshed_at: Some(Utc::now()),
                };

                info!("Loaded {} jobs (generation {})", count, generation);
                Ok(RefreshOutcome::Refreshed { count, generation })
            }
            Err(e) => {
                error!("Failed to fetch jobs: {}", e);
                *write_lock(&self.last_error) = Some(RefreshError {
                    message: FETCH_FAILED_MESSAGE.to_string(),
                    detail: e.to_string(),
                    occurred_at: Utc::now(),
                });
                Err(JobFinderError::fetch_failed(e))
            }
        }
    }

    /// Current master collection.
    pub fn snapshot(&self) -> JobSnapshot {
        read_lock(&self.snapshot).clone()
    }

    pub fn jobs(&self) -> Arc<Vec<Job>> {
        Arc::clone(&read_lock(&self.snapshot).jobs)
    }

    pub fn generation(&self) -> u64 {
        read_lock(&self.snapshot).generation
    }

    /// Looks a job up in the current master collection.
    pub fn find(&self, id: &str) -> Option<Job> {
        read_lock(&self.snapshot)
            .jobs
            .iter()
            .find(|job| job.id == id)
            .cloned()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub fn last_error(&self) -> Option<RefreshError> {
        read_lock(&self.last_error).clone()
    }

    /// Marks the repository as no longer interested in in-flight results.
    /// A pending refresh finishes its fetch but leaves state untouched.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            debug!("Job repository closed");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

pub(crate) fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    match lock.read() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("Job state lock was poisoned, recovering");
            poisoned.into_inner()
        }
    }
}

pub(crate) fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    match lock.write() {
        Ok(guard) => guard,
        Err(poisoned) => {
            warn!("Job state lock was poisoned, recovering");
            poisoned.into_inner()
        }
    }
}
