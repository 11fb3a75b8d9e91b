#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jobfinder::{FetchError, JobRecord, JobSource};
use tokio::sync::Notify;

type FetchResult = Result<Vec<JobRecord>, FetchError>;

/// A `JobSource` returning queued results in order.
///
/// When gated, every fetch waits for `release()` before answering, which lets
/// a test act while a refresh is in flight.
pub struct FakeSource {
    results: Mutex<VecDeque<FetchResult>>,
    gated: AtomicBool,
    gate: Notify,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            results: Mutex::new(VecDeque::new()),
            gated: AtomicBool::new(false),
            gate: Notify::new(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn gated() -> Arc<Self> {
        let source = Self::new();
        source.gated.store(true, Ordering::SeqCst);
        source
    }

    pub fn push_ok(&self, records: Vec<JobRecord>) {
        self.results.lock().unwrap().push_back(Ok(records));
    }

    pub fn push_err(&self, error: FetchError) {
        self.results.lock().unwrap().push_back(Err(error));
    }

    /// Lets one pending (or the next) fetch complete.
    pub fn release(&self) {
        self.gate.notify_one();
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JobSource for FakeSource {
    async fn fetch_jobs(&self) -> FetchResult {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.gated.load(Ordering::SeqCst) {
            self.gate.notified().await;
        }

        self.results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::MalformedBody("no scripted result".to_string())))
    }
}
