use crate::catalog::SearchIndex;
use crate::interactive::domain::models::{SearchRequest, SearchResponse};
use anyhow::{Context, Result};
use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Duration;

pub struct SearchService {
    index: Arc<dyn SearchIndex>,
    max_results: usize,
}

impl SearchService {
    pub fn new(index: Arc<dyn SearchIndex>, max_results: usize) -> Self {
        Self { index, max_results }
    }

    /// Run one lookup. Errors and panics from the index are folded into
    /// the response so they stay inside the widget.
    pub fn search(&self, request: SearchRequest) -> SearchResponse {
        let lookup = panic::catch_unwind(AssertUnwindSafe(|| self.index.lookup(&request.query)));

        let results = match lookup {
            Ok(Ok(mut results)) => {
                results.truncate(self.max_results);
                Ok(results)
            }
            Ok(Err(e)) => {
                tracing::warn!(
                    id = request.id,
                    query = %request.query,
                    error = %format!("{e:#}"),
                    "search lookup failed"
                );
                Err(format!("{e:#}"))
            }
            Err(_) => {
                tracing::warn!(id = request.id, query = %request.query, "search lookup panicked");
                Err("search index panicked".to_string())
            }
        };

        SearchResponse {
            id: request.id,
            query: request.query,
            results,
        }
    }
}

/// Runs lookups off the UI thread.
///
/// Requests are handed to a small rayon pool, so several lookups can be
/// in flight and complete in any order. Ordering is restored by the
/// request id check in `AppState`; the worker only skips lookups whose id
/// is already older than the latest one issued.
pub struct SearchWorker {
    requests: Sender<SearchRequest>,
    responses: Receiver<SearchResponse>,
    latest: Arc<AtomicU64>,
}

impl SearchWorker {
    pub fn start(service: Arc<SearchService>, threads: usize) -> Result<Self> {
        let (request_tx, request_rx) = channel::unbounded::<SearchRequest>();
        let (response_tx, response_rx) = channel::unbounded::<SearchResponse>();
        let latest = Arc::new(AtomicU64::new(0));

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads.max(1))
            .thread_name(|i| format!("search-lookup-{i}"))
            .build()
            .context("Failed to build search thread pool")?;

        let pool_latest = latest.clone();
        thread::Builder::new()
            .name("search-dispatch".to_string())
            .spawn(move || {
                while let Ok(request) = request_rx.recv() {
                    let service = service.clone();
                    let response_tx = response_tx.clone();
                    let latest = pool_latest.clone();

                    pool.spawn(move || {
                        let newest = latest.load(Ordering::Acquire);
                        if request.id < newest {
                            tracing::debug!(id = request.id, newest, "skipping superseded lookup");
                            return;
                        }
                        let _ = response_tx.send(service.search(request));
                    });
                }
            })
            .context("Failed to spawn search dispatcher")?;

        Ok(Self {
            requests: request_tx,
            responses: response_rx,
            latest,
        })
    }

    pub fn submit(&self, request: SearchRequest) {
        self.latest.fetch_max(request.id, Ordering::AcqRel);
        tracing::debug!(id = request.id, query = %request.query, "search issued");
        if self.requests.send(request).is_err() {
            tracing::warn!("search dispatcher has stopped");
        }
    }

    /// Mark every request up to `id` as superseded without issuing a new one.
    pub fn supersede(&self, id: u64) {
        self.latest.fetch_max(id, Ordering::AcqRel);
    }

    pub fn try_recv(&self) -> Option<SearchResponse> {
        self.responses.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<SearchResponse> {
        match self.responses.recv_timeout(timeout) {
            Ok(response) => Some(response),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }
}
