use super::SearchIndex;
use crate::schemas::SearchResult;
use anyhow::Result;
use std::thread;
use std::time::Duration;

/// Wraps an index and delays every lookup, standing in for a remote
/// search service.
pub struct LatencyIndex<I> {
    inner: I,
    delay: Duration,
}

impl<I: SearchIndex> LatencyIndex<I> {
    pub fn new(inner: I, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

impl<I: SearchIndex> SearchIndex for LatencyIndex<I> {
    fn lookup(&self, query: &str) -> Result<Vec<SearchResult>> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        self.inner.lookup(query)
    }
}
