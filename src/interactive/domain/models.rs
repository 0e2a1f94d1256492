use crate::schemas::SearchResult;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Mode {
    Search,
    Help,
}

// Search request and response for async communication
#[derive(Clone, Debug)]
pub struct SearchRequest {
    pub id: u64,
    pub query: String,
}

#[derive(Clone, Debug)]
pub struct SearchResponse {
    pub id: u64,
    pub query: String,
    /// Lookup failures are carried as text; they never leave the widget.
    pub results: Result<Vec<SearchResult>, String>,
}

/// What happened to the last response that reached the widget.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    Committed { id: u64, count: usize },
    StaleDiscarded { id: u64, latest: u64 },
    Failed { id: u64 },
}
