use std::path::PathBuf;

/// Tuning knobs for the search widget and its fetcher.
#[derive(Debug, Clone)]
pub struct WidgetOptions {
    /// Quiet period after the last keystroke before a lookup is issued.
    /// Zero issues a lookup on every keystroke.
    pub debounce_ms: u64,
    /// Artificial delay added to every lookup
    pub latency_ms: u64,
    pub max_results: usize,
    /// JSON catalog to search instead of the built-in entries
    pub catalog: Option<PathBuf>,
    pub placeholder: String,
    pub verbose: bool,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            debounce_ms: 200,
            latency_ms: 0,
            max_results: 20,
            catalog: None,
            placeholder: "Search...".to_string(),
            verbose: false,
        }
    }
}
