pub mod fast_lowercase;
pub mod latency;
pub mod static_catalog;

pub use latency::LatencyIndex;
pub use static_catalog::StaticCatalog;

use crate::config::WidgetOptions;
use crate::schemas::SearchResult;
use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;

/// Lookup collaborator consumed by the result fetcher.
///
/// Implementations own ranking: the returned order is the order rows are
/// shown in. A lookup may be running on several threads at once with
/// different queries.
pub trait SearchIndex: Send + Sync {
    fn lookup(&self, query: &str) -> Result<Vec<SearchResult>>;
}

impl<T: SearchIndex + ?Sized> SearchIndex for Arc<T> {
    fn lookup(&self, query: &str) -> Result<Vec<SearchResult>> {
        (**self).lookup(query)
    }
}

impl<T: SearchIndex + ?Sized> SearchIndex for Box<T> {
    fn lookup(&self, query: &str) -> Result<Vec<SearchResult>> {
        (**self).lookup(query)
    }
}

/// Build the index described by `options`: the catalog file (or the
/// built-in entries) behind the configured latency.
pub fn open_index(options: &WidgetOptions) -> Result<Arc<dyn SearchIndex>> {
    let catalog = match &options.catalog {
        Some(path) => StaticCatalog::from_json_file(path)?,
        None => StaticCatalog::portal_defaults(),
    };
    tracing::debug!(entries = catalog.len(), latency_ms = options.latency_ms, "catalog loaded");

    if options.latency_ms == 0 {
        return Ok(Arc::new(catalog));
    }
    Ok(Arc::new(LatencyIndex::new(
        catalog,
        Duration::from_millis(options.latency_ms),
    )))
}

pub fn format_search_result(result: &SearchResult, use_color: bool) -> String {
    use colored::Colorize;

    let subtitle = result.subtitle.as_deref().unwrap_or("");

    if use_color {
        format!(
            "[{}] {}\n  {} {}",
            result.category.label().bright_yellow(),
            result.title.bold(),
            subtitle.dimmed(),
            result.destination.bright_green()
        )
    } else {
        format!(
            "[{}] {}\n  {} {}",
            result.category.label(),
            result.title,
            subtitle,
            result.destination
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::Category;

    #[test]
    fn test_format_without_color() {
        let result = SearchResult::new(
            "2",
            "Summer Research Internship at CERN",
            Category::Opportunity,
            Some("Internship • Deadline: May 30, 2024"),
            "/opportunities/cern-summer-research",
        );

        let text = format_search_result(&result, false);
        assert_eq!(
            text,
            "[opportunity] Summer Research Internship at CERN\n  Internship • Deadline: May 30, 2024 /opportunities/cern-summer-research"
        );
    }

    #[test]
    fn test_open_index_defaults() {
        let index = open_index(&WidgetOptions::default()).unwrap();
        assert_eq!(index.lookup("quantum").unwrap().len(), 2);
    }

    #[test]
    fn test_open_index_missing_catalog() {
        let options = WidgetOptions {
            catalog: Some("/nonexistent/catalog.json".into()),
            ..WidgetOptions::default()
        };
        let err = open_index(&options).err().unwrap();
        assert!(err.to_string().contains("Failed to read catalog"));
    }

    #[test]
    fn test_arc_index_delegates() {
        let index: Arc<dyn SearchIndex> = Arc::new(StaticCatalog::portal_defaults());
        let results = index.lookup("cern").unwrap();
        assert_eq!(results.len(), 1);
    }
}
