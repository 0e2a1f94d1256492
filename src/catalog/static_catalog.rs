use super::SearchIndex;
use super::fast_lowercase::FoldedNeedle;
use crate::schemas::{Category, SearchResult};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// In-memory search index over a fixed list of portal entries.
///
/// Entries match when the query is a case-insensitive substring of the
/// title or the subtitle. Results keep catalog order.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    entries: Vec<SearchResult>,
}

impl StaticCatalog {
    pub fn new(entries: Vec<SearchResult>) -> Self {
        Self { entries }
    }

    /// Entries featured on the portal home page.
    pub fn portal_defaults() -> Self {
        Self::new(vec![
            SearchResult::new(
                "1",
                "Career Paths in Quantum Computing",
                Category::Article,
                Some("Article • 5 min read"),
                "/articles/career-paths-quantum-computing",
            ),
            SearchResult::new(
                "2",
                "Summer Research Internship at CERN",
                Category::Opportunity,
                Some("Internship • Deadline: May 30, 2024"),
                "/opportunities/cern-summer-research",
            ),
            SearchResult::new(
                "3",
                "Dr. Sarah Chen",
                Category::Alumni,
                Some("Quantum Computing Researcher at IBM"),
                "/alumni/sarah-chen",
            ),
        ])
    }

    /// Load a catalog from a JSON array of search results.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let entries: Vec<SearchResult> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse catalog {}", path.display()))?;
        tracing::info!(path = %path.display(), entries = entries.len(), "catalog loaded");
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SearchIndex for StaticCatalog {
    fn lookup(&self, query: &str) -> Result<Vec<SearchResult>> {
        let needle = FoldedNeedle::new(query);

        Ok(self
            .entries
            .iter()
            .filter(|entry| {
                needle.is_found_in(&entry.title)
                    || entry
                        .subtitle
                        .as_deref()
                        .is_some_and(|subtitle| needle.is_found_in(subtitle))
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn titles(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_quantum_matches_title_and_subtitle() {
        let catalog = StaticCatalog::portal_defaults();
        let results = catalog.lookup("quantum").unwrap();

        assert_eq!(
            titles(&results),
            vec!["Career Paths in Quantum Computing", "Dr. Sarah Chen"]
        );
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = StaticCatalog::portal_defaults();

        for query in ["CERN", "cern", "CeRn"] {
            let results = catalog.lookup(query).unwrap();
            assert_eq!(titles(&results), vec!["Summer Research Internship at CERN"]);
        }
    }

    #[test]
    fn test_no_match_returns_empty() {
        let catalog = StaticCatalog::portal_defaults();
        assert!(catalog.lookup("xyzzyzzy").unwrap().is_empty());
    }

    #[test]
    fn test_entry_without_subtitle() {
        let catalog = StaticCatalog::new(vec![SearchResult::new(
            "7",
            "Alumni Mixer",
            Category::Other,
            None,
            "/events/mixer",
        )]);

        assert_eq!(catalog.lookup("mixer").unwrap().len(), 1);
        assert!(catalog.lookup("deadline").unwrap().is_empty());
    }

    #[test]
    fn test_results_keep_catalog_order() {
        let catalog = StaticCatalog::portal_defaults();
        let ids: Vec<String> = catalog
            .lookup("a")
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();

        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"[{{"id":"a1","title":"Resume Clinic","category":"article","subtitle":"Workshop notes","destination":"/articles/resume-clinic"}}]"#
        )
        .unwrap();

        let catalog = StaticCatalog::from_json_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup("WORKSHOP").unwrap()[0].id, "a1");
    }

    #[test]
    fn test_load_from_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();

        let err = StaticCatalog::from_json_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse catalog"));
    }
}
