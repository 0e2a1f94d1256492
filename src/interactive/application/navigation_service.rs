use crate::interactive::constants::MAX_NAVIGATION_HISTORY;
use std::collections::VecDeque;

/// Application-level navigation consumed by the search widget.
pub trait Navigator: Send {
    fn navigate_to(&mut self, destination: &str);
    fn current_location(&self) -> Option<&str>;
}

/// Navigator that remembers where the user has been.
pub struct HistoryNavigator {
    history: VecDeque<String>,
    max_entries: usize,
}

impl Default for HistoryNavigator {
    fn default() -> Self {
        Self::new(MAX_NAVIGATION_HISTORY)
    }
}

impl HistoryNavigator {
    pub fn new(max_entries: usize) -> Self {
        Self {
            history: VecDeque::new(),
            max_entries: max_entries.max(1),
        }
    }

    pub fn history(&self) -> impl Iterator<Item = &str> {
        self.history.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

impl Navigator for HistoryNavigator {
    fn navigate_to(&mut self, destination: &str) {
        tracing::info!(destination, "navigating");
        if self.history.len() == self.max_entries {
            self.history.pop_front();
        }
        self.history.push_back(destination.to_string());
    }

    fn current_location(&self) -> Option<&str> {
        self.history.back().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_navigator_has_no_location() {
        let navigator = HistoryNavigator::default();
        assert!(navigator.is_empty());
        assert_eq!(navigator.current_location(), None);
    }

    #[test]
    fn test_navigate_records_location() {
        let mut navigator = HistoryNavigator::default();
        navigator.navigate_to("/articles/career-paths-quantum-computing");
        navigator.navigate_to("/alumni/sarah-chen");

        assert_eq!(navigator.current_location(), Some("/alumni/sarah-chen"));
        assert_eq!(navigator.len(), 2);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut navigator = HistoryNavigator::new(2);
        navigator.navigate_to("/a");
        navigator.navigate_to("/b");
        navigator.navigate_to("/c");

        let history: Vec<&str> = navigator.history().collect();
        assert_eq!(history, vec!["/b", "/c"]);
    }
}
