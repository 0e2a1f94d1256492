//! What the result panel shows, derived from the search state alone.

use crate::interactive::ui::app_state::SearchState;

#[derive(Clone, Debug, PartialEq)]
pub struct ResultRow {
    pub id: String,
    pub icon: &'static str,
    pub title: String,
    pub subtitle: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PanelView {
    Loading,
    Results(Vec<ResultRow>),
    Empty { query: String },
}

impl PanelView {
    pub fn empty_message(query: &str) -> String {
        format!("No results found for \"{query}\"")
    }

    pub fn row_count(&self) -> usize {
        match self {
            PanelView::Results(rows) => rows.len(),
            _ => 0,
        }
    }
}

/// Returns `None` when no panel should be drawn at all.
pub fn project(search: &SearchState) -> Option<PanelView> {
    if !search.panel_visible {
        return None;
    }

    if search.is_searching {
        return Some(PanelView::Loading);
    }

    if !search.results.is_empty() {
        let rows = search
            .results
            .iter()
            .map(|result| ResultRow {
                id: result.id.clone(),
                icon: result.category.icon(),
                title: result.title.clone(),
                subtitle: result.subtitle.clone(),
            })
            .collect();
        return Some(PanelView::Results(rows));
    }

    if search.query.is_empty() {
        None
    } else {
        Some(PanelView::Empty {
            query: search.query.clone(),
        })
    }
}
