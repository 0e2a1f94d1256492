use crate::interactive::constants::MESSAGE_CLEAR_DELAY_MS;
use crate::interactive::domain::models::FetchOutcome;
use crate::interactive::ui::commands::Command;
use crate::interactive::ui::events::Message;
use crate::schemas::SearchResult;

// Re-export Mode
pub use crate::interactive::domain::models::Mode;

pub struct AppState {
    pub mode: Mode,
    pub search: SearchState,
    pub ui: UiState,
    debounce_ms: u64,
}

pub struct SearchState {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub selected_index: usize,
    pub is_searching: bool,
    pub panel_visible: bool,
    /// Id of the most recently issued request; only its response commits.
    pub current_search_id: u64,
    pub last_outcome: Option<FetchOutcome>,
    pub stale_discarded: usize,
}

pub struct UiState {
    pub message: Option<String>,
    pub location: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl AppState {
    pub fn new(debounce_ms: u64) -> Self {
        Self {
            mode: Mode::Search,
            search: SearchState {
                query: String::new(),
                results: Vec::new(),
                selected_index: 0,
                is_searching: false,
                panel_visible: false,
                current_search_id: 0,
                last_outcome: None,
                stale_discarded: 0,
            },
            ui: UiState {
                message: None,
                location: None,
            },
            debounce_ms,
        }
    }

    pub fn debounce_ms(&self) -> u64 {
        self.debounce_ms
    }

    pub fn selected_result(&self) -> Option<&SearchResult> {
        self.search.results.get(self.search.selected_index)
    }

    pub fn update(&mut self, msg: Message) -> Command {
        match msg {
            Message::QueryChanged(q) => {
                self.search.query = q;
                self.search.panel_visible = true;
                self.search.selected_index = 0;
                // Responses for the previous text are stale from here on
                self.search.current_search_id += 1;

                if self.search.query.trim().is_empty() {
                    self.search.results.clear();
                    self.search.is_searching = false;
                    return Command::CancelSearch;
                }

                self.search.is_searching = true;
                if self.debounce_ms == 0 {
                    Command::ExecuteSearch
                } else {
                    Command::ScheduleSearch(self.debounce_ms)
                }
            }
            Message::SearchRequested => {
                if self.search.query.trim().is_empty() {
                    return Command::None;
                }
                self.search.is_searching = true;
                self.search.current_search_id += 1;
                Command::ExecuteSearch
            }
            Message::SearchCompleted(response) => {
                if response.id != self.search.current_search_id {
                    tracing::debug!(
                        id = response.id,
                        latest = self.search.current_search_id,
                        query = %response.query,
                        "discarding stale search results"
                    );
                    self.search.stale_discarded += 1;
                    self.search.last_outcome = Some(FetchOutcome::StaleDiscarded {
                        id: response.id,
                        latest: self.search.current_search_id,
                    });
                    return Command::None;
                }

                self.search.is_searching = false;
                self.search.selected_index = 0;
                match response.results {
                    Ok(results) => {
                        self.search.last_outcome = Some(FetchOutcome::Committed {
                            id: response.id,
                            count: results.len(),
                        });
                        self.search.results = results;
                    }
                    Err(error) => {
                        tracing::warn!(
                            id = response.id,
                            %error,
                            "search failed, showing no results"
                        );
                        self.search.results.clear();
                        self.search.last_outcome = Some(FetchOutcome::Failed { id: response.id });
                    }
                }
                Command::None
            }
            Message::SelectResult(index) => {
                if index < self.search.results.len() {
                    self.search.selected_index = index;
                }
                Command::None
            }
            Message::ActivateSelected => self.activate(self.search.selected_index),
            Message::ActivateResult(index) => self.activate(index),
            Message::Focus => {
                self.search.panel_visible = true;
                Command::None
            }
            Message::OutsideClick | Message::ClosePanel => {
                self.search.panel_visible = false;
                Command::None
            }
            Message::Navigated(location) => {
                self.ui.location = Some(location);
                Command::None
            }
            Message::ToggleFavorite => {
                if !self.search.panel_visible || self.search.is_searching {
                    return Command::None;
                }
                match self.selected_result() {
                    Some(result) => Command::ToggleFavorite(result.clone()),
                    None => Command::None,
                }
            }
            Message::ShowHelp => {
                self.mode = Mode::Help;
                Command::None
            }
            Message::CloseHelp => {
                self.mode = Mode::Search;
                Command::None
            }
            Message::SetStatus(msg) => {
                self.ui.message = Some(msg);
                Command::ScheduleClearMessage(MESSAGE_CLEAR_DELAY_MS)
            }
            Message::ClearStatus => {
                self.ui.message = None;
                Command::None
            }
            Message::Quit => {
                Command::None // Handle in main loop
            }
        }
    }

    /// Select the row at `index` and leave the widget.
    ///
    /// A hidden panel has nothing to activate, which makes a repeated
    /// activation after the first one a no-op.
    fn activate(&mut self, index: usize) -> Command {
        if !self.search.panel_visible || self.search.is_searching {
            return Command::None;
        }
        let Some(result) = self.search.results.get(index).cloned() else {
            return Command::None;
        };

        self.search.panel_visible = false;
        self.search.query.clear();
        self.search.results.clear();
        self.search.selected_index = 0;
        self.search.current_search_id += 1;

        Command::Navigate(result.destination)
    }
}
