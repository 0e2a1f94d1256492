use crate::interactive::domain::models::SearchResponse;

#[derive(Clone, Debug)]
pub enum Message {
    // Search events
    QueryChanged(String),
    SearchRequested,
    SearchCompleted(SearchResponse),
    SelectResult(usize),

    // Selection
    ActivateSelected,
    ActivateResult(usize), // row clicked with the mouse

    // Panel visibility
    Focus,
    OutsideClick,
    ClosePanel,

    // Navigation events
    Navigated(String),

    // Favorites
    ToggleFavorite,

    // Mode changes
    ShowHelp,
    CloseHelp,

    // UI events
    SetStatus(String),
    ClearStatus,

    Quit,
}
