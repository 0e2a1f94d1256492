use crate::schemas::SearchResult;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    ExecuteSearch,
    ScheduleSearch(u64), // delay in milliseconds
    CancelSearch,        // drop any scheduled search and in-flight results
    Navigate(String),
    ToggleFavorite(SearchResult),
    ScheduleClearMessage(u64), // delay in milliseconds
}
