//! Constants for the interactive search module

// Timing constants
/// Status message auto-clear delay in milliseconds
pub const MESSAGE_CLEAR_DELAY_MS: u64 = 3000;

/// Event polling interval in milliseconds
pub const EVENT_POLL_INTERVAL_MS: u64 = 50;

/// Double Ctrl+C timeout in seconds
pub const DOUBLE_CTRL_C_TIMEOUT_SECS: u64 = 1;

// UI Layout constants
/// Height of the location bar
pub const LOCATION_BAR_HEIGHT: u16 = 3;

/// Height of the search bar component
pub const SEARCH_BAR_HEIGHT: u16 = 3;

/// Tallest the result panel overlay may grow, borders included
pub const RESULT_PANEL_MAX_HEIGHT: u16 = 14;

/// Rows occupied by a result (title line and subtitle line)
pub const RESULT_ROW_HEIGHT: u16 = 2;

/// Maximum width for help dialog
pub const HELP_DIALOG_MAX_WIDTH: u16 = 70;

/// Minimum margin around help dialog
pub const HELP_DIALOG_MARGIN: u16 = 4;

// Navigation history
/// Maximum navigation history entries
pub const MAX_NAVIGATION_HISTORY: usize = 50;

pub const EXIT_PROMPT: &str = "Press Ctrl+C again to exit";

// Search worker
/// Lookups that may run at the same time
pub const SEARCH_WORKER_THREADS: usize = 4;
