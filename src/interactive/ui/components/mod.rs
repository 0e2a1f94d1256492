pub mod help_dialog;
pub mod result_panel;
pub mod search_bar;
pub mod text_input;

#[cfg(test)]
mod search_bar_test;
#[cfg(test)]
mod text_input_test;

use crate::interactive::constants::EXIT_PROMPT;
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

/// Check if a message is the exit prompt
pub fn is_exit_prompt(message: &Option<String>) -> bool {
    message.as_deref() == Some(EXIT_PROMPT)
}
