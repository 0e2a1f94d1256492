use crate::interactive::ui::components::{Component, is_exit_prompt};
use crate::interactive::ui::components::text_input::TextInput;
use crate::interactive::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const SPINNER_FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

pub struct SearchBar {
    input: TextInput,
    placeholder: String,
    is_searching: bool,
    spinner_tick: usize,
    message: Option<String>,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new("Search...".to_string())
    }
}

impl SearchBar {
    pub fn new(placeholder: String) -> Self {
        Self {
            input: TextInput::new(),
            placeholder,
            is_searching: false,
            spinner_tick: 0,
            message: None,
        }
    }

    /// Sync the displayed text with the widget state. The cursor is only
    /// reset when the text actually differs.
    pub fn set_query(&mut self, query: &str) {
        if self.input.text() != query {
            self.input.set_text(query.to_string());
        }
    }

    pub fn set_searching(&mut self, is_searching: bool) {
        if is_searching {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
        self.is_searching = is_searching;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn get_query(&self) -> &str {
        self.input.text()
    }

    fn indicator(&self) -> &'static str {
        if self.is_searching {
            SPINNER_FRAMES[self.spinner_tick % SPINNER_FRAMES.len()]
        } else {
            "🔍"
        }
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let line = if self.input.text().is_empty() {
            Line::from(vec![
                Span::styled(" ", Style::default().bg(Color::White).fg(Color::Black)),
                Span::styled(self.placeholder.as_str(), Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::from(self.input.render_cursor_spans())
        };

        let mut title = format!("Search {}", self.indicator());
        if let Some(msg) = &self.message {
            title.push_str(&format!(" - {msg}"));
        }

        // The exit prompt is the one status that needs to stand out
        let border_style = if is_exit_prompt(&self.message) {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };

        let input = Paragraph::new(line)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .style(Style::default().fg(Color::Yellow));

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if self.input.handle_key(key) {
            Some(Message::QueryChanged(self.input.text().to_string()))
        } else {
            None
        }
    }
}
