#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::search_bar::*;
    use crate::interactive::constants::EXIT_PROMPT;
    use crate::interactive::ui::events::Message;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
        let content = buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        content.contains(text)
    }

    #[test]
    fn test_search_bar_creation() {
        let search_bar = SearchBar::new("Search...".to_string());

        assert_eq!(search_bar.get_query(), "");
    }

    #[test]
    fn test_character_input_emits_query_changed() {
        let mut search_bar = SearchBar::default();

        for c in "CERN".chars() {
            search_bar.handle_key(create_key_event(KeyCode::Char(c)));
        }

        assert_eq!(search_bar.get_query(), "CERN");
        let msg = search_bar.handle_key(create_key_event(KeyCode::Backspace));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "CER"));
    }

    #[test]
    fn test_cursor_movement_emits_nothing() {
        let mut search_bar = SearchBar::default();
        search_bar.set_query("alumni");

        assert!(search_bar.handle_key(create_key_event(KeyCode::Left)).is_none());
        assert!(search_bar.handle_key(create_key_event(KeyCode::Home)).is_none());
    }

    #[test]
    fn test_set_query_keeps_cursor_when_unchanged() {
        let mut search_bar = SearchBar::default();
        search_bar.set_query("intern");
        search_bar.handle_key(create_key_event(KeyCode::Home));

        search_bar.set_query("intern");
        let msg = search_bar.handle_key(create_key_event(KeyCode::Char('X')));
        assert!(matches!(msg, Some(Message::QueryChanged(q)) if q == "Xintern"));
    }

    #[test]
    fn test_placeholder_rendered_when_empty() {
        let mut search_bar = SearchBar::new("Search the portal...".to_string());
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();

        terminal
            .draw(|f| search_bar.render(f, f.area()))
            .unwrap();
        assert!(buffer_contains(terminal.backend().buffer(), "Search the portal..."));

        search_bar.set_query("quantum");
        terminal
            .draw(|f| search_bar.render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert!(buffer_contains(buffer, "quantum"));
        assert!(!buffer_contains(buffer, "Search the portal..."));
    }

    #[test]
    fn test_message_in_title() {
        let mut search_bar = SearchBar::default();
        search_bar.set_message(Some("Added to favorites".to_string()));
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();

        terminal
            .draw(|f| search_bar.render(f, f.area()))
            .unwrap();
        assert!(buffer_contains(terminal.backend().buffer(), "Added to favorites"));
    }

    #[test]
    fn test_exit_prompt_highlights_border() {
        let mut search_bar = SearchBar::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 3)).unwrap();

        terminal
            .draw(|f| search_bar.render(f, f.area()))
            .unwrap();
        assert_ne!(terminal.backend().buffer()[(0, 0)].fg, Color::Red);

        search_bar.set_message(Some(EXIT_PROMPT.to_string()));
        terminal
            .draw(|f| search_bar.render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        assert!(buffer_contains(buffer, EXIT_PROMPT));
        assert_eq!(buffer[(0, 0)].fg, Color::Red);
    }
}
