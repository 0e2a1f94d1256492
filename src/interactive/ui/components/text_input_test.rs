#[cfg(test)]
mod tests {
    use super::super::text_input::TextInput;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn create_key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn create_key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_text_input_creation() {
        let input = TextInput::new();
        assert_eq!(input.text(), "");
        assert_eq!(input.cursor_position(), 0);
    }

    #[test]
    fn test_set_text_moves_cursor_to_end() {
        let mut input = TextInput::new();
        input.set_text("career fair".to_string());
        assert_eq!(input.cursor_position(), 11);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextInput::new();
        input.set_text("CRN".to_string());
        input.set_cursor_position(1);

        assert!(input.handle_key(create_key_event(KeyCode::Char('E'))));
        assert_eq!(input.text(), "CERN");
        assert_eq!(input.cursor_position(), 2);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = TextInput::new();
        input.set_text("intern".to_string());

        assert!(input.handle_key(create_key_event(KeyCode::Backspace)));
        assert_eq!(input.text(), "inter");

        input.handle_key(create_key_event(KeyCode::Home));
        assert!(input.handle_key(create_key_event(KeyCode::Delete)));
        assert_eq!(input.text(), "nter");

        input.handle_key(create_key_event(KeyCode::End));
        assert!(!input.handle_key(create_key_event(KeyCode::Delete)));
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::new();
        assert!(!input.handle_key(create_key_event(KeyCode::Backspace)));
    }

    #[test]
    fn test_ctrl_w_deletes_previous_word() {
        let mut input = TextInput::new();
        input.set_text("summer research ".to_string());

        let changed = input.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('w'),
            KeyModifiers::CONTROL,
        ));
        assert!(changed);
        assert_eq!(input.text(), "summer ");
        assert_eq!(input.cursor_position(), 7);
    }

    #[test]
    fn test_ctrl_u_and_ctrl_k() {
        let mut input = TextInput::new();
        input.set_text("quantum computing".to_string());
        input.set_cursor_position(7);

        assert!(input.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('k'),
            KeyModifiers::CONTROL
        )));
        assert_eq!(input.text(), "quantum");

        assert!(input.handle_key(create_key_event_with_modifiers(
            KeyCode::Char('u'),
            KeyModifiers::CONTROL
        )));
        assert_eq!(input.text(), "");
    }

    #[test]
    fn test_alt_word_movement() {
        let mut input = TextInput::new();
        input.set_text("dr sarah chen".to_string());
        input.set_cursor_position(0);

        input.handle_key(create_key_event_with_modifiers(KeyCode::Char('f'), KeyModifiers::ALT));
        assert_eq!(input.cursor_position(), 3);

        input.handle_key(create_key_event(KeyCode::End));
        input.handle_key(create_key_event_with_modifiers(KeyCode::Char('b'), KeyModifiers::ALT));
        assert_eq!(input.cursor_position(), 9);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new();
        for c in ['M', 'ü', 'n', 'c', 'h', 'e', 'n'] {
            input.handle_key(create_key_event(KeyCode::Char(c)));
        }
        assert_eq!(input.text(), "München");

        input.set_cursor_position(2);
        assert!(input.handle_key(create_key_event(KeyCode::Backspace)));
        assert_eq!(input.text(), "Mnchen");
    }

    #[test]
    fn test_cursor_spans() {
        let mut input = TextInput::new();
        input.set_text("abc".to_string());
        assert_eq!(input.render_cursor_spans().len(), 2);

        input.set_cursor_position(1);
        let spans = input.render_cursor_spans();
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[1].content, "b");
    }
}
