use crate::interactive::constants::{HELP_DIALOG_MARGIN, HELP_DIALOG_MAX_WIDTH};
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

#[derive(Default)]
pub struct HelpDialog;

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(vec![Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )])
    }

    fn get_help_text() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                "Portal Search",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Self::section("Search:"),
            Line::from("  Type        - Search articles, opportunities and alumni"),
            Line::from("  ↑/↓         - Move through results"),
            Line::from("  Ctrl+P/N    - Move through results"),
            Line::from("  PgUp/PgDn   - Jump to first / last result"),
            Line::from("  Enter       - Open the selected result"),
            Line::from("  Ctrl+S      - Toggle favorite (signed-in users)"),
            Line::from("  Esc         - Close results, or quit when closed"),
            Line::from(""),
            Self::section("Mouse:"),
            Line::from("  Click row   - Open that result"),
            Line::from("  Click away  - Close the results panel"),
            Line::from(""),
            Self::section("General:"),
            Line::from("  F1          - Show this help"),
            Line::from("  Ctrl+C ×2   - Exit"),
            Line::from(""),
            Line::from("Press Esc or F1 to close this help..."),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::get_help_text();

        let width = HELP_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(HELP_DIALOG_MARGIN));
        let lines = u16::try_from(help_text.len()).unwrap_or(u16::MAX);
        let height = lines
            .saturating_add(2)
            .min(area.height.saturating_sub(HELP_DIALOG_MARGIN));
        if width == 0 || height == 0 {
            return;
        }

        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height - height) / 2;
        let dialog_area = Rect::new(x, y, width, height);

        f.render_widget(Clear, dialog_area);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(help, dialog_area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('q') => Some(Message::CloseHelp),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_help_dialog_renders_centered() {
        let mut dialog = HelpDialog::new();
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|f| dialog.render(f, f.area())).unwrap();

        let content = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        assert!(content.contains("Help"));
        assert!(content.contains("Portal Search"));
        assert!(content.contains("Ctrl+S"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let mut dialog = HelpDialog::new();
        let backend = TestBackend::new(3, 3);
        let mut terminal = Terminal::new(backend).unwrap();

        terminal.draw(|f| dialog.render(f, f.area())).unwrap();
    }

    #[test]
    fn test_close_keys() {
        let mut dialog = HelpDialog::new();

        for code in [KeyCode::Esc, KeyCode::F(1), KeyCode::Char('q')] {
            assert!(matches!(
                dialog.handle_key(KeyEvent::new(code, KeyModifiers::empty())),
                Some(Message::CloseHelp)
            ));
        }
        assert!(
            dialog
                .handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::empty()))
                .is_none()
        );
    }
}
