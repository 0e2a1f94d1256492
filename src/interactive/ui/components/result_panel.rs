use crate::interactive::constants::RESULT_ROW_HEIGHT;
use crate::interactive::ui::components::Component;
use crate::interactive::ui::events::Message;
use crate::interactive::ui::panel_view::{PanelView, ResultRow};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::collections::HashSet;

/// Terminal glyph for a category icon identifier
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "newspaper" => "📰",
        "briefcase" => "💼",
        "user-graduate" => "🎓",
        _ => "🔍",
    }
}

/// Drop-down overlay listing the current results.
#[derive(Default)]
pub struct ResultPanel {
    view: Option<PanelView>,
    selected_index: usize,
    scroll_offset: usize,
    favorites: HashSet<String>,
    row_areas: Vec<(usize, Rect)>,
}

impl ResultPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_view(&mut self, view: Option<PanelView>) {
        self.view = view;
    }

    pub fn set_selected_index(&mut self, index: usize) {
        self.selected_index = index;
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn set_favorites(&mut self, favorites: HashSet<String>) {
        self.favorites = favorites;
    }

    /// Rows drawn by the last `render`, keyed by result index
    pub fn row_areas(&self) -> &[(usize, Rect)] {
        &self.row_areas
    }

    /// Height the panel wants, borders included
    pub fn desired_height(&self) -> u16 {
        match &self.view {
            None => 0,
            Some(PanelView::Results(rows)) => {
                let rows = u16::try_from(rows.len()).unwrap_or(u16::MAX);
                rows.saturating_mul(RESULT_ROW_HEIGHT).saturating_add(2)
            }
            Some(_) => 3,
        }
    }

    fn row_count(&self) -> usize {
        self.view.as_ref().map_or(0, PanelView::row_count)
    }

    fn select(&mut self, index: usize) -> Option<Message> {
        let count = self.row_count();
        if count == 0 {
            return None;
        }
        let index = index.min(count - 1);
        if index == self.selected_index {
            return None;
        }
        self.selected_index = index;
        Some(Message::SelectResult(index))
    }

    fn render_rows(&mut self, f: &mut Frame, inner: Rect, rows: &[ResultRow]) {
        let visible = usize::from(inner.height / RESULT_ROW_HEIGHT).max(1);
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible {
            self.scroll_offset = self.selected_index + 1 - visible;
        }
        if self.scroll_offset >= rows.len() {
            self.scroll_offset = 0;
        }

        for (slot, (index, row)) in rows
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(visible)
            .enumerate()
        {
            let y = inner.y + u16::try_from(slot).unwrap_or(0) * RESULT_ROW_HEIGHT;
            let height = RESULT_ROW_HEIGHT.min(inner.bottom().saturating_sub(y));
            if height == 0 {
                break;
            }
            let area = Rect::new(inner.x, y, inner.width, height);

            let is_selected = index == self.selected_index;
            let base = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            let mut title = vec![
                Span::raw(format!("{} ", icon_glyph(row.icon))),
                Span::styled(row.title.as_str(), base.add_modifier(Modifier::BOLD)),
            ];
            if self.favorites.contains(&row.id) {
                title.push(Span::styled(" ★", Style::default().fg(Color::Yellow)));
            }

            let mut lines = vec![Line::from(title)];
            if let Some(subtitle) = &row.subtitle {
                lines.push(Line::from(Span::styled(
                    format!("   {subtitle}"),
                    Style::default().fg(Color::Gray),
                )));
            }

            f.render_widget(Paragraph::new(lines).style(base), area);
            self.row_areas.push((index, area));
        }
    }
}

impl Component for ResultPanel {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        self.row_areas.clear();
        let Some(view) = self.view.take() else {
            return;
        };

        f.render_widget(Clear, area);
        let title = match &view {
            PanelView::Results(rows) => format!("Results ({})", rows.len()),
            _ => "Results".to_string(),
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(area);
        f.render_widget(block, area);

        match &view {
            PanelView::Loading => {
                let loading = Paragraph::new("Searching...")
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center);
                f.render_widget(loading, inner);
            }
            PanelView::Empty { query } => {
                let empty = Paragraph::new(PanelView::empty_message(query))
                    .style(Style::default().fg(Color::DarkGray))
                    .alignment(Alignment::Center);
                f.render_widget(empty, inner);
            }
            PanelView::Results(rows) => self.render_rows(f, inner, rows),
        }

        self.view = Some(view);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => self.select(self.selected_index.saturating_sub(1)),
            KeyCode::Down => self.select(self.selected_index + 1),
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                self.select(self.selected_index.saturating_sub(1))
            }
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                self.select(self.selected_index + 1)
            }
            KeyCode::PageUp => self.select(0),
            KeyCode::PageDown => self.select(self.row_count().saturating_sub(1)),
            KeyCode::Char('s') if key.modifiers == KeyModifiers::CONTROL => {
                Some(Message::ToggleFavorite)
            }
            KeyCode::Enter => Some(Message::ActivateSelected),
            _ => None,
        }
    }
}
