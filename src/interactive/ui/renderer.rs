use crate::interactive::constants::{
    LOCATION_BAR_HEIGHT, RESULT_PANEL_MAX_HEIGHT, SEARCH_BAR_HEIGHT,
};
use crate::interactive::ui::app_state::{AppState, Mode};
use crate::interactive::ui::components::{
    Component, help_dialog::HelpDialog, result_panel::ResultPanel, search_bar::SearchBar,
};
use crate::interactive::ui::outside_click::WidgetRegion;
use crate::interactive::ui::panel_view;
use crate::session::Session;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub struct Renderer {
    search_bar: SearchBar,
    result_panel: ResultPanel,
    help_dialog: HelpDialog,
    region: WidgetRegion,
}

impl Renderer {
    pub fn new(placeholder: String) -> Self {
        Self {
            search_bar: SearchBar::new(placeholder),
            result_panel: ResultPanel::new(),
            help_dialog: HelpDialog::new(),
            region: WidgetRegion::default(),
        }
    }

    pub fn render(&mut self, f: &mut Frame, state: &AppState, session: &Session) {
        match state.mode {
            Mode::Search => self.render_search_mode(f, state, session),
            Mode::Help => {
                self.render_search_mode(f, state, session);
                self.help_dialog.render(f, f.area());
            }
        }
    }

    fn render_search_mode(&mut self, f: &mut Frame, state: &AppState, session: &Session) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(LOCATION_BAR_HEIGHT),
                Constraint::Length(SEARCH_BAR_HEIGHT),
                Constraint::Min(0),
            ])
            .split(f.area());

        render_location_bar(f, chunks[0], state.ui.location.as_deref(), session);
        render_page(f, chunks[2], state.ui.location.as_deref());

        self.search_bar.set_query(&state.search.query);
        self.search_bar.set_searching(state.search.is_searching);
        self.search_bar.set_message(state.ui.message.clone());
        self.search_bar.render(f, chunks[1]);

        self.region.clear();
        self.region.set_bar(chunks[1]);

        self.result_panel.set_view(panel_view::project(&state.search));
        self.result_panel.set_selected_index(state.search.selected_index);
        self.result_panel
            .set_favorites(session.favorite_ids().map(str::to_string).collect());

        let height = self
            .result_panel
            .desired_height()
            .min(RESULT_PANEL_MAX_HEIGHT)
            .min(chunks[2].height);
        if height == 0 {
            return;
        }

        // Overlays the page directly under the bar
        let panel_area = Rect::new(chunks[1].x, chunks[1].bottom(), chunks[1].width, height);
        self.result_panel.render(f, panel_area);
        self.region.set_panel(panel_area);
        for &(index, area) in self.result_panel.row_areas() {
            self.region.push_row(index, area);
        }
    }

    /// Where the widget was drawn on the last frame
    pub fn region(&self) -> &WidgetRegion {
        &self.region
    }

    pub fn get_search_bar_mut(&mut self) -> &mut SearchBar {
        &mut self.search_bar
    }

    pub fn get_result_panel_mut(&mut self) -> &mut ResultPanel {
        &mut self.result_panel
    }

    pub fn get_help_dialog_mut(&mut self) -> &mut HelpDialog {
        &mut self.help_dialog
    }
}

fn render_location_bar(f: &mut Frame, area: Rect, location: Option<&str>, session: &Session) {
    let line = Line::from(vec![
        Span::styled(
            location.unwrap_or("/"),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(session.status_line(), Style::default().fg(Color::DarkGray)),
    ]);
    let bar = Paragraph::new(line).block(Block::default().title("Portal").borders(Borders::ALL));
    f.render_widget(bar, area);
}

fn render_page(f: &mut Frame, area: Rect, location: Option<&str>) {
    let text = match location {
        Some(path) => format!("Viewing {path}"),
        None => {
            "Start typing to search articles, opportunities and alumni. F1 for help.".to_string()
        }
    };
    let page = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(page, area);
}
