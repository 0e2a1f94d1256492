use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, poll},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout, Write};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::catalog::SearchIndex;
use crate::config::WidgetOptions;
use crate::session::{RouteGuard, Session};

pub mod application;
pub mod constants;
pub mod domain;
pub mod ui;


use self::application::navigation_service::Navigator;
use self::application::search_service::{SearchService, SearchWorker};
use self::constants::{
    DOUBLE_CTRL_C_TIMEOUT_SECS, EVENT_POLL_INTERVAL_MS, EXIT_PROMPT, MESSAGE_CLEAR_DELAY_MS,
    SEARCH_WORKER_THREADS,
};
use self::domain::models::{Mode, SearchRequest};
use self::ui::{
    app_state::AppState, commands::Command, components::Component, events::Message,
    outside_click::OutsideClickMonitor, renderer::Renderer,
};

/// Terminal front-end hosting the search widget.
pub struct InteractiveSearch {
    state: AppState,
    renderer: Renderer,
    session: Session,
    route_guard: RouteGuard,
    navigator: Box<dyn Navigator>,
    search_service: Arc<SearchService>,
    search_worker: Option<SearchWorker>,
    pointer_monitor: Option<OutsideClickMonitor<Box<dyn Write + Send>>>,
    last_search_timer: Option<Instant>,
    scheduled_search_delay: Option<u64>,
    last_ctrl_c_press: Option<Instant>,
    message_timer: Option<Instant>,
    message_clear_delay: u64,
}

impl InteractiveSearch {
    pub fn new(
        options: &WidgetOptions,
        index: Arc<dyn SearchIndex>,
        session: Session,
        navigator: Box<dyn Navigator>,
    ) -> Self {
        Self {
            state: AppState::new(options.debounce_ms),
            renderer: Renderer::new(options.placeholder.clone()),
            session,
            route_guard: RouteGuard::default(),
            navigator,
            search_service: Arc::new(SearchService::new(index, options.max_results)),
            search_worker: None,
            pointer_monitor: None,
            last_search_timer: None,
            scheduled_search_delay: None,
            last_ctrl_c_press: None,
            message_timer: None,
            message_clear_delay: MESSAGE_CLEAR_DELAY_MS,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = self.setup_terminal()?;

        self.start_search_worker()?;
        let result = self
            .mount_pointer_monitor(Box::new(io::stdout()))
            .and_then(|()| self.run_app(&mut terminal));

        // Capture has to be released before the terminal is restored
        self.unmount_pointer_monitor();
        self.cleanup_terminal(&mut terminal)?;
        result
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn cleanup_terminal(&self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn run_app(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        loop {
            terminal.draw(|f| self.render_frame(f))?;

            self.drain_search_responses();

            self.fire_due_timers(Instant::now());

            if poll(Duration::from_millis(EVENT_POLL_INTERVAL_MS))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_input(key)? {
                            break;
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// Run the debounced search and the status clear once their delays
    /// have passed as of `now`.
    pub(crate) fn fire_due_timers(&mut self, now: Instant) {
        let search_due = match (self.scheduled_search_delay, self.last_search_timer) {
            (Some(delay), Some(started)) => {
                now.saturating_duration_since(started) >= Duration::from_millis(delay)
            }
            _ => false,
        };
        if search_due {
            self.scheduled_search_delay = None;
            self.last_search_timer = None;
            self.handle_message(Message::SearchRequested);
        }

        let clear_delay = Duration::from_millis(self.message_clear_delay);
        let clear_due = self
            .message_timer
            .is_some_and(|started| now.saturating_duration_since(started) >= clear_delay);
        if clear_due {
            self.message_timer = None;
            self.handle_message(Message::ClearStatus);
        }
    }

    pub(crate) fn render_frame(&mut self, f: &mut Frame) {
        self.renderer.render(f, &self.state, &self.session);
    }

    /// Spawn the background lookup pool. Until this is called lookups run
    /// inline on the calling thread.
    pub(crate) fn start_search_worker(&mut self) -> Result<()> {
        let worker = SearchWorker::start(self.search_service.clone(), SEARCH_WORKER_THREADS)?;
        self.search_worker = Some(worker);
        Ok(())
    }

    /// Start listening for pointer events on `out`.
    pub(crate) fn mount_pointer_monitor(&mut self, out: Box<dyn Write + Send>) -> Result<()> {
        self.pointer_monitor = Some(OutsideClickMonitor::attach(out)?);
        Ok(())
    }

    pub(crate) fn unmount_pointer_monitor(&mut self) {
        self.pointer_monitor = None;
    }

    fn drain_search_responses(&mut self) {
        let mut responses = Vec::new();
        if let Some(worker) = &self.search_worker {
            while let Some(response) = worker.try_recv() {
                responses.push(response);
            }
        }
        for response in responses {
            self.handle_message(Message::SearchCompleted(response));
        }
    }

    /// Block until one response arrives from the worker and apply it.
    #[cfg(test)]
    pub(crate) fn wait_for_search(&mut self, timeout: Duration) -> bool {
        let response = self
            .search_worker
            .as_ref()
            .and_then(|worker| worker.recv_timeout(timeout));
        match response {
            Some(response) => {
                self.handle_message(Message::SearchCompleted(response));
                true
            }
            None => false,
        }
    }

    pub(crate) fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        // Global Ctrl+C handling for exit
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(last_press) = self.last_ctrl_c_press {
                if last_press.elapsed() < Duration::from_secs(DOUBLE_CTRL_C_TIMEOUT_SECS) {
                    return Ok(true);
                }
            }
            self.last_ctrl_c_press = Some(Instant::now());
            self.handle_message(Message::SetStatus(EXIT_PROMPT.to_string()));
            return Ok(false);
        }

        if key.code == KeyCode::F(1) && self.state.mode != Mode::Help {
            self.handle_message(Message::ShowHelp);
            return Ok(false);
        }

        let message = match self.state.mode {
            Mode::Search => self.handle_search_mode_input(key),
            Mode::Help => self.renderer.get_help_dialog_mut().handle_key(key),
        };

        match message {
            Some(Message::Quit) => Ok(true),
            Some(msg) => {
                self.handle_message(msg);
                Ok(false)
            }
            None => Ok(false),
        }
    }

    fn handle_search_mode_input(&mut self, key: KeyEvent) -> Option<Message> {
        let panel_visible = self.state.search.panel_visible;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Esc if panel_visible => Some(Message::ClosePanel),
            KeyCode::Esc => Some(Message::Quit),
            KeyCode::Up | KeyCode::Down | KeyCode::PageUp | KeyCode::PageDown | KeyCode::Enter
                if panel_visible =>
            {
                self.renderer.get_result_panel_mut().handle_key(key)
            }
            KeyCode::Char('p' | 'n' | 's') if ctrl && panel_visible => {
                self.renderer.get_result_panel_mut().handle_key(key)
            }
            KeyCode::Down | KeyCode::Enter => Some(Message::Focus),
            _ => self.renderer.get_search_bar_mut().handle_key(key),
        }
    }

    pub(crate) fn handle_mouse(&mut self, event: MouseEvent) {
        if self.state.mode != Mode::Search {
            return;
        }
        // Nothing is observed while the monitor is detached
        let message = self.pointer_monitor.as_ref().and_then(|monitor| {
            monitor.observe(
                &event,
                self.renderer.region(),
                self.state.search.panel_visible,
            )
        });
        if let Some(msg) = message {
            self.handle_message(msg);
        }
    }

    fn handle_message(&mut self, message: Message) {
        let command = self.state.update(message);
        if let Some(worker) = &self.search_worker {
            worker.supersede(self.state.search.current_search_id);
        }
        self.execute_command(command);
    }

    fn execute_command(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::ExecuteSearch => {
                self.scheduled_search_delay = None;
                self.last_search_timer = None;
                self.execute_search();
            }
            Command::ScheduleSearch(delay) => {
                self.last_search_timer = Some(Instant::now());
                self.scheduled_search_delay = Some(delay);
            }
            Command::CancelSearch => {
                self.scheduled_search_delay = None;
                self.last_search_timer = None;
            }
            Command::Navigate(destination) => {
                self.scheduled_search_delay = None;
                self.last_search_timer = None;

                let target = self.route_guard.resolve(&destination, &self.session);
                self.navigator.navigate_to(&target);
                self.handle_message(Message::Navigated(target));
            }
            Command::ToggleFavorite(result) => {
                let status = match self.session.toggle_favorite(&result) {
                    Ok(change) => change.message().to_string(),
                    Err(e) => e.to_string(),
                };
                self.handle_message(Message::SetStatus(status));
            }
            Command::ScheduleClearMessage(delay) => {
                self.message_timer = Some(Instant::now());
                self.message_clear_delay = delay;
            }
        }
    }

    fn execute_search(&mut self) {
        let request = SearchRequest {
            id: self.state.search.current_search_id,
            query: self.state.search.query.clone(),
        };

        match &self.search_worker {
            Some(worker) => worker.submit(request),
            None => {
                let response = self.search_service.search(request);
                self.handle_message(Message::SearchCompleted(response));
            }
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn navigator(&self) -> &dyn Navigator {
        self.navigator.as_ref()
    }
}
