//! TUI Application state and event handling.

use crate::screens;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use depositwatch_core::prelude::*;
use ratatui::prelude::*;
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot::{self, error::TryRecvError};

type Result<T> = std::result::Result<T, DashboardError>;

/// Where typed keys go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Keys are shortcuts
    Normal,
    /// Keys edit the deposits input
    Editing,
}

/// Side effects the event loop must perform after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start the simulated refresh delay
    StartRefresh,
}

/// Everything the screens render, plus key handling.
///
/// Kept separate from the terminal so it can be driven in tests.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Dashboard session
    pub session: Session,
    /// Current input mode
    pub mode: InputMode,
    /// Data source link shown in the header
    pub source_url: String,
    /// Exit flag
    pub should_quit: bool,
}

impl AppState {
    /// Create state from configuration
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            session: Session::from_config(config),
            mode: InputMode::Normal,
            source_url: config.source_url.clone(),
            should_quit: false,
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyCode) -> Option<Command> {
        match self.mode {
            InputMode::Normal => self.handle_normal_key(key),
            InputMode::Editing => {
                self.handle_editing_key(key);
                None
            }
        }
    }

    fn handle_normal_key(&mut self, key: KeyCode) -> Option<Command> {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('f') => self.session.toggle_filter(),
            KeyCode::Char('r') => self.session.click_sort(SortField::Rank),
            KeyCode::Char('d') => self.session.click_sort(SortField::Deposits),
            KeyCode::Char('u') => self.mode = InputMode::Editing,
            KeyCode::Char('R') => {
                if self.session.begin_refresh() {
                    return Some(Command::StartRefresh);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.session.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.session.select_next(),
            _ => {}
        }
        None
    }

    fn handle_editing_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => self.mode = InputMode::Normal,
            KeyCode::Enter => {
                // Rejected input stays in the buffer with no message.
                if self.session.submit_deposits().is_ok() {
                    self.mode = InputMode::Normal;
                }
            }
            KeyCode::Backspace => self.session.pop_input(),
            KeyCode::Char(c) => self.session.push_input(c),
            _ => {}
        }
    }
}

/// TUI Application
pub struct TuiApp {
    /// Render and input state
    state: AppState,
    /// Delay used by refresh
    refresh_delay: Arc<dyn RefreshDelay>,
    /// Completion signal of the running refresh
    refresh_done: Option<oneshot::Receiver<()>>,
    /// Terminal
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TuiApp {
    /// Create a new TUI application
    pub fn new(config: &DashboardConfig) -> Result<Self> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            state: AppState::new(config),
            refresh_delay: Arc::new(config.refresh_delay()),
            refresh_done: None,
            terminal,
        })
    }

    /// Run the TUI event loop
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.poll_refresh();

            let state = self.state.clone();
            self.terminal.draw(|frame| {
                screens::draw(frame, &state);
            })?;

            // Handle events with timeout so refresh completion is noticed
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if let Some(command) = self.state.handle_key(key.code) {
                            self.execute(command);
                        }
                    }
                }
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::StartRefresh => {
                self.refresh_done = Some(spawn_refresh(Arc::clone(&self.refresh_delay)));
            }
        }
    }

    /// Lower the refresh flag once the background delay has finished
    fn poll_refresh(&mut self) {
        if let Some(rx) = self.refresh_done.as_mut() {
            match rx.try_recv() {
                Ok(()) | Err(TryRecvError::Closed) => {
                    self.refresh_done = None;
                    self.state.session.finish_refresh();
                }
                Err(TryRecvError::Empty) => {}
            }
        }
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}
