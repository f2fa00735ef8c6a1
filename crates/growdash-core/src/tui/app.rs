//! Main TUI application.

use std::io;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::provider::SellerDataProvider;

use super::event::{Event, EventHandler};
use super::input::{KeyAction, handle_key};
use super::render::render;
use super::state::{AppState, Tab};

/// Main TUI application.
pub struct App {
    provider: SellerDataProvider,
    state: AppState,
    should_quit: bool,
}

impl App {
    /// Creates a new App over the given data provider.
    pub fn new(provider: SellerDataProvider, initial_tab: Tab) -> Self {
        Self {
            provider,
            state: AppState::new(initial_tab),
            should_quit: false,
        }
    }

    /// Runs the TUI application.
    pub fn run(mut self, tick_rate: Duration) -> io::Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let events = EventHandler::new(tick_rate);

        // Dataset is generated once up front; every frame reads the same data.
        let seed = self.provider.seed();
        self.provider.ensure_generated();
        info!(seed, "dashboard started");

        loop {
            let dataset = self.provider.ensure_generated();
            terminal.draw(|frame| render(frame, &mut self.state, dataset, seed))?;

            match events.next() {
                Ok(Event::Tick) => {
                    // Clock in the header refreshes on its own.
                }
                Ok(Event::Key(key)) => {
                    if handle_key(&mut self.state, key) == KeyAction::Quit {
                        self.should_quit = true;
                    }
                }
                Ok(Event::Resize) => {
                    // Ratatui recomputes layout on the next draw.
                }
                Err(_) => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }
}
