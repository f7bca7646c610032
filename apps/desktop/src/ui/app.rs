//! TUI Application - terminal setup and run loop

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use super::events::{handle_key_event, poll_event, Action};
use super::render::render;
use crate::state::{ConfigState, DbState, InventoryView};

/// TUI Application
pub struct TuiApp {
    db: DbState,
    view: InventoryView,
}

impl TuiApp {
    /// Create a new TUI application around an open database
    pub fn new(db: DbState, config: ConfigState) -> Self {
        Self {
            db,
            view: InventoryView::new(config),
        }
    }

    /// Run until the user quits
    pub async fn run(mut self) -> anyhow::Result<()> {
        self.view.refresh(&self.db).await;
        info!(rows = self.view.rows.len(), "Inventory loaded");

        let mut terminal = setup_terminal()?;

        let result = self.main_loop(&mut terminal).await;

        // Restore even when the loop failed
        restore_terminal(&mut terminal)?;

        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> anyhow::Result<()> {
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| render(frame, &self.view))?;

            let Some(key) = poll_event(tick_rate)? else {
                continue;
            };

            match handle_key_event(key, &mut self.view) {
                Action::Quit => break,
                Action::Dispatch(command) => self.view.dispatch(&self.db, command).await,
                Action::None => {}
            }
        }

        info!("Quit requested");
        Ok(())
    }
}

/// Setup terminal for TUI
fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
