//! TUI Renderer for the `browse` command
//!
//! Owns the terminal and the event loop. Fetch outcomes arrive from the
//! dispatcher over a channel and are applied between frames, so all view
//! state is touched from this thread only.

mod input;

pub use input::{Action, action_for};

use std::io;
use std::sync::mpsc::Receiver;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Dispatcher, Message};
use crate::presentation::views::tui::draw;

const TICK_RATE: Duration = Duration::from_millis(100);

pub struct TuiRenderer {
    app: App,
    dispatcher: Dispatcher,
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(app: App, dispatcher: Dispatcher) -> Self {
        Self {
            app,
            dispatcher,
            should_quit: false,
        }
    }

    pub fn run(mut self, rx: Receiver<Message>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal, rx);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: Receiver<Message>,
    ) -> Result<()> {
        let effects = self.app.mount();
        self.dispatcher.dispatch(effects);

        let mut last_tick = Instant::now();

        while !self.should_quit {
            terminal.draw(|f| draw(f, &self.app))?;

            let timeout = TICK_RATE
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);

            if event::poll(timeout)?
                && let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && let Some(action) = action_for(key)
            {
                if action == Action::Quit {
                    self.should_quit = true;
                } else {
                    let effects = action.apply(&mut self.app);
                    self.dispatcher.dispatch(effects);
                }
            }

            while let Ok(message) = rx.try_recv() {
                self.app.handle(message);
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.app.tick();
                last_tick = Instant::now();
            }
        }

        Ok(())
    }
}
