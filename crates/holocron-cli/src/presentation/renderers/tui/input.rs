use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Effect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    SelectNext,
    SelectPrevious,
    Open,
    Back,
    Home,
    ToggleCrawl,
    RestartCrawl,
}

pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrevious),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => Some(Action::Open),
        KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => Some(Action::Back),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::Home),
        KeyCode::Char(' ') => Some(Action::ToggleCrawl),
        KeyCode::Char('r') => Some(Action::RestartCrawl),
        _ => None,
    }
}

impl Action {
    /// Apply to the app; returns the fetches the change requires.
    pub fn apply(self, app: &mut App) -> Vec<Effect> {
        match self {
            Action::Quit => Vec::new(),
            Action::SelectNext => {
                app.sidebar_mut().select_next();
                Vec::new()
            }
            Action::SelectPrevious => {
                app.sidebar_mut().select_previous();
                Vec::new()
            }
            Action::Open => app.activate_selected(),
            Action::Back => app.back(),
            Action::Home => app.navigate("/"),
            Action::ToggleCrawl => {
                app.film_view_mut().toggle_crawl();
                Vec::new()
            }
            Action::RestartCrawl => {
                app.film_view_mut().restart_crawl();
                Vec::new()
            }
        }
    }
}
