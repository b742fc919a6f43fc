//! Application shell: router + list view + detail view.
//!
//! The list view is always mounted. The detail view is mounted while the
//! current location resolves to a film route, otherwise the home placeholder
//! takes the main pane. Navigation produces [`Effect`]s; their outcomes come
//! back as [`Message`]s.

mod dispatcher;

pub use dispatcher::{Dispatcher, execute};

use holocron_types::{Film, FilmSummary, Result};

use crate::router::{History, Route};
use crate::views::{FilmRequest, FilmView, Sidebar, Ticket};

/// Fetch the shell wants performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ListFilms,
    GetFilm(FilmRequest),
}

/// Outcome of an [`Effect`]
#[derive(Debug)]
pub enum Message {
    FilmsLoaded(Result<Vec<FilmSummary>>),
    FilmLoaded { ticket: Ticket, result: Result<Film> },
}

/// What the main pane shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainPane {
    Home,
    Film,
}

pub struct App {
    history: History,
    sidebar: Sidebar,
    film: FilmView,
}

impl App {
    pub fn new(initial_location: &str) -> Self {
        Self {
            history: History::new(initial_location),
            sidebar: Sidebar::new(),
            film: FilmView::new(),
        }
    }

    /// Mount the shell: list the catalog and, on a film route, fetch the film.
    pub fn mount(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.sidebar.mount() {
            effects.push(Effect::ListFilms);
        }
        effects.extend(self.sync_route());
        effects
    }

    /// Push a location onto the history and update the views.
    pub fn navigate(&mut self, location: &str) -> Vec<Effect> {
        tracing::info!(location, "navigate");
        self.history.push(location);
        self.sync_route()
    }

    pub fn back(&mut self) -> Vec<Effect> {
        if !self.history.back() {
            return Vec::new();
        }
        tracing::info!(location = self.history.location(), "back");
        self.sync_route()
    }

    /// Follow the link selected in the sidebar
    pub fn activate_selected(&mut self) -> Vec<Effect> {
        match self.sidebar.activate() {
            Some(href) => self.navigate(&href),
            None => Vec::new(),
        }
    }

    pub fn handle(&mut self, message: Message) {
        match message {
            Message::FilmsLoaded(result) => {
                self.sidebar.apply(result);
                if let Some(id) = self.history.route().film_id() {
                    self.sidebar.select_id(id);
                }
            }
            Message::FilmLoaded { ticket, result } => {
                self.film.apply(ticket, result);
            }
        }
    }

    pub fn tick(&mut self) {
        self.film.tick();
    }

    pub fn location(&self) -> &str {
        self.history.location()
    }

    pub fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    pub fn route(&self) -> Route {
        self.history.route()
    }

    pub fn main_pane(&self) -> MainPane {
        match self.route() {
            Route::Film { .. } => MainPane::Film,
            Route::Home => MainPane::Home,
        }
    }

    pub fn sidebar(&self) -> &Sidebar {
        &self.sidebar
    }

    pub fn sidebar_mut(&mut self) -> &mut Sidebar {
        &mut self.sidebar
    }

    pub fn film_view(&self) -> &FilmView {
        &self.film
    }

    pub fn film_view_mut(&mut self) -> &mut FilmView {
        &mut self.film
    }

    fn sync_route(&mut self) -> Vec<Effect> {
        match self.history.route() {
            Route::Film { id } => {
                self.sidebar.select_id(&id);
                self.film.show(id).map(Effect::GetFilm).into_iter().collect()
            }
            Route::Home => {
                self.film.unmount();
                Vec::new()
            }
        }
    }
}
