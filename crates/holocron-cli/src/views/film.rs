use holocron_types::{Film, FilmId, Result};

/// Ticks of the render loop per line of crawl scroll
pub const TICKS_PER_LINE: u32 = 8;

/// Tag of one detail request. Only the newest ticket may update the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilmRequest {
    pub id: FilmId,
    pub ticket: Ticket,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilmState {
    /// Not mounted (current route is not a film route)
    Idle,
    Loading { id: FilmId, ticket: Ticket },
    Loaded { id: FilmId, film: Film },
}

/// Scroll position of the opening crawl
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Crawl {
    ticks: u32,
    paused: bool,
}

impl Crawl {
    /// Lines scrolled off the top so far
    pub fn offset(&self) -> u16 {
        u16::try_from(self.ticks / TICKS_PER_LINE).unwrap_or(u16::MAX)
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

/// Detail view: one film, fetched by route id.
///
/// `Idle -> Loading -> Loaded`, and back to `Loading` whenever the id
/// changes. A failed fetch leaves the view loading. Responses for anything
/// but the latest request are dropped, so a slow earlier response cannot
/// replace the film that is now on screen.
#[derive(Debug)]
pub struct FilmView {
    state: FilmState,
    crawl: Crawl,
    next_ticket: u64,
}

impl Default for FilmView {
    fn default() -> Self {
        Self::new()
    }
}

impl FilmView {
    pub fn new() -> Self {
        Self {
            state: FilmState::Idle,
            crawl: Crawl::default(),
            next_ticket: 0,
        }
    }

    pub fn state(&self) -> &FilmState {
        &self.state
    }

    pub fn crawl(&self) -> Crawl {
        self.crawl
    }

    pub fn current_id(&self) -> Option<&FilmId> {
        match &self.state {
            FilmState::Idle => None,
            FilmState::Loading { id, .. } | FilmState::Loaded { id, .. } => Some(id),
        }
    }

    pub fn film(&self) -> Option<&Film> {
        match &self.state {
            FilmState::Loaded { film, .. } => Some(film),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, FilmState::Loading { .. })
    }

    /// Show the film `id`. Returns the request to issue when the id changed.
    pub fn show(&mut self, id: FilmId) -> Option<FilmRequest> {
        if self.current_id() == Some(&id) {
            return None;
        }

        self.next_ticket += 1;
        let ticket = Ticket(self.next_ticket);
        self.state = FilmState::Loading {
            id: id.clone(),
            ticket,
        };
        self.crawl = Crawl::default();

        Some(FilmRequest { id, ticket })
    }

    /// Leave the detail route. Any response still in flight will be dropped.
    pub fn unmount(&mut self) {
        self.state = FilmState::Idle;
        self.crawl = Crawl::default();
    }

    /// Apply a fetch outcome. Returns true if it changed the view.
    pub fn apply(&mut self, ticket: Ticket, result: Result<Film>) -> bool {
        let current = match &self.state {
            FilmState::Loading { ticket: current, .. } => *current,
            _ => {
                tracing::debug!(?ticket, "dropping film response: not loading");
                return false;
            }
        };

        if current != ticket {
            tracing::debug!(?ticket, ?current, "dropping stale film response");
            return false;
        }

        match result {
            Ok(film) => {
                let FilmState::Loading { id, .. } = std::mem::replace(&mut self.state, FilmState::Idle)
                else {
                    return false;
                };
                self.state = FilmState::Loaded { id, film };
                self.crawl = Crawl::default();
                true
            }
            Err(err) => {
                tracing::debug!(error = %err, "film unavailable");
                false
            }
        }
    }

    /// Advance the crawl by one render tick
    pub fn tick(&mut self) {
        if self.film().is_some() && !self.crawl.paused {
            self.crawl.ticks = self.crawl.ticks.saturating_add(1);
        }
    }

    pub fn toggle_crawl(&mut self) {
        self.crawl.paused = !self.crawl.paused;
    }

    pub fn restart_crawl(&mut self) {
        self.crawl.ticks = 0;
    }
}
