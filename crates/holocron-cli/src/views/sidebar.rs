use holocron_types::{FilmId, FilmSummary, Result};

/// List view: the catalog as navigation links.
///
/// Fetched once on mount; afterwards the list only changes when that single
/// response arrives.
#[derive(Debug, Default)]
pub struct Sidebar {
    films: Vec<FilmSummary>,
    selected: usize,
    requested: bool,
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true the first time only: the caller should list films.
    pub fn mount(&mut self) -> bool {
        if self.requested {
            return false;
        }
        self.requested = true;
        true
    }

    pub fn apply(&mut self, result: Result<Vec<FilmSummary>>) {
        match result {
            Ok(films) => {
                tracing::debug!(count = films.len(), "film list loaded");
                self.films = films;
                self.selected = self.selected.min(self.films.len().saturating_sub(1));
            }
            Err(err) => {
                tracing::debug!(error = %err, "film list unavailable");
            }
        }
    }

    pub fn films(&self) -> &[FilmSummary] {
        &self.films
    }

    pub fn is_empty(&self) -> bool {
        self.films.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        (!self.films.is_empty()).then_some(self.selected)
    }

    pub fn selected(&self) -> Option<&FilmSummary> {
        self.films.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.films.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the selection onto the entry for `id`, if listed
    pub fn select_id(&mut self, id: &FilmId) {
        if let Some(index) = self.films.iter().position(|film| &film.id == id) {
            self.selected = index;
        }
    }

    /// Target of the selected link
    pub fn activate(&self) -> Option<String> {
        self.selected().map(FilmSummary::href)
    }
}
