mod film;

pub use film::{Film, FilmId, FilmSummary};
