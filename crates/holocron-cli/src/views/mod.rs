//! View state for the two panes of the browser.
//!
//! Views own what they display and decide when a fetch is needed. They do
//! not fetch: [`Sidebar::mount`] and [`FilmView::show`] hand back a request,
//! and the caller feeds the outcome in through `apply`.

pub mod film;
pub mod sidebar;

pub use film::{Crawl, FilmRequest, FilmState, FilmView, Ticket};
pub use sidebar::Sidebar;
