//! TUI View Components
//!
//! Ratatui widgets for the browser screen. Each one borrows the state it
//! shows and only maps it to widgets; state changes happen in `views`.

pub mod crawl;
pub mod home;
pub mod sidebar;
pub mod status_bar;

pub use crawl::{CrawlView, LoadingView};
pub use home::HomeView;
pub use sidebar::SidebarView;
pub use status_bar::StatusBarView;

use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use crate::app::{App, MainPane};

pub const SIDEBAR_WIDTH: u16 = 32;

/// Draw the whole browser screen.
///
/// Layout: [Sidebar | Main pane] above a one-line status bar. The sidebar is
/// always drawn; the main pane follows the current route.
pub fn draw(f: &mut Frame, app: &App) {
    let rows = Layout::vertical([Constraint::Min(3), Constraint::Length(3)]).split(f.area());
    let columns =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(10)]).split(rows[0]);

    let active = app.route().film_id().cloned();
    f.render_widget(SidebarView::new(app.sidebar(), active.as_ref()), columns[0]);

    match app.main_pane() {
        MainPane::Home => f.render_widget(HomeView, columns[1]),
        MainPane::Film => match app.film_view().film() {
            Some(film) => f.render_widget(
                CrawlView::new(film, app.film_view().crawl()),
                columns[1],
            ),
            None => f.render_widget(LoadingView, columns[1]),
        },
    }

    f.render_widget(
        StatusBarView::new(
            app.location(),
            app.film_view().crawl().is_paused(),
            app.can_go_back(),
        ),
        rows[1],
    );
}
