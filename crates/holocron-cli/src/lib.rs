// NOTE: holocron layering
//
// views/     state machines for the list (sidebar) and detail (film) views.
//            They never touch the network; they hand out fetch requests and
//            accept results.
// app/       composes the router and both views, turns navigation into
//            effects, and runs effects on the tokio runtime.
// presentation/
//            everything that draws: the ratatui renderer for `browse`, the
//            console output for `films` / `film`, and the text formatters.
//
// Fetch failures never reach the views' output: the list stays
// empty and the detail pane stays on "Loading...". Console commands are the
// place where catalog errors reach the user.

mod args;
mod commands;
mod handlers;
pub mod app;
pub mod logging;
pub mod presentation;
pub mod router;
pub mod types;
pub mod views;

pub use args::{Cli, Commands};
pub use commands::run;
