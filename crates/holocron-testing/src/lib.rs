//! Testing infrastructure for holocron.
//!
//! - `fixtures`: the film dataset used across tests, as records and as JSON
//! - `stub`: a canned-response HTTP server standing in for the catalog API

pub mod fixtures;
pub mod stub;

pub use fixtures::{film_list_json, film_records};
pub use stub::{StubRoute, StubServer};
