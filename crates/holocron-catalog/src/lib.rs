//! Film catalog access.
//!
//! The catalog exposes two read-only endpoints:
//! - `GET {base}/films` returns every film, in insertion order
//! - `GET {base}/films/{id}` returns one film
//!
//! [`Catalog`] is the seam the views talk to. [`HttpCatalog`] is the real
//! client; [`StaticCatalog`] serves a fixed dataset in memory.

pub mod catalog;
pub mod config;
pub mod http;
pub mod memory;

pub use catalog::Catalog;
pub use config::{ApiConfig, Config, resolve_base_url};
pub use http::HttpCatalog;
pub use memory::StaticCatalog;

pub use holocron_types::{Error, Film, FilmId, FilmSummary, Result};
