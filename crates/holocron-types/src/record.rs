//! Raw catalog payloads, shaped after the JSON the film endpoints return.
//!
//! Only the fields holocron reads are declared; everything else in the
//! payload (characters, planets, timestamps, ...) is ignored.

use serde::{Deserialize, Serialize};

/// One film as returned by `GET /films/<id>` or inside a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmRecord {
    pub title: String,
    pub episode_id: u32,
    pub opening_crawl: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub producer: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// Body of `GET /films`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmListPage {
    pub results: Vec<FilmRecord>,
}
