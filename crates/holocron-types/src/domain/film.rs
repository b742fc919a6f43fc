use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
use crate::record::FilmRecord;
use crate::util::id_from_resource_url;

/// Catalog identifier of a film
///
/// Taken verbatim from a route segment or derived from a listing entry's
/// self-link. No validation happens here; the catalog decides what exists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilmId(String);

impl FilmId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Derive the identifier from a resource URL such as `.../films/4/`
    pub fn from_resource_url(url: &str) -> Option<Self> {
        id_from_resource_url(url).map(Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FilmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FilmId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FilmId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for FilmId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A fully fetched film record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Film {
    pub id: FilmId,
    pub title: String,
    pub episode_id: u32,
    pub opening_crawl: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub producer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
}

impl Film {
    pub fn from_record(id: FilmId, record: FilmRecord) -> Self {
        Self {
            id,
            title: record.title,
            episode_id: record.episode_id,
            opening_crawl: record.opening_crawl,
            director: record.director,
            producer: record.producer,
            release_date: record.release_date,
        }
    }
}

/// Listing entry: just enough to render a navigation link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilmSummary {
    pub id: FilmId,
    pub title: String,
}

impl FilmSummary {
    /// Build a summary from a listing entry, deriving the id from its self-link.
    ///
    /// An entry without a usable `url` makes the whole listing malformed.
    pub fn from_record(record: &FilmRecord) -> Result<Self> {
        let url = record.url.as_deref().ok_or_else(|| {
            Error::malformed(format!("listing entry '{}' has no url", record.title))
        })?;
        let id = FilmId::from_resource_url(url)
            .ok_or_else(|| Error::malformed(format!("no film id in url '{}'", url)))?;

        Ok(Self {
            id,
            title: record.title.clone(),
        })
    }

    /// Route path this entry links to
    pub fn href(&self) -> String {
        format!("/films/{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, url: Option<&str>) -> FilmRecord {
        FilmRecord {
            title: title.to_string(),
            episode_id: 4,
            opening_crawl: String::new(),
            url: url.map(str::to_string),
            director: None,
            producer: None,
            release_date: None,
        }
    }

    #[test]
    fn test_summary_derives_id_from_self_link() {
        let summary =
            FilmSummary::from_record(&record("A New Hope", Some("https://swapi.dev/api/films/1/")))
                .unwrap();
        assert_eq!(summary.id, FilmId::new("1"));
        assert_eq!(summary.title, "A New Hope");
        assert_eq!(summary.href(), "/films/1");
    }

    #[test]
    fn test_summary_without_url_is_malformed() {
        let err = FilmSummary::from_record(&record("A New Hope", None)).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
        assert!(err.to_string().contains("has no url"));

        let err = FilmSummary::from_record(&record("A New Hope", Some("films"))).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_listing_id_matches_route_id() {
        let summary = FilmSummary::from_record(&record(
            "The Empire Strikes Back",
            Some("https://swapi.dev/api/films/2/"),
        ))
        .unwrap();
        let from_route = FilmId::from("2");
        assert_eq!(summary.id, from_route);
    }

    #[test]
    fn test_film_keeps_requested_id() {
        let film = Film::from_record(FilmId::new("7"), record("A New Hope", None));
        assert_eq!(film.id.as_str(), "7");
        assert_eq!(film.episode_id, 4);
    }
}
