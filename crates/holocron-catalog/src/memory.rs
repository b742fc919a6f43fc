use async_trait::async_trait;
use holocron_types::{Error, Film, FilmId, FilmRecord, FilmSummary, Result};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::catalog::Catalog;

/// Catalog serving a fixed set of records from memory.
///
/// Records are addressed the same way the HTTP catalog addresses them: by the
/// id derived from their `url`. Call counters let callers check how many
/// requests a view issued.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    records: Vec<FilmRecord>,
    list_calls: AtomicUsize,
    get_calls: AtomicUsize,
}

impl StaticCatalog {
    pub fn new(records: Vec<FilmRecord>) -> Self {
        Self {
            records,
            list_calls: AtomicUsize::new(0),
            get_calls: AtomicUsize::new(0),
        }
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn list_films(&self) -> Result<Vec<FilmSummary>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        self
            .records
            .iter()
            .map(FilmSummary::from_record)
            .collect()
    }

    async fn get_film(&self, id: &FilmId) -> Result<Film> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);

        self.records
            .iter()
            .find(|record| {
                record
                    .url
                    .as_deref()
                    .and_then(FilmId::from_resource_url)
                    .is_some_and(|derived| &derived == id)
            })
            .cloned()
            .map(|record| Film::from_record(id.clone(), record))
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }
}
