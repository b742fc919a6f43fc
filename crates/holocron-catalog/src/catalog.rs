use async_trait::async_trait;
use holocron_types::{Film, FilmId, FilmSummary, Result};

/// Read-only access to the film catalog.
///
/// Every call issues exactly one request: no retries, no caching and no
/// de-duplication of concurrent identical calls.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// All films, in the order the catalog returns them
    async fn list_films(&self) -> Result<Vec<FilmSummary>>;

    /// One film by identifier. The id is forwarded as-is.
    async fn get_film(&self, id: &FilmId) -> Result<Film>;
}
