use async_trait::async_trait;
use holocron_types::{Error, Film, FilmId, FilmListPage, FilmRecord, FilmSummary, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::catalog::Catalog;
use crate::config::{ApiConfig, normalize_base_url};

/// Catalog client backed by the remote HTTP API
#[derive(Clone)]
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    /// Creates a client for the catalog rooted at `base_url` (e.g. `https://swapi.dev/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: normalize_base_url(&base_url.into()),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn films_url(&self) -> String {
        format!("{}/films", self.base_url)
    }

    fn film_url(&self, id: &FilmId) -> String {
        format!("{}/films/{}", self.base_url, id)
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(url, "catalog request");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(url, status = status.as_u16(), "catalog request failed");
            return Err(Error::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn list_films(&self) -> Result<Vec<FilmSummary>> {
        let page: FilmListPage = self.fetch(&self.films_url()).await?;

        page
            .results
            .iter()
            .map(FilmSummary::from_record)
            .collect()
    }

    async fn get_film(&self, id: &FilmId) -> Result<Film> {
        let record: FilmRecord = match self.fetch(&self.film_url(id)).await {
            Err(Error::Status { status, .. }) if status == StatusCode::NOT_FOUND.as_u16() => {
                return Err(Error::NotFound(id.to_string()));
            }
            other => other?,
        };

        Ok(Film::from_record(id.clone(), record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_are_built_from_injected_base() {
        let catalog = HttpCatalog::new("http://localhost:9000/api/");
        assert_eq!(catalog.base_url(), "http://localhost:9000/api");
        assert_eq!(catalog.films_url(), "http://localhost:9000/api/films");
        assert_eq!(
            catalog.film_url(&FilmId::new("3")),
            "http://localhost:9000/api/films/3"
        );
    }

    #[test]
    fn test_film_id_is_forwarded_verbatim() {
        let catalog = HttpCatalog::new("http://localhost:9000/api");
        assert_eq!(
            catalog.film_url(&FilmId::new("not-a-number")),
            "http://localhost:9000/api/films/not-a-number"
        );
    }
}
