use anyhow::Result;
use holocron_catalog::Catalog;

use crate::presentation::ConsoleRenderer;
use crate::types::OutputFormat;

pub async fn handle(catalog: &dyn Catalog, format: OutputFormat) -> Result<()> {
    let films = catalog.list_films().await?;
    tracing::debug!(count = films.len(), "listing films");

    ConsoleRenderer::new(format).render_film_list(&films)
}
