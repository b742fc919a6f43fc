use anyhow::Result;
use holocron_catalog::Catalog;
use holocron_types::FilmId;

use crate::presentation::ConsoleRenderer;
use crate::types::OutputFormat;

pub async fn handle(catalog: &dyn Catalog, id: &str, format: OutputFormat) -> Result<()> {
    let film = catalog.get_film(&FilmId::new(id)).await?;

    ConsoleRenderer::new(format).render_film(&film)
}
