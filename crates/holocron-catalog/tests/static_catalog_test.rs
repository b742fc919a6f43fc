use holocron_catalog::{Catalog, Error, FilmId, StaticCatalog};
use holocron_testing::fixtures::film_records;

#[tokio::test]
async fn test_static_catalog_lists_and_counts_calls() -> holocron_catalog::Result<()> {
    let catalog = StaticCatalog::new(film_records());

    let films = catalog.list_films().await?;

    assert_eq!(films.len(), 3);
    assert_eq!(films[1].title, "The Empire Strikes Back");
    assert_eq!(catalog.list_calls(), 1);
    assert_eq!(catalog.get_calls(), 0);
    Ok(())
}

#[tokio::test]
async fn test_static_catalog_resolves_by_derived_id() -> holocron_catalog::Result<()> {
    let catalog = StaticCatalog::new(film_records());

    let film = catalog.get_film(&FilmId::new("3")).await?;
    assert_eq!(film.title, "Return of the Jedi");

    let missing = catalog.get_film(&FilmId::new("0")).await;
    assert!(matches!(missing, Err(Error::NotFound(_))));
    assert_eq!(catalog.get_calls(), 2);
    Ok(())
}

#[tokio::test]
async fn test_static_catalog_rejects_listing_without_url() {
    let mut records = film_records();
    records[0].url = None;
    let catalog = StaticCatalog::new(records);

    let result = catalog.list_films().await;

    assert!(matches!(result, Err(Error::Decode(_))));
}
