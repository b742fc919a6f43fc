//! Film dataset shared by the catalog and CLI tests.
//!
//! Listing order is deliberately the catalog's insertion order, which is not
//! episode order once a prequel is added (see [`film_records_with_prequel`]).

use holocron_types::FilmRecord;
use serde_json::{Value, json};

pub const A_NEW_HOPE_CRAWL: &str = "It is a period of civil war.\r\nRebel spaceships, striking\r\nfrom a hidden base, have won\r\ntheir first victory against\r\nthe evil Galactic Empire.\r\n\r\nDuring the battle, Rebel\r\nspies managed to steal secret\r\nplans to the Empire's\r\nultimate weapon, the DEATH\r\nSTAR, an armored space\r\nstation with enough power\r\nto destroy an entire planet.";

pub const EMPIRE_CRAWL: &str = "It is a dark time for the\r\nRebellion. Although the Death\r\nStar has been destroyed,\r\nImperial troops have driven the\r\nRebel forces from their hidden\r\nbase and pursued them across\r\nthe galaxy.";

pub const JEDI_CRAWL: &str = "Luke Skywalker has returned to\r\nhis home planet of Tatooine in\r\nan attempt to rescue his\r\nfriend Han Solo from the\r\nclutches of the vile gangster\r\nJabba the Hutt.";

pub const PHANTOM_CRAWL: &str = "Turmoil has engulfed the\r\nGalactic Republic. The taxation\r\nof trade routes to outlying star\r\nsystems is in dispute.";

fn record(id: u32, title: &str, episode_id: u32, crawl: &str, release_date: &str) -> FilmRecord {
    FilmRecord {
        title: title.to_string(),
        episode_id,
        opening_crawl: crawl.to_string(),
        url: Some(format!("https://swapi.dev/api/films/{}/", id)),
        director: Some("George Lucas".to_string()),
        producer: Some("Gary Kurtz, Rick McCallum".to_string()),
        release_date: Some(release_date.to_string()),
    }
}

/// The original trilogy, ids 1-3
pub fn film_records() -> Vec<FilmRecord> {
    vec![
        record(1, "A New Hope", 4, A_NEW_HOPE_CRAWL, "1977-05-25"),
        record(2, "The Empire Strikes Back", 5, EMPIRE_CRAWL, "1980-05-17"),
        record(3, "Return of the Jedi", 6, JEDI_CRAWL, "1983-05-25"),
    ]
}

/// Trilogy plus a prequel inserted later (id 4, episode 1)
pub fn film_records_with_prequel() -> Vec<FilmRecord> {
    let mut records = film_records();
    records.push(record(4, "The Phantom Menace", 1, PHANTOM_CRAWL, "1999-05-19"));
    records
}

/// `GET /films` body for the given records
pub fn film_list_json(records: &[FilmRecord]) -> Value {
    json!({
        "count": records.len(),
        "next": null,
        "previous": null,
        "results": records,
    })
}

/// `GET /films/<id>` body for one record
pub fn film_json(record: &FilmRecord) -> Value {
    let mut value = json!(record);
    value["characters"] = json!([]);
    value["created"] = json!("2014-12-10T14:23:31.880000Z");
    value
}
