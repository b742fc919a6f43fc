use anyhow::Result;
use holocron_types::{Film, FilmSummary};
use is_terminal::IsTerminal;
use serde::Serialize;

use crate::presentation::formatters::to_roman;
use crate::presentation::views::console::{film_list_text, film_text};
use crate::types::OutputFormat;

/// Film as printed by `--format json`: the record plus its numeral
#[derive(Serialize)]
struct FilmDocument<'a> {
    #[serde(flatten)]
    film: &'a Film,
    episode: String,
}

pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: std::io::stdout().is_terminal(),
        }
    }

    pub fn render_film_list(&self, films: &[FilmSummary]) -> Result<()> {
        println!("{}", self.film_list(films)?);
        Ok(())
    }

    pub fn render_film(&self, film: &Film) -> Result<()> {
        println!("{}", self.film(film)?);
        Ok(())
    }

    fn film_list(&self, films: &[FilmSummary]) -> Result<String> {
        Ok(match self.format {
            OutputFormat::Plain => film_list_text(films, self.color),
            OutputFormat::Json => serde_json::to_string_pretty(films)?,
        })
    }

    fn film(&self, film: &Film) -> Result<String> {
        Ok(match self.format {
            OutputFormat::Plain => film_text(film, self.color),
            OutputFormat::Json => serde_json::to_string_pretty(&FilmDocument {
                film,
                episode: to_roman(i64::from(film.episode_id)),
            })?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holocron_types::FilmId;

    #[test]
    fn test_film_json_includes_numeral() {
        let renderer = ConsoleRenderer {
            format: OutputFormat::Json,
            color: false,
        };
        let film = Film {
            id: FilmId::new("3"),
            title: "Return of the Jedi".to_string(),
            episode_id: 6,
            opening_crawl: "Luke Skywalker has returned".to_string(),
            director: None,
            producer: None,
            release_date: None,
        };

        let value: serde_json::Value = serde_json::from_str(&renderer.film(&film).unwrap()).unwrap();
        assert_eq!(value["id"], "3");
        assert_eq!(value["episode_id"], 6);
        assert_eq!(value["episode"], "VI");
        assert!(value.get("director").is_none());
    }
}
