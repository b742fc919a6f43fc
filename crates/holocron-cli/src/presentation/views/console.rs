use holocron_types::{Film, FilmSummary};
use owo_colors::OwoColorize;

use crate::presentation::formatters::{crawl_lines, episode_title};

/// One line per film: `<id>  <title>`, in catalog order
pub fn film_list_text(films: &[FilmSummary], color: bool) -> String {
    films
        .iter()
        .map(|film| {
            if color {
                format!("{}  {}", film.id.dimmed(), film.title.bold())
            } else {
                format!("{}  {}", film.id, film.title)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Episode heading, title, optional credits, then the crawl
pub fn film_text(film: &Film, color: bool) -> String {
    let heading = episode_title(film.episode_id);
    let mut out = Vec::new();

    if color {
        out.push(heading.yellow().bold().to_string());
        out.push(film.title.yellow().bold().to_string());
    } else {
        out.push(heading);
        out.push(film.title.clone());
    }

    if let Some(director) = &film.director {
        out.push(format!("Directed by {}", director));
    }
    if let Some(date) = &film.release_date {
        out.push(format!("Released {}", date));
    }

    out.push(String::new());
    out.extend(crawl_lines(&film.opening_crawl).into_iter().map(str::to_string));
    out.join("\n")
}
