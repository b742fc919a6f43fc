use holocron_types::Film;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use crate::presentation::formatters::{crawl_lines, episode_title};
use crate::views::Crawl;

/// Opening crawl: episode numeral, title, then the text rolling upward.
pub struct CrawlView<'a> {
    film: &'a Film,
    crawl: Crawl,
}

impl<'a> CrawlView<'a> {
    pub fn new(film: &'a Film, crawl: Crawl) -> Self {
        Self { film, crawl }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let film = self.film;
        let heading = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let body = Style::default().fg(Color::Yellow);

        let mut lines = vec![
            Line::styled(episode_title(film.episode_id), heading),
            Line::styled(film.title.as_str(), heading),
            Line::default(),
        ];
        lines.extend(
            crawl_lines(&film.opening_crawl)
                .into_iter()
                .map(|line| Line::styled(line, body)),
        );

        if let Some(meta) = metadata_line(film) {
            lines.push(Line::default());
            lines.push(Line::styled(
                meta,
                Style::default().add_modifier(Modifier::DIM),
            ));
        }

        lines
    }
}

fn metadata_line(film: &Film) -> Option<String> {
    match (&film.director, &film.release_date) {
        (Some(director), Some(date)) => Some(format!("Directed by {} · {}", director, date)),
        (Some(director), None) => Some(format!("Directed by {}", director)),
        (None, Some(date)) => Some(date.clone()),
        (None, None) => None,
    }
}

impl<'a> Widget for CrawlView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.crawl.is_paused() {
            " Opening crawl (paused) "
        } else {
            " Opening crawl "
        };
        let block = Block::default().title(title).borders(Borders::ALL);
        let width = block.inner(area).width;

        let paragraph = Paragraph::new(Text::from(self.lines()))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        // Restart once every wrapped row has rolled off the top
        let rows = u16::try_from(paragraph.line_count(width))
            .unwrap_or(u16::MAX)
            .max(1);
        let offset = self.crawl.offset() % rows;

        paragraph
            .block(block)
            .scroll((offset, 0))
            .render(area, buf);
    }
}

/// Placeholder while the film is being fetched (or never arrives)
pub struct LoadingView;

impl Widget for LoadingView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Line::styled(
            "Loading...",
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .render(area, buf);
    }
}
