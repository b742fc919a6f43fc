use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Main pane content at `/`
pub struct HomeView;

impl Widget for HomeView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = Text::from(vec![
            Line::styled("holocron", Style::default().add_modifier(Modifier::BOLD)),
            Line::default(),
            Line::from("Pick a film from the list to read its opening crawl."),
        ]);

        Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}
