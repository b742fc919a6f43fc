//! Status Bar View Component
//!
//! Renders the current location (the browser's address bar) and key help.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct StatusBarView<'a> {
    location: &'a str,
    paused: bool,
    can_go_back: bool,
}

impl<'a> StatusBarView<'a> {
    pub fn new(location: &'a str, paused: bool, can_go_back: bool) -> Self {
        Self {
            location,
            paused,
            can_go_back,
        }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL);
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks =
            Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).split(inner);

        let mut status = vec![Span::styled(self.location, Style::default().fg(Color::Cyan))];
        if self.paused {
            status.push(Span::raw(" | paused"));
        }
        Paragraph::new(Line::from(status)).render(chunks[0], buf);

        let key = Style::default().fg(Color::Yellow);
        // Nothing to go back to on the first entry
        let back = if self.can_go_back {
            key
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let help_line = Line::from(vec![
            Span::styled("[j/k]", key),
            Span::raw("select "),
            Span::styled("[enter]", key),
            Span::raw("open "),
            Span::styled("[bksp]", back),
            Span::raw("back "),
            Span::styled("[space]", key),
            Span::raw("pause "),
            Span::styled("[q]", key),
            Span::raw("uit"),
        ]);
        Paragraph::new(help_line).render(chunks[1], buf);
    }
}
