use holocron_types::FilmId;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, List, ListItem, ListState, StatefulWidget, Widget},
};

use crate::presentation::formatters::text::truncate_text;
use crate::views::Sidebar;

/// Film list. The film on screen is highlighted, the selection is reversed.
pub struct SidebarView<'a> {
    sidebar: &'a Sidebar,
    active: Option<&'a FilmId>,
}

impl<'a> SidebarView<'a> {
    pub fn new(sidebar: &'a Sidebar, active: Option<&'a FilmId>) -> Self {
        Self { sidebar, active }
    }
}

impl<'a> Widget for SidebarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().title(" Films ").borders(Borders::ALL);
        let max_title = usize::from(area.width.saturating_sub(5));

        let items: Vec<ListItem> = self
            .sidebar
            .films()
            .iter()
            .map(|film| {
                let style = if self.active == Some(&film.id) {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::styled(truncate_text(&film.title, max_title), style))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let mut state = ListState::default().with_selected(self.sidebar.selected_index());
        StatefulWidget::render(list, area, buf, &mut state);
    }
}
