use super::helpers::set_inner_line;
use crate::app::query;
use crate::app::state::AdvancedPanelState;
use crate::domain::models::Prefix;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

const CAPTION: &str = "Use the prefixes below to refine your search results.";

/// Caption row plus one checkbox row per prefix, plus the border.
#[must_use]
pub fn required_height() -> u16 {
    1 + Prefix::ALL.len() as u16 + 2
}

/// Map an inner content row to the prefix checkbox it shows.
#[must_use]
pub fn prefix_at_row(row: usize) -> Option<Prefix> {
    row.checked_sub(1).and_then(|i| Prefix::ALL.get(i).copied())
}

pub struct AdvancedPanel<'a> {
    pub panel: &'a AdvancedPanelState,
    /// Current query text, used to show which prefixes are applied.
    pub query: &'a str,
    pub theme: &'a Theme,
}

impl Widget for AdvancedPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        Clear.render(area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" ADVANCED SEARCH ", theme.header_logo),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("↑↓", theme.footer_segment_key),
                Span::raw(" navigate "),
                Span::styled("Space", theme.footer_segment_key),
                Span::raw(" toggle "),
                Span::styled("Esc", theme.footer_segment_key),
                Span::raw(" close "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_focus);

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        set_inner_line(
            buf,
            inner,
            0,
            &Line::from(Span::styled(format!(" {CAPTION}"), theme.hint)),
        );

        for (i, prefix) in Prefix::ALL.into_iter().enumerate() {
            let is_cursor = i == self.panel.selected;
            let style = if is_cursor {
                theme.list_selected
            } else {
                theme.list_item
            };
            let checkbox = if query::has_prefix(self.query, prefix) {
                "[x]"
            } else {
                "[ ]"
            };
            let pointer = if is_cursor { "▸ " } else { "  " };
            let line = Line::from(vec![
                Span::styled(pointer.to_string(), style),
                Span::styled(format!("{checkbox} "), style),
                Span::styled(prefix.as_str().to_string(), style),
            ]);
            set_inner_line(buf, inner, 1 + i as u16, &line);
        }
    }
}
