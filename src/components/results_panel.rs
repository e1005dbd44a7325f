use super::helpers::set_inner_line;
use crate::app::results::{describe, format_score};
use crate::app::state::ResultsPanelState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

/// Content rows: one header row per group, two rows per item (name line and
/// description line). An empty panel renders a single indicator row.
#[must_use]
pub fn content_rows(panel: &ResultsPanelState) -> u16 {
    if panel.is_empty() {
        return 1;
    }
    panel
        .groups
        .iter()
        .map(|g| 1 + 2 * g.items.len() as u16)
        .sum()
}

/// Height including the surrounding border.
#[must_use]
pub fn required_height(panel: &ResultsPanelState) -> u16 {
    content_rows(panel) + 2
}

/// Map an inner content row back to the flattened item index, mirroring the
/// render geometry. Group header rows resolve to no item.
#[must_use]
pub fn item_at_row(panel: &ResultsPanelState, row: usize) -> Option<usize> {
    let mut current = 0usize;
    let mut flat = 0usize;
    for group in &panel.groups {
        if row == current {
            return None; // header row
        }
        current += 1;
        for _ in &group.items {
            if row == current || row == current + 1 {
                return Some(flat);
            }
            current += 2;
            flat += 1;
        }
    }
    None
}

pub struct ResultsPanel<'a> {
    pub panel: &'a ResultsPanelState,
    pub theme: &'a Theme,
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        Clear.render(area, buf);

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" RESULTS ", theme.header_logo),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("↑↓", theme.footer_segment_key),
                Span::raw(" navigate "),
                Span::styled("Enter", theme.footer_segment_key),
                Span::raw(" open "),
                Span::styled("Esc", theme.footer_segment_key),
                Span::raw(" dismiss "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_focus);

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        if self.panel.is_empty() {
            let line = Line::from(Span::styled(" No results found.", theme.dimmed));
            set_inner_line(buf, inner, 0, &line);
            return;
        }

        let mut row = 0u16;
        let mut flat = 0usize;
        for group in &self.panel.groups {
            let header = Line::from(Span::styled(
                format!(" {} ", group.prefix.display_name().to_uppercase()),
                theme.group_header,
            ));
            set_inner_line(buf, inner, row, &header);
            row += 1;

            for item in &group.items {
                let is_selected = flat == self.panel.selected;
                let name_style = if is_selected {
                    theme.list_selected
                } else {
                    theme.list_item
                };
                let pointer = if is_selected { "▸ " } else { "  " };

                let mut spans = vec![
                    Span::styled(pointer.to_string(), name_style),
                    Span::styled(item.name.clone(), name_style),
                ];
                if let Some(role) = &item.role {
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(format!(" {role} "), theme.badge_role));
                }
                for tag in &item.tags {
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(format!(" {tag} "), theme.badge_tag));
                }
                if let Some(score) = item.score {
                    spans.push(Span::raw(" "));
                    spans.push(Span::styled(
                        format!(" {} ", format_score(score)),
                        theme.badge_score,
                    ));
                }
                set_inner_line(buf, inner, row, &Line::from(spans));
                row += 1;

                let description = Line::from(Span::styled(
                    format!("    {}", describe(group.prefix, item)),
                    theme.dimmed,
                ));
                set_inner_line(buf, inner, row, &description);
                row += 1;

                flat += 1;
            }
        }
    }
}
