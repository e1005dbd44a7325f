use crate::app::results::format_score;
use crate::app::state::PlaygroundState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

/// The editing workspace shown after a template is selected.
pub struct Playground<'a> {
    pub state: &'a PlaygroundState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Playground<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;

        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" PLAYGROUND ", theme.header_logo),
                Span::raw(" "),
            ]))
            .title_bottom(Line::from(vec![
                Span::raw(" "),
                Span::styled("Esc", theme.footer_segment_key),
                Span::raw(" back to search "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme.border_focus);

        let inner = block.inner(area);
        block.render(area, buf);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let Some(template) = &self.state.current_template else {
            let placeholder = Line::from(Span::styled(
                " Select a template from the search results to start editing.",
                theme.dimmed,
            ));
            buf.set_line(inner.x, inner.y, &placeholder, inner.width);
            return;
        };

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Template metadata
                Constraint::Length(1), // Separator
                Constraint::Min(0),    // Editor
            ])
            .split(inner);

        let mut spans = vec![Span::styled(
            format!(" {}", template.name),
            theme.list_item.add_modifier(ratatui::style::Modifier::BOLD),
        )];
        if let Some(role) = &template.role {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {role} "), theme.badge_role));
        }
        for tag in &template.tags {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(format!(" {tag} "), theme.badge_tag));
        }
        if let Some(score) = template.score {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                format!(" {} ", format_score(score)),
                theme.badge_score,
            ));
        }
        buf.set_line(layout[0].x, layout[0].y, &Line::from(spans), layout[0].width);

        let separator = "─".repeat(layout[1].width as usize);
        buf.set_string(layout[1].x, layout[1].y, separator, theme.border);

        Widget::render(&self.state.editor, layout[2], buf);
    }
}
