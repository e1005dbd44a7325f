use crate::app::state::{AppState, Overlay};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct SearchBar<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let title = if state.is_searching {
            let frame = SPINNER_FRAMES[state.frame_count as usize % SPINNER_FRAMES.len()];
            Line::from(vec![
                Span::raw(" "),
                Span::styled(format!(" {frame} SEARCHING "), theme.status_searching),
                Span::raw(" "),
            ])
        } else {
            Line::from(vec![
                Span::raw(" "),
                Span::styled(" SEMANTIC SEARCH ", theme.header_logo),
                Span::raw(" "),
            ])
        };

        // The submit hint doubles as the disabled-button indicator: it only
        // lights up while the query would actually be dispatched.
        let submit_style = if state.is_query_valid() && !state.is_searching {
            theme.footer_segment_key
        } else {
            theme.dimmed
        };
        let advanced_style = if matches!(state.overlay, Overlay::Advanced(_)) {
            theme.footer_segment_key
        } else {
            theme.footer_segment_val
        };
        let hints = Line::from(vec![
            Span::raw(" "),
            Span::styled("Enter", submit_style),
            Span::raw(" search "),
            Span::styled("^A", advanced_style),
            Span::raw(" advanced "),
        ]);

        let block = Block::default()
            .title(title)
            .title_bottom(hints)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if state.overlay.is_open() {
                theme.border
            } else {
                theme.border_focus
            });

        let inner = block.inner(area);
        block.render(area, buf);
        Widget::render(&state.query, inner, buf);
    }
}
