use crate::app::state::{AppState, Overlay, ToastKind, View};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        // Status segment: a live toast wins over the searching indicator.
        let status_span = if let Some(toast) = &state.toast {
            let style = match toast.kind {
                ToastKind::Info => theme.status_info,
                ToastKind::Error => theme.status_error,
            };
            let stamp = toast.raised_at.format("%H:%M:%S");
            Span::styled(format!("  {} [{stamp}]  ", toast.message), style)
        } else if state.is_searching {
            Span::styled("  SEARCHING  ", theme.status_searching)
        } else {
            Span::styled("  READY  ", theme.status_ready)
        };

        let mut spans = vec![status_span, Span::raw(" ")];

        if let Overlay::Results(panel) = &state.overlay {
            spans.push(Span::styled(
                format!(" {} matches ", panel.total()),
                theme.header_item,
            ));
            spans.push(Span::raw(" "));
        }

        let hints: &[(&str, &str)] = match state.view {
            View::Playground => &[("Esc", "search"), ("^Q", "quit")],
            View::Search if state.overlay.is_open() => {
                &[("↑↓", "navigate"), ("Enter", "select"), ("Esc", "dismiss")]
            }
            View::Search => &[("Enter", "search"), ("^A", "advanced"), ("^Q", "quit")],
        };
        for (key, label) in hints {
            spans.push(Span::styled(format!(" {key} "), theme.footer_segment_key));
            spans.push(Span::styled(format!(" {label}  "), theme.footer_segment_val));
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
