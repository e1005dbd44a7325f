use crate::app::state::{AppState, Overlay, View};
use crate::components::advanced_panel::{self, AdvancedPanel};
use crate::components::footer::Footer;
use crate::components::helpers::draw_drop_shadow;
use crate::components::playground::Playground;
use crate::components::results_panel::{self, ResultsPanel};
use crate::components::search_bar::SearchBar;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const SEARCH_HINT: &str =
    "Try searching for \"content writing\", \"code review\", or \"email templates\"";

pub struct AppLayout {
    pub header: Rect,
    pub search: Rect,
    pub hint: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Search input
            Constraint::Length(1), // Hint line
            Constraint::Min(0),    // Body / overlay anchor
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        search: main[1],
        hint: main[2],
        body: main[3],
        footer: main[4],
    }
}

/// Where the open overlay is drawn: anchored under the search input,
/// clamped to the space above the footer. `None` while no overlay is open.
pub fn overlay_rect(state: &AppState, layout: &AppLayout) -> Option<Rect> {
    let needed = match &state.overlay {
        Overlay::None => return None,
        Overlay::Advanced(_) => advanced_panel::required_height(),
        Overlay::Results(panel) => results_panel::required_height(panel),
    };
    if layout.body.height == 0 || layout.body.width == 0 {
        return None;
    }
    Some(Rect {
        x: layout.search.x,
        y: layout.body.y,
        width: layout.search.width,
        height: needed.min(layout.body.height),
    })
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(f.area());
    let theme = app_state.theme.clone();

    // --- Header ---
    let label = format!(" {} ", app_state.matcher_label);
    let padding = (f.area().width as usize).saturating_sub(13 + label.len());
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" PROMPTDECK ", theme.header_logo),
        Span::raw(" "),
        Span::styled(label, theme.header_item),
        Span::styled(" ".repeat(padding), theme.header),
    ]))
    .style(theme.header);
    f.render_widget(header, layout.header);

    match app_state.view {
        View::Playground => {
            // The workspace replaces the whole search surface.
            let content = layout.search.union(layout.hint).union(layout.body);
            f.render_widget(
                Playground {
                    state: &app_state.playground,
                    theme: &theme,
                },
                content,
            );
        }
        View::Search => {
            f.render_widget(
                SearchBar {
                    state: app_state,
                    theme: &theme,
                },
                layout.search,
            );
            f.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!(" {SEARCH_HINT}"),
                    theme.hint,
                ))),
                layout.hint,
            );

            if let Some(area) = overlay_rect(app_state, &layout) {
                let terminal_area = f.area();
                draw_drop_shadow(f.buffer_mut(), area, terminal_area);
                match &app_state.overlay {
                    Overlay::Results(panel) => {
                        f.render_widget(
                            ResultsPanel {
                                panel,
                                theme: &theme,
                            },
                            area,
                        );
                    }
                    Overlay::Advanced(panel) => {
                        f.render_widget(
                            AdvancedPanel {
                                panel,
                                query: &app_state.query_text(),
                                theme: &theme,
                            },
                            area,
                        );
                    }
                    Overlay::None => {}
                }
            }
        }
    }

    // --- Footer ---
    f.render_widget(
        Footer {
            state: app_state,
            theme: &theme,
        },
        layout.footer,
    );
}
