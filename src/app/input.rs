use crate::app::{action::Action, state::AppState, state::Overlay, state::View, ui};
use crate::components::{advanced_panel, results_panel};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use ratatui::layout::{Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if let Event::Key(key) = &event {
        if key.kind == crossterm::event::KeyEventKind::Release {
            return None;
        }
    }

    match app_state.view {
        View::Playground => match event {
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            Event::Key(key) => match key.code {
                KeyCode::Esc => Some(Action::ReturnToSearch),
                KeyCode::Char('q' | 'c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(Action::Quit)
                }
                _ => Some(Action::PlaygroundInput(key)),
            },
            _ => None,
        },
        View::Search => match event {
            Event::Resize(w, h) => Some(Action::Resize(w, h)),
            Event::Key(key) => map_search_key(key, app_state),
            Event::Mouse(mouse) => map_search_mouse(mouse, app_state, terminal_size),
            _ => None,
        },
    }
}

fn map_search_key(key: KeyEvent, app_state: &AppState<'_>) -> Option<Action> {
    match key.code {
        KeyCode::Char('q' | 'c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::Quit)
        }
        KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::ToggleAdvanced)
        }
        KeyCode::Esc => {
            if app_state.overlay.is_open() {
                Some(Action::DismissOverlays)
            } else {
                None
            }
        }
        KeyCode::Enter if !key.modifiers.contains(KeyModifiers::SHIFT) => {
            // Enter opens the highlighted result when results are showing;
            // otherwise it is the submit action.
            match &app_state.overlay {
                Overlay::Results(panel) if !panel.is_empty() => {
                    Some(Action::SelectResult(panel.selected))
                }
                _ => Some(Action::SubmitSearch),
            }
        }
        KeyCode::Up => match &app_state.overlay {
            Overlay::Results(_) => Some(Action::SelectPrevResult),
            Overlay::Advanced(_) => Some(Action::SelectPrevPrefix),
            Overlay::None => None,
        },
        KeyCode::Down => match &app_state.overlay {
            Overlay::Results(_) => Some(Action::SelectNextResult),
            Overlay::Advanced(_) => Some(Action::SelectNextPrefix),
            Overlay::None => None,
        },
        KeyCode::Char(' ') if matches!(app_state.overlay, Overlay::Advanced(_)) => {
            Some(Action::ToggleSelectedPrefix)
        }
        _ => Some(Action::QueryInput(key)),
    }
}

/// Pointer handling is scoped to the time an overlay is open: with both
/// overlays closed no mouse event is interpreted at all. A press outside
/// the component's container (search input plus the open overlay) dismisses
/// whatever is open; presses inside the overlay resolve to the row under
/// the pointer.
fn map_search_mouse(
    mouse: crossterm::event::MouseEvent,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    if !app_state.overlay.is_open() {
        return None;
    }

    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let layout = ui::get_layout(area);
    let overlay_area = ui::overlay_rect(app_state, &layout)?;

    match mouse.kind {
        MouseEventKind::ScrollUp if contains(overlay_area, mouse.column, mouse.row) => {
            match &app_state.overlay {
                Overlay::Results(_) => Some(Action::SelectPrevResult),
                _ => None,
            }
        }
        MouseEventKind::ScrollDown if contains(overlay_area, mouse.column, mouse.row) => {
            match &app_state.overlay {
                Overlay::Results(_) => Some(Action::SelectNextResult),
                _ => None,
            }
        }
        MouseEventKind::Down(MouseButton::Left) => {
            if contains(overlay_area, mouse.column, mouse.row) {
                // Adjust for the border: inner content starts one cell in.
                let inner_row = usize::from(mouse.row.saturating_sub(overlay_area.y + 1));
                if mouse.row <= overlay_area.y
                    || mouse.row + 1 >= overlay_area.y + overlay_area.height
                {
                    return None; // border rows
                }
                match &app_state.overlay {
                    Overlay::Results(panel) => {
                        results_panel::item_at_row(panel, inner_row).map(Action::SelectResult)
                    }
                    Overlay::Advanced(_) => {
                        advanced_panel::prefix_at_row(inner_row).map(Action::TogglePrefix)
                    }
                    Overlay::None => None,
                }
            } else if contains(layout.search, mouse.column, mouse.row)
                || contains(layout.hint, mouse.column, mouse.row)
            {
                // Inside the container but outside the overlay: not a dismissal.
                None
            } else {
                Some(Action::DismissOverlays)
            }
        }
        _ => None,
    }
}

fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && column < area.x + area.width
        && row >= area.y
        && row < area.y + area.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::results::ResultGroup;
    use crate::app::state::{AdvancedPanelState, ResultsPanelState};
    use crate::domain::models::{Prefix, ResultItem};
    use crossterm::event::{KeyEventKind, MouseEvent};

    const SIZE: Size = Size {
        width: 80,
        height: 24,
    };

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse_down(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::empty(),
        })
    }

    fn state_with_results() -> AppState<'static> {
        let mut state = AppState::default();
        state.overlay = Overlay::Results(ResultsPanelState::new(vec![ResultGroup {
            prefix: Prefix::Template,
            items: vec![ResultItem {
                name: "Email".to_string(),
                ..ResultItem::default()
            }],
        }]));
        state
    }

    #[test]
    fn enter_submits_when_no_overlay_is_open() {
        let state = AppState::default();
        assert_eq!(
            map_event_to_action(key(KeyCode::Enter), &state, SIZE),
            Some(Action::SubmitSearch)
        );
    }

    #[test]
    fn shift_enter_is_forwarded_to_the_query_input() {
        let state = AppState::default();
        let action = map_event_to_action(
            key_with(KeyCode::Enter, KeyModifiers::SHIFT),
            &state,
            SIZE,
        );
        assert!(matches!(action, Some(Action::QueryInput(_))));
    }

    #[test]
    fn enter_opens_the_highlighted_result() {
        let state = state_with_results();
        assert_eq!(
            map_event_to_action(key(KeyCode::Enter), &state, SIZE),
            Some(Action::SelectResult(0))
        );
    }

    #[test]
    fn key_releases_are_ignored() {
        let state = AppState::default();
        let mut event = KeyEvent::new(KeyCode::Enter, KeyModifiers::empty());
        event.kind = KeyEventKind::Release;
        assert_eq!(map_event_to_action(Event::Key(event), &state, SIZE), None);
    }

    #[test]
    fn esc_dismisses_only_while_an_overlay_is_open() {
        let open = state_with_results();
        assert_eq!(
            map_event_to_action(key(KeyCode::Esc), &open, SIZE),
            Some(Action::DismissOverlays)
        );

        let closed = AppState::default();
        assert_eq!(map_event_to_action(key(KeyCode::Esc), &closed, SIZE), None);
    }

    #[test]
    fn outside_press_dismisses_open_overlays() {
        let state = state_with_results();
        // Bottom-left corner, far from the search bar and overlay.
        assert_eq!(
            map_event_to_action(mouse_down(0, 22), &state, SIZE),
            Some(Action::DismissOverlays)
        );
    }

    #[test]
    fn presses_are_not_interpreted_while_overlays_are_closed() {
        let state = AppState::default();
        assert_eq!(map_event_to_action(mouse_down(0, 22), &state, SIZE), None);
        assert_eq!(map_event_to_action(mouse_down(40, 2), &state, SIZE), None);
    }

    #[test]
    fn press_on_the_search_input_is_not_a_dismissal() {
        let state = state_with_results();
        assert_eq!(map_event_to_action(mouse_down(40, 2), &state, SIZE), None);
    }

    #[test]
    fn press_on_a_result_row_selects_it() {
        let state = state_with_results();
        // Layout for 80x24: body starts at y=5, overlay border at y=5,
        // group header at y=6, the item's two rows at y=7 and y=8.
        assert_eq!(map_event_to_action(mouse_down(10, 6), &state, SIZE), None);
        assert_eq!(
            map_event_to_action(mouse_down(10, 7), &state, SIZE),
            Some(Action::SelectResult(0))
        );
    }

    #[test]
    fn press_on_an_advanced_row_toggles_that_prefix() {
        let mut state = AppState::default();
        state.overlay = Overlay::Advanced(AdvancedPanelState::default());
        // Caption row is y=6; the first checkbox row (template) is y=7.
        assert_eq!(
            map_event_to_action(mouse_down(10, 8), &state, SIZE),
            Some(Action::TogglePrefix(Prefix::Vault))
        );
    }

    #[test]
    fn up_down_navigate_results() {
        let state = state_with_results();
        assert_eq!(
            map_event_to_action(key(KeyCode::Down), &state, SIZE),
            Some(Action::SelectNextResult)
        );
        assert_eq!(
            map_event_to_action(key(KeyCode::Up), &state, SIZE),
            Some(Action::SelectPrevResult)
        );
    }

    #[test]
    fn space_toggles_the_selected_prefix_in_the_advanced_panel() {
        let mut state = AppState::default();
        state.overlay = Overlay::Advanced(AdvancedPanelState::default());
        assert_eq!(
            map_event_to_action(key(KeyCode::Char(' ')), &state, SIZE),
            Some(Action::ToggleSelectedPrefix)
        );
    }

    #[test]
    fn esc_in_playground_returns_to_search() {
        let mut state = AppState::default();
        state.view = View::Playground;
        assert_eq!(
            map_event_to_action(key(KeyCode::Esc), &state, SIZE),
            Some(Action::ReturnToSearch)
        );
    }
}
