use super::{
    action::Action,
    command::Command,
    query, results,
    state::{
        AdvancedPanelState, AppState, Overlay, ResultsPanelState, Toast, View, TOAST_DURATION,
    },
};
use crate::domain::models::Prefix;
use tracing::{debug, warn};

const SEARCH_FAILED_MESSAGE: &str = "Error during search";
const UNSUPPORTED_MESSAGE: &str = "This feature is currently under development.";

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        // --- System ---
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            if state.toast.as_ref().is_some_and(Toast::is_expired) {
                state.toast = None;
            }
        }
        Action::Resize(_, _) => {}
        Action::Quit => {
            state.should_quit = true;
        }

        // --- Query editing ---
        Action::QueryInput(key) => {
            state.query.input(key);
        }
        Action::TogglePrefix(prefix) => {
            let toggled = query::toggle_prefix(&state.query_text(), prefix);
            state.set_query_text(&toggled);
        }

        // --- Overlays ---
        Action::ToggleAdvanced => {
            // Opening the advanced panel replaces the results overlay; the
            // two are never visible together.
            state.overlay = match state.overlay {
                Overlay::Advanced(_) => Overlay::None,
                _ => Overlay::Advanced(AdvancedPanelState::default()),
            };
        }
        Action::DismissOverlays => {
            state.overlay = Overlay::None;
        }

        // --- Search ---
        Action::SubmitSearch => {
            if state.is_searching || !state.is_query_valid() {
                return None;
            }
            state.is_searching = true;
            state.overlay = Overlay::None;
            state.search_seq += 1;
            return Some(Command::Search {
                seq: state.search_seq,
                query: state.query_text(),
            });
        }
        Action::SearchCompleted(seq, result) => {
            if seq != state.search_seq {
                debug!(seq, current = state.search_seq, "dropping superseded search response");
                return None;
            }
            state.is_searching = false;
            match result {
                Ok(response) => {
                    state.overlay =
                        Overlay::Results(ResultsPanelState::new(results::classify(response)));
                }
                Err(error) => {
                    warn!(%error, "search failed");
                    state.toast = Some(Toast::error(SEARCH_FAILED_MESSAGE, TOAST_DURATION));
                }
            }
        }

        // --- Results navigation & selection ---
        Action::SelectNextResult => {
            if let Overlay::Results(panel) = &mut state.overlay {
                panel.select_next();
            }
        }
        Action::SelectPrevResult => {
            if let Overlay::Results(panel) = &mut state.overlay {
                panel.select_prev();
            }
        }
        Action::SelectResult(index) => {
            select_result(state, index);
        }

        // --- Advanced panel ---
        Action::SelectNextPrefix => {
            if let Overlay::Advanced(panel) = &mut state.overlay {
                panel.select_next();
            }
        }
        Action::SelectPrevPrefix => {
            if let Overlay::Advanced(panel) = &mut state.overlay {
                panel.select_prev();
            }
        }
        Action::ToggleSelectedPrefix => {
            if let Overlay::Advanced(panel) = &state.overlay {
                let prefix = panel.selected_prefix();
                let toggled = query::toggle_prefix(&state.query_text(), prefix);
                state.set_query_text(&toggled);
            }
        }

        // --- Playground ---
        Action::ReturnToSearch => {
            state.view = View::Search;
        }
        Action::PlaygroundInput(key) => {
            state.playground.editor.input(key);
        }
    }
    None
}

/// Route a clicked/entered result. Templates are handed to the playground
/// (state reset, then handoff, then navigation, in that order); every other
/// category is announced as unsupported and leaves state untouched.
fn select_result(state: &mut AppState, index: usize) {
    let Overlay::Results(panel) = &state.overlay else {
        return;
    };
    let Some((prefix, item)) = panel.entry(index) else {
        return;
    };

    if prefix == Prefix::Template {
        let template = item.clone();
        state.set_query_text("");
        state.overlay = Overlay::None;
        state.playground.load(template);
        state.view = View::Playground;
    } else {
        state.toast = Some(Toast::info(UNSUPPORTED_MESSAGE, TOAST_DURATION));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::results::ResultGroup;
    use crate::app::state::ToastKind;
    use crate::domain::models::{ResultItem, SearchResponse};

    fn template_item(name: &str) -> ResultItem {
        ResultItem {
            name: name.to_string(),
            role: Some("assistant".to_string()),
            tags: vec!["email".to_string()],
            description: Some("An email template".to_string()),
            score: Some(0.9),
            ..ResultItem::default()
        }
    }

    fn vault_item(name: &str) -> ResultItem {
        ResultItem {
            name: name.to_string(),
            generated_content: Some("Stored content".to_string()),
            ..ResultItem::default()
        }
    }

    fn state_with_results() -> AppState<'static> {
        let mut state = AppState::default();
        state.set_query_text("template:email");
        state.search_seq = 1;
        state.overlay = Overlay::Results(ResultsPanelState::new(vec![
            ResultGroup {
                prefix: Prefix::Template,
                items: vec![template_item("Email")],
            },
            ResultGroup {
                prefix: Prefix::Vault,
                items: vec![vault_item("Notes")],
            },
        ]));
        state
    }

    #[test]
    fn submit_with_invalid_query_is_a_no_op() {
        let mut state = AppState::default();
        state.set_query_text("template:");

        let command = update(&mut state, Action::SubmitSearch);

        assert_eq!(command, None);
        assert!(!state.is_searching);
        assert_eq!(state.search_seq, 0);
    }

    #[test]
    fn submit_with_valid_query_dispatches_the_full_string() {
        let mut state = AppState::default();
        state.set_query_text("template:email");
        state.overlay = Overlay::Advanced(AdvancedPanelState::default());

        let command = update(&mut state, Action::SubmitSearch);

        assert_eq!(
            command,
            Some(Command::Search {
                seq: 1,
                query: "template:email".to_string()
            })
        );
        assert!(state.is_searching);
        // Submitting forces the advanced panel closed.
        assert_eq!(state.overlay, Overlay::None);
    }

    #[test]
    fn submit_while_in_flight_is_a_no_op() {
        let mut state = AppState::default();
        state.set_query_text("email");
        state.is_searching = true;

        assert_eq!(update(&mut state, Action::SubmitSearch), None);
        assert_eq!(state.search_seq, 0);
    }

    #[test]
    fn successful_search_opens_classified_results() {
        let mut state = AppState::default();
        state.set_query_text("email");
        update(&mut state, Action::SubmitSearch);

        let response = SearchResponse {
            vault: vec![vault_item("Notes")],
            ..SearchResponse::default()
        };
        update(&mut state, Action::SearchCompleted(1, Ok(response)));

        assert!(!state.is_searching);
        let Overlay::Results(panel) = &state.overlay else {
            panic!("expected results overlay, got {:?}", state.overlay);
        };
        assert_eq!(panel.groups.len(), 1);
        assert_eq!(panel.groups[0].prefix, Prefix::Vault);
    }

    #[test]
    fn failed_search_raises_error_toast_and_keeps_results_closed() {
        let mut state = AppState::default();
        state.set_query_text("email");
        update(&mut state, Action::SubmitSearch);

        update(
            &mut state,
            Action::SearchCompleted(1, Err("connection refused".to_string())),
        );

        assert!(!state.is_searching);
        assert_eq!(state.overlay, Overlay::None);
        let toast = state.toast.expect("expected a toast");
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, SEARCH_FAILED_MESSAGE);
    }

    #[test]
    fn superseded_response_is_dropped() {
        let mut state = AppState::default();
        state.set_query_text("email");
        update(&mut state, Action::SubmitSearch);
        state.is_searching = false;
        update(&mut state, Action::SubmitSearch); // seq is now 2

        let stale = SearchResponse {
            template: vec![template_item("Old")],
            ..SearchResponse::default()
        };
        update(&mut state, Action::SearchCompleted(1, Ok(stale)));

        assert!(state.is_searching);
        assert_eq!(state.overlay, Overlay::None);
    }

    #[test]
    fn toggle_advanced_replaces_results_overlay() {
        let mut state = state_with_results();

        update(&mut state, Action::ToggleAdvanced);
        assert!(matches!(state.overlay, Overlay::Advanced(_)));

        update(&mut state, Action::ToggleAdvanced);
        assert_eq!(state.overlay, Overlay::None);
    }

    #[test]
    fn dismiss_clears_any_open_overlay() {
        let mut state = state_with_results();
        update(&mut state, Action::DismissOverlays);
        assert_eq!(state.overlay, Overlay::None);

        state.overlay = Overlay::Advanced(AdvancedPanelState::default());
        update(&mut state, Action::DismissOverlays);
        assert_eq!(state.overlay, Overlay::None);
    }

    #[test]
    fn selecting_a_template_hands_off_and_navigates() {
        let mut state = state_with_results();

        update(&mut state, Action::SelectResult(0));

        assert_eq!(state.query_text(), "");
        assert_eq!(state.overlay, Overlay::None);
        assert_eq!(
            state
                .playground
                .current_template
                .as_ref()
                .map(|t| t.name.as_str()),
            Some("Email")
        );
        assert_eq!(state.view, View::Playground);
        assert!(state.toast.is_none());
    }

    #[test]
    fn selecting_a_non_template_raises_info_toast_only() {
        let mut state = state_with_results();

        update(&mut state, Action::SelectResult(1));

        // Query and results stay exactly as they were.
        assert_eq!(state.query_text(), "template:email");
        assert!(matches!(state.overlay, Overlay::Results(_)));
        assert_eq!(state.view, View::Search);
        assert!(state.playground.current_template.is_none());
        let toast = state.toast.expect("expected a toast");
        assert_eq!(toast.kind, ToastKind::Info);
        assert_eq!(toast.message, UNSUPPORTED_MESSAGE);
    }

    #[test]
    fn toggle_prefix_rewrites_the_query() {
        let mut state = AppState::default();
        state.set_query_text("email");

        update(&mut state, Action::TogglePrefix(Prefix::Template));
        assert_eq!(state.query_text(), "template:email");

        update(&mut state, Action::TogglePrefix(Prefix::Template));
        assert_eq!(state.query_text(), "email");
    }

    #[test]
    fn toggle_selected_prefix_uses_the_panel_cursor() {
        let mut state = AppState::default();
        state.set_query_text("notes");
        state.overlay = Overlay::Advanced(AdvancedPanelState { selected: 1 });

        update(&mut state, Action::ToggleSelectedPrefix);

        assert_eq!(state.query_text(), "vault:notes");
    }

    #[test]
    fn tick_expires_the_toast() {
        let mut state = AppState::default();
        state.toast = Some(Toast::info("bye", std::time::Duration::ZERO));
        update(&mut state, Action::Tick);
        assert!(state.toast.is_none());

        state.toast = Some(Toast::info("stay", TOAST_DURATION));
        update(&mut state, Action::Tick);
        assert!(state.toast.is_some());
    }
}
