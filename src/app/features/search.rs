use crate::app::{action::Action, command::Command};
use crate::domain::matcher::MatcherFacade;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Execute a side-effect command off the UI loop. The matcher call is the
/// only suspension point in the app; its outcome comes back as an action
/// carrying the sequence number of the submit that started it, so the
/// reducer can recognize superseded responses.
pub fn handle_command(command: Command, matcher: Arc<dyn MatcherFacade>, tx: mpsc::Sender<Action>) {
    match command {
        Command::Search { seq, query } => {
            tokio::spawn(async move {
                debug!(seq, %query, "dispatching search");
                match matcher.search(&query).await {
                    Ok(response) => {
                        let _ = tx.send(Action::SearchCompleted(seq, Ok(response))).await;
                    }
                    Err(error) => {
                        warn!(seq, error = %error, "matcher call failed");
                        let _ = tx
                            .send(Action::SearchCompleted(seq, Err(format!("{error:#}"))))
                            .await;
                    }
                }
            });
        }
    }
}
