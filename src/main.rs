use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;

use promptdeck::app::config::Config;
use promptdeck::app::{r#loop::run_loop, state::AppState};
use promptdeck::infrastructure::http_matcher::HttpMatcher;

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

/// Logging goes to a file under the config directory; stdout belongs to the
/// terminal UI. Controlled with PROMPTDECK_LOG (EnvFilter syntax).
fn init_tracing() -> Result<()> {
    let Some(dir) = Config::config_dir() else {
        return Ok(());
    };
    std::fs::create_dir_all(&dir)?;
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("promptdeck.log"))?;

    let filter = tracing_subscriber::EnvFilter::try_from_env("PROMPTDECK_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("promptdeck=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();

    // Config and matcher are set up BEFORE the terminal so a failure here
    // doesn't leave the terminal in raw mode.
    let config = Config::load();
    init_tracing()?;
    tracing::info!(endpoint = %config.endpoint, "starting promptdeck");

    let matcher = Arc::new(HttpMatcher::new(
        &config.endpoint,
        Duration::from_millis(config.timeout_ms),
    )?);
    let app_state = AppState::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, matcher).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}
