//! Regis Form - terminal registration form
//!
//! A Ratatui-based form that validates a registration and posts it as JSON
//! to a configured endpoint.

mod api;
mod app;
mod config;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use config::{FormConfig, LOG_FILE_NAME};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging to a file; the alternate screen owns the terminal
    let file_appender = tracing_appender::rolling::never(FormConfig::log_dir(), LOG_FILE_NAME);
    let (log_writer, log_guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "regis_form=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(log_writer),
        )
        .init();

    let config = FormConfig::load()?;
    let endpoint = config.resolve_endpoint();
    tracing::info!("Posting registrations to {endpoint}");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(endpoint);
    let result = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Handle any errors
    if let Err(err) = result {
        tracing::error!("Exiting on error: {err:?}");
        // process::exit skips destructors, so flush the log first
        drop(log_guard);
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        // Pick up finished submissions before drawing
        app.poll_submission();

        terminal.draw(|frame| ui::draw(frame, &app.state, &app.endpoint))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                // Global quit: Ctrl+C
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
                {
                    return Ok(());
                }

                app.handle_key(key)?;
            }
        }

        // Let background submissions make progress between polls
        tokio::task::yield_now().await;

        if app.should_quit() {
            return Ok(());
        }
    }
}
