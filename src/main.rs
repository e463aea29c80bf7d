//! users-ui binary entry point.
//!
//! Parses options, starts the tokio runtime that carries the API calls,
//! runs the TUI event loop on the main thread, and restores the terminal
//! state on exit.
//!
use anyhow::Context;
use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::sync::Arc;

use users_ui::api::HttpUserApi;
use users_ui::app::{self, AppState, Theme};
use users_ui::cli::Cli;
use users_ui::store::UserStore;
use users_ui::{Result, logging};

/// Initialize a Crossterm-backed `ratatui` terminal in raw mode.
fn init_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(cli.log_file.as_deref()).context("open log file")?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;

    let api = HttpUserApi::new(cli.api_url.clone());
    let store = Arc::new(UserStore::new(Arc::new(api)));
    let theme = Theme::load_or_init(&cli.theme);
    let mut state = AppState::new(store, runtime.handle().clone(), theme, cli.api_url);

    let mut terminal = init_terminal().context("init terminal")?;

    let res = app::run(&mut terminal, &mut state);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    if let Err(err) = res {
        tracing::error!(error = %err, "application error");
        eprintln!("application error: {err:#}");
    }
    // Outstanding requests are abandoned on exit.
    runtime.shutdown_background();
    Ok(())
}
