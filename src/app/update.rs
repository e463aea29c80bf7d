use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::Backend;
use std::time::Duration;

use crate::app::{AppState, Focus, KeyAction, Overlay};
use crate::ui;

/// Whether the event loop should keep going after a key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Poll interval; also how quickly finished requests show up on screen.
const TICK: Duration = Duration::from_millis(100);

pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> Result<()> {
    tracing::info!(api = %app.api_url, "starting");
    loop {
        terminal.draw(|f| ui::render(f, app))?;
        // The list is on screen after the first draw.
        let _ = app.mount_list();

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(app, key) == Flow::Quit {
                    break;
                }
            }
        }
    }
    tracing::info!(uptime_secs = app.started_at.elapsed().as_secs(), "exiting");
    Ok(())
}

pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Flow {
    if app.overlay.is_some() {
        return handle_overlay_key(app, key);
    }

    if let Some(field) = app.focus.field() {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char(c) if !ctrl => {
                app.form.push_char(field, c);
                return Flow::Continue;
            }
            KeyCode::Backspace => {
                app.form.pop_char(field);
                return Flow::Continue;
            }
            _ => {}
        }
    }

    let Some(action) = app.keymap.resolve(&key) else {
        return Flow::Continue;
    };
    match action {
        KeyAction::Quit => return Flow::Quit,
        KeyAction::NextFocus => app.focus = app.focus.next(),
        KeyAction::PrevFocus => app.focus = app.focus.prev(),
        KeyAction::Activate => {
            if app.focus.is_form() {
                let _ = app.submit_form();
            }
        }
        KeyAction::Refresh => {
            let _ = app.refresh_users();
        }
        KeyAction::OpenHelp => app.overlay = Some(Overlay::Help),
        KeyAction::Close => {}
        KeyAction::MoveUp | KeyAction::MoveDown | KeyAction::PageUp | KeyAction::PageDown => {
            if app.focus == Focus::List {
                move_selection(app, action);
            }
        }
    }
    Flow::Continue
}

fn handle_overlay_key(app: &mut AppState, key: KeyEvent) -> Flow {
    match app.keymap.resolve(&key) {
        Some(KeyAction::Quit) => return Flow::Quit,
        Some(KeyAction::Close | KeyAction::OpenHelp) => app.overlay = None,
        _ => {}
    }
    Flow::Continue
}

fn move_selection(app: &mut AppState, action: KeyAction) {
    let len = app.store.len();
    match action {
        KeyAction::MoveUp => app.list.move_up(),
        KeyAction::MoveDown => app.list.move_down(len),
        KeyAction::PageUp => app.list.page_up(),
        KeyAction::PageDown => app.list.page_down(len),
        _ => {}
    }
}
