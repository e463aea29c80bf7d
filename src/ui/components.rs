//! Shared UI components (status bar, help overlay).
//!
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::app::AppState;

/// Bottom line: focus, count, and requests still in flight.
pub fn render_status_bar(f: &mut Frame, area: Rect, app: &AppState) {
    let pending = app.store.in_flight();
    let activity = if pending > 0 {
        format!("  requests:{pending}")
    } else {
        String::new()
    };
    let msg = format!(
        "focus: {}  users:{}{}",
        app.focus.label(),
        app.store.len(),
        activity
    );
    let style = Style::default()
        .fg(app.theme.status_fg)
        .bg(app.theme.status_bg);
    let p = Paragraph::new(msg).style(style);
    f.render_widget(p, area);
}

pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}

/// Keybindings grouped by action.
pub fn render_help_modal(f: &mut Frame, area: Rect, app: &AppState) {
    let mut grouped: Vec<(&'static str, Vec<String>)> = Vec::new();
    for (action, key) in app.keymap.all_bindings() {
        let label = action.describe();
        if let Some((last, keys)) = grouped.last_mut() {
            if *last == label {
                keys.push(key);
                continue;
            }
        }
        grouped.push((label, vec![key]));
    }

    let label_w = grouped.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    let mut lines: Vec<Line> = grouped
        .iter()
        .map(|(label, keys)| {
            Line::from(vec![
                Span::styled(
                    format!("{label:<label_w$}  "),
                    Style::default().fg(app.theme.title),
                ),
                Span::styled(keys.join(", "), Style::default().fg(app.theme.text)),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Typing goes to the focused field.",
        Style::default()
            .fg(app.theme.muted)
            .add_modifier(Modifier::ITALIC),
    )));

    let height = (lines.len() as u16).saturating_add(2);
    let rect = centered_rect(48, height, area);
    let p = Paragraph::new(lines).block(
        Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.border)),
    );
    f.render_widget(Clear, rect);
    f.render_widget(p, rect);
}
