use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, Field, Focus};

/// Three labelled inputs and a submit button.
pub fn render_form(f: &mut Frame, area: Rect, app: &AppState) {
    let outer = Block::default()
        .title("Create a user")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    for (i, field) in Field::ALL.into_iter().enumerate() {
        let focused = app.focus == Focus::Input(field);
        let mut value = app.form.value(field).to_string();
        if focused {
            value.push('▏');
        }
        let border = if focused {
            app.theme.focus
        } else {
            app.theme.border
        };
        let input = Paragraph::new(value)
            .style(Style::default().fg(app.theme.text))
            .block(
                Block::default()
                    .title(field.label())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border)),
            );
        f.render_widget(input, rows[i]);
    }

    let button_style = if app.focus == Focus::Submit {
        Style::default()
            .fg(app.theme.highlight_fg)
            .bg(app.theme.highlight_bg)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(app.theme.title)
    };
    let button = Paragraph::new("[ Create user ]")
        .style(button_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        );
    f.render_widget(button, rows[3]);
}
