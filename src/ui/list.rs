use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};

use crate::app::{AppState, Focus};

/// Users table, paged so the selected row stays visible.
pub fn render_users_table(f: &mut Frame, area: Rect, app: &mut AppState) {
    let users = app.store.users();
    app.list.clamp(users.len());

    let body_height = area.height.saturating_sub(3) as usize;
    if body_height > 0 {
        app.list.rows_per_page = body_height;
    }
    let start = app.list.page_start().min(users.len());
    let end = (start + app.list.rows_per_page).min(users.len());
    let list_focused = app.focus == Focus::List;

    let rows = users[start..end].iter().enumerate().map(|(i, u)| {
        let style = if list_focused && start + i == app.list.selected {
            Style::default()
                .fg(app.theme.highlight_fg)
                .bg(app.theme.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text)
        };
        Row::new(vec![
            Cell::from(u.key()),
            Cell::from(u.first_name.clone()),
            Cell::from(u.last_name.clone()),
            Cell::from(u.email.clone()),
        ])
        .style(style)
    });

    let widths = [
        Constraint::Length(8),
        Constraint::Percentage(25),
        Constraint::Percentage(25),
        Constraint::Percentage(50),
    ];
    let header = Row::new(vec!["ID", "FIRST NAME", "LAST NAME", "EMAIL"]).style(
        Style::default()
            .fg(app.theme.title)
            .add_modifier(Modifier::BOLD),
    );
    let border = if list_focused {
        app.theme.focus
    } else {
        app.theme.border
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!("Users ({})", users.len()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border)),
        )
        .column_spacing(1);
    f.render_widget(table, area);
}
