pub mod components;
pub mod form;
pub mod list;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{AppState, Overlay};

pub fn render(f: &mut Frame, app: &mut AppState) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(f.area());
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(root[1]);

    let hint = format!(
        "{}  Tab: next field; Enter: create; r: reload; ?: help; Ctrl+C: quit",
        app.api_url
    );
    let header = Paragraph::new(hint)
        .block(
            Block::default()
                .title("users-ui")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .style(
            Style::default()
                .fg(app.theme.header_fg)
                .bg(app.theme.header_bg),
        );
    f.render_widget(header, root[0]);

    form::render_form(f, body[0], app);
    list::render_users_table(f, body[1], app);
    components::render_status_bar(f, root[2], app);

    if let Some(Overlay::Help) = app.overlay {
        components::render_help_modal(f, f.area(), app);
    }
}
