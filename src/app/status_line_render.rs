use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::app_state::App;
use crate::theme;

fn grid_summary(app: &App) -> String {
    format!(
        "{}\u{00d7}{} @{}px",
        app.grid.columns, app.grid.rows, app.grid.cell_size
    )
}

fn active_summary(app: &App) -> String {
    match app.traversal.active() {
        Some(index) => format!("active {}", index),
        None => "active -".to_string(),
    }
}

fn build_styled_spans(app: &App) -> Vec<Span<'static>> {
    let text_style = Style::default().fg(theme::status_line::TEXT);
    let key_style = Style::default().fg(theme::status_line::KEY);
    let desc_style = Style::default().fg(theme::status_line::DESCRIPTION);
    let sep_style = Style::default().fg(theme::status_line::SEPARATOR);
    let separator = || Span::styled(" \u{2022} ", sep_style);

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(grid_summary(app), text_style),
        separator(),
        Span::styled(active_summary(app), text_style),
        separator(),
    ];

    match &app.warning {
        Some(warning) => spans.push(Span::styled(
            warning.clone(),
            Style::default().fg(theme::status_line::WARNING),
        )),
        None => {
            spans.push(Span::styled("q", key_style));
            spans.push(Span::raw(" "));
            spans.push(Span::styled("Quit", desc_style));
        }
    }

    spans
}

/// Draw the status line and return the area it covers
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) -> Rect {
    let line = Paragraph::new(Line::from(build_styled_spans(app)))
        .style(Style::default().bg(theme::status_line::BACKGROUND));
    frame.render_widget(line, area);
    area
}
