use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::{COMPLETE_TEXT, LOAD_FAILED_TEXT, LOADING_TEXT};

pub fn render_loading(frame: &mut Frame, area: Rect) {
    render_message(frame, area, LOADING_TEXT, Color::Yellow, "q quit");
}

pub fn render_failed(frame: &mut Frame, area: Rect) {
    render_message(frame, area, LOAD_FAILED_TEXT, Color::Red, "q quit");
}

pub fn render_complete(frame: &mut Frame, area: Rect) {
    render_message(frame, area, COMPLETE_TEXT, Color::Green, "enter / q quit");
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, color: Color, hint: &str) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(7),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(color).bold())),
        Line::from(""),
        Line::from(""),
        Line::from(hint.fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);
}
