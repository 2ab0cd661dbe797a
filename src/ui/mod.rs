//! Rendering of every application state.

mod quiz;
mod status;

use ratatui::{
    prelude::*,
    widgets::{Block, Gauge},
};

use crate::app::App;
use crate::models::AppState;

pub const LOADING_TEXT: &str = "Loading questions...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load questions.";
pub const COMPLETE_TEXT: &str = "Quiz complete!";

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)])
        .margin(1)
        .split(area);

    render_progress(frame, chunks[0], app.progress_percent());

    match app.state() {
        AppState::Loading => status::render_loading(frame, chunks[1]),
        AppState::Active(view) => quiz::render(frame, chunks[1], view),
        AppState::Complete => status::render_complete(frame, chunks[1]),
        AppState::LoadFailed => status::render_failed(frame, chunks[1]),
    }
}

fn render_progress(frame: &mut Frame, area: Rect, percent: f64) {
    let ratio = (percent / 100.0).clamp(0.0, 1.0);
    let widget = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray))
        .ratio(ratio)
        .label(format!("{:.0}%", percent));
    frame.render_widget(widget, area);
}
