use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::models::{Feedback, InputKind, Tone};
use crate::view::{ChoiceInput, ChoiceList, QuestionView};

const ORANGE: Color = Color::Rgb(255, 165, 0);

pub fn render(frame: &mut Frame, area: Rect, view: &QuestionView) {
    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);

    render_heading(frame, chunks[0], view.heading());
    render_choices(frame, chunks[1], view);
    render_feedback(frame, chunks[2], view.feedback());
    render_buttons(frame, chunks[3], view.check_enabled());
    render_controls(frame, chunks[4]);
}

fn render_heading(frame: &mut Frame, area: Rect, heading: &str) {
    let widget = Paragraph::new(heading)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_choices(frame: &mut Frame, area: Rect, view: &QuestionView) {
    let lines: Vec<Line> = match view.choices() {
        ChoiceList::Inputs(inputs) => inputs
            .iter()
            .enumerate()
            .map(|(index, input)| choice_line(input, index == view.cursor()))
            .collect(),
        ChoiceList::Static(text) => vec![Line::from(vec![
            Span::styled(" • ", Style::default().fg(Color::DarkGray)),
            Span::styled(text.as_str(), Style::default().fg(Color::Gray)),
        ])],
    };

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

fn choice_line(input: &ChoiceInput, under_cursor: bool) -> Line<'_> {
    let style = if under_cursor {
        Style::default().fg(Color::Cyan).bold()
    } else {
        Style::default().fg(Color::Gray)
    };
    let marker = if under_cursor { ">" } else { " " };
    let control = match (input.kind, input.checked) {
        (InputKind::Radio, true) => "(•)",
        (InputKind::Radio, false) => "( )",
        (InputKind::Checkbox, true) => "[x]",
        (InputKind::Checkbox, false) => "[ ]",
    };

    Line::from(vec![
        Span::styled(format!("{} {} ", marker, control), style),
        Span::styled(input.option.label(), style),
    ])
}

fn render_feedback(frame: &mut Frame, area: Rect, feedback: Option<&Feedback>) {
    let Some(feedback) = feedback else {
        return;
    };

    let color = match feedback.tone() {
        Tone::Warning => ORANGE,
        Tone::Success => Color::Green,
        Tone::Error => Color::Red,
    };
    let widget = Paragraph::new(feedback.message())
        .wrap(Wrap { trim: true })
        .fg(color)
        .bold();
    frame.render_widget(widget, area);
}

fn render_buttons(frame: &mut Frame, area: Rect, check_enabled: bool) {
    let check_style = if check_enabled {
        Style::default().fg(Color::Green).bold()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let line = Line::from(vec![
        Span::styled("[ Check Answer ]", check_style),
        Span::raw("  "),
        Span::styled("[ Next ]", Style::default().fg(Color::Cyan).bold()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k navigate  ·  space select  ·  enter check  ·  n next  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
