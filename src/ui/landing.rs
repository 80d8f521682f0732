use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::HORIZONTAL_MARGIN;

const FEATURES: [(&str, &str); 3] = [
    ("Lightning Fast", "Real-time feedback as you type"),
    ("Precision Tracking", "Accurate WPM and error detection"),
    ("Multiple Levels", "Easy to hard difficulty modes"),
];

pub fn render(area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let title_style = bold_style.fg(Color::Yellow);
    let dim_style = Style::default().add_modifier(Modifier::DIM);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);

    let body_height = 3 + FEATURES.len() as u16 + 3;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(body_height),
            Constraint::Min(0),
        ])
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled("TYPER", title_style)),
        Line::from(Span::styled("Test your typing speed & accuracy", dim_style)),
        Line::default(),
    ];
    lines.extend(FEATURES.iter().map(|(name, blurb)| {
        Line::from(vec![
            Span::styled(format!("{name}: "), bold_style),
            Span::raw(*blurb),
        ])
    }));
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "(enter) get started / (esc)ape",
        italic_style,
    )));

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(chunks[1], buf);
}
