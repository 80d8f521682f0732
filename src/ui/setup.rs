use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::{HORIZONTAL_MARGIN, VERTICAL_MARGIN};
use crate::config::Config;
use crate::language::{Difficulty, TimeLimit};

fn option_line(selected: bool, key: char, label: &str, description: &str) -> Line<'static> {
    let marker = if selected { "> " } else { "  " };
    let style = if selected {
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    Line::from(vec![
        Span::styled(format!("{marker}({key}) {label:<12}"), style),
        Span::styled(description.to_string(), style),
    ])
}

pub fn render(selection: &Config, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1 + Difficulty::ALL.len() as u16 + 1),
            Constraint::Length(1 + TimeLimit::ALL.len() as u16 + 1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    Paragraph::new(Span::styled("Test Setup", bold_style.fg(Color::Yellow)))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

    let mut difficulty_lines = vec![Line::from(Span::styled("Choose Difficulty", bold_style))];
    difficulty_lines.extend(Difficulty::ALL.iter().map(|d| {
        let key = d.label().chars().next().unwrap_or(' ').to_ascii_lowercase();
        option_line(*d == selection.difficulty, key, d.label(), d.description())
    }));
    Paragraph::new(difficulty_lines).render(chunks[1], buf);

    let mut time_lines = vec![Line::from(Span::styled("Time Limit", bold_style))];
    time_lines.extend(TimeLimit::ALL.iter().enumerate().map(|(idx, t)| {
        let key = char::from_digit(idx as u32 + 1, 10).unwrap_or(' ');
        option_line(*t == selection.time_limit, key, &t.label(), t.description())
    }));
    Paragraph::new(time_lines).render(chunks[2], buf);

    Paragraph::new(Span::styled(
        "(←/→) difficulty / (↑/↓) time / (enter) start test / (esc) back",
        italic_style,
    ))
    .render(chunks[4], buf);
}
