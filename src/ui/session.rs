use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthChar;

use super::{format_clock, HORIZONTAL_MARGIN, VERTICAL_MARGIN};
use crate::runtime::Clock;
use crate::session::{CharClass, Session};

/// Remaining seconds at which the timer turns red
const WARN_SECS: u64 = 10;
const INPUT_PROMPT: &str = "> ";

fn class_style(class: CharClass) -> Style {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_bold_style = bold_style.add_modifier(Modifier::DIM);
    match class {
        CharClass::Correct => bold_style.fg(Color::Green),
        CharClass::Incorrect => bold_style.fg(Color::Red),
        CharClass::Current => dim_bold_style.add_modifier(Modifier::UNDERLINED),
        CharClass::Untyped => dim_bold_style,
    }
}

/// Passage text grouped into one span per run of equally classified chars
fn passage_spans<C: Clock>(session: &Session<C>) -> Vec<Span<'static>> {
    let runs = session.char_classes().chunk_by(|&(_, class)| class);
    runs.into_iter()
        .map(|(class, group)| {
            let text: String = group
                .map(|(c, _)| match (class, c) {
                    // A mistyped space would otherwise be invisible
                    (CharClass::Incorrect, ' ') => '·',
                    (_, c) => c,
                })
                .collect();
            Span::styled(text, class_style(class))
        })
        .collect()
}

/// Longest suffix of `typed` that fits in `max_width` columns
fn input_tail(typed: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = typed.len();
    for (idx, c) in typed.char_indices().rev() {
        width += c.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = idx;
    }
    &typed[start..]
}

pub fn render<C: Clock>(session: &Session<C>, typed: &str, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let dim_style = Style::default().add_modifier(Modifier::DIM);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1), // timer and live stats
            Constraint::Length(1), // progress
            Constraint::Length(1),
            Constraint::Min(1), // passage
            Constraint::Length(1),
            Constraint::Length(1), // input
            Constraint::Length(1), // hint
            Constraint::Length(1), // legend
        ])
        .split(area);

    let remaining = session.seconds_remaining();
    let timer_style = if session.is_running() && remaining <= WARN_SECS {
        bold_style.fg(Color::Red)
    } else {
        bold_style.fg(Color::Yellow)
    };
    let config = session.config();
    let stats = Line::from(vec![
        Span::styled(format_clock(remaining), timer_style),
        Span::styled(
            format!(
                "   {} wpm   {}% acc   ",
                session.current_wpm(session.clock().now()),
                session.current_accuracy()
            ),
            bold_style,
        ),
        Span::styled(
            format!("{} / {}", config.difficulty.label(), config.time_limit.label()),
            dim_style,
        ),
    ]);
    Paragraph::new(stats)
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

    let progress = (session.progress() / 100.0).clamp(0.0, 1.0);
    Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio(progress)
        .label(format!(
            "{} / {} characters",
            session.cursor(),
            session.passage().len()
        ))
        .render(chunks[1], buf);

    Paragraph::new(Line::from(passage_spans(session)))
        .wrap(Wrap { trim: true })
        .render(chunks[3], buf);

    let input_width = (chunks[5].width as usize).saturating_sub(INPUT_PROMPT.len());
    let input = Line::from(vec![
        Span::styled(INPUT_PROMPT, dim_style),
        Span::raw(input_tail(typed, input_width).to_string()),
    ]);
    Paragraph::new(input).render(chunks[5], buf);

    let hint = if session.has_started() {
        "Keep going! The test ends when time runs out or you finish the text."
    } else {
        "The timer will start when you begin typing"
    };
    Paragraph::new(Span::styled(hint, italic_style))
        .alignment(Alignment::Center)
        .render(chunks[6], buf);

    if !session.has_started() {
        Paragraph::new(Span::styled("(esc) back", italic_style)).render(chunks[7], buf);
    }
}
