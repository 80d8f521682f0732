use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Chart, Dataset, Gauge, GraphType, Paragraph, Widget, Wrap},
};
use webbrowser::Browser;

use super::charting::{compute_chart_bounds, format_label};
use super::{HORIZONTAL_MARGIN, VERTICAL_MARGIN};
use crate::app::FinishedTest;
use crate::results::BASELINE_WPM;
use crate::time_series::to_chart_data;

pub fn render(finished: &FinishedTest, area: Rect, buf: &mut Buffer) {
    let results = &finished.results;
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);
    let magenta_style = Style::default().fg(Color::Magenta);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .vertical_margin(VERTICAL_MARGIN)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // headline stats
            Constraint::Length(1), // breakdown
            Constraint::Length(1),
            Constraint::Length(1), // speed gauge
            Constraint::Length(1), // accuracy gauge
            Constraint::Min(1),    // chart
            Constraint::Length(1), // tip
            Constraint::Length(1),
            Constraint::Length(1), // legend
        ])
        .split(area);

    Paragraph::new(Span::styled(
        "Test Complete!",
        bold_style.fg(Color::Yellow),
    ))
    .alignment(Alignment::Center)
    .render(chunks[0], buf);

    let headline = Line::from(vec![
        Span::styled(format!("{} wpm", results.wpm), bold_style),
        Span::raw(format!(" ({})   ", results.wpm_rating())),
        Span::styled(format!("{}% acc", results.accuracy), bold_style),
        Span::raw(format!(" ({})", results.accuracy_rating())),
    ]);
    Paragraph::new(headline)
        .alignment(Alignment::Center)
        .render(chunks[1], buf);

    Paragraph::new(Span::styled(
        format!(
            "{} correct / {} incorrect / {} typed in {}s   {} / {}",
            results.correct_characters,
            results.incorrect_characters,
            results.total_characters,
            results.time_spent_secs,
            results.difficulty.label(),
            results.time_limit.label(),
        ),
        Style::default().add_modifier(Modifier::DIM),
    ))
    .alignment(Alignment::Center)
    .render(chunks[2], buf);

    let speed = results.speed_ratio();
    Gauge::default()
        .gauge_style(magenta_style)
        .ratio((speed / 2.0).clamp(0.0, 1.0))
        .label(format!(
            "speed {:.0}% of {BASELINE_WPM} wpm average",
            speed * 100.0
        ))
        .render(chunks[4], buf);

    Gauge::default()
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(results.accuracy_ratio().clamp(0.0, 1.0))
        .label(format!(
            "accuracy {} / {} correct",
            results.correct_characters, results.total_characters
        ))
        .render(chunks[5], buf);

    let (duration, top_wpm) =
        compute_chart_bounds(&finished.wpm_samples, results.time_spent_secs as f64);
    let data = to_chart_data(&finished.wpm_samples);
    let datasets = vec![Dataset::default()
        .marker(Marker::Braille)
        .style(magenta_style)
        .graph_type(GraphType::Line)
        .data(&data)];

    Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title("seconds")
                .bounds([0.0, duration])
                .labels(vec![
                    Span::styled("0", bold_style),
                    Span::styled(format_label(duration), bold_style),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("wpm")
                .bounds([0.0, top_wpm])
                .labels(vec![
                    Span::styled("0", bold_style),
                    Span::styled(format_label(top_wpm), bold_style),
                ]),
        )
        .render(chunks[6], buf);

    Paragraph::new(Span::styled(
        results.tip(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::ITALIC),
    ))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .render(chunks[7], buf);

    Paragraph::new(Span::styled(
        if Browser::is_available() {
            "(r)etry / (n)ew test / (s)hare / (esc)ape"
        } else {
            "(r)etry / (n)ew test / (esc)ape"
        },
        italic_style,
    ))
    .render(chunks[9], buf);
}
