//! Inline banner reporting the last submit attempt

use crate::state::SubmissionStatus;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows needed to show `status` in a banner `width` columns wide, borders
/// included (nothing when unset)
pub fn status_banner_height(status: &SubmissionStatus, width: u16) -> u16 {
    match status.message() {
        None => 0,
        Some(message) => {
            let text = format!(" {} {message}", status_icon(status));
            wrapped_line_count(&text, width.saturating_sub(2)) + 2
        }
    }
}

/// Lines a word-wrapped `text` occupies at `width` columns
fn wrapped_line_count(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut lines = 1;
    // Leading space of the first line counts against it
    let mut used = 1;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if used + 1 + len <= width {
            used += 1 + len;
            continue;
        }
        // Words longer than a line are broken across rows
        lines += 1 + (len - 1) / width;
        used = (len - 1) % width + 1;
    }
    u16::try_from(lines).unwrap_or(u16::MAX)
}

fn status_icon(status: &SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Error(_) => "✖",
        _ => "✔",
    }
}

/// Render the success or error banner; draws nothing when unset
pub fn render_status_banner(frame: &mut Frame, area: Rect, status: &SubmissionStatus) {
    let color = match status {
        SubmissionStatus::Unset => return,
        SubmissionStatus::Success(_) => Color::Green,
        SubmissionStatus::Error(_) => Color::Red,
    };
    let icon = status_icon(status);
    let message = status.message().unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(
            format!(" {icon} "),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(message, Style::default().fg(color)),
    ]);

    let paragraph = Paragraph::new(line).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(paragraph, area);
}
