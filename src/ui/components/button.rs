//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Frames of the busy indicator
const SPINNER_FRAMES: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
    accent: Color,
) {
    let border_style = if is_selected && is_enabled {
        Style::default().fg(Color::Cyan)
    } else if is_enabled {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render the submit button, showing a spinner while a request is in flight
pub fn render_submit_button(
    frame: &mut Frame,
    area: Rect,
    is_selected: bool,
    is_enabled: bool,
    is_submitting: bool,
    spinner_frame: usize,
) {
    let content = if is_submitting {
        format!(
            "{} Envoi en cours…",
            SPINNER_FRAMES[spinner_frame % SPINNER_FRAMES.len()]
        )
    } else {
        "Envoyer la candidature".to_string()
    };
    render_button(
        frame,
        area,
        &content,
        is_selected,
        is_enabled && !is_submitting,
        Color::Green,
    );
}
