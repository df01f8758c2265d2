//! Field rendering utilities for forms

use crate::state::FieldId;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Title shown in a field's border
pub fn field_title(field: FieldId, show_hints: bool) -> String {
    match field.kind().hint() {
        Some(hint) if show_hints => format!(" {} ({hint}) ", field.label()),
        _ => format!(" {} ", field.label()),
    }
}

/// Draw one form field.
///
/// Empty values show the field's placeholder; choice fields carry a ▾ marker
/// and never show a text cursor.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: FieldId,
    value: &str,
    is_active: bool,
    show_hints: bool,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let is_choice = field.kind().is_choice();
    let mut spans = if value.is_empty() {
        vec![Span::styled(
            field.placeholder(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        let style = if is_active {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        vec![Span::styled(value, style)]
    };

    if is_active && !is_choice {
        // Cursor sits after the value, before any placeholder text
        let cursor = Span::styled("▌", Style::default().fg(Color::Cyan));
        if value.is_empty() {
            spans.insert(0, cursor);
        } else {
            spans.push(cursor);
        }
    }
    if is_choice {
        spans.push(Span::styled(" ▾", Style::default().fg(Color::Cyan)));
    }

    let block = Block::default()
        .title(field_title(field, show_hints))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
