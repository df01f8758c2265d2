//! Option list shown over a choice field

use crate::state::ChoicePicker;
use crate::ui::widgets::render_scrollable_list;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

/// Render the picker centered on the screen
pub fn render_choice_dialog(frame: &mut Frame, picker: &ChoicePicker, current: &str) {
    let area = frame.area();
    let options = picker.options();

    let content_width = options
        .iter()
        .map(|o| o.chars().count())
        .chain(std::iter::once(picker.field.label().chars().count()))
        .max()
        .unwrap_or(0) as u16;
    // marker + padding + borders
    let dialog_width = (content_width + 8).min(area.width);
    let dialog_height = (options.len() as u16 + 2).min(area.height);

    let dialog_area = Rect {
        x: area.x + (area.width.saturating_sub(dialog_width)) / 2,
        y: area.y + (area.height.saturating_sub(dialog_height)) / 2,
        width: dialog_width,
        height: dialog_height,
    };

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let items: Vec<ListItem> = options
        .iter()
        .map(|option| {
            let marker = if *option == current { "● " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Green)),
                Span::raw(*option),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ", picker.field.label()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    render_scrollable_list(frame, dialog_area, list, picker.highlighted);
}
