//! Prospect form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::{FieldId, Focus};
use crate::ui::components::{
    render_status_banner, render_submit_button, status_banner_height, BUTTON_HEIGHT,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Fields shown under "Informations personnelles"
const PERSONAL_FIELDS: &[FieldId] = &[
    FieldId::FullName,
    FieldId::Email,
    FieldId::Mobile,
    FieldId::Source,
    FieldId::GraduationYear,
];

/// Fields shown under "Informations académiques"
const ACADEMIC_FIELDS: &[FieldId] = &[
    FieldId::Specialty,
    FieldId::OverallAverage,
    FieldId::MathGrade,
    FieldId::PhysicsGrade,
    FieldId::FrenchGrade,
    FieldId::Program,
];

/// Height of one field box
const FIELD_HEIGHT: u16 = 3;

/// Rows needed for a two-column section, borders included
fn section_height(fields: &[FieldId]) -> u16 {
    fields.len().div_ceil(2) as u16 * FIELD_HEIGHT + 2
}

/// Draw the sections, the status banner and the submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(section_height(PERSONAL_FIELDS)),
            Constraint::Length(section_height(ACADEMIC_FIELDS)),
            Constraint::Length(status_banner_height(&form.status, area.width)),
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Min(0),
        ])
        .split(area);

    draw_section(
        frame,
        chunks[0],
        "Informations personnelles",
        Color::Gray,
        PERSONAL_FIELDS,
        app,
    );
    draw_section(
        frame,
        chunks[1],
        "Informations académiques",
        Color::Blue,
        ACADEMIC_FIELDS,
        app,
    );

    render_status_banner(frame, chunks[2], &form.status);

    render_submit_button(
        frame,
        chunks[3],
        app.state.focus == Focus::Submit,
        form.is_valid(),
        form.is_submitting(),
        app.spinner_frame,
    );
}

/// Draw one titled section with its fields in two columns
fn draw_section(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    accent: Color,
    fields: &[FieldId],
    app: &App,
) {
    let block = Block::default()
        .title(format!(" {title} "))
        .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            fields
                .chunks(2)
                .map(|_| Constraint::Length(FIELD_HEIGHT))
                .collect::<Vec<_>>(),
        )
        .split(inner);

    for (row_area, pair) in rows.iter().zip(fields.chunks(2)) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(*row_area);

        for (cell, field) in columns.iter().zip(pair) {
            draw_field(
                frame,
                *cell,
                *field,
                app.state.form.value(*field),
                app.state.focus == Focus::Field(*field),
                app.state.show_hints,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sections_cover_every_field_once() {
        let shown: Vec<_> = PERSONAL_FIELDS
            .iter()
            .chain(ACADEMIC_FIELDS)
            .copied()
            .collect();
        assert_eq!(shown, FieldId::ALL.to_vec());
        let unique: HashSet<_> = shown.iter().collect();
        assert_eq!(unique.len(), FieldId::ALL.len());
    }

    #[test]
    fn test_section_height() {
        assert_eq!(section_height(PERSONAL_FIELDS), 11);
        assert_eq!(section_height(ACADEMIC_FIELDS), 11);
    }
}
