//! Layout components (header, content area, help bar)

use crate::app::App;
use crate::platform::{CLEAR_SHORTCUT, QUIT_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{missing_required, Focus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Form title
const TITLE: &str = "Formulaire Prospects IFAG";

/// Widest the form grows on large terminals
const MAX_FORM_WIDTH: u16 = 100;

/// Split the screen into header, content and help bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let width = area.width.min(MAX_FORM_WIDTH);
    let centered = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form
            Constraint::Length(1), // Help bar
        ])
        .split(centered);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the form title
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Span::styled(
        TITLE,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Draw the help bar
pub fn draw_help_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        get_hints(app),
        Style::default().fg(Color::DarkGray),
    )];

    let missing = missing_required(&app.state.form.record);
    if !missing.is_empty() {
        let names: Vec<_> = missing
            .iter()
            .map(|f| f.label().trim_end_matches(" *"))
            .collect();
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            format!("Requis : {}", names.join(", ")),
            Style::default().fg(Color::Yellow),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Get keyboard hints for the focused element
fn get_hints(app: &App) -> String {
    if app.state.picker.is_some() {
        return "↑/↓:choisir  Entrée:valider  Esc:fermer".to_string();
    }
    match app.state.focus {
        Focus::Submit => format!("Entrée:envoyer  Tab:suivant  {QUIT_SHORTCUT}:quitter"),
        Focus::Field(field) if field.kind().is_choice() => format!(
            "Entrée:liste  ←/→:changer  Tab:suivant  {SUBMIT_SHORTCUT}:envoyer  {QUIT_SHORTCUT}:quitter"
        ),
        Focus::Field(_) => format!(
            "Tab:suivant  {CLEAR_SHORTCUT}:effacer  {SUBMIT_SHORTCUT}:envoyer  {QUIT_SHORTCUT}:quitter"
        ),
    }
}
