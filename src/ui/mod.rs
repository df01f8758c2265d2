//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod widgets;

use crate::app::App;
use ratatui::Frame;

/// Main draw function; redraws the whole form from current state
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, form_area, help_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area);
    forms::draw_prospect_form(frame, form_area, app);
    layout::draw_help_bar(frame, help_area, app);

    // Option list overlays everything else
    if let Some(picker) = &app.state.picker {
        components::render_choice_dialog(frame, picker, app.state.form.value(picker.field));
    }
}
