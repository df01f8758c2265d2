//! Reusable UI components

mod button;
mod choice_dialog;
mod status_banner;

pub use button::{render_submit_button, BUTTON_HEIGHT};
pub use choice_dialog::render_choice_dialog;
pub use status_banner::{render_status_banner, status_banner_height};
