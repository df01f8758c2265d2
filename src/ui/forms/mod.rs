//! Form rendering module
//!
//! - `field_renderer`: single field boxes
//! - `prospect_form`: the two prospect sections, status banner and button

mod field_renderer;
mod prospect_form;

pub use prospect_form::draw as draw_prospect_form;
