//! Form rendering module
//!
//! - `field_renderer`: single field rendering
//! - `register_form`: the account registration form

mod field_renderer;
mod register_form;

pub use register_form::draw_register;
