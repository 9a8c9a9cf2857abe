//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod login;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    // Draw main content based on current view
    match app.state.current_view {
        View::Register => forms::draw_register(frame, main_area, app),
        View::Login => login::draw(frame, main_area),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Toast goes on top of everything else
    if let Some(notification) = &app.state.notification {
        components::render_toast(frame, main_area, &notification.message);
    }
}
