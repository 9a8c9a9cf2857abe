//! Registration form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::FormButton;
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use crate::ui::layout::centered_rect;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Width of the form box
const FORM_WIDTH: u16 = 60;

/// Draw the registration form centered in `area`
pub fn draw_register(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let fields = form.visible_fields();

    // borders + margin + fields + buttons + error + switch link
    let height = 2 + 2 + fields.len() as u16 * 3 + BUTTON_HEIGHT + 2 + 1;
    let form_area = centered_rect(area, FORM_WIDTH, height);

    let block = Block::default()
        .title(" Create Your TravelSathi Account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, form_area);

    let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Buttons
    constraints.push(Constraint::Length(2)); // Error
    constraints.push(Constraint::Length(1)); // Switch to login
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(2)
        .split(form_area);

    for (idx, name) in fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx],
            form.field(*name),
            form.active_field_index == idx,
        );
    }

    let n = fields.len();
    draw_buttons(frame, chunks[n], app);
    draw_error(frame, chunks[n + 1], app.state.error_message.as_deref());
    draw_switch_link(frame, chunks[n + 2]);
}

/// Draw the Register / Login button row
fn draw_buttons(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let row_focused = form.is_buttons_row_active();
    let submitting = app.state.is_submitting();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let register_label = if submitting {
        "Registering…"
    } else {
        FormButton::Register.label()
    };

    render_action_button(
        frame,
        chunks[0],
        register_label,
        row_focused && form.selected_button == FormButton::Register,
        !submitting,
        Some(Color::Green),
    );
    render_action_button(
        frame,
        chunks[1],
        FormButton::Login.label(),
        row_focused && form.selected_button == FormButton::Login,
        true,
        Some(Color::Blue),
    );
}

fn draw_error(frame: &mut Frame, area: Rect, message: Option<&str>) {
    if let Some(message) = message {
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

fn draw_switch_link(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled("Already have an account? ", Style::default().fg(Color::Gray)),
        Span::styled(
            "Login",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        ),
        Span::styled(" (^L)", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
