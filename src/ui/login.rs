//! Login view

use super::layout::centered_rect;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the login landing panel
pub fn draw(frame: &mut Frame, area: Rect) {
    let panel = centered_rect(area, 56, 9);

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let content = vec![
        Line::from(Span::styled(
            "Welcome to TravelSathi",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Sign in with the email and password you registered."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("r", key_style),
            Span::raw(" to register another account, "),
            Span::styled("q", key_style),
            Span::raw(" to quit"),
        ]),
    ];

    let block = Block::default()
        .title(" Login ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(paragraph, panel);
}
