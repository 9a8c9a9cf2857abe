//! Toast notification overlay

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render `message` in the bottom-right corner of `area`, on top of other content
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    // 2 chars padding each side, border included
    let width = (message.chars().count() as u16 + 4).min(area.width.saturating_sub(4));
    let height = 3;

    let x = area.right().saturating_sub(width + 2);
    let y = area.bottom().saturating_sub(height + 1);
    let toast_area = Rect::new(x, y, width, height).intersection(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .block(block);

    frame.render_widget(Clear, toast_area);
    frame.render_widget(text, toast_area);
}
