//! Centered modal overlay for confirmation prompts and alerts.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::app::Modal;

use super::theme;

/// Render the open modal on top of the rest of the frame.
pub fn render(frame: &mut Frame, modal: &Modal) {
    let area = centered_rect(50, frame.area());

    let (title, body, border) = match modal {
        Modal::Alert(message) => ("Notice", message.as_str(), theme::ERROR),
        Modal::Confirm { prompt, .. } => ("Confirm", prompt.as_str(), theme::WARNING),
    };

    let hint = match modal {
        Modal::Alert(_) => "press any key",
        Modal::Confirm { .. } => "y / n",
    };

    let block = Block::default()
        .title(Span::styled(title, theme::panel_title(border)))
        .borders(Borders::ALL)
        .border_style(theme::normal().fg(border));

    let text = vec![
        Line::from(Span::styled(body, theme::normal())),
        Line::from(Span::styled(hint, theme::dimmed())),
    ];

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

/// A rect `percent_x` wide and four rows tall, centered in `area`.
fn centered_rect(percent_x: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(4),
            Constraint::Fill(1),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
