//! New-task input box rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use taskdeck_core::TaskStorage;

use super::theme;
use crate::app::{App, PanelFocus};

/// Render the new-task input box.
pub fn render<S: TaskStorage>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let is_focused = app.focus == PanelFocus::Input && app.editing.is_none();

    // Build the input text with cursor
    let mut display_text = app.input.clone();
    if is_focused {
        let at = byte_index(&display_text, app.cursor_position);
        display_text.insert(at, '█');
    }

    let input_line = if display_text.is_empty() {
        Line::from(Span::styled("Type a task...", theme::dimmed()))
    } else {
        Line::from(Span::styled(display_text, theme::normal()))
    };

    let block = Block::default()
        .title(Span::styled(
            "New Task",
            theme::panel_title(theme::INPUT_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    let paragraph = Paragraph::new(input_line).block(block);

    frame.render_widget(paragraph, area);
}

/// Byte offset of the `cursor`-th character in `s`.
fn byte_index(s: &str, cursor: usize) -> usize {
    s.char_indices()
        .nth(cursor)
        .map_or(s.len(), |(i, _)| i)
}
