//! Task list rendering.
//!
//! The visible list is rebuilt from the store's filtered view on every
//! frame. A row under inline edit renders its edit buffer with a
//! cursor instead of the stored text.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use taskdeck_core::{Task, TaskStorage};

use super::theme;
use crate::app::{App, EditState, PanelFocus};

/// Render the task panel from the filtered view.
pub fn render<S: TaskStorage>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let is_focused = app.focus == PanelFocus::List;
    let visible = app.store.filtered_view();

    let block = Block::default()
        .title(Span::styled("Tasks", theme::panel_title(theme::TASKS_TITLE)))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    if visible.is_empty() {
        // Empty-state indicator instead of a list.
        let empty = Paragraph::new(Line::from(Span::styled(
            "No tasks here. Press Tab, type one, and hit Enter.",
            theme::dimmed(),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = visible
        .into_iter()
        .enumerate()
        .map(|(idx, task)| {
            let is_selected = idx == app.selected;
            let editing = app.editing.as_ref().filter(|e| e.id == task.id);

            let line = editing.map_or_else(|| display_row(task), editing_row);

            let style = if is_selected && is_focused {
                theme::selected()
            } else if is_selected {
                theme::highlighted()
            } else {
                theme::normal()
            };

            ListItem::new(line).style(style)
        })
        .collect();

    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}

/// Row for a task in display mode.
fn display_row(task: &Task) -> Line<'_> {
    let (checkbox, checkbox_style, text_style) = if task.completed {
        ("[x]", theme::normal().fg(theme::SUCCESS), theme::completed())
    } else {
        ("[ ]", theme::normal(), theme::normal())
    };

    Line::from(vec![
        Span::styled(checkbox, checkbox_style),
        Span::raw(" "),
        Span::styled(task.text.as_str(), text_style),
    ])
}

/// Row for the task currently being edited: buffer plus cursor.
fn editing_row(edit: &EditState) -> Line<'_> {
    let mut buffer = edit.buffer.clone();
    let at = buffer
        .char_indices()
        .nth(edit.cursor)
        .map_or(buffer.len(), |(i, _)| i);
    buffer.insert(at, '█');

    Line::from(vec![
        Span::styled("[~]", theme::normal().fg(theme::WARNING)),
        Span::raw(" "),
        Span::styled(buffer, theme::input_cursor()),
    ])
}
