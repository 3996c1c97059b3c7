//! Status bar rendering.
//!
//! One line: the task counter, the filter tabs (exactly one active),
//! the clear-completed hint (dimmed when inapplicable), and contextual
//! key hints.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use taskdeck_core::{Filter, TaskStorage, summary};

use crate::app::{App, Modal, PanelFocus};

use super::theme;

/// Render the status bar at the bottom of the screen.
pub fn render<S: TaskStorage>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let tasks = app.store.tasks();

    let help_text = if let Some(modal) = &app.modal {
        match modal {
            Modal::Confirm { .. } => "y: confirm | n/Esc: cancel",
            Modal::Alert(_) => "any key: dismiss",
        }
    } else if app.editing.is_some() {
        "Enter: save | Esc: cancel | Tab: save + switch panel"
    } else {
        match app.focus {
            PanelFocus::Input => "Enter: add | Tab: switch panel | Esc: quit",
            PanelFocus::List => {
                "Enter/Space: toggle | e: edit | d: delete | x: clear done | 1/2/3: filter | Esc: quit"
            }
        }
    };

    let mut spans = vec![
        Span::styled(summary::summary_line(tasks), theme::bold()),
        Span::raw(" | "),
    ];

    for (i, filter) in Filter::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        let style = if *filter == app.store.filter() {
            theme::highlighted()
        } else {
            theme::dimmed()
        };
        spans.push(Span::styled(filter.label(), style));
    }

    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        "x: clear done",
        if summary::can_clear_completed(tasks) {
            theme::normal().fg(theme::WARNING)
        } else {
            theme::dimmed()
        },
    ));
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(help_text, theme::dimmed()));

    let paragraph = Paragraph::new(Line::from(spans)).style(theme::status_bar_bg());
    frame.render_widget(paragraph, area);
}
