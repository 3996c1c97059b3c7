//! Terminal UI rendering.
//!
//! The whole frame is rebuilt from app state on every draw: the input
//! panel, the task list, the status bar, and (when open) a centered
//! modal overlay for confirmation prompts and alerts.

pub mod input_panel;
pub mod modal;
pub mod status_bar;
pub mod task_panel;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};
use taskdeck_core::TaskStorage;

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw<S: TaskStorage>(frame: &mut Frame, app: &App<S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Min(3),    // Tasks
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    input_panel::render(frame, chunks[0], app);
    task_panel::render(frame, chunks[1], app);
    status_bar::render(frame, chunks[2], app);

    if let Some(m) = &app.modal {
        modal::render(frame, m);
    }
}
