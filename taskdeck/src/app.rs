//! Application state and event handling.
//!
//! All mutations are triggered by discrete key events and run to
//! completion before the next event is processed. The [`App`] owns the
//! [`TaskStore`] and a small amount of view-local state: the input
//! buffer, the list selection, the inline edit state, and at most one
//! open modal (a confirmation prompt or an alert).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskdeck_core::{Filter, StoreError, TaskId, TaskStorage, TaskStore, summary};

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// New-task input box is focused (default).
    Input,
    /// Task list is focused.
    List,
}

/// A mutation that requires explicit user confirmation first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    /// Delete the task with this id.
    DeleteTask(TaskId),
    /// Remove every completed task.
    ClearCompleted,
}

/// A blocking modal. While one is open it captures all input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Notification dismissed by any key. The sole error-reporting
    /// channel for rejected input.
    Alert(String),
    /// Yes/no prompt; `n` or Esc declines (no-op).
    Confirm {
        /// Question shown to the user.
        prompt: String,
        /// Mutation to run on `y`.
        action: ConfirmAction,
    },
}

/// Inline edit state for one task row, keyed by id.
///
/// Rendered declaratively by the task panel instead of swapping
/// widgets in and out: while this is `Some`, the matching row shows
/// the buffer instead of the stored text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    /// Task being edited.
    pub id: TaskId,
    /// Working copy of the text.
    pub buffer: String,
    /// Cursor position in the buffer (character index).
    pub cursor: usize,
}

/// Main application state.
pub struct App<S> {
    /// Task collection, filter, and persistence.
    pub store: TaskStore<S>,
    /// Current new-task input.
    pub input: String,
    /// Cursor position in the input (character index).
    pub cursor_position: usize,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Selected row in the visible (filtered) list.
    pub selected: usize,
    /// Inline edit state, if a row is being edited.
    pub editing: Option<EditState>,
    /// Open modal, if any.
    pub modal: Option<Modal>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<S: TaskStorage> App<S> {
    /// Creates the application around a loaded store.
    #[must_use]
    pub const fn new(store: TaskStore<S>) -> Self {
        Self {
            store,
            input: String::new(),
            cursor_position: 0,
            focus: PanelFocus::Input,
            selected: 0,
            editing: None,
            modal: None,
            should_quit: false,
        }
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl-C always quits, even under a modal or an open edit.
        if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
            self.should_quit = true;
            return;
        }

        if self.modal.is_some() {
            self.handle_modal_key(key);
            return;
        }

        if self.editing.is_some() {
            self.handle_edit_key(key);
            return;
        }

        // Global shortcuts
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_focus();
                return;
            }
            _ => {}
        }

        match self.focus {
            PanelFocus::Input => self.handle_input_key(key),
            PanelFocus::List => self.handle_list_key(key),
        }
    }

    /// Handle a key while a modal is open.
    fn handle_modal_key(&mut self, key: KeyEvent) {
        let Some(modal) = self.modal.take() else {
            return;
        };
        match modal {
            // Any key dismisses an alert.
            Modal::Alert(_) => {}
            Modal::Confirm { prompt, action } => match key.code {
                KeyCode::Char('y' | 'Y') => self.run_confirmed(action),
                KeyCode::Char('n' | 'N') | KeyCode::Esc => {}
                // Anything else keeps the prompt open.
                _ => self.modal = Some(Modal::Confirm { prompt, action }),
            },
        }
    }

    /// Run a mutation the user just confirmed.
    fn run_confirmed(&mut self, action: ConfirmAction) {
        let result = match action {
            ConfirmAction::DeleteTask(id) => self.store.delete(id).map(|_| ()),
            ConfirmAction::ClearCompleted => self.store.clear_completed().map(|_| ()),
        };
        if let Err(e) = result {
            tracing::error!(error = %e, "write-through failed");
            self.modal = Some(Modal::Alert(format!("Could not save tasks: {e}")));
        }
        self.clamp_selection();
    }

    /// Handle a key while the input box is focused.
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_task(),
            KeyCode::Char(c) => self.enter_char(c),
            KeyCode::Backspace => self.delete_char(),
            KeyCode::Left => self.cursor_position = self.cursor_position.saturating_sub(1),
            KeyCode::Right => {
                if self.cursor_position < self.input.chars().count() {
                    self.cursor_position += 1;
                }
            }
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input.chars().count(),
            _ => {}
        }
    }

    /// Handle a key while the task list is focused.
    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.selected = self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.visible_len() {
                    self.selected += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('e') => self.start_editing(),
            KeyCode::Char('d') | KeyCode::Delete => self.request_delete(),
            KeyCode::Char('x') => self.request_clear_completed(),
            KeyCode::Char('1') => self.apply_filter(Filter::All),
            KeyCode::Char('2') => self.apply_filter(Filter::Pending),
            KeyCode::Char('3') => self.apply_filter(Filter::Completed),
            _ => {}
        }
    }

    /// Handle a key while a row is being edited.
    ///
    /// Enter commits; Tab commits and moves focus (the focus-loss
    /// path); Esc reverts without committing.
    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.commit_edit(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.commit_edit();
                self.toggle_focus();
            }
            KeyCode::Esc => self.editing = None,
            KeyCode::Char(c) => {
                if let Some(edit) = &mut self.editing {
                    let at = byte_index(&edit.buffer, edit.cursor);
                    edit.buffer.insert(at, c);
                    edit.cursor += 1;
                }
            }
            KeyCode::Backspace => {
                if let Some(edit) = &mut self.editing
                    && edit.cursor > 0
                {
                    edit.cursor -= 1;
                    let at = byte_index(&edit.buffer, edit.cursor);
                    edit.buffer.remove(at);
                }
            }
            KeyCode::Left => {
                if let Some(edit) = &mut self.editing {
                    edit.cursor = edit.cursor.saturating_sub(1);
                }
            }
            KeyCode::Right => {
                if let Some(edit) = &mut self.editing {
                    edit.cursor = (edit.cursor + 1).min(edit.buffer.chars().count());
                }
            }
            KeyCode::Home => {
                if let Some(edit) = &mut self.editing {
                    edit.cursor = 0;
                }
            }
            KeyCode::End => {
                if let Some(edit) = &mut self.editing {
                    edit.cursor = edit.buffer.chars().count();
                }
            }
            _ => {}
        }
    }

    /// Submit the current input as a new task.
    fn submit_task(&mut self) {
        match self.store.add(&self.input) {
            Ok(_) => {
                self.input.clear();
                self.cursor_position = 0;
            }
            Err(StoreError::TextEmpty) => {
                self.modal = Some(Modal::Alert("Please enter a task!".to_string()));
            }
            Err(e @ StoreError::TextTooLong(_)) => {
                self.modal = Some(Modal::Alert(format!("{e}")));
            }
            Err(StoreError::Storage(e)) => {
                tracing::error!(error = %e, "write-through failed");
                self.modal = Some(Modal::Alert(format!("Could not save tasks: {e}")));
            }
        }
    }

    /// Toggle completion of the selected task.
    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            if let Err(e) = self.store.toggle_completed(id) {
                tracing::error!(error = %e, "write-through failed");
                self.modal = Some(Modal::Alert(format!("Could not save tasks: {e}")));
            }
            // Toggling can move the task out of the visible subset.
            self.clamp_selection();
        }
    }

    /// Begin inline editing of the selected task.
    fn start_editing(&mut self) {
        if let Some(id) = self.selected_task_id()
            && let Some(task) = self.store.get(id)
        {
            let buffer = task.text.clone();
            let cursor = buffer.chars().count();
            self.editing = Some(EditState { id, buffer, cursor });
        }
    }

    /// Commit the edit buffer to the store.
    ///
    /// On rejection the row falls back to its stored text and the
    /// reject surfaces as a modal alert.
    fn commit_edit(&mut self) {
        let Some(edit) = self.editing.take() else {
            return;
        };
        match self.store.edit(edit.id, &edit.buffer) {
            Ok(_) => {}
            Err(StoreError::TextEmpty) => {
                self.modal = Some(Modal::Alert("Task cannot be empty!".to_string()));
            }
            Err(e @ StoreError::TextTooLong(_)) => {
                self.modal = Some(Modal::Alert(format!("{e}")));
            }
            Err(StoreError::Storage(e)) => {
                tracing::error!(error = %e, "write-through failed");
                self.modal = Some(Modal::Alert(format!("Could not save tasks: {e}")));
            }
        }
    }

    /// Ask for confirmation before deleting the selected task.
    fn request_delete(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.modal = Some(Modal::Confirm {
                prompt: "Are you sure you want to delete this task?".to_string(),
                action: ConfirmAction::DeleteTask(id),
            });
        }
    }

    /// Ask for confirmation before clearing completed tasks.
    ///
    /// The affordance is disabled when nothing is completed.
    fn request_clear_completed(&mut self) {
        if summary::can_clear_completed(self.store.tasks()) {
            self.modal = Some(Modal::Confirm {
                prompt: "Clear all completed tasks?".to_string(),
                action: ConfirmAction::ClearCompleted,
            });
        }
    }

    /// Switch the active filter and re-clamp the selection.
    fn apply_filter(&mut self, filter: Filter) {
        self.store.set_filter(filter);
        self.clamp_selection();
    }

    /// Toggle focus between the input box and the list.
    const fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Input => PanelFocus::List,
            PanelFocus::List => PanelFocus::Input,
        };
    }

    /// Number of tasks in the visible (filtered) list.
    #[must_use]
    pub fn visible_len(&self) -> usize {
        self.store.filtered_view().len()
    }

    /// Id of the selected visible task, if any.
    #[must_use]
    pub fn selected_task_id(&self) -> Option<TaskId> {
        self.store.filtered_view().get(self.selected).map(|t| t.id)
    }

    /// Keep the selection inside the visible list after mutations.
    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    /// Insert a character at the input cursor position.
    fn enter_char(&mut self, c: char) {
        let at = byte_index(&self.input, self.cursor_position);
        self.input.insert(at, c);
        self.cursor_position += 1;
    }

    /// Delete the character before the input cursor.
    fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = byte_index(&self.input, self.cursor_position);
            self.input.remove(at);
        }
    }
}

/// Byte offset of the `cursor`-th character in `s`.
fn byte_index(s: &str, cursor: usize) -> usize {
    s.char_indices()
        .nth(cursor)
        .map_or(s.len(), |(i, _)| i)
}
