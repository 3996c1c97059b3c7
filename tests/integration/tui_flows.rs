//! Key-event-driven flows through the full app over file storage.
//!
//! Drives the [`App`] with synthetic key events, the same way the main
//! loop does, and checks both the resulting state and what landed in
//! the durable slot.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use taskdeck::app::{App, Modal, PanelFocus};
use taskdeck_core::{Filter, JsonStorage, TaskStore};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn make_app(dir: &tempfile::TempDir) -> App<JsonStorage> {
    let storage = JsonStorage::new(dir.path().join("tasks.json"));
    App::new(TaskStore::load(storage).unwrap())
}

fn type_text(app: &mut App<JsonStorage>, text: &str) {
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
}

fn add_task(app: &mut App<JsonStorage>, text: &str) {
    type_text(app, text);
    app.handle_key_event(key(KeyCode::Enter));
}

#[test]
fn added_tasks_survive_an_app_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut app = make_app(&dir);
    add_task(&mut app, "Buy milk");
    add_task(&mut app, "Water plants");
    drop(app);

    let app = make_app(&dir);
    assert_eq!(app.store.tasks().len(), 2);
    assert_eq!(app.store.tasks()[0].text, "Buy milk");
    assert_eq!(app.store.tasks()[1].text, "Water plants");
}

#[test]
fn toggle_and_clear_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut app = make_app(&dir);
    add_task(&mut app, "keep");
    add_task(&mut app, "done");
    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Down));
    app.handle_key_event(key(KeyCode::Enter)); // complete "done"
    app.handle_key_event(key(KeyCode::Char('x')));
    app.handle_key_event(key(KeyCode::Char('y')));
    drop(app);

    let app = make_app(&dir);
    assert_eq!(app.store.tasks().len(), 1);
    assert_eq!(app.store.tasks()[0].text, "keep");
}

#[test]
fn declined_confirmation_leaves_the_slot_untouched() {
    let dir = tempfile::tempdir().unwrap();

    let mut app = make_app(&dir);
    add_task(&mut app, "survivor");
    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Char('d')));
    app.handle_key_event(key(KeyCode::Esc)); // decline
    drop(app);

    let app = make_app(&dir);
    assert_eq!(app.store.tasks().len(), 1);
}

#[test]
fn edit_commits_are_durable() {
    let dir = tempfile::tempdir().unwrap();

    let mut app = make_app(&dir);
    add_task(&mut app, "typo");
    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Char('e')));
    for _ in 0..4 {
        app.handle_key_event(key(KeyCode::Backspace));
    }
    type_text(&mut app, "fixed");
    app.handle_key_event(key(KeyCode::Enter));
    drop(app);

    let app = make_app(&dir);
    assert_eq!(app.store.tasks()[0].text, "fixed");
}

#[test]
fn rejected_edit_shows_alert_and_keeps_stored_text() {
    let dir = tempfile::tempdir().unwrap();

    let mut app = make_app(&dir);
    add_task(&mut app, "abc");
    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Char('e')));
    for _ in 0..3 {
        app.handle_key_event(key(KeyCode::Backspace));
    }
    app.handle_key_event(key(KeyCode::Enter));
    assert!(matches!(app.modal, Some(Modal::Alert(_))));
    drop(app);

    let app = make_app(&dir);
    assert_eq!(app.store.tasks()[0].text, "abc");
}

#[test]
fn filter_resets_to_all_after_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut app = make_app(&dir);
    add_task(&mut app, "task");
    app.handle_key_event(key(KeyCode::Tab));
    app.handle_key_event(key(KeyCode::Char('3')));
    assert_eq!(app.store.filter(), Filter::Completed);
    drop(app);

    let app = make_app(&dir);
    assert_eq!(app.store.filter(), Filter::All);
    assert_eq!(app.focus, PanelFocus::Input);
}
