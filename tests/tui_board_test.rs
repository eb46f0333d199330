//! Keyboard sessions against the board model, without a terminal

use iocraft::prelude::{KeyCode, KeyModifiers};
use tackboard::TaskStatus;
use tackboard::tui::board::handlers::{KeyContext, key_to_action};
use tackboard::tui::{ActionOutcome, BoardApp, UiMode};

fn press_with(app: &mut BoardApp, code: KeyCode, modifiers: KeyModifiers) -> ActionOutcome {
    match key_to_action(code, modifiers, KeyContext::for_app(app)) {
        Some(action) => app.apply(action),
        None => ActionOutcome::Continue,
    }
}

fn press(app: &mut BoardApp, code: KeyCode) -> ActionOutcome {
    press_with(app, code, KeyModifiers::NONE)
}

fn type_keys(app: &mut BoardApp, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn clear_field(app: &mut BoardApp, len: usize) {
    for _ in 0..len {
        press(app, KeyCode::Backspace);
    }
}

fn column_titles(app: &BoardApp) -> Vec<String> {
    app.controller()
        .state()
        .columns()
        .iter()
        .map(|c| c.title.clone())
        .collect()
}

#[test]
fn test_edit_then_drag_to_done() {
    let mut app = BoardApp::in_memory();

    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('e'));
    assert!(matches!(app.mode(), UiMode::EditingTask(_)));

    clear_field(&mut app, "New Task".len());
    type_keys(&mut app, "Ship it");
    press(&mut app, KeyCode::Tab);
    type_keys(&mut app, "line one");
    press(&mut app, KeyCode::Enter);
    type_keys(&mut app, "line two");
    press(&mut app, KeyCode::Tab);
    type_keys(&mut app, "2024-06-01");
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Char('l'));
    press_with(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);

    assert_eq!(app.mode(), &UiMode::Browsing);
    let (column, task) = app.selected_task().unwrap();
    assert_eq!(column, "todo");
    assert_eq!(task.title, "Ship it");
    assert_eq!(task.description, "line one\nline two");
    assert_eq!(task.status, TaskStatus::InProgress);
    let task_id = task.id.clone();

    press(&mut app, KeyCode::Char('m'));
    assert_eq!(app.mode(), &UiMode::Dragging);
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('l'));
    assert_eq!(app.current_column(), 2);
    let view = app.view_model(4);
    assert!(view.columns[2].is_drop_target);
    assert_eq!(
        view.columns[2].drop_preview.as_ref().map(|t| t.id.clone()),
        Some(task_id.clone())
    );
    press(&mut app, KeyCode::Enter);

    let state = app.controller().state();
    assert!(state.column("todo").unwrap().tasks.is_empty());
    assert_eq!(state.column("done").unwrap().tasks[0].id, task_id);
    let (column, _) = app.selected_task().unwrap();
    assert_eq!(column, "done");
}

#[test]
fn test_escape_discards_task_edits() {
    let mut app = BoardApp::in_memory();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Enter);
    type_keys(&mut app, " changed");
    press(&mut app, KeyCode::Esc);

    let (_, task) = app.selected_task().unwrap();
    assert_eq!(task.title, "New Task");
    assert_eq!(app.mode(), &UiMode::Browsing);
}

#[test]
fn test_invalid_due_date_keeps_form_open() {
    let mut app = BoardApp::in_memory();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('e'));
    press(&mut app, KeyCode::Tab);
    press(&mut app, KeyCode::Tab);
    type_keys(&mut app, "tomorrow");
    press_with(&mut app, KeyCode::Char('s'), KeyModifiers::CONTROL);

    match app.mode() {
        UiMode::EditingTask(draft) => {
            assert_eq!(
                draft.error.as_deref(),
                Some("invalid due date 'tomorrow' (expected YYYY-MM-DD)")
            );
        }
        other => panic!("expected the editor to stay open, got {other:?}"),
    }
    let (_, task) = app.selected_task().unwrap();
    assert!(task.due_date.is_none());
}

#[test]
fn test_column_forms_by_keyboard() {
    let mut app = BoardApp::in_memory();

    press(&mut app, KeyCode::Char('c'));
    assert!(app.view_model(4).add_column.is_open);
    // Browsing keys are plain text while a form is open
    type_keys(&mut app, "qa");
    press(&mut app, KeyCode::Enter);
    assert_eq!(column_titles(&app).last().map(String::as_str), Some("qa"));

    press(&mut app, KeyCode::Char('r'));
    clear_field(&mut app, 2);
    type_keys(&mut app, "QA");
    press(&mut app, KeyCode::Enter);
    assert_eq!(column_titles(&app).last().map(String::as_str), Some("QA"));

    press_with(&mut app, KeyCode::Char('D'), KeyModifiers::SHIFT);
    assert_eq!(column_titles(&app), vec!["To Do", "In Progress", "Done"]);
}

#[test]
fn test_delete_task_key() {
    let mut app = BoardApp::in_memory();
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('a'));
    press(&mut app, KeyCode::Char('x'));
    assert_eq!(app.controller().state().task_count(), 1);
    press(&mut app, KeyCode::Delete);
    assert_eq!(app.controller().state().task_count(), 0);
    assert!(app.selected_task().is_none());
}

#[test]
fn test_quit_keys() {
    let mut app = BoardApp::in_memory();
    assert_eq!(press(&mut app, KeyCode::Char('q')), ActionOutcome::Quit);

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(press(&mut app, KeyCode::Char('q')), ActionOutcome::Continue);
    assert_eq!(
        press_with(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL),
        ActionOutcome::Quit
    );
}

#[test]
fn test_footer_follows_mode() {
    let mut app = BoardApp::in_memory();
    press(&mut app, KeyCode::Char('a'));

    let keys = |app: &BoardApp| -> Vec<String> {
        app.view_model(4)
            .shortcuts
            .iter()
            .map(|s| s.key.to_string())
            .collect()
    };

    assert!(keys(&app).contains(&"q".to_string()));
    press(&mut app, KeyCode::Char('m'));
    assert_eq!(keys(&app), vec!["h/l", "Enter", "Esc"]);
    press(&mut app, KeyCode::Esc);
    assert!(keys(&app).contains(&"q".to_string()));
}
