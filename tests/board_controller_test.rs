use tackboard::utils::SequentialIds;
use tackboard::{
    BOARD_KEY, BoardController, BoardState, BoardStore, DragContext, FileKeyValueStore,
    KeyValueStore, LocalBoardStore, MemoryKeyValueStore, TaskPatch, TaskStatus,
};
use tempfile::TempDir;

fn memory_board() -> (BoardController, MemoryKeyValueStore) {
    let kv = MemoryKeyValueStore::new();
    let controller = BoardController::load(
        Box::new(LocalBoardStore::new(kv.clone())),
        Box::new(SequentialIds::new("t")),
    );
    (controller, kv)
}

fn task_ids(controller: &BoardController, column: &str) -> Vec<String> {
    controller
        .state()
        .column(column)
        .map(|c| c.tasks.iter().map(|t| t.id.to_string()).collect())
        .unwrap_or_default()
}

#[test]
fn test_move_to_done_scenario() {
    let (mut ctl, _) = memory_board();
    let t1 = ctl.add_task("todo").unwrap();
    ctl.update_task(
        "todo",
        &t1,
        TaskPatch {
            title: Some("T1".to_string()),
            ..Default::default()
        },
    );
    let in_progress = ctl.state().column("inProgress").cloned();

    let mut drag = DragContext::new();
    drag.register_targets(ctl.state().column_ids());
    let started = drag.begin(t1.clone(), "todo".into()).unwrap();
    ctl.handle_drag_event(started);
    drag.hover_next();
    drag.hover_next();
    let ended = drag.drop_item().unwrap();
    assert!(ctl.handle_drag_event(ended));

    assert!(task_ids(&ctl, "todo").is_empty());
    assert_eq!(task_ids(&ctl, "done"), vec![t1.to_string()]);
    assert_eq!(ctl.state().column("done").unwrap().tasks[0].title, "T1");
    assert_eq!(ctl.state().column("inProgress").cloned(), in_progress);
}

#[test]
fn test_drop_into_source_is_byte_identical() {
    let (mut ctl, kv) = memory_board();
    let a = ctl.add_task("inProgress").unwrap();
    ctl.add_task("inProgress").unwrap();
    let stored_before = kv.get(BOARD_KEY).unwrap();

    let mut drag = DragContext::new();
    drag.register_targets(ctl.state().column_ids());
    ctl.handle_drag_event(drag.begin(a.clone(), "inProgress".into()).unwrap());
    assert!(!ctl.handle_drag_event(drag.drop_item().unwrap()));

    assert_eq!(kv.get(BOARD_KEY).unwrap(), stored_before);
    assert_eq!(task_ids(&ctl, "inProgress")[0], a.to_string());
}

#[test]
fn test_cancelled_drag_keeps_task() {
    let (mut ctl, _) = memory_board();
    let a = ctl.add_task("todo").unwrap();

    let mut drag = DragContext::new();
    drag.register_targets(ctl.state().column_ids());
    ctl.handle_drag_event(drag.begin(a.clone(), "todo".into()).unwrap());
    drag.hover_next();
    assert!(ctl.active_drag().is_some());
    assert!(!ctl.handle_drag_event(drag.cancel().unwrap()));

    assert_eq!(task_ids(&ctl, "todo"), vec![a.to_string()]);
    assert!(ctl.active_drag().is_none());
}

#[test]
fn test_delete_and_counts() {
    let (mut ctl, _) = memory_board();
    let before = ctl.state().len();
    let review = ctl.add_column("Review").unwrap();
    assert_eq!(ctl.state().len(), before + 1);
    assert!(ctl.state().column(&review).unwrap().tasks.is_empty());

    let a = ctl.add_task(&review).unwrap();
    let b = ctl.add_task(&review).unwrap();
    assert!(!ctl.delete_task(&review, "missing"));
    assert!(ctl.delete_task(&review, &a));
    assert_eq!(task_ids(&ctl, &review), vec![b.to_string()]);

    assert!(ctl.delete_column(&review));
    assert!(ctl.find_task(&b).is_none());
    assert_eq!(ctl.state().task_count(), 0);
}

#[test]
fn test_board_survives_reload_from_disk() {
    let dir = TempDir::new().unwrap();
    let store = || LocalBoardStore::new(FileKeyValueStore::new(dir.path()));

    let mut ctl = BoardController::load(Box::new(store()), Box::new(SequentialIds::new("t")));
    let id = ctl.add_task("done").unwrap();
    ctl.update_task(
        "done",
        &id,
        TaskPatch {
            description: Some("persisted".to_string()),
            due_date: Some(jiff::civil::Date::new(2024, 2, 29).ok()),
            status: Some(TaskStatus::Completed),
            ..Default::default()
        },
    );
    let expected = ctl.state().clone();

    let reloaded = BoardController::load(Box::new(store()), Box::new(SequentialIds::new("t")));
    assert_eq!(reloaded.state(), &expected);
    assert!(dir.path().join("kanbanColumns.json").exists());
}

#[test]
fn test_serialization_roundtrip_keeps_column_order() {
    let (mut ctl, _) = memory_board();
    ctl.add_column("Zeta");
    ctl.add_column("Alpha");
    ctl.add_task("todo");

    let json = serde_json::to_string(ctl.state()).unwrap();
    let parsed: BoardState = serde_json::from_str(&json).unwrap();

    assert_eq!(&parsed, ctl.state());
    let titles: Vec<_> = parsed.columns().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["To Do", "In Progress", "Done", "Zeta", "Alpha"]);
}

#[test]
fn test_malformed_store_starts_from_default() {
    let kv = MemoryKeyValueStore::new();
    kv.set(BOARD_KEY, "{\"todo\": 3}").unwrap();
    let store = LocalBoardStore::new(kv);
    assert!(store.load().is_none());

    let ctl = BoardController::load(Box::new(store), Box::new(SequentialIds::default()));
    assert_eq!(ctl.state(), &BoardState::default_board());
}
