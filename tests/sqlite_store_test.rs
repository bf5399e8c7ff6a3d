//! Integration tests for the SQLite backend against a real database file,
//! driven through the public `TaskManager` API.

use tempfile::TempDir;
use todz::manager::{StatusFilter, TaskFilter, TaskManager};
use todz::store::{SqliteStore, Storage};

fn setup() -> (TempDir, TaskManager<SqliteStore>) {
    let dir = tempfile::tempdir().unwrap();
    let store = SqliteStore::open(&dir.path().join("todz.db"), "todos").unwrap();
    (dir, TaskManager::new(store))
}

#[test]
fn test_tasks_survive_reopen() {
    let (dir, mut manager) = setup();
    let id = manager
        .add("(B) 2020-04-28 Work on unit tests @codehealth +gotodo")
        .unwrap();
    manager.complete(id).unwrap();
    drop(manager);

    let store = SqliteStore::open(&dir.path().join("todz.db"), "todos").unwrap();
    let manager = TaskManager::new(store);

    let filter = TaskFilter {
        status: StatusFilter::All,
        ..Default::default()
    };
    let tasks = manager.list(&filter).unwrap();
    assert_eq!(tasks.len(), 1);
    assert!(tasks[0].complete);
    // Priority was cleared on completion and the clear was persisted
    assert_eq!(tasks[0].priority, 0);
    assert!(tasks[0].has_context("codehealth"));
}

#[test]
fn test_line_is_the_persisted_value() {
    let (dir, mut manager) = setup();
    manager
        .add("x 2020-04-29 2020-04-28 Add parser test +gotodo due:2020-05-01")
        .unwrap();
    drop(manager);

    let store = SqliteStore::open(&dir.path().join("todz.db"), "todos").unwrap();
    let task = store.get(1).unwrap();

    assert_eq!(
        task.to_string(),
        "x 2020-04-29 2020-04-28 Add parser test +gotodo due:2020-05-01"
    );
    assert_eq!(task.due_date.display(), "2020-05-01");
}

#[test]
fn test_ids_are_stable_across_sessions() {
    let (dir, mut manager) = setup();
    manager.add("one").unwrap();
    manager.add("two").unwrap();
    manager.delete(2).unwrap();
    drop(manager);

    let store = SqliteStore::open(&dir.path().join("todz.db"), "todos").unwrap();
    let mut manager = TaskManager::new(store);
    let id = manager.add("three").unwrap();

    // Deleted ids are never handed out again, even after a reopen
    assert_eq!(id, 3);
}

#[test]
fn test_buckets_share_one_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todz.db");

    let mut work = TaskManager::new(SqliteStore::open(&path, "work").unwrap());
    let mut home = TaskManager::new(SqliteStore::open(&path, "home").unwrap());

    work.add("ship release +todz").unwrap();
    home.add("mow lawn @outside").unwrap();

    assert_eq!(work.list_projects().unwrap(), ["todz"]);
    assert!(work.list_contexts().unwrap().is_empty());
    assert_eq!(home.list_contexts().unwrap(), ["outside"]);
}
