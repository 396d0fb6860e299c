//! Adapter tests for the in-memory repository.

use crate::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{PersistedTaskData, Task, TaskId, TaskTitle},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn repository() -> InMemoryTaskRepository {
    InMemoryTaskRepository::new()
}

fn draft(title: &str) -> Task {
    let valid = TaskTitle::new(title).expect("valid title");
    Task::new(valid, None, &DefaultClock)
}

fn persisted(id: u64, title: &str) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        title: TaskTitle::new(title).expect("valid title"),
        description: None,
        completed: false,
        created_at: Utc
            .with_ymd_and_hms(2026, 1, 15, 9, 30, 0)
            .single()
            .expect("valid timestamp"),
    })
}

#[rstest]
fn counter_starts_at_one_and_next_id_does_not_mutate(repository: InMemoryTaskRepository) {
    assert_eq!(repository.next_id().expect("counter"), TaskId::new(1));
    assert_eq!(repository.next_id().expect("counter"), TaskId::new(1));
}

#[rstest]
fn add_assigns_sequential_ids(repository: InMemoryTaskRepository) {
    let first = repository.add(draft("First")).expect("add should succeed");
    let second = repository.add(draft("Second")).expect("add should succeed");
    let third = repository.add(draft("Third")).expect("add should succeed");

    assert_eq!(first.id(), TaskId::new(1));
    assert_eq!(second.id(), TaskId::new(2));
    assert_eq!(third.id(), TaskId::new(3));
    assert_eq!(repository.next_id().expect("counter"), TaskId::new(4));
}

#[rstest]
fn add_preserves_draft_content(repository: InMemoryTaskRepository) {
    let title = TaskTitle::new("Plan the week").expect("valid title");
    let submitted = Task::new(title, Some("use the whiteboard".to_owned()), &DefaultClock);
    let created_at = submitted.created_at();

    let stored = repository.add(submitted).expect("add should succeed");

    assert_eq!(stored.title().as_str(), "Plan the week");
    assert_eq!(stored.description(), Some("use the whiteboard"));
    assert!(!stored.completed());
    assert_eq!(stored.created_at(), created_at);
}

#[rstest]
fn get_returns_none_for_unknown_ids(repository: InMemoryTaskRepository) {
    let fetched = repository.get(TaskId::new(99)).expect("get should succeed");
    assert!(fetched.is_none());
}

#[rstest]
fn list_all_orders_by_ascending_id(repository: InMemoryTaskRepository) {
    repository
        .load(vec![
            persisted(3, "Third"),
            persisted(1, "First"),
            persisted(2, "Second"),
        ])
        .expect("load should succeed");

    let tasks = repository.list_all().expect("list should succeed");
    let ids: Vec<TaskId> = tasks.iter().map(Task::id).collect();
    assert_eq!(ids, vec![TaskId::new(1), TaskId::new(2), TaskId::new(3)]);
}

#[rstest]
fn update_replaces_the_stored_entry(repository: InMemoryTaskRepository) {
    let stored = repository.add(draft("Original")).expect("add should succeed");
    let replacement = stored.with_completed(true);

    let updated = repository
        .update(replacement.clone())
        .expect("update should succeed");

    assert_eq!(updated, replacement);
    let fetched = repository
        .get(updated.id())
        .expect("get should succeed")
        .expect("entry should exist");
    assert!(fetched.completed());
}

#[rstest]
fn update_of_an_unknown_id_is_not_found(repository: InMemoryTaskRepository) {
    let result = repository.update(persisted(7, "Ghost"));
    assert!(matches!(
        result,
        Err(TaskRepositoryError::NotFound(id)) if id == TaskId::new(7)
    ));
}

#[rstest]
fn delete_reports_whether_an_entry_existed(repository: InMemoryTaskRepository) {
    let stored = repository.add(draft("Ephemeral")).expect("add should succeed");

    assert!(repository.delete(stored.id()).expect("delete should succeed"));
    assert!(!repository.delete(stored.id()).expect("delete should succeed"));
}

#[rstest]
fn deleted_ids_are_never_reused(repository: InMemoryTaskRepository) {
    let first = repository.add(draft("First")).expect("add should succeed");
    repository.add(draft("Second")).expect("add should succeed");
    repository.delete(first.id()).expect("delete should succeed");

    let third = repository.add(draft("Third")).expect("add should succeed");
    assert_eq!(third.id(), TaskId::new(3));
}

#[rstest]
fn set_next_id_controls_subsequent_assignment(repository: InMemoryTaskRepository) {
    repository
        .set_next_id(TaskId::new(42))
        .expect("set_next_id should succeed");

    let stored = repository.add(draft("Custom")).expect("add should succeed");
    assert_eq!(stored.id(), TaskId::new(42));
    assert_eq!(repository.next_id().expect("counter"), TaskId::new(43));
}

#[rstest]
fn load_clears_existing_entries(repository: InMemoryTaskRepository) {
    repository.add(draft("Stale")).expect("add should succeed");
    repository
        .load(vec![persisted(7, "Restored")])
        .expect("load should succeed");

    assert!(repository.get(TaskId::new(1)).expect("get").is_none());
    let tasks = repository.list_all().expect("list should succeed");
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks.first().map(Task::id), Some(TaskId::new(7)));
}

#[rstest]
fn instances_do_not_share_state() {
    let first = InMemoryTaskRepository::new();
    let second = InMemoryTaskRepository::new();

    first.add(draft("Mine")).expect("add should succeed");

    assert_eq!(second.next_id().expect("counter"), TaskId::new(1));
    assert!(second.list_all().expect("list should succeed").is_empty());
}
