//! Domain-focused tests for task values and validated scalars.

use crate::task::domain::{
    ParseTaskIdError, PersistedTaskData, Task, TaskDomainError, TaskId, TaskTitle,
};
use chrono::{DateTime, TimeZone, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

#[fixture]
fn clock() -> DefaultClock {
    DefaultClock
}

fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

fn persisted_task(id: u64, title: &str, completed: bool) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        title: TaskTitle::new(title).expect("valid title"),
        description: Some("weekly errand".to_owned()),
        completed,
        created_at: fixed_timestamp(),
    })
}

#[rstest]
fn title_accepts_valid_values() {
    let title = TaskTitle::new("Buy milk").expect("valid title");
    assert_eq!(title.as_str(), "Buy milk");
}

#[rstest]
fn title_is_stored_in_trimmed_form() {
    let title = TaskTitle::new("  Buy milk \t").expect("valid title");
    assert_eq!(title.as_str(), "Buy milk");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn title_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(TaskTitle::new(raw), Err(TaskDomainError::EmptyTitle));
}

#[rstest]
fn title_accepts_the_maximum_length() {
    let raw = "x".repeat(TaskTitle::MAX_LENGTH);
    let title = TaskTitle::new(raw.clone()).expect("200 characters are permitted");
    assert_eq!(title.as_str(), raw);
}

#[rstest]
fn title_rejects_values_over_the_maximum_length() {
    let raw = "x".repeat(TaskTitle::MAX_LENGTH + 1);
    assert_eq!(
        TaskTitle::new(raw),
        Err(TaskDomainError::TitleTooLong {
            max: TaskTitle::MAX_LENGTH
        })
    );
}

#[rstest]
fn title_length_is_checked_after_trimming() {
    let raw = format!("   {}   ", "x".repeat(TaskTitle::MAX_LENGTH));
    let title = TaskTitle::new(raw).expect("surrounding whitespace does not count");
    assert_eq!(title.as_str().chars().count(), TaskTitle::MAX_LENGTH);
}

#[rstest]
fn new_task_is_an_incomplete_draft(clock: DefaultClock) {
    let title = TaskTitle::new("Write tests").expect("valid title");
    let task = Task::new(title, Some("unit level".to_owned()), &clock);

    assert_eq!(task.id(), TaskId::PLACEHOLDER);
    assert_eq!(task.title().as_str(), "Write tests");
    assert_eq!(task.description(), Some("unit level"));
    assert!(!task.completed());
}

#[rstest]
fn with_completed_replaces_only_the_flag() {
    let task = persisted_task(3, "Water plants", false);
    let completed = task.clone().with_completed(true);

    assert!(completed.completed());
    assert_eq!(completed.id(), task.id());
    assert_eq!(completed.title(), task.title());
    assert_eq!(completed.description(), task.description());
    assert_eq!(completed.created_at(), task.created_at());
}

#[rstest]
fn with_title_preserves_identity_and_timestamps() {
    let task = persisted_task(9, "Old title", true);
    let renamed = task
        .clone()
        .with_title(TaskTitle::new("New title").expect("valid title"));

    assert_eq!(renamed.title().as_str(), "New title");
    assert_eq!(renamed.id(), task.id());
    assert_eq!(renamed.completed(), task.completed());
    assert_eq!(renamed.created_at(), task.created_at());
}

#[rstest]
#[case("42", 42)]
#[case(" 7 ", 7)]
#[case("0", 0)]
fn task_id_parse_accepts_integers(#[case] raw: &str, #[case] expected: u64) {
    assert_eq!(TaskId::parse(raw), Ok(TaskId::new(expected)));
}

#[rstest]
#[case("abc")]
#[case("-1")]
#[case("1.5")]
#[case("")]
fn task_id_parse_rejects_non_integers(#[case] raw: &str) {
    assert_eq!(TaskId::parse(raw), Err(ParseTaskIdError(raw.to_owned())));
}

#[rstest]
fn error_messages_are_user_facing_one_liners() {
    assert_eq!(
        TaskDomainError::EmptyTitle.to_string(),
        "Title cannot be empty"
    );
    assert_eq!(
        TaskDomainError::TitleTooLong { max: 200 }.to_string(),
        "Title too long (max 200 characters)"
    );
    assert_eq!(
        ParseTaskIdError("abc".to_owned()).to_string(),
        "ID must be a number"
    );
}
