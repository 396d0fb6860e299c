//! Read-eval-print loop driving the task service.
//!
//! The loop is the single actor of the system: it reads one line, routes it
//! through the service, renders the outcome, and only then reads the next
//! line. Recoverable errors (validation, unknown identifiers, unparsable
//! input) are rendered as one-line messages and never terminate the loop;
//! only writer failures propagate. End of input is treated as an explicit
//! `exit`, taking the same save-and-exit path.

pub mod command;
pub mod presenter;

use std::io::{self, BufRead, Write};

use log::warn;
use mockable::Clock;

use crate::task::{
    adapters::json_store::JsonStore,
    domain::TaskId,
    ports::TaskRepository,
    services::TaskService,
};
use presenter::Presenter;

/// Runs the interactive loop until `exit` or end of input.
///
/// When `store` is present, the session is saved before the loop returns.
///
/// # Errors
///
/// Returns an [`io::Error`] when reading a line or writing output fails.
pub fn run<R, C, I, W>(
    service: &TaskService<R, C>,
    store: Option<&JsonStore>,
    input: I,
    presenter: &mut Presenter<W>,
) -> io::Result<()>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    I: BufRead,
    W: Write,
{
    presenter.welcome()?;
    let mut lines = input.lines();
    loop {
        presenter.prompt()?;
        let Some(entry) = lines.next() else {
            save_session(service, store, presenter)?;
            presenter.goodbye()?;
            return Ok(());
        };
        let line = entry?;
        let Some(parsed) = command::parse(&line) else {
            continue;
        };
        match parsed.name() {
            "add" => handle_add(service, presenter, parsed.args())?,
            "list" | "ls" => handle_list(service, presenter)?,
            "done" | "complete" => handle_done(service, presenter, parsed.args())?,
            "toggle" => handle_toggle(service, presenter, parsed.args())?,
            "delete" | "del" | "rm" => handle_delete(service, presenter, parsed.args())?,
            "update" | "edit" => handle_update(service, presenter, parsed.args())?,
            "help" | "?" => presenter.help()?,
            "exit" | "quit" | "q" => {
                save_session(service, store, presenter)?;
                presenter.goodbye()?;
                return Ok(());
            }
            other => presenter.unknown_command(other)?,
        }
    }
}

/// Parses an identifier argument, rendering the failure when it is not a
/// number.
fn parse_id<W: Write>(raw: &str, presenter: &mut Presenter<W>) -> io::Result<Option<TaskId>> {
    match TaskId::parse(raw) {
        Ok(id) => Ok(Some(id)),
        Err(err) => {
            presenter.error(&err)?;
            Ok(None)
        }
    }
}

fn handle_add<R, C, W>(
    service: &TaskService<R, C>,
    presenter: &mut Presenter<W>,
    args: &[String],
) -> io::Result<()>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    W: Write,
{
    if args.is_empty() {
        return presenter.missing_argument("add", "<title>");
    }
    // Re-join so unquoted multi-word titles work.
    let title = args.join(" ");
    match service.add_task(&title, None) {
        Ok(task) => presenter.task_created(&task),
        Err(err) => presenter.error(&err),
    }
}

fn handle_list<R, C, W>(
    service: &TaskService<R, C>,
    presenter: &mut Presenter<W>,
) -> io::Result<()>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    W: Write,
{
    match service.list_tasks() {
        Ok(tasks) if tasks.is_empty() => presenter.empty_list(),
        Ok(tasks) => presenter.task_list(&tasks),
        Err(err) => presenter.error(&err),
    }
}

fn handle_done<R, C, W>(
    service: &TaskService<R, C>,
    presenter: &mut Presenter<W>,
    args: &[String],
) -> io::Result<()>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    W: Write,
{
    let Some(raw) = args.first() else {
        return presenter.missing_argument("done", "<id>");
    };
    let Some(id) = parse_id(raw, presenter)? else {
        return Ok(());
    };
    match service.complete_task(id) {
        Ok(task) => presenter.task_completed(&task),
        Err(err) => presenter.error(&err),
    }
}

fn handle_toggle<R, C, W>(
    service: &TaskService<R, C>,
    presenter: &mut Presenter<W>,
    args: &[String],
) -> io::Result<()>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    W: Write,
{
    let Some(raw) = args.first() else {
        return presenter.missing_argument("toggle", "<id>");
    };
    let Some(id) = parse_id(raw, presenter)? else {
        return Ok(());
    };
    match service.toggle_task(id) {
        Ok(task) => presenter.task_toggled(&task),
        Err(err) => presenter.error(&err),
    }
}

fn handle_delete<R, C, W>(
    service: &TaskService<R, C>,
    presenter: &mut Presenter<W>,
    args: &[String],
) -> io::Result<()>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    W: Write,
{
    let Some(raw) = args.first() else {
        return presenter.missing_argument("delete", "<id>");
    };
    let Some(id) = parse_id(raw, presenter)? else {
        return Ok(());
    };
    match service.delete_task(id) {
        Ok(_) => presenter.task_deleted(id),
        Err(err) => presenter.error(&err),
    }
}

fn handle_update<R, C, W>(
    service: &TaskService<R, C>,
    presenter: &mut Presenter<W>,
    args: &[String],
) -> io::Result<()>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    W: Write,
{
    if args.len() < 2 {
        return presenter.missing_argument("update", "<id> <title>");
    }
    let Some((raw_id, rest)) = args.split_first() else {
        return Ok(());
    };
    let Some(id) = parse_id(raw_id, presenter)? else {
        return Ok(());
    };
    let new_title = rest.join(" ");
    match service.update_task(id, &new_title) {
        Ok(task) => presenter.task_updated(&task),
        Err(err) => presenter.error(&err),
    }
}

/// Saves the current session through the store, if one is configured.
///
/// Save problems degrade to a logged warning; the exit path never fails on
/// persistence.
fn save_session<R, C, W>(
    service: &TaskService<R, C>,
    store: Option<&JsonStore>,
    presenter: &mut Presenter<W>,
) -> io::Result<()>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    W: Write,
{
    let Some(active) = store else {
        return Ok(());
    };
    let tasks = match service.list_tasks() {
        Ok(tasks) => tasks,
        Err(err) => {
            warn!("skipping save: {err}");
            return Ok(());
        }
    };
    let next_id = match service.repository().next_id() {
        Ok(next_id) => next_id,
        Err(err) => {
            warn!("skipping save: {err}");
            return Ok(());
        }
    };
    if active.save(&tasks, next_id) {
        presenter.tasks_saved(tasks.len())?;
    }
    Ok(())
}
