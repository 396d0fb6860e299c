//! Output rendering for the interactive prompt.
//!
//! Every user-visible line goes through an injected writer, so sessions are
//! fully assertable in tests and the core never touches stdout directly.

use std::fmt;
use std::io::{self, Write};

use crate::task::domain::{Task, TaskId};

/// Column width for the identifier column of the task table.
const ID_WIDTH: usize = 4;
/// Column width for the status column of the task table.
const STATUS_WIDTH: usize = 8;
/// Column width for the title column; longer titles are truncated.
const TITLE_WIDTH: usize = 50;

/// Renders task data and messages onto a writer.
#[derive(Debug)]
pub struct Presenter<W: Write> {
    out: W,
}

impl<W: Write> Presenter<W> {
    /// Creates a presenter writing onto `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Consumes the presenter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Writes the welcome banner.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn welcome(&mut self) -> io::Result<()> {
        writeln!(self.out, "Welcome to Aalto!")?;
        writeln!(self.out, "Type 'help' for available commands.")?;
        writeln!(self.out)
    }

    /// Writes the input prompt without a trailing newline and flushes.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "todo> ")?;
        self.out.flush()
    }

    /// Confirms task creation.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn task_created(&mut self, task: &Task) -> io::Result<()> {
        writeln!(self.out, "Task {} created: {}", task.id(), task.title())
    }

    /// Writes the task table with a summary line.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn task_list(&mut self, tasks: &[Task]) -> io::Result<()> {
        writeln!(
            self.out,
            "{:<ID_WIDTH$}  {:<STATUS_WIDTH$}  {:<TITLE_WIDTH$}",
            "ID", "Status", "Title"
        )?;
        writeln!(
            self.out,
            "{}  {}  {}",
            "-".repeat(ID_WIDTH),
            "-".repeat(STATUS_WIDTH),
            "-".repeat(TITLE_WIDTH)
        )?;
        for task in tasks {
            let status = if task.completed() { "[x]" } else { "[ ]" };
            let title: String = task.title().as_str().chars().take(TITLE_WIDTH).collect();
            // Pad the raw number: TaskId's Display ignores width flags.
            writeln!(
                self.out,
                "{:<ID_WIDTH$}  {status:<STATUS_WIDTH$}  {title:<TITLE_WIDTH$}",
                task.id().value()
            )?;
        }
        writeln!(self.out)?;
        let completed = tasks.iter().filter(|task| task.completed()).count();
        writeln!(
            self.out,
            "Total: {} tasks ({completed} completed)",
            tasks.len()
        )
    }

    /// Writes the empty-list hint.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn empty_list(&mut self) -> io::Result<()> {
        writeln!(self.out, "No tasks found. Use 'add <title>' to create one.")
    }

    /// Confirms task completion.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn task_completed(&mut self, task: &Task) -> io::Result<()> {
        writeln!(self.out, "Task {} marked as complete", task.id())
    }

    /// Confirms a completion toggle, naming the resulting status.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn task_toggled(&mut self, task: &Task) -> io::Result<()> {
        let status = if task.completed() {
            "complete"
        } else {
            "incomplete"
        };
        writeln!(self.out, "Task {} marked as {status}", task.id())
    }

    /// Confirms task deletion.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn task_deleted(&mut self, id: TaskId) -> io::Result<()> {
        writeln!(self.out, "Task {id} deleted")
    }

    /// Confirms a title update.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn task_updated(&mut self, task: &Task) -> io::Result<()> {
        writeln!(self.out, "Task {} updated: {}", task.id(), task.title())
    }

    /// Writes the command reference.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn help(&mut self) -> io::Result<()> {
        writeln!(self.out, "Aalto - Available Commands")?;
        writeln!(self.out, "{}", "=".repeat(30))?;
        writeln!(self.out, "  add <title>         Create a new task")?;
        writeln!(self.out, "  list                Show all tasks")?;
        writeln!(self.out, "  done <id>           Mark task as completed")?;
        writeln!(self.out, "  toggle <id>         Toggle task completion status")?;
        writeln!(self.out, "  delete <id>         Remove a task")?;
        writeln!(self.out, "  update <id> <title> Update task title")?;
        writeln!(self.out, "  help                Show this help message")?;
        writeln!(self.out, "  exit                Quit the application")
    }

    /// Writes a one-line error message.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn error(&mut self, err: &impl fmt::Display) -> io::Result<()> {
        writeln!(self.out, "Error: {err}")
    }

    /// Reports an unrecognized command name.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn unknown_command(&mut self, command: &str) -> io::Result<()> {
        writeln!(
            self.out,
            "Unknown command '{command}'. Type 'help' for available commands."
        )
    }

    /// Reports a command invoked without a required argument.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn missing_argument(&mut self, command: &str, argument: &str) -> io::Result<()> {
        writeln!(self.out, "Error: {command} requires {argument}")
    }

    /// Writes the goodbye message.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn goodbye(&mut self) -> io::Result<()> {
        writeln!(self.out, "Goodbye!")
    }

    /// Reports how many tasks were restored from the store file.
    ///
    /// Silent when nothing was loaded.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn tasks_loaded(&mut self, count: usize) -> io::Result<()> {
        if count > 0 {
            writeln!(self.out, "Loaded {count} task(s) from file.")?;
        }
        Ok(())
    }

    /// Reports how many tasks were written to the store file.
    ///
    /// Silent when nothing was saved.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the underlying writer.
    pub fn tasks_saved(&mut self, count: usize) -> io::Result<()> {
        if count > 0 {
            writeln!(self.out, "Saved {count} task(s) to file.")?;
        }
        Ok(())
    }
}
