//! Binary entry point for the Aalto interactive task manager.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::warn;
use mockable::{Clock, DefaultClock};

use aalto::repl::{self, presenter::Presenter};
use aalto::task::adapters::json_store::JsonStore;
use aalto::task::adapters::memory::InMemoryTaskRepository;
use aalto::task::ports::TaskRepository;
use aalto::task::services::TaskService;

/// Interactive command-line task manager.
#[derive(Debug, Parser)]
#[command(name = "aalto", version, about)]
struct Cli {
    /// Store file location.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Run without loading or saving the store file.
    #[arg(long)]
    no_persist: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    // The handle keeps the logger alive for the process lifetime; a failed
    // bootstrap must not stop an interactive session.
    let _logger = aalto::logging::init().ok();

    let repository = Arc::new(InMemoryTaskRepository::new());
    let store = (!cli.no_persist)
        .then(|| cli.file.map_or_else(JsonStore::at_default_path, |path| JsonStore::new(path)));

    let mut loaded_count = 0usize;
    if let Some(active) = &store {
        let loaded = active.load();
        if !loaded.tasks.is_empty() {
            loaded_count = loaded.tasks.len();
            if let Err(err) = repository.load(loaded.tasks) {
                warn!("could not seed repository: {err}");
                loaded_count = 0;
            } else if let Err(err) = repository.set_next_id(loaded.next_id) {
                warn!("could not restore id counter: {err}");
            }
        }
    }

    let service = TaskService::new(Arc::clone(&repository), Arc::new(DefaultClock));
    let stdin = io::stdin().lock();
    let mut presenter = Presenter::new(io::stdout().lock());

    match run_session(&service, store.as_ref(), loaded_count, stdin, &mut presenter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("session aborted: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Reports restored tasks, then hands control to the interactive loop.
fn run_session<R, C, I, W>(
    service: &TaskService<R, C>,
    store: Option<&JsonStore>,
    loaded_count: usize,
    input: I,
    presenter: &mut Presenter<W>,
) -> io::Result<()>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
    I: BufRead,
    W: Write,
{
    presenter.tasks_loaded(loaded_count)?;
    repl::run(service, store, input, presenter)
}
