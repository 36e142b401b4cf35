//! FlowDesk command-line front end.
//!
//! Drives the core data store against an on-disk SQLite key-value file so
//! edits survive between invocations, mirroring the browser demo session.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use flowdesk_core::{
    core_version, current_user, default_log_level, init_logging, is_assigned_to_current_user,
    DataStore, SqliteKeyValueStorage, StoreConfig, TaskPatch, TaskStatus,
};
use std::path::PathBuf;

const DEFAULT_DB_FILE_NAME: &str = "flowdesk.sqlite3";

#[derive(Debug, Parser)]
#[command(name = "flowdesk", version, about = "FlowDesk demo data store")]
struct Cli {
    /// SQLite file holding the persisted snapshot; overrides `FLOWDESK_DB_PATH`.
    #[arg(long)]
    db: Option<PathBuf>,

    /// Key the snapshot is stored under; overrides `FLOWDESK_STORAGE_KEY`.
    #[arg(long)]
    storage_key: Option<String>,

    /// trace|debug|info|warn|error
    #[arg(long, env = "FLOWDESK_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rotating log files; logging is off without it.
    #[arg(long, env = "FLOWDESK_LOG_DIR")]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the whole snapshot as JSON.
    Export,
    /// Discard local edits and restore the seed data.
    Reset,
    /// Show the current user.
    Whoami,
    Projects,
    Clients,
    Tasks {
        /// Only tasks assigned to the current user.
        #[arg(long)]
        mine: bool,
        #[arg(long)]
        project: Option<String>,
    },
    /// Move a task to a new status.
    SetTaskStatus { id: String, status: StatusArg },
    /// Delete a project and its tasks.
    DeleteProject { id: String },
    Revenue,
    Version,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatusArg {
    Todo,
    InProgress,
    Done,
}

impl From<StatusArg> for TaskStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Todo => TaskStatus::Todo,
            StatusArg::InProgress => TaskStatus::InProgress,
            StatusArg::Done => TaskStatus::Done,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_ref() {
        let level = cli
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().as_str().to_string());
        init_logging(&level, log_dir).map_err(|err| anyhow!(err))?;
    }

    let config = build_config(&cli, StoreConfig::from_env());
    let mut store = DataStore::open(&config)
        .with_context(|| format!("failed to open storage at {:?}", config.db_path))?;

    run(cli.command, &mut store)
}

/// Layers command-line flags over `base` (defaults plus environment).
fn build_config(cli: &Cli, mut config: StoreConfig) -> StoreConfig {
    if let Some(key) = cli.storage_key.as_ref() {
        config.storage_key = key.clone();
    }
    config.db_path = Some(
        cli.db
            .clone()
            .or(config.db_path)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE_NAME)),
    );
    config
}

fn run(command: Command, store: &mut DataStore<SqliteKeyValueStorage>) -> Result<()> {
    match command {
        Command::Export => println!("{}", store.export_data()?),
        Command::Reset => {
            store.reset_to_seed();
            println!("restored seed data");
        }
        Command::Whoami => println!("{}", serde_json_line(&current_user())?),
        Command::Projects => {
            for project in store.projects().list() {
                println!(
                    "{}\t{:?}\t{}%\t{}",
                    project.id, project.status, project.progress, project.title
                );
            }
        }
        Command::Clients => {
            for client in store.clients().list() {
                println!("{}\t{:?}\t{}", client.id, client.status, client.name);
            }
        }
        Command::Tasks { mine, project } => {
            let mut tasks = store.tasks();
            let listed = match project.as_deref() {
                Some(project_id) => tasks.for_project(project_id),
                None => tasks.list().iter().collect(),
            };
            for task in listed
                .into_iter()
                .filter(|task| !mine || is_assigned_to_current_user(task))
            {
                println!(
                    "{}\t{}\t{}\t{}",
                    task.id,
                    task.status.as_str(),
                    task.priority.as_str(),
                    task.title
                );
            }
        }
        Command::SetTaskStatus { id, status } => {
            let task = store
                .tasks()
                .update(&id, TaskPatch::status(status.into()))
                .ok_or_else(|| anyhow!("task not found: {id}"))?;
            println!("{}", serde_json_line(&task)?);
        }
        Command::DeleteProject { id } => {
            if !store.projects().delete(&id) {
                return Err(anyhow!("project not found: {id}"));
            }
            println!("deleted project {id}");
        }
        Command::Revenue => println!("{}", serde_json_line(store.revenue().get())?),
        Command::Version => println!("flowdesk_core version={}", core_version()),
    }

    if let Some(err) = store.last_persist_error() {
        log::warn!("event=cli_persist module=cli status=error error={err}");
    }
    Ok(())
}

fn serde_json_line<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}
