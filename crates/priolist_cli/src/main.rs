//! Command-line view layer for Prio-List.
//!
//! # Responsibility
//! - Resolve config, start logging and open the SQLite-backed store.
//! - Hand the parsed command to `commands::execute` and print results.

use anyhow::{Context, Result};
use clap::Parser;
use priolist_core::db::open_db;
use priolist_core::{
    core_version, init_logging, today_local, AppConfig, ProjectStore, SqliteKeyValueStore,
    TaskService,
};

mod commands;

use commands::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve_config(AppConfig::from_env())?;

    std::fs::create_dir_all(&config.data_dir).with_context(|| {
        format!(
            "failed to create data directory `{}`",
            config.data_dir.display()
        )
    })?;
    start_logging(&config);

    let conn = open_db(config.db_path())
        .with_context(|| format!("failed to open `{}`", config.db_path().display()))?;
    let backend = SqliteKeyValueStore::try_new(&conn)?;
    let service = TaskService::new(ProjectStore::with_key(backend, config.storage_key.clone()));
    service.seed_if_empty(today_local())?;

    commands::execute(cli.command, &service)
}

fn start_logging(config: &AppConfig) {
    let log_dir = config.log_dir();
    let log_dir = if log_dir.is_absolute() {
        log_dir
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(log_dir),
            Err(_) => return,
        }
    };
    if let Err(err) = init_logging(&config.log_level, &log_dir) {
        eprintln!("warning: logging disabled: {err}");
        return;
    }
    log::info!(
        "event=cli_start module=cli status=ok core_version={}",
        core_version()
    );
}
