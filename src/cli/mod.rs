use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::backup::BackupContext;
use crate::cli::args::{Cli, Command};
use crate::cli::commands::{backup, exit_for_error, init, inspect, restore};

const DATA_SUBDIR: &str = "lazy/data";

pub mod args;
pub mod commands;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = resolve_context(&cli)?;
    let outcome = match &cli.command {
        Command::Backup(args) => backup::run_backup_command(&ctx, args),
        Command::Restore(args) => restore::run_restore_command(&ctx, args),
        Command::Inspect(args) => inspect::run_inspect_command(args),
        Command::Init(args) => init::run_init_command(&ctx, args),
    };
    if let Err(err) = outcome {
        exit_for_error(&err);
    }
    Ok(())
}

fn resolve_context(cli: &Cli) -> Result<BackupContext> {
    let home_dir = match &cli.home {
        Some(home) => home.clone(),
        None => dirs::home_dir().ok_or_else(|| anyhow!("cannot determine home directory"))?,
    };
    let base_dir = match &cli.base_dir {
        Some(base) => base.clone(),
        None => dirs::data_dir()
            .map(|dir| dir.join(DATA_SUBDIR))
            .unwrap_or_else(|| PathBuf::from(DATA_SUBDIR)),
    };
    let base_dir = std::path::absolute(&base_dir)?;
    Ok(BackupContext { base_dir, home_dir })
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
