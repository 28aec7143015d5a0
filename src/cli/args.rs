use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::types::TaskGroup;

#[derive(Parser, Debug)]
#[command(
    name = "lazyvault",
    version,
    about = "Back up and restore lazy configuration, user data and logs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory holding the application data and task files
    #[arg(long, global = true, env = "LAZYVAULT_BASE_DIR")]
    pub base_dir: Option<PathBuf>,
    /// Home directory used to resolve log sources
    #[arg(long, global = true)]
    pub home: Option<PathBuf>,
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    Backup(BackupArgs),
    Restore(RestoreArgs),
    Inspect(InspectArgs),
    Init(InitArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct BackupArgs {
    /// Task group(s) to run: app, user or log; all groups when omitted
    #[arg(long = "group", short = 'g')]
    pub groups: Vec<TaskGroup>,
    /// Directory the archives are written to (defaults to the home directory)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct RestoreArgs {
    #[arg(required = true)]
    pub archives: Vec<PathBuf>,
    /// Also restore the task definition files
    #[arg(long)]
    pub force: bool,
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    pub archive: PathBuf,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite existing task files
    #[arg(long)]
    pub force: bool,
}
