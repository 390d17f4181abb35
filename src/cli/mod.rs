pub mod output;
pub mod show;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use show::{process_show_command, ShowCommand};
use tracing::level_filters::LevelFilter;

use crate::utils::{
    dir::{create_application_default_path, ensure_dir},
    logging::{enable_logging, CLI_PREFIX},
};

#[derive(Parser, Debug)]
#[command(name = "Timetable", version, long_about = None)]
#[command(about = "Groups time tracking reports into a per-day time table", long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
    #[arg(long, help = "Print logs to stderr")]
    log: bool,
    #[arg(
        long,
        help = "Application directory used for logs. By default tries to save into $XDG_STATE_HOME or $HOME/.local/state"
    )]
    dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
enum Commands {
    #[command(about = "Display report entries grouped by day")]
    Show {
        #[command(flatten)]
        command: ShowCommand,
    },
}

pub async fn run_cli() -> Result<()> {
    let args = Args::parse();

    let logging_level = if args.log {
        Some(LevelFilter::TRACE)
    } else {
        None
    };
    let app_dir = args.dir.map_or_else(create_application_default_path, ensure_dir)?;
    enable_logging(CLI_PREFIX, &app_dir, logging_level, args.log)?;

    match args.commands {
        Commands::Show { command } => process_show_command(command).await,
    }
}
