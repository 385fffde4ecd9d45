use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use batchpick::config::Config;
use batchpick::gui::{LaunchMode, run_gui};

mod cli;

#[derive(Parser)]
#[command(name = "batchpick")]
#[command(about = "Pick which data batches go into a merge")]
#[command(version)]
struct Cli {
    /// Folder containing the batch folders (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Path to the config file (defaults to ~/.batchpick/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the launcher window (default)
    Gui,

    /// Show only the selection dialog and print the chosen batches
    Select {
        /// Print the selection as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// List the batches found in the batch folder
    List {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `select` output stays pipeable
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Some(Commands::Init { force }) => {
            cli::init::init_command(cli.config, force)?;
        }
        Some(Commands::List { json }) => {
            let config = Config::resolve(cli.config.as_deref())?;
            cli::list::list_command(&work_dir, &config, json)?;
        }
        Some(Commands::Select { json }) => {
            let config = Config::resolve(cli.config.as_deref())?;
            cli::select::select_command(&work_dir, config, json)?;
        }
        Some(Commands::Gui) | None => {
            let config = Config::resolve(cli.config.as_deref())?;
            run_gui(work_dir, config, LaunchMode::Browse)?;
        }
    }

    Ok(())
}
