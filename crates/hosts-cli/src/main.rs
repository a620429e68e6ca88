//! hosts-manager CLI
//!
//! Manages named hostgroups and merges the active ones into a hosts file.

mod cli;
mod commands;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use hosts_ops::{ExternalEditor, GroupStore, UnifiedDiffer};

use cli::{Cli, Commands};
use error::Result;
use interactive::TerminalPrompt;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so `show` output stays clean
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    if cli.command == Commands::Version {
        println!("hosts-manager v{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut store = GroupStore::open(cli.config.as_deref())?;
    execute_command(cli.command, &mut store)?;

    if store.save_if_dirty()? {
        tracing::debug!(path = ?store.path(), "Group store saved");
    }
    Ok(())
}

fn execute_command(cmd: Commands, store: &mut GroupStore) -> Result<()> {
    match cmd {
        Commands::Version => Ok(()),
        Commands::List => commands::run_list(store),
        Commands::New { name } => {
            let editor = ExternalEditor::from_env()?;
            commands::run_new(store, &name, &editor, &TerminalPrompt)
        }
        Commands::Edit { name } => {
            let editor = ExternalEditor::from_env()?;
            commands::run_edit(store, &name, &editor, &TerminalPrompt)
        }
        Commands::Remove { names } => commands::run_remove(store, &names),
        Commands::Show { names } => commands::run_show(store, &names),
        Commands::Activate { names } => commands::run_activate(store, &names),
        Commands::Deactivate { names } => commands::run_deactivate(store, &names),
        Commands::Apply { hostsfile, dry_run } => {
            commands::run_apply(store, &hostsfile, dry_run, &UnifiedDiffer::default())
        }
    }
}
