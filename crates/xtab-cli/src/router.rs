//! Command routing logic for CLI

use crate::args::{Cli, Commands};
use crate::commands;
use crate::startup::ShellDirs;
use anyhow::Context;
use clap::CommandFactory;

/// Route CLI commands to their respective handlers
pub fn route(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // Bare invocation prints usage and succeeds.
        Cli::command()
            .print_help()
            .context("could not print help")?;
        return Ok(());
    };

    // Every subcommand works inside the REPL home; locate it up front so a
    // missing installation is reported once, with the install hint.
    let dirs = ShellDirs::discover()?;

    match command {
        Commands::Init {
            filename,
            profile_name,
            noisy,
            overwrite,
        } => commands::script::init(&dirs, &filename, &profile_name, noisy, overwrite),
        Commands::Delete {
            filename,
            profile_name,
        } => commands::script::delete(&dirs, &filename, &profile_name),
    }
}
