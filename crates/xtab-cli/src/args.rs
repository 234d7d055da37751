//! CLI argument definitions using clap
//!
//! Two subcommands over the evcxr profile layout:
//! - xtab init     # create the startup script
//! - xtab delete   # remove it again

use clap::{Parser, Subcommand};

/// Default startup script file name used across all CLI commands. The
/// numeric prefix controls load order among startup snippets.
pub const DEFAULT_STARTUP_SCRIPT: &str = "50-xtab-init.evcxr";

/// Default REPL profile the script is managed in.
pub const DEFAULT_PROFILE: &str = "default";

#[derive(Parser)]
#[command(name = "xtab")]
#[command(about = "Manage the evcxr startup script for xtab")]
#[command(
    long_about = r#"Manage the evcxr startup script for xtab

USAGE:
  xtab init                      # Create the startup script
  xtab init --noisy              # Script announces itself on REPL start
  xtab init -p work              # Install into the "work" profile
  xtab delete                    # Remove the startup script

The script lives in <evcxr home>/profile_<name>/startup and loads xtab's
tabulation helpers into every REPL session. Set EVCXR_HOME to override
where the evcxr home is looked up.

For detailed help: xtab --help"#
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the startup script for evcxr
    Init {
        /// File name for the startup script
        #[arg(short = 'f', long, default_value = DEFAULT_STARTUP_SCRIPT)]
        filename: String,

        /// The name of the evcxr profile to put the script in
        #[arg(short = 'p', long, default_value = DEFAULT_PROFILE)]
        profile_name: String,

        /// If set, the startup script announces itself when the REPL
        /// starts. By default the script loads silently.
        #[arg(long)]
        noisy: bool,

        /// Overwrite the script file if it already exists
        #[arg(long)]
        overwrite: bool,
    },

    /// Delete the startup script for evcxr
    Delete {
        /// File name of the startup script
        #[arg(short = 'f', long, default_value = DEFAULT_STARTUP_SCRIPT)]
        filename: String,

        /// The name of the evcxr profile to look for the script in
        #[arg(short = 'p', long, default_value = DEFAULT_PROFILE)]
        profile_name: String,
    },
}
