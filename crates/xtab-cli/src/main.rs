//! xtab CLI application
//!
//! Manages the evcxr startup script that loads xtab's tabulation helpers
//! into every REPL session.
//!
//! ```bash
//! xtab init            # Create the startup script (default profile)
//! xtab init --noisy    # Script announces itself when the REPL starts
//! xtab delete          # Remove the startup script
//! ```

use clap::Parser;
use xtab_cli::args::Cli;
use xtab_cli::console::CLIConsole;
use xtab_cli::router;

fn main() {
    // Initialize logging with environment-based filtering
    // Set RUST_LOG=debug for verbose logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    if let Err(err) = router::route(cli) {
        CLIConsole::new().error(&format!("{err:#}"));
        std::process::exit(1);
    }
}
