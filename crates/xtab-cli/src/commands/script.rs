//! Startup script management commands

use crate::console::CLIConsole;
use crate::startup::ShellDirs;
use crate::template;
use anyhow::{Context, bail};
use std::fs;
use tracing::info;

/// Create the startup script in the profile's startup directory
pub fn init(
    dirs: &ShellDirs,
    filename: &str,
    profile_name: &str,
    noisy: bool,
    overwrite: bool,
) -> anyhow::Result<()> {
    let console = CLIConsole::new();

    let startup_dir = dirs.profile_dir(profile_name).join("startup");
    if !startup_dir.is_dir() {
        console.info(&format!(
            "Creating startup directory {}",
            startup_dir.display()
        ));
        dirs.ensure_startup_dir(profile_name)?;
    }
    let script_path = startup_dir.join(filename);

    // Render failures surface even when the target file already exists.
    let script = template::render_startup_script(noisy)?;

    if script_path.exists() {
        if !overwrite {
            console.info("Use --overwrite to replace the existing file");
            bail!("File {} already exists.", script_path.display());
        }
        console.warn(&format!("Overwriting {}", script_path.display()));
    }

    fs::write(&script_path, script)
        .with_context(|| format!("could not write {}", script_path.display()))?;
    info!("wrote startup script {}", script_path.display());

    console.success(&format!("Created file {filename:?} in {startup_dir:?}"));
    Ok(())
}

/// Remove the startup script from the profile's startup directory
pub fn delete(dirs: &ShellDirs, filename: &str, profile_name: &str) -> anyhow::Result<()> {
    let console = CLIConsole::new();

    let startup_dir = dirs.startup_dir(profile_name)?;
    let script_path = startup_dir.join(filename);
    fs::remove_file(&script_path)
        .with_context(|| format!("could not delete {}", script_path.display()))?;
    info!("removed startup script {}", script_path.display());

    console.success(&format!(
        "File {:?} deleted from {}.",
        filename,
        startup_dir.display()
    ));
    Ok(())
}
