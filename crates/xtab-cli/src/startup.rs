//! evcxr home and profile directory layout
//!
//! Startup scripts live at `<home>/profile_<name>/startup/<file>`. The home
//! is the `EVCXR_HOME` environment variable when set, otherwise `evcxr`
//! under the platform configuration directory.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Environment variable overriding where the evcxr home is looked up.
pub const EVCXR_HOME_ENV: &str = "EVCXR_HOME";

/// Result alias for startup directory operations
pub type StartupResult<T> = Result<T, StartupError>;

/// Errors locating or preparing startup directories
#[derive(Debug, Error)]
pub enum StartupError {
    /// The REPL this CLI manages scripts for is not installed
    #[error(
        "evcxr home not found at {}. The xtab CLI manages startup scripts inside an \
         existing evcxr installation. You can `cargo install evcxr_repl` and run it \
         once, or set EVCXR_HOME to point at its home directory.",
        .path.display()
    )]
    NotInstalled { path: PathBuf },

    /// No platform configuration directory to derive the home from
    #[error("could not determine a configuration directory for this platform")]
    NoConfigDir,

    /// The named profile directory does not exist
    #[error("profile {name:?} not found at {}", .path.display())]
    ProfileNotFound { name: String, path: PathBuf },

    /// Creating a startup directory failed
    #[error("could not create startup directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Resolved evcxr home directory
#[derive(Debug, Clone)]
pub struct ShellDirs {
    home: PathBuf,
}

impl ShellDirs {
    /// Locate the evcxr home, failing when the directory does not exist
    pub fn discover() -> StartupResult<Self> {
        let home = match std::env::var_os(EVCXR_HOME_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => dirs::config_dir()
                .ok_or(StartupError::NoConfigDir)?
                .join("evcxr"),
        };
        if !home.is_dir() {
            return Err(StartupError::NotInstalled { path: home });
        }
        debug!("using evcxr home {}", home.display());
        Ok(Self { home })
    }

    /// Use `home` directly, without an existence check
    pub fn at(home: impl Into<PathBuf>) -> Self {
        Self { home: home.into() }
    }

    /// The resolved home directory
    pub fn home(&self) -> &Path {
        &self.home
    }

    /// Directory of the named profile
    pub fn profile_dir(&self, profile_name: &str) -> PathBuf {
        self.home.join(format!("profile_{profile_name}"))
    }

    /// Startup directory of an existing profile. The profile directory must
    /// exist; the startup subdirectory need not.
    pub fn startup_dir(&self, profile_name: &str) -> StartupResult<PathBuf> {
        let profile = self.profile_dir(profile_name);
        if !profile.is_dir() {
            return Err(StartupError::ProfileNotFound {
                name: profile_name.to_string(),
                path: profile,
            });
        }
        Ok(profile.join("startup"))
    }

    /// Startup directory of a profile, created along with the profile when
    /// missing
    pub fn ensure_startup_dir(&self, profile_name: &str) -> StartupResult<PathBuf> {
        let dir = self.profile_dir(profile_name).join("startup");
        std::fs::create_dir_all(&dir).map_err(|source| StartupError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        Ok(dir)
    }
}
