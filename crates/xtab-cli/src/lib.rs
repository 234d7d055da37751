//! Startup script management for the evcxr REPL
//!
//! The `xtab` binary installs a startup script into an evcxr profile so
//! that every REPL session has the tabulation helpers in scope, and
//! removes it again on request. The binary itself is a thin wrapper over
//! [`router::route`]; the modules here are exposed so integration tests
//! can drive the commands against a temporary home directory.

pub mod args;
pub mod commands;
pub mod console;
pub mod router;
pub mod startup;
pub mod template;

pub use args::{Cli, Commands};
