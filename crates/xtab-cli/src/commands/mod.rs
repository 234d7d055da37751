//! CLI command implementations

pub mod script;
