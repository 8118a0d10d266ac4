//! CLI module for simular
//!
//! Command handlers and output gating for the binary entry point.

mod commands;
mod logging;

pub use commands::run_command;
pub use logging::LogLevel;

pub use crate::config::Cli;
