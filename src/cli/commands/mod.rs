//! CLI command implementations

mod info;
mod plot;
mod run;

use crate::cli::LogLevel;
use crate::config::{Cli, Command};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    // Configure output based on verbose/quiet flags
    let log_level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };

    match cli.command {
        Command::Run(args) => run::run_simulation(args, log_level),
        Command::Plot(args) => plot::run_plot(args, log_level),
        Command::Info(args) => info::run_info(args, log_level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_args;

    #[test]
    fn test_dry_run_succeeds_quietly() {
        let cli = parse_args(["simular", "run", "--dry-run", "--quiet"]).unwrap();
        assert!(run_command(cli).is_ok());
    }

    #[test]
    fn test_dry_run_surfaces_config_errors() {
        let cli = parse_args(["simular", "run", "--dry-run", "-q", "--algo", "sgd"]).unwrap();
        let err = run_command(cli).unwrap_err();
        assert!(err.contains("Unknown optimizer"));
    }

    #[test]
    fn test_info_on_missing_file_fails() {
        let cli = parse_args(["simular", "info", "/nonexistent/record.json", "-q"]).unwrap();
        assert!(run_command(cli).is_err());
    }
}
