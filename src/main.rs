//! Simular CLI
//!
//! Entry point for the noisy-gradient optimizer simulation.
//!
//! # Usage
//!
//! ```bash
//! # Run a simulation with defaults (adam, k=10, 2M steps)
//! simular run
//!
//! # Run with overrides
//! simular run --algo adopt --noise 50 --beta2 0.1 --output adopt_k50.json
//!
//! # Run from a YAML spec
//! simular run --config sweep.yaml --seed 7
//!
//! # Plot saved results in the terminal
//! simular plot adam_k10.json adopt_k10.json
//!
//! # Inspect a result file
//! simular info adam_k10.json
//! ```

use clap::Parser;
use simular::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
