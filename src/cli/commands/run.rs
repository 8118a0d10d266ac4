//! Run command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{apply_overrides, load_spec, RunArgs, SimSpec};
use crate::io::save_record;
use crate::sim::Simulation;

pub fn run_simulation(args: RunArgs, level: LogLevel) -> Result<(), String> {
    let mut spec = match &args.config {
        Some(path) => load_spec(path).map_err(|e| format!("Config error: {e}"))?,
        None => SimSpec::default(),
    };

    // Apply command-line overrides
    apply_overrides(&mut spec, &args);

    log(
        level,
        LogLevel::Normal,
        &format!("Simular: {} for {} steps (k={})", spec.algo, spec.steps, spec.noise),
    );
    log(level, LogLevel::Verbose, &format!("  lr: {} (beta2={})", spec.lr, spec.beta2));
    log(
        level,
        LogLevel::Verbose,
        &format!("  samples: {} (init={})", spec.samples, spec.init),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!("  interval: {} (seed={})", spec.interval, spec.seed),
    );
    log(level, LogLevel::Verbose, &format!("  output: {}", spec.output.display()));

    // Validates the spec and the optimizer name in one place
    let sim = Simulation::from_spec(&spec).map_err(|e| format!("Config error: {e}"))?;

    if args.dry_run {
        log(level, LogLevel::Normal, "Dry run - spec validated successfully");
        return Ok(());
    }

    let record = sim.run();
    log(level, LogLevel::Normal, &format!("✓ {} checkpoints recorded", record.len()));

    save_record(&record, &spec.output).map_err(|e| format!("Save error: {e}"))?;
    log(
        level,
        LogLevel::Normal,
        &format!("✓ Record saved to {}", spec.output.display()),
    );

    Ok(())
}
