//! CLI types - Cli, Command, and per-command argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::SimSpec;

/// Simular: Noisy-Gradient Optimizer Simulation
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "simular")]
#[command(version)]
#[command(about = "Simulate stochastic optimization under a synthetic noisy-gradient oracle")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Run a simulation and save its quantile record
    Run(RunArgs),

    /// Render saved records as terminal charts
    Plot(PlotArgs),

    /// Display information about a saved record
    Info(InfoArgs),
}

/// Arguments for the run command
///
/// Every option overrides the loaded (or default) spec, so flags compose
/// with `--config` the way they compose with the built-in defaults.
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Path to a YAML spec file (defaults apply when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Optimizer variant: adam | amsgrad | adopt
    #[arg(long, value_name = "ALGO")]
    pub algo: Option<String>,

    /// Base learning rate
    #[arg(long, value_name = "LR")]
    pub lr: Option<f64>,

    /// Second-moment decay constant
    #[arg(long, value_name = "B2")]
    pub beta2: Option<f64>,

    /// Noise constant k controlling gradient magnitude and sparsity
    #[arg(long, value_name = "K")]
    pub noise: Option<f64>,

    /// Number of iterations
    #[arg(long, value_name = "T")]
    pub steps: Option<usize>,

    /// Number of independent parameter samples
    #[arg(long, value_name = "N")]
    pub samples: Option<usize>,

    /// Initial parameter value, broadcast to all samples
    #[arg(long, value_name = "P")]
    pub init: Option<f64>,

    /// Steps between quantile checkpoints
    #[arg(long, value_name = "I")]
    pub interval: Option<usize>,

    /// Random seed
    #[arg(long, value_name = "S")]
    pub seed: Option<u64>,

    /// Output file path
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Validate and print the spec without simulating
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the plot command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct PlotArgs {
    /// Record files to render, one chart each
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Chart width in columns
    #[arg(long, default_value_t = 72)]
    pub width: usize,

    /// Chart height in rows
    #[arg(long, default_value_t = 16)]
    pub height: usize,
}

/// Arguments for the info command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InfoArgs {
    /// Record file to inspect
    #[arg(value_name = "PATH")]
    pub path: PathBuf,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a SimSpec
pub fn apply_overrides(spec: &mut SimSpec, args: &RunArgs) {
    if let Some(algo) = &args.algo {
        spec.algo = algo.clone();
    }
    if let Some(lr) = args.lr {
        spec.lr = lr;
    }
    if let Some(beta2) = args.beta2 {
        spec.beta2 = beta2;
    }
    if let Some(noise) = args.noise {
        spec.noise = noise;
    }
    if let Some(steps) = args.steps {
        spec.steps = steps;
    }
    if let Some(samples) = args.samples {
        spec.samples = samples;
    }
    if let Some(init) = args.init {
        spec.init = init;
    }
    if let Some(interval) = args.interval {
        spec.interval = interval;
    }
    if let Some(seed) = args.seed {
        spec.seed = seed;
    }
    if let Some(output) = &args.output {
        spec.output = output.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_flags() {
        let cli = parse_args(["simular", "run", "--algo", "adopt", "--noise", "50", "--seed", "7"])
            .unwrap();
        match cli.command {
            Command::Run(args) => {
                assert_eq!(args.algo.as_deref(), Some("adopt"));
                assert_eq!(args.noise, Some(50.0));
                assert_eq!(args.seed, Some(7));
                assert_eq!(args.lr, None);
                assert!(!args.dry_run);
            }
            other => panic!("expected run, got {other:?}"),
        }
    }

    #[test]
    fn test_overrides_merge_into_spec() {
        let cli = parse_args(["simular", "run", "--beta2", "0.1", "--output", "k50.json"]).unwrap();
        let Command::Run(args) = cli.command else { panic!("expected run") };

        let mut spec = SimSpec::default();
        apply_overrides(&mut spec, &args);

        assert_eq!(spec.beta2, 0.1);
        assert_eq!(spec.output, PathBuf::from("k50.json"));
        // Untouched fields keep their defaults.
        assert_eq!(spec.algo, "adam");
        assert_eq!(spec.steps, 2_000_000);
    }

    #[test]
    fn test_plot_requires_a_path() {
        assert!(parse_args(["simular", "plot"]).is_err());

        let cli = parse_args(["simular", "plot", "a.json", "b.json"]).unwrap();
        let Command::Plot(args) = cli.command else { panic!("expected plot") };
        assert_eq!(args.paths.len(), 2);
        assert_eq!(args.width, 72);
    }

    #[test]
    fn test_global_flags() {
        let cli = parse_args(["simular", "info", "out.json", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(!cli.quiet);
    }
}
