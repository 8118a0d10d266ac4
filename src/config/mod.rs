//! Configuration: spec schema, validation, CLI types, optimizer builder

mod builder;
mod cli;
mod schema;
mod validate;

pub use builder::build_optimizer;
pub use cli::{apply_overrides, parse_args, Cli, Command, InfoArgs, PlotArgs, RunArgs};
pub use schema::SimSpec;
pub use validate::validate_spec;

use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Load a simulation spec from a YAML file
pub fn load_spec(path: impl AsRef<Path>) -> Result<SimSpec> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!("Failed to read config file {}: {e}", path.display()))
    })?;

    let spec: SimSpec = serde_yaml::from_str(&content)
        .map_err(|e| Error::ConfigError(format!("Failed to parse YAML config: {e}")))?;

    Ok(spec)
}
