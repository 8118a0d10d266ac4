//! Simulation loop: gradient oracle, driver, and quantile recording
//!
//! The driver owns every stateful component of a run (the optimizer, which
//! in turn owns the parameter population, the oracle constants, the
//! learning rate schedule, the quantile recorder, and the seeded random
//! generator) and advances them strictly sequentially, one iteration at a
//! time.

mod driver;
mod oracle;
mod recorder;

pub use driver::Simulation;
pub use oracle::GradientOracle;
pub use recorder::{quantile, QuantileRecorder};
