//! Simulation driver: the iteration loop

use super::{GradientOracle, QuantileRecorder};
use crate::config::{build_optimizer, validate_spec, SimSpec};
use crate::io::SummaryRecord;
use crate::optim::{LRScheduler, Optimizer, SqrtDecayLR};
use crate::Result;
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// One configured simulation run
///
/// Owns every stateful piece: the optimizer (and through it the parameter
/// population), the oracle, the learning rate schedule, the recorder, and
/// the seeded generator. A run is a pure function of its spec: the same
/// spec and seed produce a bit-identical record.
///
/// # Example
///
/// ```
/// use simular::config::SimSpec;
/// use simular::sim::Simulation;
///
/// let spec = SimSpec { steps: 2000, samples: 8, ..SimSpec::default() };
/// let record = Simulation::from_spec(&spec).unwrap().run();
/// assert_eq!(record.len(), 2); // checkpoints at steps 1000 and 2000
/// ```
pub struct Simulation {
    optimizer: Optimizer,
    oracle: GradientOracle,
    schedule: SqrtDecayLR,
    recorder: QuantileRecorder,
    rng: StdRng,
    steps: usize,
    completed: usize,
}

impl Simulation {
    /// Validate the spec and assemble a run
    pub fn from_spec(spec: &SimSpec) -> Result<Self> {
        validate_spec(spec)?;
        Ok(Self {
            optimizer: build_optimizer(spec)?,
            oracle: GradientOracle::new(spec.noise, spec.samples),
            schedule: SqrtDecayLR::new(spec.lr),
            recorder: QuantileRecorder::new(spec.interval),
            rng: StdRng::seed_from_u64(spec.seed),
            steps: spec.steps,
            completed: 0,
        })
    }

    /// Advance one iteration: draw, update, clamp, maybe checkpoint
    pub fn step(&mut self) {
        let grads = self.oracle.sample(&mut self.rng);
        let lr = self.schedule.get_lr();
        self.optimizer.update(&grads, lr);

        // Unconditional on every iteration, warm-up steps included. NaN
        // passes through clamp unchanged.
        self.optimizer.params_mut().mapv_inplace(|p| p.clamp(-1.0, 1.0));

        self.schedule.step();
        self.completed += 1;
        if self.completed % self.recorder.interval() == 0 {
            self.recorder.checkpoint(self.optimizer.params());
        }
    }

    /// Run all remaining iterations and finalize the record
    pub fn run(mut self) -> SummaryRecord {
        while self.completed < self.steps {
            self.step();
        }
        self.recorder.finalize()
    }

    /// Current parameter population
    pub fn params(&self) -> &Array1<f64> {
        self.optimizer.params()
    }

    /// The optimizer driving this run
    pub fn optimizer(&self) -> &Optimizer {
        &self.optimizer
    }

    /// Checkpoints recorded so far
    pub fn recorder(&self) -> &QuantileRecorder {
        &self.recorder
    }

    /// Iterations completed so far
    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed
    }
}
