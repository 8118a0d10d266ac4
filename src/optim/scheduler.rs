//! Learning rate schedule for the simulation loop

/// Learning rate scheduler trait
pub trait LRScheduler {
    /// Get the current learning rate
    fn get_lr(&self) -> f64;

    /// Step the scheduler (called once per iteration)
    fn step(&mut self);
}

/// Inverse square-root decay schedule
///
/// Formula: lr_i = base_lr / sqrt(1 + base_lr * i)
///
/// Strictly decreasing in the iteration index for any positive base_lr.
/// Recomputed from the current index on every query, never accumulated.
pub struct SqrtDecayLR {
    base_lr: f64,
    current_step: usize,
}

impl SqrtDecayLR {
    /// Create a new schedule starting at iteration 0
    pub fn new(base_lr: f64) -> Self {
        Self { base_lr, current_step: 0 }
    }
}

impl LRScheduler for SqrtDecayLR {
    fn get_lr(&self) -> f64 {
        self.base_lr / (1.0 + self.base_lr * self.current_step as f64).sqrt()
    }

    fn step(&mut self) {
        self.current_step += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_initial_lr_is_base() {
        let schedule = SqrtDecayLR::new(0.01);
        assert_abs_diff_eq!(schedule.get_lr(), 0.01, epsilon = 1e-15);
    }

    #[test]
    fn test_exact_value_at_index() {
        let mut schedule = SqrtDecayLR::new(0.5);
        for _ in 0..8 {
            schedule.step();
        }
        assert_abs_diff_eq!(schedule.get_lr(), 0.5 / (1.0 + 0.5 * 8.0_f64).sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn test_strictly_decreasing() {
        for base in [1e-4, 0.01, 0.5, 10.0] {
            let mut schedule = SqrtDecayLR::new(base);
            let mut prev = schedule.get_lr();
            for _ in 0..1000 {
                schedule.step();
                let lr = schedule.get_lr();
                assert!(lr < prev, "lr did not decrease: {prev} -> {lr} (base={base})");
                prev = lr;
            }
        }
    }
}
