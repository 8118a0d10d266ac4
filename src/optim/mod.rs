//! Optimizer update rules for the noisy-gradient simulation

mod adam;
mod adopt;
mod amsgrad;
mod optimizer;
mod scheduler;

pub use adam::Adam;
pub use adopt::Adopt;
pub use amsgrad::AmsGrad;
pub use optimizer::Optimizer;
pub use scheduler::{LRScheduler, SqrtDecayLR};
