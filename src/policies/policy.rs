use crate::errors::ArmError;
use crate::estimator::ArmEstimate;

use rand::rngs::SmallRng;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub arm: usize,
    pub explored: bool,
}

/// Arm-selection rule. Sees only the learned estimates, never the environment.
pub trait Policy {
    fn select(&self, estimates: &[ArmEstimate], rng: &mut SmallRng)
        -> Result<Selection, ArmError>;
}
