use super::policy::{Policy, Selection};

use crate::errors::{ArmError, ConfigurationError};
use crate::estimator::ArmEstimate;

use rand::{rngs::SmallRng, Rng};

/// Index of the largest value, lowest index among ties.
pub fn lowest_argmax<I>(values: I) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, value)| match best {
            Some((_, max)) if value <= max => best,
            _ => Some((i, value)),
        })
        .map(|(i, _)| i)
}

/// Index of the highest estimate, lowest index among ties.
///
/// Every arm shares `Q = 0` before the first reward, so exploitation keeps
/// picking arm 0 until some estimate becomes strictly positive.
pub fn greedy_arm(estimates: &[ArmEstimate]) -> Option<usize> {
    lowest_argmax(estimates.iter().map(ArmEstimate::value))
}

#[derive(Clone, Debug)]
pub struct EpsilonGreedy {
    epsilon: f64,
}

impl EpsilonGreedy {
    pub fn new(epsilon: f64) -> Result<Self, ConfigurationError> {
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(ConfigurationError::InvalidEpsilon(epsilon));
        }

        Ok(Self { epsilon })
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }
}

impl Policy for EpsilonGreedy {
    fn select(
        &self,
        estimates: &[ArmEstimate],
        rng: &mut SmallRng,
    ) -> Result<Selection, ArmError> {
        if estimates.is_empty() {
            return Err(ArmError::NoArmsAvailable);
        }

        // explore-vs-exploit draw first, the arm draw only when exploring
        if rng.random::<f64>() < self.epsilon {
            Ok(Selection {
                arm: rng.random_range(0..estimates.len()),
                explored: true,
            })
        } else {
            greedy_arm(estimates)
                .map(|arm| Selection {
                    arm,
                    explored: false,
                })
                .ok_or(ArmError::NoArmsAvailable)
        }
    }
}
