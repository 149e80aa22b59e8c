use crate::errors::{ArmError, ConfigurationError};

use rand::Rng;
use rand_distr::{Beta, Distribution};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where the hidden per-arm success probabilities come from.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProbabilitySource {
    /// Uniform over `[0, 1)`.
    #[default]
    Uniform,
    Beta {
        alpha: f64,
        beta: f64,
    },
    /// Explicit probabilities, one per arm. Consumes no random draws.
    Fixed {
        probabilities: Vec<f64>,
    },
}

impl ProbabilitySource {
    pub fn validate(&self, arm_count: usize) -> Result<(), ConfigurationError> {
        match self {
            ProbabilitySource::Uniform => Ok(()),
            ProbabilitySource::Beta { alpha, beta } => Beta::new(*alpha, *beta)
                .map(|_| ())
                .map_err(|e| ConfigurationError::InvalidProbabilitySource(e.to_string())),
            ProbabilitySource::Fixed { probabilities } => {
                if probabilities.len() != arm_count {
                    return Err(ConfigurationError::ProbabilityCountMismatch {
                        expected: arm_count,
                        found: probabilities.len(),
                    });
                }

                probabilities
                    .iter()
                    .enumerate()
                    .find(|(_, p)| !(0.0..=1.0).contains(*p))
                    .map_or(Ok(()), |(arm, &probability)| {
                        Err(ConfigurationError::ProbabilityOutOfRange { arm, probability })
                    })
            }
        }
    }

    /// Draws `arm_count` probabilities in arm order.
    pub fn draw<R: Rng + ?Sized>(
        &self,
        arm_count: usize,
        rng: &mut R,
    ) -> Result<Vec<f64>, ConfigurationError> {
        self.validate(arm_count)?;

        let probabilities = match self {
            ProbabilitySource::Uniform => (0..arm_count).map(|_| rng.random::<f64>()).collect(),
            ProbabilitySource::Beta { alpha, beta } => {
                let distribution = Beta::new(*alpha, *beta)
                    .map_err(|e| ConfigurationError::InvalidProbabilitySource(e.to_string()))?;
                (0..arm_count).map(|_| distribution.sample(rng)).collect()
            }
            ProbabilitySource::Fixed { probabilities } => probabilities.clone(),
        };

        Ok(probabilities)
    }
}

/// Ground truth of the bandit problem.
///
/// The true probabilities are only handed out by consuming the environment,
/// once the run is over.
#[derive(Debug)]
pub struct Environment {
    probabilities: Vec<f64>,
}

impl Environment {
    pub fn new<R: Rng + ?Sized>(
        arm_count: usize,
        source: &ProbabilitySource,
        rng: &mut R,
    ) -> Result<Self, ConfigurationError> {
        if arm_count < 1 {
            return Err(ConfigurationError::InvalidArmCount(arm_count));
        }

        let probabilities = source.draw(arm_count, rng)?;
        debug!(?probabilities, "Drew true arm probabilities");

        Ok(Self { probabilities })
    }

    pub fn arm_count(&self) -> usize {
        self.probabilities.len()
    }

    /// Bernoulli reward for `arm`. Always consumes exactly one draw.
    pub fn pull<R: Rng + ?Sized>(&self, arm: usize, rng: &mut R) -> Result<u8, ArmError> {
        let p = self
            .probabilities
            .get(arm)
            .copied()
            .ok_or(ArmError::NotFound {
                arm,
                arm_count: self.arm_count(),
            })?;

        Ok((rng.random::<f64>() < p) as u8)
    }

    pub fn into_probabilities(self) -> Vec<f64> {
        self.probabilities
    }
}
