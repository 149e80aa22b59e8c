use crate::environment::ProbabilitySource;
use crate::errors::ConfigurationError;

use config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "config";

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    pub level: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SimulationConfig {
    pub arm_count: usize,
    pub rounds: usize,
    pub epsilon: f64,
    pub seed: Option<u64>,
    #[serde(default)]
    pub probability_source: ProbabilitySource,
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.arm_count < 1 {
            return Err(ConfigurationError::InvalidArmCount(self.arm_count));
        }
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(ConfigurationError::InvalidEpsilon(self.epsilon));
        }
        self.probability_source.validate(self.arm_count)
    }

    /// Applies command-line values on top of the loaded configuration.
    /// Fixed probabilities also set the arm count, unless it is given explicitly.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(probabilities) = overrides.probabilities {
            self.arm_count = probabilities.len();
            self.probability_source = ProbabilitySource::Fixed { probabilities };
        }
        if let Some(arm_count) = overrides.arm_count {
            self.arm_count = arm_count;
        }
        if let Some(rounds) = overrides.rounds {
            self.rounds = rounds;
        }
        if let Some(epsilon) = overrides.epsilon {
            self.epsilon = epsilon;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Overrides {
    pub arm_count: Option<usize>,
    pub rounds: Option<usize>,
    pub epsilon: Option<f64>,
    pub seed: Option<u64>,
    pub probabilities: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub log: LogConfig,
    pub simulation: SimulationConfig,
}

impl AppConfig {
    /// Defaults, then the optional file `path` (any extension `config` knows),
    /// then `APP_*` variables such as `APP_SIMULATION__EPSILON`.
    pub fn load(path: &str) -> Result<Self, ConfigurationError> {
        Self::load_with(path, environment())
    }

    fn load_with(path: &str, environment: Environment) -> Result<Self, ConfigurationError> {
        let builder = Config::builder()
            .set_default("log.level", "info")?
            .set_default("simulation.arm_count", 5)?
            .set_default("simulation.rounds", 1000)?
            .set_default("simulation.epsilon", 0.1)?
            .add_source(File::with_name(path).required(false))
            .add_source(environment)
            .build()?;

        Ok(builder.try_deserialize()?)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("APP")
        .prefix_separator("_")
        .separator("__")
}
