use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Arm count must be at least 1, got {0}")]
    InvalidArmCount(usize),
    #[error("Epsilon must lie in [0, 1], got {0}")]
    InvalidEpsilon(f64),
    #[error("Invalid probability source: {0}")]
    InvalidProbabilitySource(String),
    #[error("Expected {expected} arm probabilities, found {found}")]
    ProbabilityCountMismatch { expected: usize, found: usize },
    #[error("Probability {probability} of arm {arm} lies outside [0, 1]")]
    ProbabilityOutOfRange { arm: usize, probability: f64 },
    #[error("Cannot load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArmError {
    #[error("Arm {arm} not found among {arm_count} arms")]
    NotFound { arm: usize, arm_count: usize },
    #[error("No arms to select from")]
    NoArmsAvailable,
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Arm(#[from] ArmError),
}
