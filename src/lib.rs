//! Epsilon-greedy learner for a stationary Bernoulli multi-armed bandit.
//!
//! One run wires a hidden [`Environment`], a [`ValueEstimator`] and an
//! [`EpsilonGreedy`] policy to a single seeded random stream, and returns an
//! immutable [`SimulationResult`].

pub mod config;
pub mod environment;
pub mod errors;
pub mod estimator;
pub mod policies;
pub mod report;
pub mod rng;
pub mod simulation;

pub use environment::{Environment, ProbabilitySource};
pub use errors::{ArmError, ConfigurationError, SimulationError};
pub use estimator::{ArmEstimate, ValueEstimator};
pub use policies::{EpsilonGreedy, Policy, Selection};
pub use simulation::{run, RewardHistory, RewardRecord, Simulation, SimulationResult};
