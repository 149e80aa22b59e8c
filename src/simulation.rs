use crate::config::SimulationConfig;
use crate::environment::{Environment, ProbabilitySource};
use crate::errors::{ConfigurationError, SimulationError};
use crate::estimator::{ArmEstimate, ValueEstimator};
use crate::policies::{EpsilonGreedy, Policy, Selection};
use crate::rng::SeededRng;

use serde::Serialize;
use tracing::{info, trace};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RewardRecord {
    /// 1-based.
    pub round: usize,
    pub arm: usize,
    pub reward: u8,
    pub explored: bool,
}

/// Append-only log of every round, with the running reward total.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RewardHistory {
    records: Vec<RewardRecord>,
    cumulative: Vec<u64>,
    total: u64,
}

impl RewardHistory {
    fn with_capacity(rounds: usize) -> Self {
        Self {
            records: Vec::with_capacity(rounds),
            cumulative: Vec::with_capacity(rounds),
            total: 0,
        }
    }

    fn push(&mut self, record: RewardRecord) {
        self.total += u64::from(record.reward);
        self.records.push(record);
        self.cumulative.push(self.total);
    }

    pub fn records(&self) -> &[RewardRecord] {
        &self.records
    }

    pub fn cumulative(&self) -> &[u64] {
        &self.cumulative
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn rewards_for(&self, arm: usize) -> impl Iterator<Item = u8> + '_ {
        self.records
            .iter()
            .filter(move |record| record.arm == arm)
            .map(|record| record.reward)
    }
}

/// Final snapshot of a finished run.
#[derive(Clone, Debug, Serialize)]
pub struct SimulationResult {
    seed: u64,
    epsilon: f64,
    true_probabilities: Vec<f64>,
    estimates: Vec<ArmEstimate>,
    history: RewardHistory,
}

impl SimulationResult {
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn true_probabilities(&self) -> &[f64] {
        &self.true_probabilities
    }

    pub fn estimates(&self) -> &[ArmEstimate] {
        &self.estimates
    }

    pub fn history(&self) -> &RewardHistory {
        &self.history
    }

    pub fn rounds(&self) -> usize {
        self.history.len()
    }

    pub fn selections(&self) -> impl Iterator<Item = usize> + '_ {
        self.history.records().iter().map(|record| record.arm)
    }

    pub fn rewards(&self) -> impl Iterator<Item = u8> + '_ {
        self.history.records().iter().map(|record| record.reward)
    }

    pub fn cumulative_rewards(&self) -> &[u64] {
        self.history.cumulative()
    }

    pub fn total_reward(&self) -> u64 {
        self.history.total()
    }
}

/// A configured, not yet started run. Running consumes it.
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    policy: EpsilonGreedy,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let policy = EpsilonGreedy::new(config.epsilon)?;

        Ok(Self { config, policy })
    }

    pub fn run(self) -> Result<SimulationResult, SimulationError> {
        let Simulation { config, policy } = self;
        let mut rng = SeededRng::new(config.seed);

        info!(
            arm_count = config.arm_count,
            rounds = config.rounds,
            epsilon = config.epsilon,
            seed = rng.seed(),
            "Starting simulation"
        );

        let environment = Environment::new(
            config.arm_count,
            &config.probability_source,
            rng.get_rng(),
        )?;
        let mut estimator = ValueEstimator::new(environment.arm_count());
        let mut history = RewardHistory::with_capacity(config.rounds);

        for round in 1..=config.rounds {
            let Selection { arm, explored } = policy.select(estimator.estimates(), rng.get_rng())?;
            let reward = environment.pull(arm, rng.get_rng())?;
            estimator.update(arm, reward)?;

            trace!(round, arm, reward, explored, "Round played");
            history.push(RewardRecord {
                round,
                arm,
                reward,
                explored,
            });
        }

        info!(
            rounds = history.len(),
            total_reward = history.total(),
            "Simulation done"
        );

        Ok(SimulationResult {
            seed: rng.seed(),
            epsilon: policy.epsilon(),
            true_probabilities: environment.into_probabilities(),
            estimates: estimator.into_estimates(),
            history,
        })
    }
}

/// Runs one simulation with uniformly drawn arm probabilities.
pub fn run(
    arm_count: usize,
    rounds: usize,
    epsilon: f64,
    seed: Option<u64>,
) -> Result<SimulationResult, SimulationError> {
    let config = SimulationConfig {
        arm_count,
        rounds,
        epsilon,
        seed,
        probability_source: ProbabilitySource::Uniform,
    };

    Simulation::new(config)?.run()
}
