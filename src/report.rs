//! Presentation of a finished run. Consumes a [`SimulationResult`] and never
//! takes part in the simulation itself.

use crate::policies::{greedy_arm, lowest_argmax};
use crate::simulation::SimulationResult;

use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArmReport {
    pub arm: usize,
    pub true_probability: f64,
    pub estimated_value: f64,
    pub pulls: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Report {
    pub seed: u64,
    pub epsilon: f64,
    pub rounds: usize,
    pub total_reward: u64,
    pub average_reward: f64,
    pub exploration_rounds: usize,
    pub true_best_arm: Option<usize>,
    pub estimated_best_arm: Option<usize>,
    pub arms: Vec<ArmReport>,
    pub cumulative_rewards: Vec<u64>,
}

impl Report {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&SimulationResult> for Report {
    fn from(result: &SimulationResult) -> Self {
        let rounds = result.rounds();
        let total_reward = result.total_reward();
        let average_reward = if rounds == 0 {
            0.0
        } else {
            total_reward as f64 / rounds as f64
        };

        Self {
            seed: result.seed(),
            epsilon: result.epsilon(),
            rounds,
            total_reward,
            average_reward,
            exploration_rounds: result
                .history()
                .records()
                .iter()
                .filter(|record| record.explored)
                .count(),
            true_best_arm: lowest_argmax(result.true_probabilities().iter().copied()),
            estimated_best_arm: greedy_arm(result.estimates()),
            arms: result
                .true_probabilities()
                .iter()
                .zip(result.estimates())
                .enumerate()
                .map(|(arm, (&true_probability, estimate))| ArmReport {
                    arm,
                    true_probability,
                    estimated_value: estimate.value(),
                    pulls: estimate.pulls(),
                })
                .collect(),
            cumulative_rewards: result.cumulative_rewards().to_vec(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Simulation: {} rounds, epsilon {}, seed {}",
            self.rounds, self.epsilon, self.seed
        )?;
        writeln!(f, "{:>5} {:>12} {:>12} {:>8}", "arm", "actual p", "estimated Q", "pulls")?;
        for arm in &self.arms {
            writeln!(
                f,
                "{:>5} {:>12.4} {:>12.4} {:>8}",
                arm.arm, arm.true_probability, arm.estimated_value, arm.pulls
            )?;
        }
        writeln!(
            f,
            "Total reward: {} (average {:.4})",
            self.total_reward, self.average_reward
        )?;
        writeln!(f, "Exploration rounds: {}", self.exploration_rounds)?;

        let show = |arm: Option<usize>| arm.map_or_else(|| "-".to_string(), |a| a.to_string());
        write!(
            f,
            "Best arm: actual {}, estimated {}",
            show(self.true_best_arm),
            show(self.estimated_best_arm)
        )
    }
}
