use bandit_sim::config::SimulationConfig;
use bandit_sim::{run, ProbabilitySource, Simulation, SimulationResult};

const SEED: u64 = 1234;

fn run_fixed(probabilities: &[f64], rounds: usize, epsilon: f64) -> SimulationResult {
    let config = SimulationConfig {
        arm_count: probabilities.len(),
        rounds,
        epsilon,
        seed: Some(SEED),
        probability_source: ProbabilitySource::Fixed {
            probabilities: probabilities.to_vec(),
        },
    };

    Simulation::new(config).unwrap().run().unwrap()
}

#[test]
fn count_conservation() {
    for (arms, rounds, epsilon) in [(1, 50, 0.0), (3, 500, 0.1), (7, 1234, 0.5), (4, 10, 1.0)] {
        let result = run(arms, rounds, epsilon, Some(SEED)).unwrap();
        let pulls: u64 = result.estimates().iter().map(|arm| arm.pulls()).sum();

        assert_eq!(pulls, rounds as u64);
        assert_eq!(result.history().len(), rounds);
    }
}

#[test]
fn mean_correctness() {
    let result = run(5, 2000, 0.2, Some(SEED)).unwrap();

    for (arm, estimate) in result.estimates().iter().enumerate() {
        let rewards: Vec<u8> = result.history().rewards_for(arm).collect();
        assert_eq!(rewards.len() as u64, estimate.pulls());

        let mean = if rewards.is_empty() {
            0.0
        } else {
            rewards.iter().map(|&r| f64::from(r)).sum::<f64>() / rewards.len() as f64
        };
        assert!((estimate.value() - mean).abs() < 1e-9);
    }
}

#[test]
fn cumulative_consistency() {
    let result = run(4, 1000, 0.1, Some(SEED)).unwrap();
    let rewards: Vec<u8> = result.rewards().collect();
    let cumulative = result.cumulative_rewards();

    assert_eq!(cumulative[0], u64::from(rewards[0]));
    for k in 1..rewards.len() {
        assert_eq!(cumulative[k], cumulative[k - 1] + u64::from(rewards[k]));
    }
    assert_eq!(cumulative.last().copied(), Some(result.total_reward()));
}

#[test]
fn determinism() {
    let a = run(5, 1000, 0.1, Some(SEED)).unwrap();
    let b = run(5, 1000, 0.1, Some(SEED)).unwrap();

    assert_eq!(a.true_probabilities(), b.true_probabilities());
    assert_eq!(a.history(), b.history());
    assert_eq!(a.estimates(), b.estimates());
}

#[test]
fn unseeded_run_replays() {
    let a = run(4, 300, 0.3, None).unwrap();
    let b = run(4, 300, 0.3, Some(a.seed())).unwrap();

    assert_eq!(a.true_probabilities(), b.true_probabilities());
    assert_eq!(a.history(), b.history());
}

#[test]
fn pure_exploitation() {
    let result = run_fixed(&[0.3, 0.6, 0.8], 500, 0.0);
    let records = result.history().records();
    let mut values = vec![0.0; 3];
    let mut pulls = vec![0u32; 3];

    // replay the estimates and check every choice is the current argmax
    for record in records {
        let best = values
            .iter()
            .enumerate()
            .fold((0, values[0]), |(bi, bv), (i, &v)| {
                if v > bv {
                    (i, v)
                } else {
                    (bi, bv)
                }
            })
            .0;
        assert_eq!(record.arm, best);
        assert!(!record.explored);

        pulls[record.arm] += 1;
        values[record.arm] +=
            (f64::from(record.reward) - values[record.arm]) / f64::from(pulls[record.arm]);
    }
}

#[test]
fn pure_exploration() {
    let rounds = 10_000;
    let result = run_fixed(&[0.1, 0.2, 0.3, 0.9], rounds, 1.0);

    for estimate in result.estimates() {
        let frequency = estimate.pulls() as f64 / rounds as f64;
        assert!((frequency - 0.25).abs() < 0.02, "frequency {frequency}");
    }
    assert!(result.history().records().iter().all(|r| r.explored));
}

#[test]
fn convergence() {
    let result = run_fixed(&[0.1, 0.5, 0.9], 5000, 0.1);
    let estimates = result.estimates();

    assert!((estimates[2].value() - 0.9).abs() <= 0.05);
    assert!(estimates[2].pulls() > estimates[0].pulls());
    assert!(estimates[2].pulls() > estimates[1].pulls());
    assert_eq!(result.true_probabilities(), &[0.1, 0.5, 0.9]);
}

#[test]
fn zero_rounds() {
    let result = run(3, 0, 0.1, Some(SEED)).unwrap();

    assert!(result.history().is_empty());
    assert!(result.cumulative_rewards().is_empty());
    assert_eq!(result.total_reward(), 0);
    assert_eq!(result.true_probabilities().len(), 3);
    assert!(result
        .estimates()
        .iter()
        .all(|arm| arm.pulls() == 0 && arm.value() == 0.0));
}

#[test]
fn invalid_configuration() {
    assert!(run(0, 10, 0.1, Some(SEED)).is_err());
    assert!(run(2, 10, -0.01, Some(SEED)).is_err());
    assert!(run(2, 10, 1.01, Some(SEED)).is_err());

    let mismatched = SimulationConfig {
        arm_count: 3,
        rounds: 10,
        epsilon: 0.1,
        seed: Some(SEED),
        probability_source: ProbabilitySource::Fixed {
            probabilities: vec![0.5, 0.5],
        },
    };
    assert!(Simulation::new(mismatched).is_err());
}

#[test]
fn serialize_result() {
    let result = run(2, 3, 0.5, Some(SEED)).unwrap();
    let value = serde_json::to_value(&result).unwrap();

    assert_eq!(value["seed"], SEED);
    assert_eq!(value["history"]["records"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["estimates"].as_array().map(Vec::len), Some(2));
}
