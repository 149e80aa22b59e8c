use crate::errors::ArmError;

use serde::Serialize;

/// Running estimate for one arm: the mean observed reward (Q) and the pull count (N).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ArmEstimate {
    pub(crate) value: f64,
    pub(crate) pulls: u64,
}

impl ArmEstimate {
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn pulls(&self) -> u64 {
        self.pulls
    }

    fn update(&mut self, reward: f64) {
        self.pulls += 1;
        self.value += (reward - self.value) / (self.pulls as f64);
    }
}

#[derive(Clone, Debug)]
pub struct ValueEstimator {
    estimates: Vec<ArmEstimate>,
}

impl ValueEstimator {
    pub fn new(arm_count: usize) -> Self {
        Self {
            estimates: vec![ArmEstimate::default(); arm_count],
        }
    }

    pub fn estimates(&self) -> &[ArmEstimate] {
        &self.estimates
    }

    pub fn total_pulls(&self) -> u64 {
        self.estimates.iter().map(|arm| arm.pulls).sum()
    }

    pub fn update(&mut self, arm: usize, reward: u8) -> Result<(), ArmError> {
        let arm_count = self.estimates.len();
        self.estimates
            .get_mut(arm)
            .ok_or(ArmError::NotFound { arm, arm_count })?
            .update(f64::from(reward));

        Ok(())
    }

    pub fn into_estimates(self) -> Vec<ArmEstimate> {
        self.estimates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create() {
        let estimator = ValueEstimator::new(3);
        assert_eq!(estimator.estimates().len(), 3);
        assert!(estimator
            .estimates()
            .iter()
            .all(|arm| arm.value() == 0.0 && arm.pulls() == 0));
    }

    #[test]
    fn update() {
        let mut estimator = ValueEstimator::new(2);

        assert!(estimator.update(0, 1).is_ok());
        assert_eq!(estimator.estimates()[0].value(), 1.0);
        assert_eq!(estimator.estimates()[0].pulls(), 1);
        assert_eq!(estimator.estimates()[1], ArmEstimate::default());
    }

    #[test]
    fn update_unknown_arm() {
        let mut estimator = ValueEstimator::new(2);
        assert_eq!(
            estimator.update(5, 1),
            Err(ArmError::NotFound {
                arm: 5,
                arm_count: 2
            })
        );
        assert_eq!(estimator.total_pulls(), 0);
    }

    #[test]
    fn running_mean() {
        let rewards = [1, 0, 0, 1, 1, 1, 0, 1, 0, 0, 1, 1];
        let mut estimator = ValueEstimator::new(1);

        for (i, &reward) in rewards.iter().enumerate() {
            estimator.update(0, reward).unwrap();

            let seen = &rewards[..=i];
            let mean = seen.iter().map(|&r| f64::from(r)).sum::<f64>() / seen.len() as f64;
            assert!((estimator.estimates()[0].value() - mean).abs() < 1e-9);
        }
        assert_eq!(estimator.total_pulls(), rewards.len() as u64);
    }

    #[test]
    fn long_running_mean() {
        let mut estimator = ValueEstimator::new(1);
        let n = 100_000;
        (0..n).for_each(|i| estimator.update(0, (i % 4 == 0) as u8).unwrap());

        assert!((estimator.estimates()[0].value() - 0.25).abs() < 1e-9);
    }
}
