//! Configuration and running statistics of one bandit simulation.

use rand::Rng;

use crate::error::Result;
use crate::means::Means;

/// The state shared by every action-selection policy.
///
/// Holds the immutable configuration (arm count, iteration budget, true
/// means) and the statistics accumulated over a sequence of pulls. The
/// statistics only change through [`BanditState::update`] and
/// [`BanditState::reset`].
#[derive(Clone, Debug, PartialEq)]
pub struct BanditState {
    arm_count: usize,
    iteration_budget: usize,
    true_means: Vec<f64>,
    pull_count: usize,
    per_arm_pull_count: Vec<usize>,
    running_mean_reward: f64,
    per_arm_mean_reward: Vec<f64>,
    reward_history: Vec<f64>,
}

impl BanditState {
    /// Creates a new state, resolving `means` with the given random source.
    ///
    /// Fails with a [`ConfigError`](crate::ConfigError) when `arm_count` is
    /// zero or when explicit means do not have exactly `arm_count` entries.
    pub fn new<R>(
        arm_count: usize,
        iteration_budget: usize,
        means: Means,
        rng: &mut R,
    ) -> Result<Self>
    where
        R: Rng + ?Sized,
    {
        let true_means = means.resolve(arm_count, rng)?;
        Ok(Self {
            arm_count,
            iteration_budget,
            true_means,
            pull_count: 0,
            per_arm_pull_count: vec![0; arm_count],
            running_mean_reward: 0.0,
            per_arm_mean_reward: vec![0.0; arm_count],
            reward_history: vec![0.0; iteration_budget],
        })
    }

    /// Number of arms.
    pub fn arm_count(&self) -> usize {
        self.arm_count
    }

    /// Number of pulls in one run.
    pub fn iteration_budget(&self) -> usize {
        self.iteration_budget
    }

    /// The mean of each arm's reward distribution.
    pub fn true_means(&self) -> &[f64] {
        &self.true_means
    }

    /// Total pulls made so far.
    pub fn pull_count(&self) -> usize {
        self.pull_count
    }

    /// Pulls made on each arm so far.
    pub fn per_arm_pull_count(&self) -> &[usize] {
        &self.per_arm_pull_count
    }

    /// Mean of every reward observed so far.
    pub fn running_mean_reward(&self) -> f64 {
        self.running_mean_reward
    }

    /// Mean reward observed for each arm, 0 for arms never pulled.
    pub fn per_arm_mean_reward(&self) -> &[f64] {
        &self.per_arm_mean_reward
    }

    /// Running mean reward after each pull of the last run.
    pub fn reward_history(&self) -> &[f64] {
        &self.reward_history
    }

    /// Index of the arm with the highest estimated mean.
    ///
    /// Ties go to the lowest index.
    pub fn best_arm(&self) -> usize {
        let mut best = 0;
        for (arm, &mean) in self.per_arm_mean_reward.iter().enumerate().skip(1) {
            if mean > self.per_arm_mean_reward[best] {
                best = arm;
            }
        }
        best
    }

    /// Folds one observed reward for `arm` into the running statistics.
    ///
    /// # Panics
    ///
    /// Panics if `arm` is not less than [`arm_count`](Self::arm_count).
    pub fn update(&mut self, arm: usize, reward: f64) {
        self.pull_count += 1;
        self.per_arm_pull_count[arm] += 1;

        self.running_mean_reward +=
            (reward - self.running_mean_reward) / self.pull_count as f64;

        let pulls = self.per_arm_pull_count[arm] as f64;
        self.per_arm_mean_reward[arm] += (reward - self.per_arm_mean_reward[arm]) / pulls;
    }

    /// Records the current running mean at position `iteration` of the history.
    pub(crate) fn record(&mut self, iteration: usize) {
        self.reward_history[iteration] = self.running_mean_reward;
    }

    /// Restores every statistic to its starting value.
    ///
    /// Configuration and true means are kept; the history is reallocated
    /// zero-filled at its original length.
    pub fn reset(&mut self) {
        self.pull_count = 0;
        self.per_arm_pull_count = vec![0; self.arm_count];
        self.running_mean_reward = 0.0;
        self.per_arm_mean_reward = vec![0.0; self.arm_count];
        self.reward_history = vec![0.0; self.iteration_budget];
    }
}
