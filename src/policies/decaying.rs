use super::{Policy, random_arm};
use crate::state::BanditState;
use rand::Rng;

/// Epsilon-greedy with an exploration rate that decays with experience
///
/// The rate is `1 / (1 + n / k)` for `n` pulls over `k` arms: every first
/// pull explores, and exploitation takes over as `n` grows.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DecayingEpsilonGreedy;

impl DecayingEpsilonGreedy {
    /// Exploration threshold after `pull_count` pulls over `arm_count` arms
    pub fn threshold(pull_count: usize, arm_count: usize) -> f64 {
        1.0 / (1.0 + pull_count as f64 / arm_count as f64)
    }
}

impl Policy for DecayingEpsilonGreedy {
    fn select(&self, state: &BanditState, rng: &mut dyn rand::RngCore) -> usize {
        let threshold = Self::threshold(state.pull_count(), state.arm_count());
        let p: f64 = rng.random_range(0.0..1.0);
        if p < threshold {
            random_arm(state, rng)
        } else {
            state.best_arm()
        }
    }
}
