use super::{Policy, random_arm};
use crate::state::BanditState;
use rand::Rng;

/// Epsilon-greedy policy - explores with probability epsilon, exploits otherwise
///
/// With `epsilon == 0` the very first pull is still chosen at random, so a
/// purely greedy run does not always start on arm 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EpsilonGreedy {
    epsilon: f64,
}

impl EpsilonGreedy {
    /// Creates a new EpsilonGreedy policy with the given epsilon
    ///
    /// Epsilon is conventionally in `[0, 1]`; values outside that range are
    /// accepted and behave like the nearest bound.
    #[must_use]
    pub fn new(epsilon: f64) -> Self {
        Self { epsilon }
    }

    /// Gets the epsilon value
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Sets the epsilon value
    pub fn set_epsilon(&mut self, epsilon: f64) {
        self.epsilon = epsilon;
    }
}

impl Policy for EpsilonGreedy {
    fn select(&self, state: &BanditState, rng: &mut dyn rand::RngCore) -> usize {
        let p: f64 = rng.random_range(0.0..1.0);
        let bootstrap = self.epsilon == 0.0 && state.pull_count() == 0;
        if bootstrap || p < self.epsilon {
            random_arm(state, rng)
        } else {
            state.best_arm()
        }
    }
}
