use crate::error::{ConfigError, Result};
use crate::means::Means;
use crate::policies::{DecayingEpsilonGreedy, EpsilonGreedy, Greedy, Policy};
use crate::state::BanditState;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use rand_distr::StandardNormal;

/// One observed step of a simulation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pull {
    /// The arm that was selected
    pub arm: usize,
    /// The reward sampled from that arm
    pub reward: f64,
}

/// A k-armed bandit simulation driven by a specific policy
///
/// The `Simulator` owns its [`BanditState`], its policy and its random
/// source. Nothing is shared between simulators, so independent runs are
/// reproducible from their seeds alone.
#[derive(Clone, Debug)]
pub struct Simulator<P, R = StdRng> {
    state: BanditState,
    policy: P,
    rng: R,
}

impl<P, R> Simulator<P, R>
where
    P: Policy,
    R: RngCore,
{
    /// Creates a new simulator over a constructed state
    pub fn new(state: BanditState, policy: P, rng: R) -> Self {
        log::debug!(
            "simulator over {} arms, {} iterations",
            state.arm_count(),
            state.iteration_budget()
        );
        Self { state, policy, rng }
    }

    /// Select an arm, sample its reward and fold it into the statistics
    ///
    /// The reward is drawn from a normal distribution with unit variance
    /// around the true mean of the selected arm.
    pub fn pull(&mut self) -> Pull {
        let arm = self.policy.select(&self.state, &mut self.rng);
        let noise: f64 = self.rng.sample(StandardNormal);
        let reward = self.state.true_means()[arm] + noise;
        self.state.update(arm, reward);
        log::trace!(
            "pull {:>6} arm {:>3} reward {:+.4}",
            self.state.pull_count(),
            arm,
            reward
        );
        Pull { arm, reward }
    }

    /// Pull once per iteration of the budget, recording the running mean
    ///
    /// Statistics accumulate on top of whatever the state already holds;
    /// call [`reset`](Self::reset) first for an independent run.
    pub fn run(&mut self) {
        for iteration in 0..self.state.iteration_budget() {
            self.pull();
            self.state.record(iteration);
        }
        log::debug!(
            "run finished: {} pulls, mean reward {:.4}",
            self.state.pull_count(),
            self.state.running_mean_reward()
        );
    }

    /// Restore the statistics to their post-construction values
    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Gets the simulation state
    pub fn state(&self) -> &BanditState {
        &self.state
    }

    /// Running mean reward after each pull of the last run
    pub fn reward_history(&self) -> &[f64] {
        self.state.reward_history()
    }

    /// Pulls made on each arm
    pub fn per_arm_pull_count(&self) -> &[usize] {
        self.state.per_arm_pull_count()
    }

    /// Gets a reference to the policy
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Gets a mutable reference to the policy
    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    /// Consumes the simulator, returning its state
    pub fn into_state(self) -> BanditState {
        self.state
    }
}

// Convenience constructors for the three policies
impl Simulator<Greedy> {
    /// Create a pure greedy simulation seeded with `seed`
    pub fn greedy(
        arm_count: usize,
        iteration_budget: usize,
        means: impl Into<Means>,
        seed: u64,
    ) -> Result<Self> {
        Self::builder()
            .arms(arm_count)
            .iterations(iteration_budget)
            .means(means)
            .policy(Greedy)
            .seed(seed)
            .build()
    }
}

impl Simulator<EpsilonGreedy> {
    /// Create an epsilon-greedy simulation seeded with `seed`
    pub fn epsilon_greedy(
        epsilon: f64,
        arm_count: usize,
        iteration_budget: usize,
        means: impl Into<Means>,
        seed: u64,
    ) -> Result<Self> {
        Self::builder()
            .arms(arm_count)
            .iterations(iteration_budget)
            .means(means)
            .policy(EpsilonGreedy::new(epsilon))
            .seed(seed)
            .build()
    }
}

impl Simulator<DecayingEpsilonGreedy> {
    /// Create a decaying epsilon-greedy simulation seeded with `seed`
    pub fn decaying_epsilon_greedy(
        arm_count: usize,
        iteration_budget: usize,
        means: impl Into<Means>,
        seed: u64,
    ) -> Result<Self> {
        Self::builder()
            .arms(arm_count)
            .iterations(iteration_budget)
            .means(means)
            .policy(DecayingEpsilonGreedy)
            .seed(seed)
            .build()
    }
}

/// Builder for creating simulators with a fluent API
///
/// Arms and policy are required. Iterations default to 1000, means to
/// [`Means::Random`], and the random source is seeded from the operating
/// system unless [`seed`](Self::seed) is given.
pub struct SimulatorBuilder<P> {
    arms: Option<usize>,
    iterations: usize,
    means: Means,
    policy: Option<P>,
    seed: Option<u64>,
}

impl<P> Default for SimulatorBuilder<P> {
    fn default() -> Self {
        Self {
            arms: None,
            iterations: 1000,
            means: Means::default(),
            policy: None,
            seed: None,
        }
    }
}

impl<P> SimulatorBuilder<P>
where
    P: Policy,
{
    /// Set the number of arms
    pub fn arms(mut self, arm_count: usize) -> Self {
        self.arms = Some(arm_count);
        self
    }

    /// Set the number of pulls per run
    pub fn iterations(mut self, iteration_budget: usize) -> Self {
        self.iterations = iteration_budget;
        self
    }

    /// Set how the true means are chosen
    pub fn means(mut self, means: impl Into<Means>) -> Self {
        self.means = means.into();
        self
    }

    /// Set the policy for the simulation
    pub fn policy(mut self, policy: P) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Seed the random source for reproducible runs
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the simulator
    pub fn build(self) -> Result<Simulator<P, StdRng>> {
        let arms = self.arms.ok_or(ConfigError::BuilderError {
            message: "Arms not specified".into(),
        })?;

        let policy = self.policy.ok_or(ConfigError::BuilderError {
            message: "Policy not specified".into(),
        })?;

        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let state = BanditState::new(arms, self.iterations, self.means, &mut rng)?;

        Ok(Simulator::new(state, policy, rng))
    }
}

impl<P> Simulator<P, StdRng> {
    /// Create a new builder for constructing a simulator
    pub fn builder() -> SimulatorBuilder<P> {
        SimulatorBuilder::default()
    }
}
