//! Multi-episode comparison of labelled policies.
//!
//! Every episode draws one set of true means and runs each labelled policy on
//! its own copy of them, so the policies face the same bandit. Reward
//! histories and selection counts are averaged across episodes.

use indexmap::IndexMap;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::{ConfigError, Result};
use crate::means::Means;
use crate::policies::Policy;
use crate::simulator::Simulator;
use crate::state::BanditState;

/// X axis label of the averaged reward plot.
pub const X_LABEL: &str = "Iterations";

/// Y axis label of the averaged reward plot.
pub const Y_LABEL: &str = "Average Reward";

/// Scalar parameters of an experiment.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentConfig {
    /// Number of arms
    pub arms: usize,
    /// Pulls per run
    pub iterations: usize,
    /// Independent episodes to average over
    pub episodes: usize,
    /// Seed of the experiment's random source
    pub seed: u64,
    /// How each episode's true means are chosen
    pub means: Means,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            arms: 10,
            iterations: 1000,
            episodes: 1000,
            seed: 42,
            means: Means::Random,
        }
    }
}

/// Averaged traces of one labelled policy.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    /// Average running mean reward at each iteration
    pub rewards: Vec<f64>,
    /// Average number of pulls of each arm per episode
    pub selections: Vec<f64>,
}

impl Series {
    fn zeroed(arms: usize, iterations: usize) -> Self {
        Self {
            rewards: vec![0.0; iterations],
            selections: vec![0.0; arms],
        }
    }

    fn fold(&mut self, state: &BanditState, episode: usize) {
        let n = (episode + 1) as f64;
        for (avg, x) in self.rewards.iter_mut().zip(state.reward_history()) {
            *avg += (x - *avg) / n;
        }
        for (avg, &x) in self.selections.iter_mut().zip(state.per_arm_pull_count()) {
            *avg += (x as f64 - *avg) / n;
        }
    }
}

/// Result of [`Experiment::run`], ready for a plotting collaborator.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentReport {
    episodes: usize,
    series: IndexMap<String, Series>,
}

impl ExperimentReport {
    /// Number of episodes averaged
    pub fn episodes(&self) -> usize {
        self.episodes
    }

    /// Averaged traces by label, in insertion order
    pub fn series(&self) -> &IndexMap<String, Series> {
        &self.series
    }

    /// Averaged traces of one label
    pub fn get(&self, label: &str) -> Option<&Series> {
        self.series.get(label)
    }

    /// Plot title embedding the episode count
    pub fn title(&self) -> String {
        format!("Average Rewards after {} Episodes", self.episodes)
    }

    /// Last averaged reward of each label, 0 for an empty budget
    pub fn final_rewards(&self) -> IndexMap<&str, f64> {
        self.series
            .iter()
            .map(|(label, s)| (label.as_str(), s.rewards.last().copied().unwrap_or(0.0)))
            .collect()
    }
}

/// A set of labelled policies compared over many episodes.
///
/// # Examples
///
/// ```
/// use kbandit::prelude::*;
///
/// let config = ExperimentConfig {
///     episodes: 5,
///     iterations: 50,
///     ..ExperimentConfig::default()
/// };
/// let report = Experiment::new(config)
///     .with_policy("greedy", Greedy)
///     .with_policy("epsilon_0.1", EpsilonGreedy::new(0.1))
///     .run()
///     .unwrap();
/// assert_eq!(report.series().len(), 2);
/// ```
pub struct Experiment {
    config: ExperimentConfig,
    policies: IndexMap<String, Box<dyn Policy>>,
}

impl Experiment {
    /// Creates an experiment with no policies
    pub fn new(config: ExperimentConfig) -> Self {
        Self {
            config,
            policies: IndexMap::new(),
        }
    }

    /// Adds a labelled policy; an existing label keeps its position and
    /// gets the new policy
    pub fn with_policy<P>(mut self, label: impl Into<String>, policy: P) -> Self
    where
        P: Policy + 'static,
    {
        self.policies.insert(label.into(), Box::new(policy));
        self
    }

    /// Gets the configuration
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Labels in insertion order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.policies.keys().map(String::as_str)
    }

    /// Run every episode and average the results
    ///
    /// Configuration is checked before the first episode starts.
    pub fn run(&self) -> Result<ExperimentReport> {
        self.validate()?;
        let ExperimentConfig {
            arms,
            iterations,
            episodes,
            seed,
            ref means,
        } = self.config;

        log::info!(
            "experiment: {} policies, {} arms, {} iterations, {} episodes",
            self.policies.len(),
            arms,
            iterations,
            episodes
        );

        let mut rng = StdRng::seed_from_u64(seed);
        let mut series: IndexMap<String, Series> = self
            .policies
            .keys()
            .map(|label| (label.clone(), Series::zeroed(arms, iterations)))
            .collect();

        for episode in 0..episodes {
            let true_means = means.resolve(arms, &mut rng)?;
            for (label, policy) in &self.policies {
                let mut sim_rng = StdRng::from_rng(&mut rng);
                let state = BanditState::new(
                    arms,
                    iterations,
                    Means::Explicit(true_means.clone()),
                    &mut sim_rng,
                )?;
                let mut sim = Simulator::new(state, &**policy, sim_rng);
                sim.run();
                if let Some(s) = series.get_mut(label) {
                    s.fold(sim.state(), episode);
                }
            }
            log::debug!("episode {:>6} of {}", episode + 1, episodes);
        }

        log::info!("experiment finished after {} episodes", episodes);
        Ok(ExperimentReport { episodes, series })
    }

    fn validate(&self) -> Result<()> {
        if self.policies.is_empty() {
            return Err(ConfigError::NoPolicies);
        }
        if self.config.arms == 0 {
            return Err(ConfigError::NoArms);
        }
        match &self.config.means {
            Means::Explicit(m) if m.len() != self.config.arms => {
                Err(ConfigError::MeansLengthMismatch {
                    expected: self.config.arms,
                    got: m.len(),
                })
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::{EpsilonGreedy, Greedy};

    fn small() -> ExperimentConfig {
        ExperimentConfig {
            arms: 4,
            iterations: 30,
            episodes: 8,
            seed: 42,
            means: Means::Random,
        }
    }

    #[test]
    fn test_default_config() {
        let config = ExperimentConfig::default();
        assert_eq!(config.arms, 10);
        assert_eq!(config.iterations, 1000);
        assert_eq!(config.episodes, 1000);
        assert_eq!(config.means, Means::Random);
    }

    #[test]
    fn test_series_shapes() {
        let report = Experiment::new(small())
            .with_policy("greedy", Greedy)
            .with_policy("eps", EpsilonGreedy::new(0.1))
            .run()
            .unwrap();

        assert_eq!(report.episodes(), 8);
        for s in report.series().values() {
            assert_eq!(s.rewards.len(), 30);
            assert_eq!(s.selections.len(), 4);
            let total: f64 = s.selections.iter().sum();
            assert!((total - 30.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_zero_episodes_are_zero_filled() {
        let config = ExperimentConfig {
            episodes: 0,
            ..small()
        };
        let report = Experiment::new(config)
            .with_policy("greedy", Greedy)
            .run()
            .unwrap();
        let s = report.get("greedy").unwrap();
        assert_eq!(s.rewards, vec![0.0; 30]);
        assert_eq!(s.selections, vec![0.0; 4]);
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            Experiment::new(small()).run().unwrap_err(),
            ConfigError::NoPolicies
        );

        let config = ExperimentConfig { arms: 0, ..small() };
        let result = Experiment::new(config).with_policy("g", Greedy).run();
        assert_eq!(result.unwrap_err(), ConfigError::NoArms);

        let config = ExperimentConfig {
            means: Means::from(vec![1.0]),
            ..small()
        };
        let result = Experiment::new(config).with_policy("g", Greedy).run();
        assert!(matches!(
            result,
            Err(ConfigError::MeansLengthMismatch {
                expected: 4,
                got: 1
            })
        ));
    }

    #[test]
    fn test_title_and_final_rewards() {
        let config = ExperimentConfig {
            iterations: 0,
            ..small()
        };
        let report = Experiment::new(config)
            .with_policy("greedy", Greedy)
            .run()
            .unwrap();
        assert_eq!(report.title(), "Average Rewards after 8 Episodes");
        assert_eq!(report.final_rewards()["greedy"], 0.0);
    }
}
