//! kbandit: k-armed bandit simulation.
//!
//! An agent repeatedly chooses among k arms whose rewards are normally
//! distributed around hidden means, and must balance exploiting the best
//! estimated arm against exploring the others. The crate provides the shared
//! incremental statistics, three action-selection policies and a simulator
//! that drives them, plus a multi-episode experiment runner for comparing
//! policies.
//!
//! # Quick Start
//!
//! ```
//! use kbandit::prelude::*;
//!
//! // Three arms with known means, epsilon-greedy with epsilon = 0.1
//! let mut sim = Simulator::epsilon_greedy(0.1, 3, 2000, vec![5.0, 0.0, -5.0], 42).unwrap();
//! sim.run();
//!
//! let pulls = sim.per_arm_pull_count();
//! assert_eq!(pulls.iter().sum::<usize>(), 2000);
//! assert_eq!(sim.state().best_arm(), 0);
//!
//! // Or assemble one with the builder
//! let sim = Simulator::builder()
//!     .arms(10)
//!     .iterations(1000)
//!     .means(Means::Sequence)
//!     .policy(DecayingEpsilonGreedy)
//!     .seed(7)
//!     .build()
//!     .unwrap();
//! # let _ = sim;
//! ```

mod error;
pub mod experiment;
mod means;
pub mod policies;
mod simulator;
mod state;

// Re-export main types
pub use error::{ConfigError, Result};
pub use experiment::{Experiment, ExperimentConfig, ExperimentReport, Series};
pub use means::Means;
pub use simulator::{Pull, Simulator, SimulatorBuilder};
pub use state::BanditState;

/// Prelude module for convenient imports.
///
/// # Examples
///
/// ```
/// use kbandit::prelude::*;
/// ```
pub mod prelude {
    pub use crate::policies::{DecayingEpsilonGreedy, EpsilonGreedy, Greedy, Policy};
    pub use crate::{
        BanditState, ConfigError, Experiment, ExperimentConfig, ExperimentReport, Means, Pull,
        Result, Simulator,
    };
}
