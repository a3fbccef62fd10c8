mod decaying;
mod epsilon_greedy;
mod greedy;

use rand::Rng;

use crate::state::BanditState;

pub use decaying::DecayingEpsilonGreedy;
pub use epsilon_greedy::EpsilonGreedy;
pub use greedy::Greedy;

/// Action-selection rule for a k-armed bandit
///
/// A policy only chooses; the shared statistics it reads live in
/// [`BanditState`] and are updated by the simulator.
///
/// Note: This trait uses `dyn rand::RngCore` instead of a generic parameter
/// to maintain object-safety, allowing `Box<dyn Policy>` to be used by the
/// experiment runner.
pub trait Policy: Send + Sync {
    /// Choose an arm index in `0..state.arm_count()`
    fn select(&self, state: &BanditState, rng: &mut dyn rand::RngCore) -> usize;
}

impl<P> Policy for Box<P>
where
    P: Policy + ?Sized,
{
    fn select(&self, state: &BanditState, rng: &mut dyn rand::RngCore) -> usize {
        (**self).select(state, rng)
    }
}

impl<P> Policy for &P
where
    P: Policy + ?Sized,
{
    fn select(&self, state: &BanditState, rng: &mut dyn rand::RngCore) -> usize {
        (**self).select(state, rng)
    }
}

/// Uniformly random arm (exploration)
fn random_arm(state: &BanditState, rng: &mut dyn rand::RngCore) -> usize {
    rng.random_range(0..state.arm_count())
}
