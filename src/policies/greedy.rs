use super::Policy;
use crate::state::BanditState;

/// Pure greedy policy - always exploits the best estimated arm
///
/// Before any pull every estimate is 0, so the first choice is always arm 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Greedy;

impl Policy for Greedy {
    fn select(&self, state: &BanditState, _rng: &mut dyn rand::RngCore) -> usize {
        state.best_arm()
    }
}
