use mdpip_core::{Action, State};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::NominalMdp;

#[derive(Debug, Clone)]
/// Seeded simulator over the nominal transition probabilities of an MDP.
pub struct MdpSimulator {
    mdp: NominalMdp,
    rng: ChaCha8Rng,
}

impl MdpSimulator {
    /// Create a simulator with deterministic RNG seed.
    pub fn new(mdp: NominalMdp, seed: u64) -> Self {
        Self {
            mdp,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Borrow the underlying nominal MDP.
    pub fn mdp(&self) -> &NominalMdp {
        &self.mdp
    }

    /// Return how many actions are available for a state.
    pub fn num_actions(&self, state: &State) -> usize {
        self.mdp.actions(state).map_or(0, <[Action]>::len)
    }

    /// Sample one `(next_state, reward, terminal)` transition.
    /// Invalid state/action inputs are treated as a no-op terminal transition.
    pub fn step(&mut self, state: &State, action: &Action) -> (State, f64, bool) {
        let sample = (self.rng.next_u64() as f64) / ((u64::MAX as f64) + 1.0);
        self.mdp
            .sample_transition(state, action, sample)
            .unwrap_or_else(|| (state.clone(), 0.0, true))
    }
}
