use std::collections::{HashMap, HashSet};

use mdpip_core::{Action, ProbabilityDistribution, State, TransitionKey, TransitionModel};
use tracing::debug;

use crate::{
    MdpError,
    builder::{ActionDecl, StateDecl},
};

#[derive(Debug, Clone)]
/// Validated MDP with precise transition probabilities.
///
/// Every `(state, action)` pair owns its successor distribution. Rewards are
/// kept per successor next to it.
pub struct NominalMdp {
    start: State,
    states: Vec<StateRec>,
    state_index: HashMap<State, usize>,
    transitions: Vec<TransitionRec>,
    transition_index: HashMap<TransitionKey, usize>,
}

#[derive(Debug, Clone)]
struct StateRec {
    id: State,
    terminal: bool,
    actions: Vec<Action>,
}

#[derive(Debug, Clone)]
struct TransitionRec {
    key: TransitionKey,
    distribution: ProbabilityDistribution,
    rewards: HashMap<State, f64>,
}

impl NominalMdp {
    /// Validate builder declarations and resolve them into a model.
    pub(crate) fn from_declarations(
        start: String,
        declarations: Vec<StateDecl>,
    ) -> Result<Self, MdpError> {
        // Start state id must be present and non-empty.
        if start.trim().is_empty() {
            return Err(MdpError::MissingStart);
        }

        // State ids must be unique.
        let mut ids = HashSet::with_capacity(declarations.len());
        for decl in &declarations {
            if !ids.insert(decl.id.as_str()) {
                return Err(MdpError::DuplicateStateId {
                    id: decl.id.clone(),
                });
            }
        }

        if !ids.contains(start.as_str()) {
            return Err(MdpError::UnknownStartState { start });
        }

        let mut states = Vec::with_capacity(declarations.len());
        let mut transitions = Vec::new();

        for decl in &declarations {
            if decl.terminal && !decl.actions.is_empty() {
                return Err(MdpError::TerminalStateHasActions {
                    state: decl.id.clone(),
                });
            }

            let mut action_ids = HashSet::with_capacity(decl.actions.len());
            let mut actions = Vec::with_capacity(decl.actions.len());
            for action in &decl.actions {
                if !action_ids.insert(action.id.as_str()) {
                    return Err(MdpError::DuplicateActionId {
                        state: decl.id.clone(),
                        action: action.id.clone(),
                    });
                }

                transitions.push(Self::resolve_transition(&decl.id, action, &ids)?);
                actions.push(Action::from(action.id.as_str()));
            }

            states.push(StateRec {
                id: State::from(decl.id.as_str()),
                terminal: decl.terminal,
                actions,
            });
        }

        let state_index = states
            .iter()
            .enumerate()
            .map(|(idx, rec)| (rec.id.clone(), idx))
            .collect();
        let transition_index = transitions
            .iter()
            .enumerate()
            .map(|(idx, rec)| (rec.key.clone(), idx))
            .collect();

        debug!(
            start = %start,
            states = states.len(),
            transitions = transitions.len(),
            "built nominal mdp"
        );

        Ok(NominalMdp {
            start: State::from(start),
            states,
            state_index,
            transitions,
            transition_index,
        })
    }

    fn resolve_transition(
        state_id: &str,
        action: &ActionDecl,
        known_state_ids: &HashSet<&str>,
    ) -> Result<TransitionRec, MdpError> {
        if action.outcomes.is_empty() {
            return Err(MdpError::EmptyOutcomes {
                state: state_id.to_string(),
                action: action.id.clone(),
            });
        }

        let mut rewards = HashMap::with_capacity(action.outcomes.len());
        for (i, outcome) in action.outcomes.iter().enumerate() {
            if !outcome.reward.is_finite() {
                return Err(MdpError::InvalidReward {
                    state: state_id.to_string(),
                    action: action.id.clone(),
                    outcome_index: i,
                    value: outcome.reward,
                });
            }

            if !known_state_ids.contains(outcome.next.as_str()) {
                return Err(MdpError::UnknownNextState {
                    state: state_id.to_string(),
                    action: action.id.clone(),
                    next: outcome.next.clone(),
                });
            }

            rewards.insert(State::from(outcome.next.as_str()), outcome.reward);
        }

        // Mass, sum and duplicate-successor checks live in the distribution itself.
        let distribution = ProbabilityDistribution::new(
            action
                .outcomes
                .iter()
                .map(|outcome| (outcome.next.as_str(), outcome.prob)),
        )
        .map_err(|source| MdpError::Distribution {
            state: state_id.to_string(),
            action: action.id.clone(),
            source,
        })?;

        Ok(TransitionRec {
            key: TransitionKey::new(state_id, action.id.as_str()),
            distribution,
            rewards,
        })
    }

    /// Return the start state.
    pub fn start(&self) -> &State {
        &self.start
    }

    /// Return the number of states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Iterate states in declaration order.
    pub fn states(&self) -> impl Iterator<Item = &State> + '_ {
        self.states.iter().map(|rec| &rec.id)
    }

    /// Check whether a state is terminal.
    pub fn is_terminal(&self, state: &State) -> Option<bool> {
        self.state_rec(state).map(|rec| rec.terminal)
    }

    /// Actions available from a state, in declaration order.
    pub fn actions(&self, state: &State) -> Option<&[Action]> {
        self.state_rec(state).map(|rec| rec.actions.as_slice())
    }

    /// Nominal successor distribution of `(state, action)`.
    pub fn distribution(
        &self,
        state: &State,
        action: &Action,
    ) -> Option<&ProbabilityDistribution> {
        self.transition_rec(state, action).map(|rec| &rec.distribution)
    }

    /// Reward collected when `(state, action)` lands in `next`.
    pub fn reward(&self, state: &State, action: &Action, next: &State) -> Option<f64> {
        self.transition_rec(state, action)?.rewards.get(next).copied()
    }

    /// Sample one transition for `(state, action)` using a uniform sample in `[0, 1)`.
    pub(crate) fn sample_transition(
        &self,
        state: &State,
        action: &Action,
        sample: f64,
    ) -> Option<(State, f64, bool)> {
        if self.state_rec(state)?.terminal {
            return Some((state.clone(), 0.0, true));
        }

        let transition = self.transition_rec(state, action)?;
        let next = transition.distribution.sample(sample)?;
        let reward = transition.rewards.get(next).copied().unwrap_or(0.0);
        let next_terminal = self.state_rec(next)?.terminal;
        Some((next.clone(), reward, next_terminal))
    }

    fn state_rec(&self, state: &State) -> Option<&StateRec> {
        self.state_index
            .get(state)
            .and_then(|idx| self.states.get(*idx))
    }

    fn transition_rec(&self, state: &State, action: &Action) -> Option<&TransitionRec> {
        let key = TransitionKey::new(state.clone(), action.clone());
        self.transition_index
            .get(&key)
            .and_then(|idx| self.transitions.get(*idx))
    }
}

impl TransitionModel for NominalMdp {
    fn transitions(&self) -> impl Iterator<Item = (&TransitionKey, &ProbabilityDistribution)> {
        self.transitions
            .iter()
            .map(|rec| (&rec.key, &rec.distribution))
    }
}
