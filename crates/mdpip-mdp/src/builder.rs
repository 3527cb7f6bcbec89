use crate::{MdpError, NominalMdp};

#[derive(Debug, Clone)]
pub(crate) struct StateDecl {
    pub(crate) id: String,
    pub(crate) terminal: bool,
    pub(crate) actions: Vec<ActionDecl>,
}

#[derive(Debug, Clone)]
pub(crate) struct ActionDecl {
    pub(crate) id: String,
    pub(crate) outcomes: Vec<OutcomeDecl>,
}

#[derive(Debug, Clone)]
pub(crate) struct OutcomeDecl {
    pub(crate) next: String,
    pub(crate) prob: f64,
    pub(crate) reward: f64,
}

#[derive(Debug, Clone, Default)]
/// Struct to build nominal MDPs in memory
pub struct MdpBuilder {
    start: Option<String>,
    states: Vec<StateDecl>,
}

impl MdpBuilder {
    /// Create a new MdpBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Define the start state of the MDP
    pub fn set_start(&mut self, state: impl Into<String>) -> &mut Self {
        self.start = Some(state.into());
        self
    }

    /// Add a new state
    /// Terminal flag if the state has no successors
    pub fn add_state(&mut self, id: impl Into<String>, terminal: bool) -> &mut Self {
        self.states.push(StateDecl {
            id: id.into(),
            terminal,
            actions: Vec::new(),
        });
        self
    }

    /// Add an action to a state
    pub fn add_action(
        &mut self,
        state_id: impl AsRef<str>,
        action_id: impl Into<String>,
    ) -> Result<&mut Self, MdpError> {
        let state = self.state_mut(state_id.as_ref())?;
        state.actions.push(ActionDecl {
            id: action_id.into(),
            outcomes: Vec::new(),
        });

        Ok(self)
    }

    /// Add an outcome to an action
    /// The outcomes of one action together form its nominal successor distribution
    pub fn add_outcome(
        &mut self,
        state_id: impl AsRef<str>,
        action_id: impl AsRef<str>,
        next: impl Into<String>,
        prob: f64,
        reward: f64,
    ) -> Result<&mut Self, MdpError> {
        let state_id = state_id.as_ref();
        let action_id = action_id.as_ref();

        let state = self.state_mut(state_id)?;
        let action = state
            .actions
            .iter_mut()
            .find(|a| a.id == action_id)
            .ok_or_else(|| MdpError::BuilderUnknownAction {
                state: state_id.to_string(),
                action: action_id.to_string(),
            })?;

        action.outcomes.push(OutcomeDecl {
            next: next.into(),
            prob,
            reward,
        });

        Ok(self)
    }

    /// Validate the declarations and build the nominal model.
    pub fn build(self) -> Result<NominalMdp, MdpError> {
        let start = self.start.ok_or(MdpError::MissingStart)?;
        NominalMdp::from_declarations(start, self.states)
    }

    fn state_mut(&mut self, state_id: &str) -> Result<&mut StateDecl, MdpError> {
        self.states
            .iter_mut()
            .find(|s| s.id == state_id)
            .ok_or_else(|| MdpError::BuilderUnknownState {
                state: state_id.to_string(),
            })
    }
}
