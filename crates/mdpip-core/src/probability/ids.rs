use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque name of a world configuration.
/// No structure is imposed on it; two states are the same iff their names are.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(String);

impl State {
    /// Borrow the state name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for State {
    fn from(value: &str) -> Self {
        State(value.to_string())
    }
}

impl From<String> for State {
    fn from(value: String) -> Self {
        State(value)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque name of a choice available in a state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Action(String);

impl Action {
    /// Borrow the action name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Action {
    fn from(value: &str) -> Self {
        Action(value.to_string())
    }
}

impl From<String> for Action {
    fn from(value: String) -> Self {
        Action(value)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// "From which state, by which action".
/// Indexes per-transition distributions and cached imprecision ranges.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionKey {
    source: State,
    action: Action,
}

impl TransitionKey {
    pub fn new(source: impl Into<State>, action: impl Into<Action>) -> Self {
        TransitionKey {
            source: source.into(),
            action: action.into(),
        }
    }

    pub fn source(&self) -> &State {
        &self.source
    }

    pub fn action(&self) -> &Action {
        &self.action
    }
}

impl fmt::Display for TransitionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.source, self.action)
    }
}
