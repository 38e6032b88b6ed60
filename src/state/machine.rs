use super::error::{StateError, StateResult};
use super::event::StateTransition;
use super::{DialogEvent, DialogState};

#[derive(Debug, Default)]
pub struct StateMachine {
    state: DialogState,
    transition_history: Vec<StateTransition>,
}

impl StateMachine {
    pub fn new() -> Self {
        Self {
            state: DialogState::default(),
            transition_history: Vec::new(),
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn can_transition(&self, event: DialogEvent) -> bool {
        self.next_state(event).is_some()
    }

    pub fn next_state(&self, event: DialogEvent) -> Option<DialogState> {
        use DialogEvent::*;
        match (self.state, event) {
            // The suppress checkbox toggles a preference without leaving Idle.
            (DialogState::Idle, ToggleSuppress) => Some(DialogState::Idle),
            (DialogState::Idle, Launch) => Some(DialogState::LaunchRequested),
            (DialogState::Idle, CreateMenuEntry) => Some(DialogState::MenuAndLaunchRequested),
            (DialogState::Idle, Close) => Some(DialogState::Closed),
            // Closed and the launch states are terminal.
            _ => None,
        }
    }

    pub fn transition(&mut self, event: DialogEvent) -> StateResult<DialogState> {
        tracing::debug!(from = ?self.state, event = ?event, "request state transition");
        let next = self.next_state(event).ok_or_else(|| {
            let from = self.state;
            tracing::warn!(from = ?from, event = ?event, "invalid state transition requested");
            StateError::InvalidStateTransition { from, event }
        })?;

        let record = StateTransition::new(Some(self.state), event, next);
        self.state = next;
        self.transition_history.push(record);

        Ok(self.state)
    }
}

#[cfg(test)]
impl StateMachine {
    fn history(&self) -> &[StateTransition] {
        &self.transition_history
    }
}

impl std::fmt::Display for StateMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DialogState::{:?}", self.state)
    }
}
