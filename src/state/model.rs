/// Dialog lifecycle states. `Closed` and the two launch states are
/// terminal: the event loop ends, or the process image is replaced (or the
/// process exits fatally) before any further event can arrive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Idle,
    Closed,
    LaunchRequested,
    MenuAndLaunchRequested,
}

/// Produced by a single user interaction and consumed exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchDecision {
    LaunchOnly,
    LaunchWithMenuEntry,
}

impl DialogState {
    /// The launch decision this state commits to, if any.
    pub fn decision(self) -> Option<LaunchDecision> {
        match self {
            DialogState::LaunchRequested => Some(LaunchDecision::LaunchOnly),
            DialogState::MenuAndLaunchRequested => Some(LaunchDecision::LaunchWithMenuEntry),
            DialogState::Idle | DialogState::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_launch_states_carry_a_decision() {
        assert_eq!(DialogState::Idle.decision(), None);
        assert_eq!(DialogState::Closed.decision(), None);
        assert_eq!(
            DialogState::LaunchRequested.decision(),
            Some(LaunchDecision::LaunchOnly)
        );
        assert_eq!(
            DialogState::MenuAndLaunchRequested.decision(),
            Some(LaunchDecision::LaunchWithMenuEntry)
        );
    }
}
