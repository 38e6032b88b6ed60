use super::model::DialogState;

/// User actions dispatched from the widget callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogEvent {
    Launch,
    CreateMenuEntry,
    ToggleSuppress,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTransition {
    from: Option<DialogState>,
    event: DialogEvent,
    to: DialogState,
}

impl StateTransition {
    pub fn new(from: Option<DialogState>, event: DialogEvent, to: DialogState) -> Self {
        Self { from, event, to }
    }
}
