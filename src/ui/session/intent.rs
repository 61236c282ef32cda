use crate::ui::mvi::Intent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionIntent {
    Quit,
    TogglePause,
    /// A simulation step finished. `survived` is false when the new
    /// generation has no live cells.
    Stepped { survived: bool },
}

impl Intent for SessionIntent {}
