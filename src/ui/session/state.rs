use crate::ui::mvi::UiState;

/// Lifecycle of the tick loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    Paused,
    /// Terminal. No transitions out.
    Stopped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Starts at 1; bumped on every step that leaves something alive.
    pub generation: u64,
    /// Latched once set.
    pub quit: bool,
    pub paused: bool,
    /// Latched the first time a step leaves the board empty.
    pub extinct: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            generation: 1,
            quit: false,
            paused: false,
            extinct: false,
        }
    }
}

impl UiState for SessionState {}

impl SessionState {
    pub fn phase(&self) -> Phase {
        if self.quit {
            Phase::Stopped
        } else if self.paused {
            Phase::Paused
        } else {
            Phase::Running
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase() == Phase::Running
    }
}
