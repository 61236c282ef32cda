use crate::life::{self, Generations, Grid, StepMode};
use crate::ui::input::Command;
use crate::ui::mvi::Reducer;
use crate::ui::session::{SessionIntent, SessionReducer, SessionState};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Tick controller. Owns both generation buffers and the session state.
pub struct App {
    generations: Generations,
    session: SessionState,
    step_mode: StepMode,
}

impl App {
    /// Starts a session with `seeded` as generation 1.
    pub fn new(seeded: Grid, step_mode: StepMode) -> Self {
        Self {
            generations: Generations::from_grid(seeded),
            session: SessionState::default(),
            step_mode,
        }
    }

    /// Runs one tick: applies at most one command, then advances the board
    /// if the session is running.
    ///
    /// Returns `true` if the board advanced.
    pub fn tick(&mut self, command: Option<Command>) -> bool {
        if let Some(command) = command {
            self.on_command(command);
        }

        if !self.session.is_running() {
            return false;
        }

        let survived = life::step(&mut self.generations, self.step_mode);
        let was_extinct = self.session.extinct;
        dispatch_mvi!(
            self,
            session,
            SessionReducer,
            SessionIntent::Stepped { survived }
        );

        if self.session.extinct && !was_extinct {
            tracing::info!(generation = self.session.generation, "Board is extinct");
        }
        tracing::trace!(
            generation = self.session.generation,
            population = self.board().population(),
            "Tick"
        );
        true
    }

    pub fn on_command(&mut self, command: Command) {
        dispatch_mvi!(self, session, SessionReducer, command.into());
        match command {
            Command::Quit => tracing::info!(generation = self.session.generation, "Quit requested"),
            Command::TogglePause => {
                tracing::debug!(paused = self.session.paused, "Pause toggled")
            }
        }
    }

    pub fn request_quit(&mut self) {
        self.on_command(Command::Quit);
    }

    pub fn should_quit(&self) -> bool {
        self.session.quit
    }

    /// The generation currently on display.
    pub fn board(&self) -> &Grid {
        self.generations.active()
    }

    pub fn generations(&self) -> &Generations {
        &self.generations
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn step_mode(&self) -> StepMode {
        self.step_mode
    }
}
