use crate::ui::mvi::Reducer;
use crate::ui::session::intent::SessionIntent;
use crate::ui::session::state::SessionState;

pub struct SessionReducer;

impl Reducer for SessionReducer {
    type State = SessionState;
    type Intent = SessionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        // Stopped is terminal.
        if state.quit {
            return state;
        }

        match intent {
            SessionIntent::Quit => SessionState {
                quit: true,
                ..state
            },
            SessionIntent::TogglePause => SessionState {
                paused: !state.paused,
                ..state
            },
            SessionIntent::Stepped { survived: true } => SessionState {
                generation: state.generation.saturating_add(1),
                ..state
            },
            SessionIntent::Stepped { survived: false } => SessionState {
                extinct: true,
                ..state
            },
        }
    }
}
