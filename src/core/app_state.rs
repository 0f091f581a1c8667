//=========================================================================
// Application State
//=========================================================================
//
// Macro state of the running application (title, playing, paused, over).
//
// Other systems consult this to adjust behavior; the scene update pass
// only advances the camera while Playing.
//
//=========================================================================

use log::debug;

//=== State ===============================================================

/// Macro states the application can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Title/menu presentation.
    Title,
    /// Normal gameplay in progress.
    Playing,
    /// Gameplay suspended, typically under an overlay scene.
    Paused,
    /// End-of-session presentation.
    GameOver,
}

//=== AppState ============================================================

/// Holds and transitions the macro application state.
pub struct AppState {
    current: State,
}

impl AppState {
    /// Creates the holder in the given initial state.
    pub fn new(initial: State) -> Self {
        Self { current: initial }
    }

    /// Returns the current state.
    pub fn current(&self) -> State {
        self.current
    }

    /// Transitions to a new state. Re-entering the current state is fine
    /// and logged like any other transition.
    pub fn set(&mut self, new_state: State) {
        debug!("App state: {:?} -> {:?}", self.current, new_state);
        self.current = new_state;
    }

    //--- Convenience Queries ----------------------------------------------

    pub fn is_in_title(&self) -> bool {
        self.current == State::Title
    }

    pub fn is_playing(&self) -> bool {
        self.current == State::Playing
    }

    pub fn is_paused(&self) -> bool {
        self.current == State::Paused
    }

    pub fn is_game_over(&self) -> bool {
        self.current == State::GameOver
    }
}

impl Default for AppState {
    /// Applications start on the title state.
    fn default() -> Self {
        Self::new(State::Title)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
