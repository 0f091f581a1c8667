//=========================================================================
// Input State Layer
//=========================================================================
//
// Per-frame input bookkeeping, decoupled from device polling.
//
// Frame lifecycle: begin_frame() → process_events() → end_frame() → query
//
// The tracker keeps persistent held-state across frames and one-frame
// transition deltas (pressed/released). On top of the raw queries it
// resolves named *actions* ("jump", "attack") through the binding table
// loaded from the configuration file, so gameplay code never hardcodes
// key codes.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;

//=== Public API ==========================================================

pub use event::{Binding, InputEvent, KeyCode, MouseButton};

//=== External Dependencies ===============================================

use std::collections::{HashMap, HashSet};

use log::warn;

//=== InputState ==========================================================

/// Tracks held keys/buttons, one-frame transition deltas, mouse position
/// and the action binding table.
///
/// The embedding platform layer pushes [`InputEvent`] batches in once per
/// frame; everything downstream only queries.
pub struct InputState {
    //--- Persistent State (survives frame boundary) ----------------------
    keys_down: HashSet<KeyCode>,
    buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),

    //--- Frame Deltas (reset each frame via begin_frame()) ---------------
    keys_pressed: HashSet<KeyCode>,
    keys_released: HashSet<KeyCode>,
    buttons_pressed: HashSet<MouseButton>,
    buttons_released: HashSet<MouseButton>,

    //--- Continuous Input ------------------------------------------------
    mouse_delta: (f32, f32),
    last_mouse_position: (f32, f32),

    //--- Action Bindings -------------------------------------------------
    bindings: HashMap<String, Vec<Binding>>,
}

impl InputState {
    /// Creates an empty tracker with no bindings.
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            buttons_down: HashSet::new(),
            mouse_position: (0.0, 0.0),
            keys_pressed: HashSet::new(),
            keys_released: HashSet::new(),
            buttons_pressed: HashSet::new(),
            buttons_released: HashSet::new(),
            mouse_delta: (0.0, 0.0),
            last_mouse_position: (0.0, 0.0),
            bindings: HashMap::new(),
        }
    }

    //--- Binding Table ----------------------------------------------------

    /// Loads the action binding table from config-style name lists.
    ///
    /// Unknown spellings are dropped with a warning; the action stays
    /// usable through whatever names did parse. An action whose every
    /// name failed to parse resolves to nothing, never to an error.
    pub fn load_bindings(&mut self, mappings: &HashMap<String, Vec<String>>) {
        self.bindings.clear();

        for (action, names) in mappings {
            let mut parsed = Vec::with_capacity(names.len());
            for name in names {
                match Binding::parse(name) {
                    Some(binding) => parsed.push(binding),
                    None => warn!(
                        "Unknown input name '{}' for action '{}', ignoring",
                        name, action
                    ),
                }
            }
            self.bindings.insert(action.clone(), parsed);
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears the one-frame deltas. Call at the top of each frame,
    /// before feeding events.
    pub fn begin_frame(&mut self) {
        self.keys_pressed.clear();
        self.keys_released.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.last_mouse_position = self.mouse_position;
    }

    /// Digests a batch of platform events into held-state and deltas.
    pub fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(*event);
        }
    }

    /// Finalizes frame-derived values (mouse delta). Call after the last
    /// batch of the frame, before dispatch.
    pub fn end_frame(&mut self) {
        self.mouse_delta = (
            self.mouse_position.0 - self.last_mouse_position.0,
            self.mouse_position.1 - self.last_mouse_position.1,
        );
    }

    fn process_event(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(key) => {
                // Only a genuine UP → DOWN transition counts as pressed
                if self.keys_down.insert(key) {
                    self.keys_pressed.insert(key);
                }
            }
            InputEvent::KeyUp(key) => {
                if self.keys_down.remove(&key) {
                    self.keys_released.insert(key);
                }
            }
            InputEvent::MouseButtonDown(button) => {
                if self.buttons_down.insert(button) {
                    self.buttons_pressed.insert(button);
                }
            }
            InputEvent::MouseButtonUp(button) => {
                if self.buttons_down.remove(&button) {
                    self.buttons_released.insert(button);
                }
            }
            InputEvent::MouseMoved { x, y } => {
                self.mouse_position = (x, y);
            }
        }
    }

    //=====================================================================
    // Query API - Raw
    //=====================================================================

    /// Returns `true` while the key is held.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` only on the frame the key transitioned UP → DOWN.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Returns `true` only on the frame the key transitioned DOWN → UP.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released.contains(&key)
    }

    /// Like [`is_key_down`](Self::is_key_down) but for mouse buttons.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    /// Like [`is_key_pressed`](Self::is_key_pressed) but for mouse buttons.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    /// Like [`is_key_released`](Self::is_key_released) but for mouse buttons.
    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.buttons_released.contains(&button)
    }

    /// Mouse position in screen coordinates (pixels, top-left origin).
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }

    /// Mouse movement since the previous frame.
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    //=====================================================================
    // Query API - Actions
    //=====================================================================

    /// Returns `true` while any binding of the action is held.
    ///
    /// Unknown action names resolve to `false`; this runs every frame and
    /// must not turn a typo into a panic.
    pub fn is_action_down(&self, action: &str) -> bool {
        self.action_bindings(action).any(|b| match b {
            Binding::Key(key) => self.is_key_down(key),
            Binding::Mouse(button) => self.is_button_down(button),
        })
    }

    /// Returns `true` on the frame any binding of the action was pressed.
    pub fn is_action_pressed(&self, action: &str) -> bool {
        self.action_bindings(action).any(|b| match b {
            Binding::Key(key) => self.is_key_pressed(key),
            Binding::Mouse(button) => self.is_button_pressed(button),
        })
    }

    /// Returns `true` on the frame any binding of the action was released.
    pub fn is_action_released(&self, action: &str) -> bool {
        self.action_bindings(action).any(|b| match b {
            Binding::Key(key) => self.is_key_released(key),
            Binding::Mouse(button) => self.is_button_released(button),
        })
    }

    fn action_bindings(&self, action: &str) -> impl Iterator<Item = Binding> + '_ {
        self.bindings
            .get(action)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
            .iter()
            .copied()
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
