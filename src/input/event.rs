//=========================================================================
// Input Event Types
//=========================================================================
//
// Portable representation of low-level input events.
//
// The crate never talks to a windowing library. The embedding platform
// layer translates whatever it polls (SDL, winit, a test harness) into
// these types and pushes them at the driver.
//
// Bindings in the configuration file refer to inputs by name ("A",
// "Left", "MouseLeft"), so every bindable input can be parsed from its
// config spelling via `Binding::parse`.
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// `Other` covers side/thumb/macro buttons the platform may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the produced character, so
/// bindings survive layout changes (QWERTY vs AZERTY).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Numeric Keys ----------------------------------------------------
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys -------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys ------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys ----------------------------------------------------
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    /// Fallback for keys the platform layer does not map.
    Unidentified,
}

//=== InputEvent ==========================================================

/// Low-level input event delivered by the platform layer.
///
/// Discrete events (key/button transitions) update held-state tracking;
/// `MouseMoved` is continuous and coalesces naturally (last position
/// wins within a frame).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    MouseButtonDown(MouseButton),
    MouseButtonUp(MouseButton),
    MouseMoved { x: f32, y: f32 },
}

//=== Binding =============================================================

/// A single bindable input: a key or a mouse button.
///
/// Configuration files spell bindings as strings; `parse` recovers the
/// typed form. Unknown spellings yield `None` and the caller decides how
/// loudly to complain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Binding {
    Key(KeyCode),
    Mouse(MouseButton),
}

impl Binding {
    /// Parses a config spelling ("A", "Left", "Space", "MouseLeft")
    /// into a binding. Matching is case-sensitive, mirroring the names
    /// written by `Config::save_to_file`.
    pub fn parse(name: &str) -> Option<Self> {
        use KeyCode::*;

        let key = match name {
            "0" => Digit0, "1" => Digit1, "2" => Digit2, "3" => Digit3,
            "4" => Digit4, "5" => Digit5, "6" => Digit6, "7" => Digit7,
            "8" => Digit8, "9" => Digit9,

            "A" => KeyA, "B" => KeyB, "C" => KeyC, "D" => KeyD,
            "E" => KeyE, "F" => KeyF, "G" => KeyG, "H" => KeyH,
            "I" => KeyI, "J" => KeyJ, "K" => KeyK, "L" => KeyL,
            "M" => KeyM, "N" => KeyN, "O" => KeyO, "P" => KeyP,
            "Q" => KeyQ, "R" => KeyR, "S" => KeyS, "T" => KeyT,
            "U" => KeyU, "V" => KeyV, "W" => KeyW, "X" => KeyX,
            "Y" => KeyY, "Z" => KeyZ,

            "Down" => ArrowDown,
            "Left" => ArrowLeft,
            "Right" => ArrowRight,
            "Up" => ArrowUp,

            "Space" => Space,
            "Enter" | "Return" => Enter,
            "Escape" => Escape,
            "Tab" => Tab,
            "Backspace" => Backspace,
            "Delete" => Delete,

            "MouseLeft" => return Some(Binding::Mouse(MouseButton::Left)),
            "MouseRight" => return Some(Binding::Mouse(MouseButton::Right)),
            "MouseMiddle" => return Some(Binding::Mouse(MouseButton::Middle)),

            _ => return None,
        };

        Some(Binding::Key(key))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
