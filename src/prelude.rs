//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use emberlight::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Driver
pub use crate::{App, AppBuilder, AppEvent, TickControl};

// Shared context
pub use crate::core::{AppState, Bounds, Camera, Config, ConfigError, Context, ServiceRegistry, State};

// Input
pub use crate::input::{Binding, InputEvent, InputState, KeyCode, MouseButton};

// Objects and components
pub use crate::object::components::{Health, Transform};
pub use crate::object::{Component, GameObject, ObjectId};

// Scenes
pub use crate::scene::{NavigationRequest, Navigator, Scene, SceneManager};

// UI
pub use crate::ui::{UiElement, UiManager, UiPanel};
