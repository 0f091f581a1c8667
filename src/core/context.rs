//=========================================================================
// Context
//=========================================================================
//
// Shared data container handed down the frame call chain.
//
// Scenes, game objects and components receive `&mut Context` during
// their lifecycle methods. It bundles:
// - input: the per-frame input state tracker
// - camera: the world viewport
// - state: the macro application state
// - navigation: the pending scene-stack request slot
// - services: externally owned collaborators (renderer, audio, assets)
//
// The runtime never constructs a renderer or an audio backend; those
// arrive through the service registry, already owned by the embedder.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::{AppState, Camera, ServiceRegistry};
use crate::input::InputState;
use crate::scene::Navigator;

//=== Context =============================================================

/// Shared context accessible throughout a frame.
pub struct Context {
    /// Per-frame input state and action binding resolution.
    pub input: InputState,

    /// World viewport advanced by the scene update pass while playing.
    pub camera: Camera,

    /// Macro application state (title / playing / paused / over).
    pub state: AppState,

    /// Scene-stack requests from gameplay code; the scene manager
    /// drains this at the tick boundary.
    pub navigation: Navigator,

    /// Externally owned collaborators, fetched by type.
    pub services: ServiceRegistry,
}

impl Context {
    /// Creates a context with an empty service registry and default
    /// state. The camera viewport comes from the caller since it mirrors
    /// the window the embedder opened.
    pub fn new(viewport_size: (f32, f32)) -> Self {
        Self {
            input: InputState::new(),
            camera: Camera::new(viewport_size),
            state: AppState::default(),
            navigation: Navigator::new(),
            services: ServiceRegistry::new(),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
