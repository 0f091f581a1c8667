//=========================================================================
// Navigation Requests
//=========================================================================
//
// The pending-navigation slot, reachable from gameplay code.
//
// Scenes and components receive `&mut Context` during updates; the
// navigator on the context is how they ask for a stack change without
// holding a reference to the scene manager. The manager drains the slot
// at the tick boundary, after the active scene's update completes.
//
// The slot holds at most one request: a later request in the same frame
// overwrites an earlier, not-yet-applied one (last write wins).
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use super::Scene;

//=== NavigationRequest ===================================================

/// A single scene-stack transition.
pub enum NavigationRequest {
    /// Put a new scene on top; it becomes the active scene.
    Push(Scene),

    /// Remove the active scene; the one below resumes as it was.
    Pop,

    /// Unwind the whole stack and start over with this scene.
    Replace(Scene),
}

impl NavigationRequest {
    pub(crate) fn name(&self) -> &'static str {
        match self {
            NavigationRequest::Push(_) => "push",
            NavigationRequest::Pop => "pop",
            NavigationRequest::Replace(_) => "replace",
        }
    }
}

//=== Navigator ===========================================================

/// Holds the one outstanding navigation request between its request
/// point and the tick boundary that applies it.
pub struct Navigator {
    pending: Option<NavigationRequest>,
}

impl Navigator {
    /// Creates an empty navigator.
    pub fn new() -> Self {
        Self { pending: None }
    }

    //--- Requests ---------------------------------------------------------

    /// Requests a push. No immediate effect; applied after the current
    /// update pass.
    pub fn request_push(&mut self, scene: Scene) {
        self.set(NavigationRequest::Push(scene));
    }

    /// Requests popping the active scene.
    pub fn request_pop(&mut self) {
        self.set(NavigationRequest::Pop);
    }

    /// Requests replacing the entire stack with one scene.
    pub fn request_replace(&mut self, scene: Scene) {
        self.set(NavigationRequest::Replace(scene));
    }

    /// Returns true if a request is waiting to be applied.
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    //--- Draining ---------------------------------------------------------

    /// Removes and returns the pending request. Called by the scene
    /// manager at the tick boundary.
    pub(crate) fn take(&mut self) -> Option<NavigationRequest> {
        self.pending.take()
    }

    fn set(&mut self, request: NavigationRequest) {
        if let Some(ref old) = self.pending {
            // Last write wins; a superseded push/replace payload is
            // dropped without ever being initialized
            warn!(
                "Superseding pending scene action '{}' with '{}'",
                old.name(),
                request.name()
            );
        }
        self.pending = Some(request);
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
