//=========================================================================
// Scene Manager
//=========================================================================
//
// Owns the scene stack and arbitrates which scene is live.
//
// Only the top scene receives input and update; every stacked scene
// renders bottom-to-top, which is what keeps a paused game visible
// under its menu overlay.
//
// Navigation is deferred through a single pending slot: requests made
// during a frame take effect only after the active scene's update
// completes, never mid-update. The slot holds at most one request:
// a later request in the same frame overwrites the earlier one (last
// write wins), it does not queue behind it.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::Context;
use super::{NavigationRequest, Scene};

//=== SceneManager ========================================================

/// Stack of exclusively owned scenes plus the pending-navigation slot.
///
/// Bottom of the stack is the oldest scene; the top is the active one.
///
/// Requests arrive through two doors into the same slot: setup code
/// calls the `request_*` methods here, gameplay code goes through the
/// navigator on the context (`ctx.navigation`). The context-side
/// request is drained at the tick boundary and coalesces with any
/// manager-side one, later writer winning.
pub struct SceneManager {
    stack: Vec<Scene>,
    pending: Option<NavigationRequest>,
}

impl SceneManager {
    //--- Construction -----------------------------------------------------

    /// Creates a manager with an empty stack. Push an initial scene
    /// before the first frame (the request is applied by that frame's
    /// update).
    pub fn new() -> Self {
        trace!("Scene manager created");
        Self {
            stack: Vec::new(),
            pending: None,
        }
    }

    //--- Navigation Requests ----------------------------------------------

    /// Requests a push. Takes effect after the current update pass; the
    /// incoming scene becomes active.
    pub fn request_push(&mut self, scene: Scene) {
        self.set_pending(NavigationRequest::Push(scene));
    }

    /// Requests a pop of the active scene. The scene below, if any,
    /// resumes exactly where it was; it is not re-initialized.
    pub fn request_pop(&mut self) {
        self.set_pending(NavigationRequest::Pop);
    }

    /// Requests replacing the entire stack with one scene.
    pub fn request_replace(&mut self, scene: Scene) {
        self.set_pending(NavigationRequest::Replace(scene));
    }

    fn set_pending(&mut self, request: NavigationRequest) {
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

    //--- Accessors --------------------------------------------------------

    /// The active (top) scene, if any.
    pub fn current_scene(&self) -> Option<&Scene> {
        self.stack.last()
    }

    pub fn current_scene_mut(&mut self) -> Option<&mut Scene> {
        self.stack.last_mut()
    }

    /// Number of stacked scenes.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    //--- Per-Frame Dispatch -----------------------------------------------

    /// Updates the active scene, then applies at most one pending
    /// navigation action.
    pub fn update(&mut self, dt: f32, ctx: &mut Context) {
        if let Some(scene) = self.stack.last_mut() {
            scene.update(dt, ctx);
        }

        // Gameplay requests issued during the update drain into the
        // shared slot; being later, they supersede setup-time requests
        if let Some(request) = ctx.navigation.take() {
            self.set_pending(request);
        }

        self.process_pending_action();
    }

    /// Renders every stacked scene, bottom to top, so lower scenes stay
    /// visible under transparent overlays.
    pub fn render(&mut self, ctx: &mut Context) {
        for scene in &mut self.stack {
            scene.render(ctx);
        }
    }

    /// Forwards input to the active scene only.
    pub fn handle_input(&mut self, ctx: &mut Context) {
        if let Some(scene) = self.stack.last_mut() {
            scene.handle_input(ctx);
        }
    }

    /// Cleans and pops every scene, top to bottom. Idempotent; also
    /// discards any unapplied navigation request.
    pub fn close(&mut self) {
        if !self.stack.is_empty() {
            trace!("Closing scene manager, unwinding {} scene(s)", self.stack.len());
        }
        while let Some(mut scene) = self.stack.pop() {
            debug!("Cleaning scene '{}'", scene.name());
            scene.clean();
        }
        self.pending = None;
    }

    //--- Internal Helpers -------------------------------------------------

    /// Applies the pending slot, exactly once, at the tick boundary.
    fn process_pending_action(&mut self) {
        match self.pending.take() {
            None => {}
            Some(NavigationRequest::Push(scene)) => self.push_scene(scene),
            Some(NavigationRequest::Pop) => self.pop_scene(),
            Some(NavigationRequest::Replace(scene)) => self.replace_scene(scene),
        }
    }

    fn push_scene(&mut self, mut scene: Scene) {
        debug!("Pushing scene '{}' onto the stack", scene.name());

        // Init exactly once, before the scene is exposed to render
        if !scene.is_initialized() {
            scene.init();
        }
        self.stack.push(scene);
    }

    fn pop_scene(&mut self) {
        match self.stack.pop() {
            Some(mut scene) => {
                debug!("Popping scene '{}' off the stack", scene.name());
                scene.clean();
                // The scene now on top resumes with its state intact
            }
            None => warn!("Pop requested on an empty scene stack"),
        }
    }

    fn replace_scene(&mut self, mut scene: Scene) {
        debug!("Replacing scene stack with '{}'", scene.name());

        while let Some(mut old) = self.stack.pop() {
            old.clean();
        }

        if !scene.is_initialized() {
            scene.init();
        }
        self.stack.push(scene);
    }
}

impl Default for SceneManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SceneManager {
    /// Scenes still stacked at drop time get their `clean()` pass even
    /// when the embedder forgot to call [`close`](Self::close).
    fn drop(&mut self) {
        self.close();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
