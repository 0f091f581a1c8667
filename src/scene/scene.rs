//=========================================================================
// Scene
//=========================================================================
//
// Owns a frame's worth of game objects plus a UI subtree, and gives them
// a safe, ordered place to mutate.
//
// Mutation safety rests on two deferred queues:
// - additions go to a pending list, spliced in at the end of update, so
//   a new object never joins an iteration already in progress and first
//   updates on the following pass;
// - removals set a flag; flagged objects are skipped by dispatch,
//   cleaned during a later update pass, and erased in one sweep after
//   that pass, so no object ever observes a half-destroyed sibling.
//
// Update-phase ordering (load-bearing, in this exact order):
//   1. object pass: update the unflagged, clean the flagged
//   2. erase exactly the objects cleaned in step 1
//   3. advance the camera, only while the app is Playing
//   4. update the UI subtree
//   5. splice pending additions into the live collection
//
// State machine: Uninitialized --init()--> Active --clean()--> Uninitialized.
// All dispatch methods are no-ops while uninitialized.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, trace, warn};

//=== Internal Dependencies ===============================================

use crate::core::Context;
use crate::object::{GameObject, ObjectId};
use crate::ui::UiManager;

//=== Scene ===============================================================

/// A stage of the application: one owned set of game objects and one UI
/// subtree, with its own init/update/render/clean lifecycle.
pub struct Scene {
    name: String,
    initialized: bool,
    objects: Vec<GameObject>,
    pending_additions: Vec<GameObject>,
    ui: UiManager,
}

impl Scene {
    //--- Construction -----------------------------------------------------

    /// Creates an uninitialized scene. Populate it (directly, or through
    /// a level loader) and hand it to the scene manager.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        trace!("Scene '{}' constructed", name);

        Self {
            name,
            initialized: false,
            objects: Vec::new(),
            pending_additions: Vec::new(),
            ui: UiManager::new(),
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Live objects, including any flagged but not yet swept.
    pub fn objects(&self) -> &[GameObject] {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut [GameObject] {
        &mut self.objects
    }

    pub fn ui(&self) -> &UiManager {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut UiManager {
        &mut self.ui
    }

    //--- Lifecycle --------------------------------------------------------

    /// Marks the scene ready for dispatch. Runs once; the scene manager
    /// guards re-entry through [`is_initialized`](Self::is_initialized).
    pub fn init(&mut self) {
        if self.initialized {
            debug!("Scene '{}' already initialized", self.name);
            return;
        }
        self.initialized = true;
        trace!("Scene '{}' initialized", self.name);
    }

    /// Tears down every live and pending object and the UI subtree, and
    /// returns the scene to the uninitialized state. Idempotent.
    pub fn clean(&mut self) {
        trace!("Scene '{}' cleaning up", self.name);

        for obj in &mut self.objects {
            obj.clean();
        }
        self.objects.clear();

        for obj in &mut self.pending_additions {
            obj.clean();
        }
        self.pending_additions.clear();

        self.ui.clear_elements();
        self.initialized = false;
    }

    //--- Per-Frame Dispatch -----------------------------------------------

    /// Runs one update pass in the documented order.
    pub fn update(&mut self, dt: f32, ctx: &mut Context) {
        if !self.initialized {
            return;
        }

        // 1. Object pass: update the unflagged, clean the flagged.
        //    Objects flagged later in this very pass (after their own
        //    slot) are untouched until the next pass, which is why a
        //    freshly flagged object still renders this frame.
        let mut swept: Vec<ObjectId> = Vec::new();
        for obj in &mut self.objects {
            if obj.is_marked_for_removal() {
                obj.clean();
                swept.push(obj.id());
            } else {
                obj.update(dt, ctx);
            }
        }

        // 2. Erase exactly the cleaned set, in one pass.
        if !swept.is_empty() {
            self.objects.retain(|obj| !swept.contains(&obj.id()));
            debug!("Scene '{}': swept {} object(s)", self.name, swept.len());
        }

        // 3. Camera follows only during live gameplay
        if ctx.state.is_playing() {
            ctx.camera.update(dt);
        }

        // 4. UI subtree
        self.ui.update(dt, ctx);

        // 5. Deferred additions join the live set now that nothing is
        //    iterating; their first update pass is the next one
        self.process_pending_additions();
    }

    /// Renders every non-erased object (flagged ones included; they
    /// disappear next frame, not mid-frame), then the UI subtree.
    pub fn render(&mut self, ctx: &mut Context) {
        if !self.initialized {
            return;
        }

        for obj in &mut self.objects {
            obj.render(ctx);
        }

        self.ui.render(ctx);
    }

    /// Dispatches input: UI subtree first; if it consumes the event,
    /// game objects are not notified this frame.
    pub fn handle_input(&mut self, ctx: &mut Context) {
        if !self.initialized {
            return;
        }

        if self.ui.handle_input(ctx) {
            return;
        }

        for obj in &mut self.objects {
            if !obj.is_marked_for_removal() {
                obj.handle_input(ctx);
            }
        }
        // Flagged objects are swept in update, not here
    }

    //--- Object Management ------------------------------------------------

    /// Inserts directly into the live collection.
    ///
    /// Meant for setup and load time. During a frame the borrow checker
    /// already rules this out mid-iteration; spawning from gameplay code
    /// goes through [`add_object_deferred`](Self::add_object_deferred).
    pub fn add_object(&mut self, object: GameObject) {
        trace!("Scene '{}': added object '{}'", self.name, object.name());
        self.objects.push(object);
    }

    /// Queues an object for insertion; it joins the live set at the end
    /// of the update pass and receives its first update on the next one.
    pub fn add_object_deferred(&mut self, object: GameObject) {
        trace!(
            "Scene '{}': queued object '{}' for addition",
            self.name,
            object.name()
        );
        self.pending_additions.push(object);
    }

    /// Synchronously cleans and erases the object. Safe only outside
    /// the frame dispatch; prefer the deferred variant from gameplay.
    pub fn remove_object(&mut self, id: ObjectId) {
        match self.objects.iter().position(|obj| obj.id() == id) {
            Some(index) => {
                self.objects[index].clean();
                let removed = self.objects.remove(index);
                trace!("Scene '{}': removed object '{}'", self.name, removed.name());
            }
            None => warn!("Scene '{}': no object {:?} to remove", self.name, id),
        }
    }

    /// Flags the object for removal. It is skipped by dispatch from now
    /// on and cleaned+erased during a later update pass.
    pub fn remove_object_deferred(&mut self, id: ObjectId) {
        match self.objects.iter_mut().find(|obj| obj.id() == id) {
            Some(obj) => obj.mark_for_removal(),
            None => warn!("Scene '{}': no object {:?} to flag", self.name, id),
        }
    }

    /// First live object with a matching name. Linear scan; a scripting
    /// and debugging convenience, not a hot path.
    pub fn find_object(&self, name: &str) -> Option<&GameObject> {
        self.objects.iter().find(|obj| obj.name() == name)
    }

    /// Mutable variant of [`find_object`](Self::find_object).
    pub fn find_object_mut(&mut self, name: &str) -> Option<&mut GameObject> {
        self.objects.iter_mut().find(|obj| obj.name() == name)
    }

    /// All live objects carrying the given tag.
    pub fn objects_with_tag<'a>(
        &'a self,
        tag: &'a str,
    ) -> impl Iterator<Item = &'a GameObject> + 'a {
        self.objects.iter().filter(move |obj| obj.tag() == tag)
    }

    //--- Internal Helpers -------------------------------------------------

    /// Splices the pending queue into the live collection. Runs at the
    /// end of update, when nothing is iterating.
    fn process_pending_additions(&mut self) {
        if !self.pending_additions.is_empty() {
            debug!(
                "Scene '{}': splicing {} pending object(s)",
                self.name,
                self.pending_additions.len()
            );
            self.objects.append(&mut self.pending_additions);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
